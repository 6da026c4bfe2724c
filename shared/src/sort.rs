use serde::{Serialize, Deserialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;
use crate::error::{Error, ErrorCode};
use crate::models::Competitor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriteria {
    #[default]
    None,
    Flavor,
    Looks,
    Total,
}

impl SortCriteria {
    pub const ALL: [SortCriteria; 4] = [
        SortCriteria::None,
        SortCriteria::Flavor,
        SortCriteria::Looks,
        SortCriteria::Total,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SortCriteria::None => "none",
            SortCriteria::Flavor => "flavor",
            SortCriteria::Looks => "looks",
            SortCriteria::Total => "total",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SortCriteria::None => "None",
            SortCriteria::Flavor => "Flavor Votes",
            SortCriteria::Looks => "Looks Votes",
            SortCriteria::Total => "Total Votes",
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCriteria {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortCriteria::ALL.into_iter()
            .find(|criteria| criteria.as_str() == s)
            .ok_or_else(|| Error::with_details(ErrorCode::InvalidInput, "Unknown sort criteria", s))
    }
}

/// Orders competitors by descending tally. The sort is stable, so equal
/// tallies keep their incoming order and `None` returns the input untouched.
pub fn sort_competitors(mut competitors: Vec<Competitor>, criteria: SortCriteria) -> Vec<Competitor> {
    match criteria {
        SortCriteria::None => {}
        SortCriteria::Flavor => competitors.sort_by_key(|c| Reverse(c.flavor_votes)),
        SortCriteria::Looks => competitors.sort_by_key(|c| Reverse(c.looks_votes)),
        SortCriteria::Total => competitors.sort_by_key(|c| Reverse(c.total_votes())),
    }
    competitors
}
