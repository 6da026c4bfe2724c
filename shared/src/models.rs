use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use crate::error::{Error, ErrorCode};

pub const COMPETITORS_COLLECTION: &str = "competitors";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
pub struct Competitor {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    #[cfg_attr(feature = "backend", sqlx(try_from = "i64"))]
    pub flavor_votes: u32,
    #[cfg_attr(feature = "backend", sqlx(try_from = "i64"))]
    pub looks_votes: u32,
}

impl Competitor {
    pub fn votes(&self, category: Category) -> u32 {
        match category {
            Category::Flavor => self.flavor_votes,
            Category::Looks => self.looks_votes,
        }
    }

    pub fn total_votes(&self) -> u64 {
        u64::from(self.flavor_votes) + u64::from(self.looks_votes)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompetitorRequest {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flavor,
    Looks,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Flavor, Category::Looks];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Flavor => "flavor",
            Category::Looks => "looks",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Flavor => "Flavor",
            Category::Looks => "Looks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flavor" => Ok(Category::Flavor),
            "looks" => Ok(Category::Looks),
            other => Err(Error::with_details(ErrorCode::InvalidInput, "Unknown vote category", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionGrant {
    pub token: String,
    pub expires_in_seconds: u64,
}

// Image host wire types. The host returns many more fields; only these are read.

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub secure_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestroyImageRequest {
    pub public_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DestroyImageResponse {
    pub result: String,
}
