use std::collections::HashMap;
use uuid::Uuid;
use crate::error::{Error, ErrorCode, Result};
use crate::models::Category;

pub const MAX_VOTES_PER_CATEGORY: u8 = 2;

/// Votes cast by this browser session, per competitor and category.
///
/// Counts only ever climb from 0 to [`MAX_VOTES_PER_CATEGORY`] and are never
/// persisted; a fresh session starts from an empty ledger. The cap is advisory
/// to this client, the store keeps the authoritative tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteLedger {
    cast: HashMap<Uuid, HashMap<Category, u8>>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn votes_cast(&self, id: Uuid, category: Category) -> u8 {
        self.cast.get(&id)
            .and_then(|by_category| by_category.get(&category))
            .copied()
            .unwrap_or(0)
    }

    pub fn can_vote(&self, id: Uuid, category: Category) -> bool {
        self.votes_cast(id, category) < MAX_VOTES_PER_CATEGORY
    }

    pub fn remaining(&self, id: Uuid, category: Category) -> u8 {
        MAX_VOTES_PER_CATEGORY.saturating_sub(self.votes_cast(id, category))
    }

    pub fn record_vote(&mut self, id: Uuid, category: Category) -> Result<u8> {
        let count = self.cast.entry(id).or_default().entry(category).or_insert(0);
        if *count >= MAX_VOTES_PER_CATEGORY {
            return Err(vote_cap_error(category));
        }
        *count += 1;
        Ok(*count)
    }
}

pub(crate) fn vote_cap_error(category: Category) -> Error {
    Error::with_details(
        ErrorCode::VoteCapExceeded,
        format!("You have already used your {} votes for this category!", MAX_VOTES_PER_CATEGORY),
        category.as_str(),
    )
}
