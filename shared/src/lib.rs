pub mod error;
pub mod models;
pub mod validation;
pub mod vote_ledger;
pub mod sort;
pub mod image_id;
pub mod competition;

pub use error::{Error, ErrorCode, Result, ErrorResponse};
pub use models::*;
pub use validation::*;
pub use vote_ledger::{VoteLedger, MAX_VOTES_PER_CATEGORY};
pub use sort::{sort_competitors, SortCriteria};
pub use image_id::public_id_from_url;
pub use competition::{
    add_competitor, cast_vote, mutate_then_resync, remove_competitor, CompetitionSession,
    CompetitorRepository, ImageCleanup, ImageUploader, PendingEntry, Resynced, VoteTicket,
};
pub use uuid::Uuid;
