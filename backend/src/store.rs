use std::sync::{Mutex, MutexGuard};
use rocket::async_trait;
use uuid::Uuid;
use shared::models::{Category, Competitor, CreateCompetitorRequest};
use crate::error::ApiError;

/// Backing collection for competitor documents.
#[async_trait]
pub trait CompetitorStore: Send + Sync {
    /// All competitors in insertion order.
    async fn list(&self) -> Result<Vec<Competitor>, ApiError>;
    async fn insert(&self, request: &CreateCompetitorRequest) -> Result<Competitor, ApiError>;
    /// Atomically adds one vote; `None` when the id is unknown.
    async fn increment(&self, id: Uuid, category: Category) -> Result<Option<Competitor>, ApiError>;
    /// Returns whether a document was removed.
    async fn remove(&self, id: Uuid) -> Result<bool, ApiError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    competitors: Mutex<Vec<Competitor>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Competitor>>, ApiError> {
        self.competitors.lock().map_err(|e| ApiError::Internal(format!("store lock poisoned: {}", e)))
    }
}

#[async_trait]
impl CompetitorStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Competitor>, ApiError> {
        Ok(self.lock()?.clone())
    }

    async fn insert(&self, request: &CreateCompetitorRequest) -> Result<Competitor, ApiError> {
        let competitor = Competitor {
            id: Uuid::new_v4(),
            name: request.name.clone(),
            image_url: request.image_url.clone(),
            flavor_votes: 0,
            looks_votes: 0,
        };
        self.lock()?.push(competitor.clone());
        Ok(competitor)
    }

    async fn increment(&self, id: Uuid, category: Category) -> Result<Option<Competitor>, ApiError> {
        let mut competitors = self.lock()?;
        let Some(competitor) = competitors.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        let counter = match category {
            Category::Flavor => &mut competitor.flavor_votes,
            Category::Looks => &mut competitor.looks_votes,
        };
        *counter = counter.saturating_add(1);
        Ok(Some(competitor.clone()))
    }

    async fn remove(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut competitors = self.lock()?;
        let before = competitors.len();
        competitors.retain(|c| c.id != id);
        Ok(competitors.len() != before)
    }
}
