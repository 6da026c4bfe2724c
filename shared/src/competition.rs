//! Session state and the remote flows behind every user intent.
//!
//! Each mutation follows the same protocol: perform the remote change, then
//! read the whole collection back. Nothing is patched locally, so whatever is
//! displayed after an action is exactly what the store returned.

use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use uuid::Uuid;
use crate::{
    error::{Error, Result},
    image_id::public_id_from_url,
    models::{Category, Competitor, CreateCompetitorRequest},
    sort::{sort_competitors, SortCriteria},
    validation::{validate_entry, ValidationError},
    vote_ledger::{vote_cap_error, VoteLedger},
};

#[async_trait(?Send)]
pub trait CompetitorRepository {
    /// Every stored competitor, in the store's own order.
    async fn list(&self) -> Result<Vec<Competitor>>;
    async fn create(&self, request: &CreateCompetitorRequest) -> Result<Competitor>;
    /// Adds one vote to a single counter and returns the updated record.
    async fn increment_vote(&self, id: Uuid, category: Category) -> Result<Competitor>;
    /// Deleting an unknown id is not an error.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait(?Send)]
pub trait ImageUploader {
    type File;

    /// Uploads the file and returns its public URL.
    async fn upload(&self, file: &Self::File) -> Result<String>;

    async fn destroy_asset(&self, public_id: &str) -> Result<()>;

    async fn destroy(&self, url: &str) -> Result<()> {
        let public_id = public_id_from_url(url)
            .ok_or_else(|| Error::upload("Could not derive image id from URL", url))?;
        self.destroy_asset(&public_id).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingEntry<F> {
    pub name: String,
    pub image: F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTicket {
    pub id: Uuid,
    pub category: Category,
}

/// Result of a mutation together with the read-back that followed it.
#[derive(Debug)]
pub struct Resynced<T> {
    pub outcome: T,
    pub listing: Result<Vec<Competitor>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageCleanup {
    Destroyed,
    Failed(Error),
}

/// Runs `mutation` and, only when it succeeds, reloads the full list.
pub async fn mutate_then_resync<R, T, M>(repo: &R, mutation: M) -> Result<Resynced<T>>
where
    R: CompetitorRepository + ?Sized,
    M: Future<Output = Result<T>>,
{
    let outcome = mutation.await?;
    let listing = repo.list().await;
    Ok(Resynced { outcome, listing })
}

/// Uploads the image, then inserts the document. A failed upload never
/// reaches the repository; a failed insert leaves the uploaded image behind.
pub async fn add_competitor<R, U>(
    repo: &R,
    uploader: &U,
    entry: PendingEntry<U::File>,
) -> Result<Resynced<Competitor>>
where
    R: CompetitorRepository + ?Sized,
    U: ImageUploader + ?Sized,
{
    mutate_then_resync(repo, async move {
        let image_url = uploader.upload(&entry.image).await?;
        repo.create(&CreateCompetitorRequest { name: entry.name, image_url }).await
    }).await
}

pub async fn cast_vote<R>(repo: &R, ticket: VoteTicket) -> Result<Resynced<Competitor>>
where
    R: CompetitorRepository + ?Sized,
{
    mutate_then_resync(repo, repo.increment_vote(ticket.id, ticket.category)).await
}

/// Deletes the document first, then its hosted image. Image cleanup failures
/// are reported in the outcome rather than failing the whole removal.
pub async fn remove_competitor<R, U>(
    repo: &R,
    uploader: &U,
    competitor: &Competitor,
) -> Result<Resynced<ImageCleanup>>
where
    R: CompetitorRepository + ?Sized,
    U: ImageUploader + ?Sized,
{
    let id = competitor.id;
    let image_url = competitor.image_url.clone();

    mutate_then_resync(repo, async move {
        repo.delete(id).await?;
        Ok(match uploader.destroy(&image_url).await {
            Ok(()) => ImageCleanup::Destroyed,
            Err(e) => ImageCleanup::Failed(e),
        })
    }).await
}

/// Everything the page tracks for one browser session.
#[derive(Debug, Clone)]
pub struct CompetitionSession<F> {
    name: String,
    image: Option<F>,
    sort_by: SortCriteria,
    ledger: VoteLedger,
    /// Tickets handed out whose vote has not come back yet.
    in_flight: HashMap<(Uuid, Category), u8>,
    competitors: Vec<Competitor>,
}

impl<F> Default for CompetitionSession<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: None,
            sort_by: SortCriteria::default(),
            ledger: VoteLedger::new(),
            in_flight: HashMap::new(),
            competitors: Vec::new(),
        }
    }
}

impl<F: Clone> CompetitionSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn image(&self) -> Option<&F> { self.image.as_ref() }
    pub fn sort_by(&self) -> SortCriteria { self.sort_by }
    pub fn ledger(&self) -> &VoteLedger { &self.ledger }
    pub fn competitors(&self) -> &[Competitor] { &self.competitors }

    pub fn find(&self, id: Uuid) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.id == id)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_image(&mut self, image: Option<F>) {
        self.image = image;
    }

    /// Re-sorts what is on screen without going back to the store.
    pub fn set_sort(&mut self, criteria: SortCriteria) {
        self.sort_by = criteria;
        self.competitors = sort_competitors(std::mem::take(&mut self.competitors), criteria);
    }

    pub fn apply_listing(&mut self, competitors: Vec<Competitor>) {
        self.competitors = sort_competitors(competitors, self.sort_by);
    }

    pub fn prepare_entry(&self) -> Result<PendingEntry<F>> {
        validate_entry(&self.name, self.image.is_some())?;
        match &self.image {
            Some(image) => Ok(PendingEntry {
                name: self.name.trim().to_string(),
                image: image.clone(),
            }),
            None => Err(ValidationError::MissingNameOrImage.into()),
        }
    }

    pub fn entry_submitted(&mut self) {
        self.name.clear();
        self.image = None;
    }

    pub fn votes_in_flight(&self, id: Uuid, category: Category) -> u8 {
        self.in_flight.get(&(id, category)).copied().unwrap_or(0)
    }

    /// Votes still available, counting ones already on their way to the store.
    pub fn remaining_votes(&self, id: Uuid, category: Category) -> u8 {
        self.ledger.remaining(id, category).saturating_sub(self.votes_in_flight(id, category))
    }

    /// Reserves one vote against the cap until it lands or fails.
    pub fn prepare_vote(&mut self, id: Uuid, category: Category) -> Result<VoteTicket> {
        if self.remaining_votes(id, category) == 0 {
            return Err(vote_cap_error(category));
        }
        *self.in_flight.entry((id, category)).or_insert(0) += 1;
        Ok(VoteTicket { id, category })
    }

    fn release(&mut self, ticket: VoteTicket) {
        let key = (ticket.id, ticket.category);
        if let Some(count) = self.in_flight.get_mut(&key) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.in_flight.remove(&key);
            }
        }
    }

    /// Records a vote the store has accepted.
    pub fn vote_landed(&mut self, ticket: VoteTicket) -> Result<u8> {
        self.release(ticket);
        self.ledger.record_vote(ticket.id, ticket.category)
    }

    /// Hands back the reservation of a vote the store never counted.
    pub fn vote_failed(&mut self, ticket: VoteTicket) {
        self.release(ticket);
    }
}
