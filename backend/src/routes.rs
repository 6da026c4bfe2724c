use rocket::{State, get, post, delete, http::Status, serde::json::Json};
use tracing::{info, debug, instrument};
use std::net::IpAddr;
use std::sync::Arc;
use shared::{models::*, validation::validate_create_request};
use crate::{
   error::ApiError,
   rate_limiter::RateLimiter,
   session::{AnonymousSession, SessionRegistry},
   store::CompetitorStore,
   utils::parse_competitor_id,
};

pub struct AppState {
    pub store: Box<dyn CompetitorStore>,
    pub sessions: Arc<SessionRegistry>,
    pub session_limiter: RateLimiter,
}

impl AppState {
    pub fn new(store: impl CompetitorStore + 'static, session_ttl_minutes: i64) -> Self {
        Self {
            store: Box::new(store),
            sessions: Arc::new(SessionRegistry::new(session_ttl_minutes)),
            session_limiter: RateLimiter::default(),
        }
    }

    pub fn with_session_limiter(mut self, limiter: RateLimiter) -> Self {
        self.session_limiter = limiter;
        self
    }
}

#[get("/session")]
pub async fn issue_session(
    state: &State<AppState>,
    client_ip: Option<IpAddr>,
) -> Result<Json<SessionGrant>, ApiError> {
    let key = match client_ip {
        Some(ip) => format!("session:{}", ip),
        None => "session:unknown".to_string(),
    };
    state.session_limiter.check(&key)?;
    state.sessions.issue().map(Json)
}

#[get("/competitors")]
pub async fn list_competitors(
    state: &State<AppState>,
    _session: AnonymousSession,
) -> Result<Json<Vec<Competitor>>, ApiError> {
    state.store.list().await.map(Json)
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state, request, _session), fields(competitor_id))]
#[post("/competitors", format = "json", data = "<request>")]
pub async fn create_competitor(
    state: &State<AppState>,
    request: Json<CreateCompetitorRequest>,
    _session: AnonymousSession,
) -> Result<Json<Competitor>, ApiError> {
    let request = request.into_inner();
    validate_create_request(&request)?;

    let request = CreateCompetitorRequest {
        name: request.name.trim().to_string(),
        image_url: request.image_url.trim().to_string(),
    };
    let competitor = state.store.insert(&request).await?;

    tracing::Span::current().record("competitor_id", tracing::field::display(competitor.id));
    info!("Added competitor {:?}", competitor.name);
    Ok(Json(competitor))
}

#[instrument(skip(state, _session), fields(competitor_id = %id))]
#[post("/competitors/<id>/votes/<category>")]
pub async fn increment_vote(
    state: &State<AppState>,
    id: &str,
    category: &str,
    _session: AnonymousSession,
) -> Result<Json<Competitor>, ApiError> {
    let uuid = parse_competitor_id(id)?;
    let category: Category = category.parse()?;

    let competitor = state.store
        .increment(uuid, category)
        .await?
        .ok_or(ApiError::NotFound)?;

    debug!("{} votes now {}", category, competitor.votes(category));
    Ok(Json(competitor))
}

#[instrument(skip(state, _session), fields(competitor_id = %id))]
#[delete("/competitors/<id>")]
pub async fn delete_competitor(
    state: &State<AppState>,
    id: &str,
    _session: AnonymousSession,
) -> Result<Status, ApiError> {
    let uuid = parse_competitor_id(id)?;

    if state.store.remove(uuid).await? {
        info!("Removed competitor");
    } else {
        debug!("Competitor already absent, nothing to remove");
    }
    Ok(Status::NoContent)
}
