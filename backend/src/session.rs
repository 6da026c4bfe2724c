use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use ring::rand::{SecureRandom, SystemRandom};
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use time::{Duration, OffsetDateTime};
use tracing::{debug, error, warn};
use shared::models::SessionGrant;
use crate::{error::ApiError, routes::AppState};

pub const MAX_SESSIONS: usize = 10_000;
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 12 * 60;

struct SessionEntry {
    expires_at: OffsetDateTime,
    issued: u64,
}

#[derive(Default)]
struct Sessions {
    entries: HashMap<String, SessionEntry>,
    issued: u64,
}

impl Sessions {
    fn purge_expired(&mut self, now: OffsetDateTime) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before - self.entries.len()
    }

    fn evict_oldest(&mut self) {
        let oldest = self.entries.iter()
            .min_by_key(|(_, entry)| entry.issued)
            .map(|(token, _)| token.clone());
        if let Some(token) = oldest {
            self.entries.remove(&token);
        }
    }
}

/// Anonymous identities handed out to browsers on page load.
pub struct SessionRegistry {
    sessions: Mutex<Sessions>,
    rng: SystemRandom,
    ttl: Duration,
    capacity: usize,
}

impl SessionRegistry {
    pub fn new(ttl_minutes: i64) -> Self {
        Self::with_capacity(ttl_minutes, MAX_SESSIONS)
    }

    pub fn with_capacity(ttl_minutes: i64, capacity: usize) -> Self {
        Self {
            sessions: Mutex::new(Sessions::default()),
            rng: SystemRandom::new(),
            ttl: Duration::minutes(ttl_minutes),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Sessions>, ApiError> {
        self.sessions.lock().map_err(|_| {
            error!("Failed to acquire lock for session storage");
            ApiError::Internal("session storage unavailable".into())
        })
    }

    pub fn issue(&self) -> Result<SessionGrant, ApiError> {
        let mut bytes = [0u8; 32];
        self.rng.fill(&mut bytes).map_err(|_| ApiError::Internal("random source unavailable".into()))?;
        let token = URL_SAFE_NO_PAD.encode(bytes);

        let now = OffsetDateTime::now_utc();
        let mut sessions = self.lock()?;
        if sessions.entries.len() >= self.capacity {
            let purged = sessions.purge_expired(now);
            if sessions.entries.len() >= self.capacity {
                warn!("Session registry full after purging {}, evicting oldest", purged);
                while sessions.entries.len() >= self.capacity {
                    sessions.evict_oldest();
                }
            }
        }
        sessions.issued += 1;
        let issued = sessions.issued;
        sessions.entries.insert(token.clone(), SessionEntry { expires_at: now + self.ttl, issued });
        debug!("Issued anonymous session");

        Ok(SessionGrant {
            token,
            expires_in_seconds: u64::try_from(self.ttl.whole_seconds()).unwrap_or(0),
        })
    }

    pub fn is_valid(&self, token: &str) -> bool {
        let now = OffsetDateTime::now_utc();
        self.lock()
            .map(|sessions| sessions.entries.get(token).map_or(false, |entry| entry.expires_at > now))
            .unwrap_or(false)
    }

    /// Drops expired sessions and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        match self.lock() {
            Ok(mut sessions) => sessions.purge_expired(now),
            Err(_) => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map(|sessions| sessions.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Request guard admitting only callers holding a live anonymous session.
pub struct AnonymousSession;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AnonymousSession {
    type Error = ApiError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(state) = req.rocket().state::<AppState>() else {
            error!("AppState is not managed");
            return Outcome::Error((Status::InternalServerError, ApiError::Internal("missing application state".into())));
        };

        let token = req.headers()
            .get_one("Authorization")
            .and_then(|value| value.strip_prefix("Bearer "));

        match token {
            Some(token) if state.sessions.is_valid(token) => Outcome::Success(AnonymousSession),
            _ => {
                debug!("Rejected request without a live session");
                Outcome::Error((Status::Unauthorized, ApiError::Unauthorized))
            }
        }
    }
}
