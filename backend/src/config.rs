use tracing::warn;
use crate::session::DEFAULT_SESSION_TTL_MINUTES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Extra CORS origin allowed besides `http://localhost*`.
    pub allowed_origin: Option<String>,
    pub session_ttl_minutes: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origin: None,
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
        }
    }
}

impl ServerConfig {
    /// Reads `ALLOWED_ORIGIN` and `SESSION_TTL_MINUTES` from a secret lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let allowed_origin = lookup("ALLOWED_ORIGIN")
            .map(|origin| origin.trim().trim_end_matches('/').to_string())
            .filter(|origin| !origin.is_empty());

        let session_ttl_minutes = match lookup("SESSION_TTL_MINUTES") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(minutes) if minutes > 0 => minutes,
                _ => {
                    warn!("Ignoring invalid SESSION_TTL_MINUTES {:?}, using {}", raw, DEFAULT_SESSION_TTL_MINUTES);
                    DEFAULT_SESSION_TTL_MINUTES
                }
            },
            None => DEFAULT_SESSION_TTL_MINUTES,
        };

        Self { allowed_origin, session_ttl_minutes }
    }
}
