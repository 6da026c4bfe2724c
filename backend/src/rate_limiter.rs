use std::collections::HashMap;
use std::sync::Mutex;
use time::{Duration, OffsetDateTime};
use tracing::{error, warn};
use crate::error::ApiError;

pub const SESSION_ISSUE_LIMIT: u32 = 20;
pub const SESSION_ISSUE_WINDOW_MINUTES: i64 = 1;

#[derive(Debug)]
struct Window {
    attempts: u32,
    opened_at: OffsetDateTime,
}

/// Fixed-window attempt counter per caller key.
#[derive(Debug)]
pub struct RateLimiter {
    windows: Mutex<HashMap<String, Window>>,
    max_attempts: u32,
    window: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(SESSION_ISSUE_LIMIT, SESSION_ISSUE_WINDOW_MINUTES)
    }
}

impl RateLimiter {
    pub fn new(max_attempts: u32, window_minutes: i64) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            max_attempts,
            window: Duration::minutes(window_minutes),
        }
    }

    pub fn check(&self, key: &str) -> Result<(), ApiError> {
        let now = OffsetDateTime::now_utc();
        let mut windows = self.windows.lock().map_err(|e| {
            error!("Failed to acquire rate limit lock: {}", e);
            ApiError::Internal("rate limiter unavailable".into())
        })?;

        windows.retain(|_, window| now - window.opened_at <= self.window);

        let window = windows.entry(key.to_string()).or_insert(Window { attempts: 0, opened_at: now });
        if window.attempts >= self.max_attempts {
            let seconds = (window.opened_at + self.window - now).whole_seconds().max(1);
            warn!("Rate limit triggered for {}", key);
            return Err(ApiError::RateLimited(format!(
                "Too many sign-in attempts. Please try again in {} seconds.",
                seconds
            )));
        }
        window.attempts += 1;
        Ok(())
    }
}
