use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use serde::Serialize;
use shared::{ErrorCode, ErrorResponse};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug, Serialize)]
pub enum ApiError {
    #[error("Competitor not found")]
    NotFound,
    #[error("Invalid competitor ID")]
    InvalidId,
    #[error("{0}")]
    InvalidInput(String),
    #[error("Missing or expired session")]
    Unauthorized,
    #[error("{0}")]
    RateLimited(String),
    #[error("Competitor store unavailable: {0}")]
    Unavailable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound => Status::NotFound,
            ApiError::InvalidId => Status::BadRequest,
            ApiError::InvalidInput(_) => Status::BadRequest,
            ApiError::Unauthorized => Status::Unauthorized,
            ApiError::RateLimited(_) => Status::TooManyRequests,
            ApiError::Unavailable(_) => Status::ServiceUnavailable,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl From<shared::ValidationError> for ApiError {
    fn from(e: shared::ValidationError) -> Self {
        ApiError::InvalidInput(e.to_string())
    }
}

impl From<shared::Error> for ApiError {
    fn from(e: shared::Error) -> Self {
        match e.code {
            ErrorCode::NotFound => ApiError::NotFound,
            ErrorCode::Unauthorized => ApiError::Unauthorized,
            ErrorCode::RemoteUnavailable => ApiError::Unavailable(e.to_string()),
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidInput
            | ErrorCode::VoteCapExceeded
            | ErrorCode::UploadFailed => ApiError::InvalidInput(e.to_string()),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let message = match &self {
            ApiError::Unavailable(_) | ApiError::Internal(_) => {
                error!("{} failed: {}", req.uri(), self);
                "An internal server error occurred.".to_string()
            }
            _ => self.to_string(),
        };

        rocket::Response::build_from(Json(ErrorResponse { error: message }).respond_to(req)?)
            .status(status)
            .ok()
    }
}
