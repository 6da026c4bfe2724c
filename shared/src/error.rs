use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Validation failed")]
    ValidationFailed,
    #[error("Image upload failed")]
    UploadFailed,
    #[error("Remote store unavailable")]
    RemoteUnavailable,
    #[error("Vote cap exceeded")]
    VoteCapExceeded,
    #[error("Resource not found")]
    NotFound,
    #[error("Operation not authorized")]
    Unauthorized,
    #[error("Invalid input provided")]
    InvalidInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn remote(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::with_details(ErrorCode::RemoteUnavailable, message, details)
    }

    pub fn upload(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::with_details(ErrorCode::UploadFailed, message, details)
    }

    /// Validation and vote-cap failures interrupt the user with a dialog;
    /// everything else only reaches the console.
    pub fn is_user_facing(&self) -> bool {
        matches!(self.code, ErrorCode::ValidationFailed | ErrorCode::VoteCapExceeded)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
