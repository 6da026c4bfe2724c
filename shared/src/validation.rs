use crate::error::{Error, ErrorCode};
use crate::models::CreateCompetitorRequest;

pub const MAX_NAME_LENGTH: usize = 60;
pub const MAX_IMAGE_URL_LENGTH: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please provide both a name and an image!")]
    MissingNameOrImage,
    #[error("Name exceeds maximum length of {MAX_NAME_LENGTH}")]
    NameTooLong,
    #[error("Image URL is required")]
    MissingImageUrl,
    #[error("Image URL exceeds maximum length of {MAX_IMAGE_URL_LENGTH}")]
    ImageUrlTooLong,
    #[error("Image URL must use http or https: {0}")]
    InvalidImageUrl(String),
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::new(ErrorCode::ValidationFailed, e.to_string())
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > MAX_NAME_LENGTH { return Err(ValidationError::NameTooLong); }
    Ok(())
}

/// Form-side check, run before anything is uploaded.
pub fn validate_entry(name: &str, has_image: bool) -> Result<(), ValidationError> {
    if name.trim().is_empty() || !has_image { return Err(ValidationError::MissingNameOrImage); }
    validate_name(name.trim())
}

pub fn validate_create_request(request: &CreateCompetitorRequest) -> Result<(), ValidationError> {
    if request.name.trim().is_empty() { return Err(ValidationError::MissingNameOrImage); }
    validate_name(request.name.trim())?;

    let url = request.image_url.trim();
    if url.is_empty() { return Err(ValidationError::MissingImageUrl); }
    if url.len() > MAX_IMAGE_URL_LENGTH { return Err(ValidationError::ImageUrlTooLong); }
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ValidationError::InvalidImageUrl(url.to_string()));
    }

    Ok(())
}
