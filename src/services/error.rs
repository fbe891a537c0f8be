use validator::ValidationErrors;

use repos::error::Error as RepoError;

/// Service layer Error
#[derive(Debug, Fail)]
pub enum ServiceError {
    #[fail(display = "Not found")]
    NotFound,
    #[fail(display = "Invalid argument: {}", _0)]
    InvalidArgument(String),
    #[fail(display = "Validation error: {}", _0)]
    Validate(ValidationErrors),
    #[fail(display = "Connection error: {}", _0)]
    Connection(String),
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => ServiceError::NotFound,
            RepoError::InvalidArgument(msg) => ServiceError::InvalidArgument(msg),
            RepoError::Connection(msg) => ServiceError::Connection(msg),
        }
    }
}
