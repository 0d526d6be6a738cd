use thiserror::Error;

/// A request that is structurally valid JSON but breaks a domain rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors returned by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique column (name, email) already holds the value
    #[error("{0}")]
    Conflict(String),

    /// A foreign key or check constraint rejected the write
    #[error("{0}")]
    Invalid(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
