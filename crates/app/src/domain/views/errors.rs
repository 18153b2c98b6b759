//! View events errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewsServiceError {
    #[error("view event already exists")]
    AlreadyExists,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),

    /// Transport or decoding failure while reading a remote feed.
    #[error("view feed request failed")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from view feed: {0}")]
    UnexpectedResponse(String),
}

impl From<sqlx::Error> for ViewsServiceError {
    fn from(error: sqlx::Error) -> Self {
        match error.as_database_error().map(sqlx::error::DatabaseError::kind) {
            Some(sqlx::error::ErrorKind::UniqueViolation) => Self::AlreadyExists,
            _ => Self::Sql(error),
        }
    }
}
