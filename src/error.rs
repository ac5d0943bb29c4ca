use thiserror::Error;

/// Errors produced while handling book requests.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied an unusable request.
    #[error("{0}")]
    BadRequest(String),
    /// The requested book does not exist.
    #[error("Book not found")]
    NotFound,
    /// An update payload had no fields left once the identity was removed.
    #[error("No fields to update")]
    NoFieldsToUpdate,
    /// A payload could not be parsed or a response could not be rendered.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A typed item could not be converted with serde_dynamo.
    #[error(transparent)]
    Dynamo(#[from] serde_dynamo::Error),
    /// The storage engine rejected or failed a request.
    #[error("{0}")]
    Storage(String),
    /// The alert topic rejected or failed a publish.
    #[error("{0}")]
    Notify(String),
    /// The environment did not describe a usable configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) | Self::NoFieldsToUpdate => 400,
            Self::NotFound => 404,
            Self::Json(_)
            | Self::Dynamo(_)
            | Self::Storage(_)
            | Self::Notify(_)
            | Self::Config(_) => 500,
        }
    }

    pub(crate) fn storage(action: &str, error: impl std::fmt::Display) -> Self {
        Self::Storage(format!("{action}: {error}"))
    }

    pub(crate) fn notify(action: &str, error: impl std::fmt::Display) -> Self {
        Self::Notify(format!("{action}: {error}"))
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
