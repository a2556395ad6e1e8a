use thiserror::Error;

/// Store operation error.
///
/// Infrastructure-level failures, as opposed to domain errors (validation,
/// policy). `Storage` carries internal detail that must not reach clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("email is already registered")]
    DuplicateEmail,

    #[error("record not found")]
    NotFound,

    #[error("storage failure: {0}")]
    Storage(String),
}
