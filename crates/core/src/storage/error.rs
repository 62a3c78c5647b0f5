use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Two failure classes are deliberately distinct and must not be unified:
/// a missing datum is an absent result (`Ok(None)`), while a forbidden
/// operation is `OperationNotPermitted`. `NotFound` stays on the taxonomy
/// because the capability contract permits raising it, but the question
/// adapters choose the absent-result policy for lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("operation not permitted: {operation}")]
    OperationNotPermitted { operation: &'static str },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
