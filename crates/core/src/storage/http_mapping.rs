//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! Only the I/O boundary renders errors; everything below it raises and
//! propagates. This mapping keeps that classification in one place.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Contract misuse (`OperationNotPermitted`) and bad input (`InvalidData`)
/// are client errors, not infrastructure failures:
///
/// - `NotFound` -> 404 (Not Found)
/// - `OperationNotPermitted` -> 400 (Bad Request)
/// - `InvalidData` -> 400 (Bad Request)
/// - `ConnectionFailed` -> 500 (Internal Server Error)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::OperationNotPermitted { .. } => 400,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
    }
}
