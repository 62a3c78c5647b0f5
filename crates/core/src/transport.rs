//! The I/O boundary adapter contract.
//!
//! Transport adapters translate raw framework requests into domain DTOs and
//! domain results back into framework responses. The contract guarantees:
//!
//! - `input` never fails: a malformed payload degrades to a default DTO,
//!   and downstream validation catches missing fields.
//! - `output` always renders a fully-populated 2xx success envelope.
//! - `map_error` always renders a status-coded JSON error body, 400 for
//!   recognized client-input errors and 500 otherwise.

use crate::storage::RepositoryError;

/// Capability interface for transport-boundary adapters.
pub trait IoAdapter {
    /// The raw framework request (e.g. an API Gateway event).
    type Raw;
    /// The domain DTO decoded from the request.
    type Dto;
    /// The domain result rendered on success.
    type Domain;
    /// The framework response type.
    type Response;

    /// Decodes the raw request into a DTO. Must not fail.
    fn input(&self, raw: &Self::Raw) -> Self::Dto;

    /// Renders a successful domain result.
    fn output(&self, result: &Self::Domain) -> Self::Response;

    /// Renders a propagated failure as a status-coded error response.
    fn map_error(&self, error: &RepositoryError) -> Self::Response;
}
