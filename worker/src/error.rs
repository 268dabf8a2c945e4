//! Typed errors for external service calls

use thiserror::Error;

/// Failure modes of the external-service boundary.
///
/// "Not found" is not an error: resolvers return `Ok(None)` and callers must
/// branch on it. Likewise an empty proximity result is `Ok` with an empty
/// vector, never `QueryFailed`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transient failure of an external service; the caller may retry.
    #[error("service temporarily unavailable: {0}")]
    Recoverable(String),

    /// The proximity query itself failed (unreachable endpoint or a
    /// malformed response), as opposed to finding nothing.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Input that cannot be turned into a pipeline request.
    #[error("malformed input: {0}")]
    InputMalformed(String),
}
