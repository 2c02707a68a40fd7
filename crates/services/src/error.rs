//! Shared error types for the services crate.

use thiserror::Error;

use fraction_core::ValidationError;

/// Errors emitted by `SimplifierService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no fraction has been submitted")]
    NoFraction,
}
