use thiserror::Error;

use crate::models::booking::FieldErrors;

/// Failure talking to the hosted record store. Malformed rows are not
/// errors; they are skipped at decode time.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("record store request failed: {0}")]
    Backend(String),
}

/// Why a booking submission did not go through.
#[derive(Debug, Error)]
pub enum BookingError {
    /// One or more fields failed validation. Nothing was written; the
    /// caller surfaces the messages inline and blocks submission until
    /// they are resolved.
    #[error("booking rejected by validation")]
    Validation(FieldErrors),
    /// The store rejected or failed the insert after a valid pass. No
    /// partial state is retained; the user retries by resubmitting.
    #[error("booking submission failed: {0}")]
    Submission(#[from] StoreError),
}
