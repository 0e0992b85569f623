//! Workflow error types.
//!
//! All of these are recovered locally and surfaced to the respondent;
//! none terminate the session.

use survey_core::validation::ValidationErrors;
use survey_store::error::{AuthError, StoreError};

/// Why a submit was rejected.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// No identity is present and the workflow requires one.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The current identity already has a stored response.
    #[error("already submitted")]
    AlreadySubmitted,

    /// One or more required fields are empty. Carries the full
    /// field→message mapping, not just the first failure.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The authentication provider rejected an operation.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The store rejected the write (or a gate query failed). The
    /// draft is left intact for manual retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Why an export failed.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The spreadsheet writer could not materialize the file.
    #[error("spreadsheet write failed: {0}")]
    Write(String),
}
