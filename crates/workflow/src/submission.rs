//! The submission pipeline: gate check → validate → append → reset.

use std::sync::Arc;

use chrono::Utc;
use survey_core::draft::Draft;
use survey_core::response::SurveyResponse;
use survey_core::types::ResponseKey;
use survey_core::validation::validate_draft;
use survey_store::store::ResponseStore;

use crate::error::SubmitError;
use crate::gate::IdentityGate;

/// Orchestrates one submit attempt.
///
/// The with-auth and without-auth variants of the workflow are the
/// same pipeline: constructed with a gate, the identity and duplicate
/// checks run and the record carries the submitter's email; without
/// one, both are skipped and `userEmail` is omitted.
pub struct SubmissionService {
    store: Arc<dyn ResponseStore>,
    gate: Option<Arc<IdentityGate>>,
}

impl SubmissionService {
    /// Anonymous pipeline: no identity or duplicate checks.
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self { store, gate: None }
    }

    /// Authenticated pipeline with the one-submission-per-identity
    /// guard.
    pub fn with_gate(store: Arc<dyn ResponseStore>, gate: Arc<IdentityGate>) -> Self {
        Self {
            store,
            gate: Some(gate),
        }
    }

    /// Submit the draft.
    ///
    /// On success the record is durably appended, the draft is reset
    /// to its empty initial shape, and the gate's duplicate flag is
    /// marked. On any failure — gate rejection, validation errors, or
    /// a store write error — the draft is left untouched so the
    /// respondent can fix and retry; no automatic retry is performed.
    pub async fn submit(&self, draft: &mut Draft) -> Result<ResponseKey, SubmitError> {
        let user_email = match &self.gate {
            Some(gate) => {
                let identity = gate.identity().ok_or(SubmitError::NotAuthenticated)?;
                if gate.has_submitted() {
                    return Err(SubmitError::AlreadySubmitted);
                }
                Some(identity.email)
            }
            None => None,
        };

        let errors = validate_draft(draft);
        if !errors.is_empty() {
            return Err(SubmitError::Validation(errors));
        }

        let record = SurveyResponse::from_draft(draft, Utc::now(), user_email);
        match self.store.append(&record).await {
            Ok(key) => {
                draft.reset();
                if let Some(gate) = &self.gate {
                    gate.mark_submitted();
                }
                tracing::info!(key = %key, "survey response stored");
                Ok(key)
            }
            Err(err) => {
                tracing::error!(error = %err, "response write failed; draft kept for retry");
                Err(err.into())
            }
        }
    }
}
