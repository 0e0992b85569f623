//! The per-respondent session facade.

use std::path::PathBuf;
use std::sync::Arc;

use survey_core::draft::Draft;
use survey_core::response::SurveyResponse;
use survey_core::types::ResponseKey;
use survey_core::validation::ValidationErrors;
use survey_store::auth::{AuthProvider, Identity};
use survey_store::error::AuthError;
use survey_store::store::ResponseStore;

use crate::aggregator::ResponseAggregator;
use crate::error::{ExportError, SubmitError};
use crate::exporter::Exporter;
use crate::gate::IdentityGate;
use crate::submission::SubmissionService;

/// Banner message when submitting without signing in.
pub const MSG_LOGIN_REQUIRED: &str = "Please log in to submit the survey";
/// Banner message for a repeat submission.
pub const MSG_ALREADY_SUBMITTED: &str = "You have already submitted the survey";

/// One form session: exclusively owns the active [`Draft`] and the
/// user-visible error state, and wires the gate, submission pipeline,
/// aggregator, and exporter together with explicit init and teardown
/// (dropping the session releases the store subscription).
pub struct SurveySession {
    draft: Draft,
    errors: ValidationErrors,
    banner: Option<String>,
    gate: Option<Arc<IdentityGate>>,
    submission: SubmissionService,
    aggregator: ResponseAggregator,
    exporter: Exporter,
}

impl SurveySession {
    /// Anonymous variant: no sign-in, no duplicate guard.
    pub fn new(store: Arc<dyn ResponseStore>, exporter: Exporter) -> Self {
        let aggregator = ResponseAggregator::new(store.as_ref());
        Self {
            draft: Draft::default(),
            errors: ValidationErrors::default(),
            banner: None,
            gate: None,
            submission: SubmissionService::new(store),
            aggregator,
            exporter,
        }
    }

    /// Authenticated variant with the one-submission-per-user guard.
    pub fn with_auth(
        store: Arc<dyn ResponseStore>,
        auth: Arc<dyn AuthProvider>,
        exporter: Exporter,
    ) -> Self {
        let gate = Arc::new(IdentityGate::new(auth, Arc::clone(&store)));
        let aggregator = ResponseAggregator::new(store.as_ref());
        Self {
            draft: Draft::default(),
            errors: ValidationErrors::default(),
            banner: None,
            gate: Some(Arc::clone(&gate)),
            submission: SubmissionService::with_gate(store, gate),
            aggregator,
            exporter,
        }
    }

    // -- form state ---------------------------------------------------------

    /// Bind a form input to the draft by wire key. Unknown keys return
    /// `false` and change nothing.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.draft.set(field, value)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable access to the draft, e.g. for restoring saved form
    /// state in one shot.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Field-adjacent messages from the last failed submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Banner-level message (auth errors, gate rejections), if any.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    // -- authentication -----------------------------------------------------

    /// Sign in through the gate. Only available on the authenticated
    /// variant.
    pub async fn sign_in(&mut self) -> Result<Identity, AuthError> {
        let gate = self
            .gate
            .as_ref()
            .ok_or_else(|| AuthError::new("authentication is not enabled"))?;
        match gate.sign_in().await {
            Ok(identity) => {
                self.banner = None;
                Ok(identity)
            }
            Err(err) => {
                self.banner = Some(format!("Login error: {}", err.message));
                Err(err)
            }
        }
    }

    pub async fn sign_out(&mut self) -> Result<(), AuthError> {
        if let Some(gate) = &self.gate {
            gate.sign_out().await?;
        }
        Ok(())
    }

    pub fn identity(&self) -> Option<Identity> {
        self.gate.as_ref().and_then(|g| g.identity())
    }

    /// The duplicate flag; always `false` on the anonymous variant.
    pub fn has_submitted(&self) -> bool {
        self.gate.as_ref().is_some_and(|g| g.has_submitted())
    }

    // -- submission ---------------------------------------------------------

    /// Submit the current draft.
    ///
    /// Success clears all error state and resets the draft. Failures
    /// update the field-adjacent or banner-level messages and keep the
    /// draft for retry.
    pub async fn submit(&mut self) -> Result<ResponseKey, SubmitError> {
        match self.submission.submit(&mut self.draft).await {
            Ok(key) => {
                self.errors = ValidationErrors::default();
                self.banner = None;
                Ok(key)
            }
            Err(err) => {
                match &err {
                    SubmitError::NotAuthenticated => {
                        self.banner = Some(MSG_LOGIN_REQUIRED.to_string());
                    }
                    SubmitError::AlreadySubmitted => {
                        self.banner = Some(MSG_ALREADY_SUBMITTED.to_string());
                    }
                    SubmitError::Validation(errors) => {
                        self.errors = errors.clone();
                    }
                    // Store/auth failures keep existing messages; the
                    // respondent simply retries.
                    SubmitError::Auth(_) | SubmitError::Store(_) => {}
                }
                Err(err)
            }
        }
    }

    // -- aggregation & export ----------------------------------------------

    /// All stored responses, oldest first, computed from the latest
    /// snapshot.
    pub fn responses(&self) -> Vec<SurveyResponse> {
        self.aggregator.sorted()
    }

    /// Wait for the next store snapshot.
    pub async fn responses_changed(&mut self) -> bool {
        self.aggregator.changed().await
    }

    /// Export the sorted view; `Ok(None)` when there is nothing to
    /// export.
    pub fn export(&self) -> Result<Option<PathBuf>, ExportError> {
        self.exporter.export(&self.aggregator.sorted())
    }
}
