//! Survey submission and aggregation workflow.
//!
//! Orchestrates the pure domain logic from `survey-core` over the
//! collaborator seams from `survey-store`:
//!
//! - [`IdentityGate`] — authentication state plus the derived
//!   "already submitted" flag.
//! - [`SubmissionService`] — gate check → validate → append → reset,
//!   as one configurable pipeline with optional identity checks.
//! - [`ResponseAggregator`] — live, chronologically sorted view of the
//!   stored collection.
//! - [`Exporter`] — spreadsheet export through the
//!   [`SpreadsheetWriter`] collaborator.
//! - [`SurveySession`] — facade owning the draft and the error state
//!   for one form session.

pub mod aggregator;
pub mod error;
pub mod exporter;
pub mod gate;
pub mod session;
pub mod submission;

pub use aggregator::ResponseAggregator;
pub use error::{ExportError, SubmitError};
pub use exporter::{Exporter, SpreadsheetWriter, XlsxWriter};
pub use gate::IdentityGate;
pub use session::SurveySession;
pub use submission::SubmissionService;
