//! Survey domain logic: question catalog, draft, persisted response
//! model, required-field validation, and export row shaping.
//!
//! This crate is pure — no I/O, no async. The store and authentication
//! collaborators live in `survey-store`; orchestration lives in
//! `survey-workflow`.

pub mod answers;
pub mod draft;
pub mod export;
pub mod format;
pub mod questions;
pub mod response;
pub mod types;
pub mod validation;

pub use answers::QuestionAnswers;
pub use draft::Draft;
pub use export::{build_sheet, ExportSheet, EXPORT_FILE_NAME, SHEET_NAME};
pub use format::format_timestamp;
pub use response::SurveyResponse;
pub use validation::{validate_draft, ValidationErrors};
