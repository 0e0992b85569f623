//! Shared fakes and fixtures for the workflow integration tests.
#![allow(dead_code)] // not every test binary uses every fixture

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use survey_core::draft::Draft;
use survey_core::export::ExportSheet;
use survey_core::questions::{question_key, QUESTION_COUNT};
use survey_core::response::SurveyResponse;
use survey_core::types::ResponseKey;
use survey_store::error::StoreError;
use survey_store::store::{ResponseMap, ResponseStore};
use survey_workflow::error::ExportError;
use survey_workflow::exporter::SpreadsheetWriter;
use tokio::sync::watch;

/// A draft with every required field filled, matching the scenario in
/// the workflow contract.
pub fn filled_draft() -> Draft {
    let mut draft = Draft::default();
    draft.set("companyType", "Private company");
    draft.set("gender", "Male");
    draft.set("age", "From 20 to 35 years old");
    draft.set("workDuration", "Under 1 year");
    for n in 1..=QUESTION_COUNT {
        draft.set(&question_key(n), "3");
    }
    draft
}

/// A store whose appends always fail, for write-error paths.
pub struct FailingStore {
    snapshots: watch::Sender<ResponseMap>,
}

impl FailingStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(ResponseMap::new());
        Self { snapshots }
    }
}

#[async_trait]
impl ResponseStore for FailingStore {
    async fn append(&self, _record: &SurveyResponse) -> Result<ResponseKey, StoreError> {
        Err(StoreError::Write("connection reset".into()))
    }

    async fn snapshot(&self) -> Result<ResponseMap, StoreError> {
        Ok(ResponseMap::new())
    }

    fn subscribe(&self) -> watch::Receiver<ResponseMap> {
        self.snapshots.subscribe()
    }

    async fn find_by_submitter(&self, _email: &str) -> Result<Vec<SurveyResponse>, StoreError> {
        Ok(Vec::new())
    }
}

/// A spreadsheet writer that records every sheet instead of producing
/// a file.
#[derive(Default)]
pub struct RecordingWriter {
    pub sheets: Mutex<Vec<ExportSheet>>,
}

impl RecordingWriter {
    pub fn write_count(&self) -> usize {
        self.sheets.lock().unwrap().len()
    }
}

impl SpreadsheetWriter for RecordingWriter {
    fn write(&self, sheet: &ExportSheet, _path: &Path) -> Result<(), ExportError> {
        self.sheets.lock().unwrap().push(sheet.clone());
        Ok(())
    }
}
