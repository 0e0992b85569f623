//! Spreadsheet export: pure row shaping handed to a file-writing
//! collaborator.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rust_xlsxwriter::Workbook;
use survey_core::export::{build_sheet, ExportSheet, EXPORT_FILE_NAME};
use survey_core::response::SurveyResponse;

use crate::error::ExportError;

/// The tabular-file-writing collaborator: takes an ordered row set and
/// a sheet name, materializes one downloadable spreadsheet file with a
/// header row derived from the column list and one data row per input
/// row.
pub trait SpreadsheetWriter: Send + Sync {
    fn write(&self, sheet: &ExportSheet, path: &Path) -> Result<(), ExportError>;
}

// ---------------------------------------------------------------------------
// XlsxWriter
// ---------------------------------------------------------------------------

/// `rust_xlsxwriter`-backed implementation of [`SpreadsheetWriter`].
#[derive(Debug, Default)]
pub struct XlsxWriter;

impl SpreadsheetWriter for XlsxWriter {
    fn write(&self, sheet: &ExportSheet, path: &Path) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&sheet.name)
            .map_err(|e| ExportError::Write(e.to_string()))?;

        for (col, header) in sheet.columns.iter().enumerate() {
            worksheet
                .write_string(0, col as u16, header)
                .map_err(|e| ExportError::Write(e.to_string()))?;
        }
        for (row, values) in sheet.rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                worksheet
                    .write_string(row as u32 + 1, col as u16, value)
                    .map_err(|e| ExportError::Write(e.to_string()))?;
            }
        }

        workbook
            .save(path)
            .map_err(|e| ExportError::Write(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Exporter
// ---------------------------------------------------------------------------

/// Shapes the sorted response list and hands it to the writer.
pub struct Exporter {
    writer: Arc<dyn SpreadsheetWriter>,
    output_dir: PathBuf,
}

impl Exporter {
    /// Export into the current directory with the given writer.
    pub fn new(writer: Arc<dyn SpreadsheetWriter>) -> Self {
        Self {
            writer,
            output_dir: PathBuf::from("."),
        }
    }

    /// Place `survey_responses.xlsx` under `dir` instead.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Export the given responses, one row each, in the given order.
    ///
    /// An empty collection is a no-op: `Ok(None)`, and the writer is
    /// never invoked.
    pub fn export(&self, responses: &[SurveyResponse]) -> Result<Option<PathBuf>, ExportError> {
        let Some(sheet) = build_sheet(responses) else {
            return Ok(None);
        };
        let path = self.output_dir.join(EXPORT_FILE_NAME);
        self.writer.write(&sheet, &path)?;
        tracing::info!(path = %path.display(), rows = sheet.rows.len(), "responses exported");
        Ok(Some(path))
    }
}
