//! Export row shaping — the pure half of the spreadsheet export.
//!
//! Turns a chronologically sorted response list into a flat sheet:
//! one header row, one data row per response, question columns keyed
//! by the full prompt text (not `q1`..`q25`). Writing the file is the
//! collaborator's job (`survey-workflow`'s `SpreadsheetWriter`).

use crate::format::format_timestamp;
use crate::questions::{question_text, QUESTION_COUNT};
use crate::response::SurveyResponse;

/// Sheet name used in the exported workbook.
pub const SHEET_NAME: &str = "Survey Responses";

/// File name of the exported workbook.
pub const EXPORT_FILE_NAME: &str = "survey_responses.xlsx";

/// Number of columns per row: timestamp + 4 personal + 25 questions.
pub const COLUMN_COUNT: usize = 1 + 4 + QUESTION_COUNT;

/// A flat tabular view ready for the spreadsheet writer: one ordered
/// header row and one data row per response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Shape a sorted response list into an [`ExportSheet`].
///
/// Returns `None` for an empty collection — the export is a no-op and
/// no file must be produced. Row order follows the input order; the
/// caller passes the aggregator's ascending-by-timestamp view.
pub fn build_sheet(responses: &[SurveyResponse]) -> Option<ExportSheet> {
    if responses.is_empty() {
        return None;
    }

    let mut columns = Vec::with_capacity(COLUMN_COUNT);
    columns.extend(
        ["Timestamp", "Company Type", "Gender", "Age", "Work Duration"].map(String::from),
    );
    for n in 1..=QUESTION_COUNT {
        columns.push(question_text(n).to_string());
    }

    let rows = responses
        .iter()
        .map(|response| {
            let mut row = Vec::with_capacity(COLUMN_COUNT);
            row.push(format_timestamp(&response.timestamp));
            row.push(response.company_type.clone());
            row.push(response.gender.clone());
            row.push(response.age.clone());
            row.push(response.work_duration.clone());
            for n in 1..=QUESTION_COUNT {
                row.push(response.answers.get(n).to_string());
            }
            row
        })
        .collect();

    Some(ExportSheet {
        name: SHEET_NAME.to_string(),
        columns,
        rows,
    })
}
