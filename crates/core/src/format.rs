//! Fixed-locale timestamp rendering shared by the live view and the
//! spreadsheet export.

use crate::types::Timestamp;

/// Render a timestamp as `MM/DD/YYYY, HH:MM:SS` (24-hour clock).
///
/// The live response table and the exported sheet must render the
/// same instant identically, so both go through this one function.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format("%m/%d/%Y, %H:%M:%S").to_string()
}
