//! Plain-text inspection report written next to the source document.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::models::metadata::DocumentMetadata;

/// Suffix replacing the source document's extension.
pub const REPORT_SUFFIX: &str = "_output.txt";

/// Report path for a source document: same directory, final extension
/// stripped, [`REPORT_SUFFIX`] appended.
///
/// `cards/StudentCard.pdf` becomes `cards/StudentCard_output.txt`.
pub fn report_path(source: &Path) -> PathBuf {
    let mut name = source.file_stem().map(OsStr::to_os_string).unwrap_or_default();
    name.push(REPORT_SUFFIX);
    source.with_file_name(name)
}

/// Render the two-section report: pretty-printed metadata, then the raw text.
pub fn render_report(metadata: &DocumentMetadata, text: &str) -> Result<String> {
    let metadata_json = serde_json::to_string_pretty(metadata)?;
    Ok(format!(
        "Metadata:\n{}\n\nParsed unmodified content:\n{}",
        metadata_json, text
    ))
}

/// Render and write the report, overwriting any existing file.
///
/// Returns the path written.
pub fn write_report(source: &Path, metadata: &DocumentMetadata, text: &str) -> Result<PathBuf> {
    let output = report_path(source);
    let content = render_report(metadata, text)?;
    std::fs::write(&output, content)?;

    info!("Report written to {}", output.display());
    Ok(output)
}
