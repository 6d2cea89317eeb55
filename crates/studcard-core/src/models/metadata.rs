//! Document metadata as read from the PDF info dictionary and catalog.

use serde::{Deserialize, Serialize};

/// Document-level metadata attached by the authoring or scanning pipeline.
///
/// Keys serialize with the names PDF info readers conventionally expose
/// (`PDFFormatVersion`, `CreationDate`, ...), so the report reads the same as
/// the raw info dictionary. Timestamps are kept as the raw PDF date strings
/// and are never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// PDF header version, e.g. `1.7`.
    #[serde(rename = "PDFFormatVersion")]
    pub format_version: String,

    /// Whether the catalog carries an interactive form.
    #[serde(rename = "IsAcroFormPresent")]
    pub acro_form_present: bool,

    /// Whether the interactive form is XFA-based.
    #[serde(rename = "IsXFAPresent")]
    pub xfa_present: bool,

    /// Application that produced the PDF.
    #[serde(rename = "Producer", default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,

    /// Raw creation timestamp.
    #[serde(rename = "CreationDate", default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    /// Raw modification timestamp.
    #[serde(rename = "ModDate", default, skip_serializing_if = "Option::is_none")]
    pub mod_date: Option<String>,
}

impl DocumentMetadata {
    /// Heuristic tamper indicator: `true` when the creation and modification
    /// timestamps are byte-identical strings.
    ///
    /// This is not an integrity check. Two renderings of the same instant in
    /// different formats compare unequal.
    pub fn timestamps_match(&self) -> bool {
        self.creation_date == self.mod_date
    }
}

/// Output of the document decoder.
#[derive(Debug, Clone)]
pub struct DecodedDocument {
    /// Metadata read from the document.
    pub metadata: DocumentMetadata,
    /// Text layer, unmodified.
    pub text: String,
    /// Number of pages in the document.
    pub page_count: u32,
}
