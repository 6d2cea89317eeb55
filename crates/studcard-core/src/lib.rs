//! Core library for student ID card processing.
//!
//! This crate provides:
//! - PDF decoding into document metadata and a text layer
//! - Student record extraction driven by a line layout table
//! - The plain-text inspection report written next to the source document

pub mod error;
pub mod models;
pub mod pdf;
pub mod card;
pub mod report;

pub use error::{CardError, DecodeError, ExtractionError, Result};
pub use models::config::StudcardConfig;
pub use models::metadata::{DecodedDocument, DocumentMetadata};
pub use models::student::StudentRecord;
pub use pdf::{DocumentDecoder, PdfDecoder};
pub use card::{extract, CardLayout, LinePosition, StudentCardExtractor};
pub use report::{render_report, report_path, write_report};
