//! PDF decoding module.

mod decoder;

pub use decoder::{decode_text_string, PdfDecoder};

use crate::error::DecodeError;
use crate::models::metadata::DecodedDocument;

/// Result type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Turns raw document bytes into metadata and a text layer.
pub trait DocumentDecoder {
    /// Decode a document held in memory.
    fn decode(&self, data: &[u8]) -> Result<DecodedDocument>;
}
