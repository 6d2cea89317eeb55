//! PDF metadata and text layer decoding using lopdf and pdf-extract.

use std::borrow::Cow;

use lopdf::{Dictionary, Document, Object};
use tracing::{debug, trace};

use super::{DocumentDecoder, Result};
use crate::error::DecodeError;
use crate::models::metadata::{DecodedDocument, DocumentMetadata};

/// Document decoder backed by lopdf (structure, metadata) and pdf-extract
/// (text layer).
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDecoder;

impl PdfDecoder {
    /// Create a new PDF decoder.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentDecoder for PdfDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedDocument> {
        let mut doc = Document::load_mem(data).map_err(|e| DecodeError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let text_source: Cow<'_, [u8]> = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(DecodeError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes
            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| DecodeError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            Cow::Owned(decrypted)
        } else {
            Cow::Borrowed(data)
        };

        let page_count = doc.get_pages().len() as u32;
        if page_count == 0 {
            return Err(DecodeError::NoPages);
        }

        let metadata = DocumentMetadata::from_document(&doc);
        let text = pdf_extract::extract_text_from_mem(&text_source)
            .map_err(|e| DecodeError::TextExtraction(e.to_string()))?;

        debug!(
            "Decoded PDF {}: {} pages, {} chars of text",
            metadata.format_version,
            page_count,
            text.chars().count()
        );

        Ok(DecodedDocument {
            metadata,
            text,
            page_count,
        })
    }
}

impl DocumentMetadata {
    /// Read metadata from the catalog and the trailer's `/Info` dictionary.
    ///
    /// Missing entries are left as `None`; a document without `/Info` still
    /// yields its version and form flags.
    pub fn from_document(doc: &Document) -> Self {
        let catalog = resolve_dict(doc, doc.trailer.get(b"Root").ok());
        let acro_form = catalog.and_then(|c| resolve_dict(doc, c.get(b"AcroForm").ok()));

        let has_fields = acro_form
            .and_then(|form| form.get(b"Fields").ok())
            .and_then(|fields| doc.dereference(fields).ok())
            .and_then(|(_, fields)| fields.as_array().ok())
            .is_some_and(|fields| !fields.is_empty());
        let xfa_present = acro_form
            .and_then(|form| form.get(b"XFA").ok())
            .and_then(|xfa| doc.dereference(xfa).ok())
            .is_some_and(|(_, xfa)| match xfa {
                Object::Array(packets) => !packets.is_empty(),
                Object::Stream(stream) => !stream.content.is_empty(),
                _ => false,
            });

        let info = resolve_dict(doc, doc.trailer.get(b"Info").ok());
        let text_entry = |key: &[u8]| -> Option<String> {
            let value = info?.get(key).ok()?;
            let (_, value) = doc.dereference(value).ok()?;
            value.as_str().ok().map(decode_text_string)
        };

        let metadata = Self {
            format_version: doc.version.clone(),
            acro_form_present: has_fields,
            xfa_present,
            producer: text_entry(b"Producer"),
            creation_date: text_entry(b"CreationDate"),
            mod_date: text_entry(b"ModDate"),
        };
        trace!("Read metadata: {:?}", metadata);
        metadata
    }
}

fn resolve_dict<'a>(doc: &'a Document, obj: Option<&'a Object>) -> Option<&'a Dictionary> {
    let (_, obj) = doc.dereference(obj?).ok()?;
    obj.as_dict().ok()
}

/// Decode a PDF text string.
///
/// UTF-16BE and UTF-8 strings are recognized by their byte order mark;
/// anything else is read as the Latin-1 range of PDFDocEncoding.
pub fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
        char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    } else if let Some(utf8) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        String::from_utf8_lossy(utf8).into_owned()
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
