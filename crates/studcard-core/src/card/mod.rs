//! Student record extraction from a card's text layer.

mod extractor;
pub mod dates;
pub mod layout;
pub mod lines;

pub use dates::parse_card_date;
pub use extractor::{extract, StudentCardExtractor, STUDY_DURATION_YEARS};
pub use layout::{CardLayout, LinePosition, MAX_LINE_INDEX};
pub use lines::normalize_lines;

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
