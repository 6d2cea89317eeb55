//! Student record extracted from an ID card.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured student identity data derived from one card document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Creation and modification timestamps are identical strings.
    pub unmodified: bool,

    /// Name lines joined with a single space.
    pub full_name: String,

    /// Institution name in the local language.
    pub institution_name_local: String,

    /// Institution name in the secondary language.
    pub institution_name_secondary: String,

    /// Enrollment start date.
    pub course_start: NaiveDate,

    /// Expected graduation year.
    pub graduation_year: i32,
}
