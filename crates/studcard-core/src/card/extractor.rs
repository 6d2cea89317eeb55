//! Student record extractor.

use chrono::Datelike;
use tracing::debug;

use super::dates::parse_card_date;
use super::layout::{CardLayout, LinePosition};
use super::lines::normalize_lines;
use super::Result;
use crate::error::ExtractionError;
use crate::models::metadata::DocumentMetadata;
use crate::models::student::StudentRecord;

/// Years between course start and graduation.
pub const STUDY_DURATION_YEARS: i32 = 4;

/// Extracts a [`StudentRecord`] from a card's metadata and text layer.
///
/// Extraction is pure: the record depends only on the inputs and the layout.
#[derive(Debug, Clone, Default)]
pub struct StudentCardExtractor {
    layout: CardLayout,
}

impl StudentCardExtractor {
    /// Create an extractor using the default card layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom line layout.
    pub fn with_layout(mut self, layout: CardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The layout in use.
    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    /// Extract the student record.
    pub fn extract(&self, metadata: &DocumentMetadata, text: &str) -> Result<StudentRecord> {
        let unmodified = metadata.timestamps_match();

        let lines = normalize_lines(text);
        let required = self.layout.required_lines();
        if lines.len() < required {
            return Err(ExtractionError::TooFewLines {
                required,
                found: lines.len(),
            });
        }
        debug!("Card text has {} non-empty lines", lines.len());

        let full_name = self
            .layout
            .name_lines
            .iter()
            .map(|&pos| self.line(&lines, pos))
            .collect::<Result<Vec<_>>>()?
            .join(" ");

        let institution_name_local = self.line(&lines, self.layout.institution_local)?.to_string();
        let institution_name_secondary =
            self.line(&lines, self.layout.institution_secondary)?.to_string();

        let course_start = parse_card_date(self.line(&lines, self.layout.course_start)?)?;
        let graduation_year = course_start.year() + STUDY_DURATION_YEARS;

        debug!(
            "Extracted record: course_start={}, graduation_year={}, unmodified={}",
            course_start, graduation_year, unmodified
        );

        Ok(StudentRecord {
            unmodified,
            full_name,
            institution_name_local,
            institution_name_secondary,
            course_start,
            graduation_year,
        })
    }

    fn line<'a>(&self, lines: &[&'a str], pos: LinePosition) -> Result<&'a str> {
        pos.resolve(lines).ok_or(ExtractionError::TooFewLines {
            required: pos.min_lines(),
            found: lines.len(),
        })
    }
}

/// Extract a student record using the default card layout.
pub fn extract(metadata: &DocumentMetadata, text: &str) -> Result<StudentRecord> {
    StudentCardExtractor::new().extract(metadata, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    const CARD_TEXT: &str = "Alice\nSmith\n\n2020-ST-0042\nNazarbayev University\nНазарбаев Университеті\n01.09.2023\n";

    fn metadata(created: &str, modified: &str) -> DocumentMetadata {
        DocumentMetadata {
            format_version: "1.7".to_string(),
            acro_form_present: false,
            xfa_present: false,
            producer: Some("Skia/PDF m114".to_string()),
            creation_date: Some(created.to_string()),
            mod_date: Some(modified.to_string()),
        }
    }

    fn card(lines: &[&str]) -> String {
        lines.join("\n")
    }

    #[test]
    fn test_extract_card() {
        let text = card(&[
            "Alice",
            "Smith",
            "",
            "ID 2020-0042",
            "Nazarbayev University",
            "Назарбаев Университеті",
            "01.09.2023",
        ]);
        let record = extract(&metadata("D:20230101", "D:20230101"), &text).unwrap();

        assert_eq!(
            record,
            StudentRecord {
                unmodified: true,
                full_name: "Alice Smith".to_string(),
                institution_name_local: "Nazarbayev University".to_string(),
                institution_name_secondary: "Назарбаев Университеті".to_string(),
                course_start: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
                graduation_year: 2027,
            }
        );
    }

    #[test]
    fn test_blank_lines_do_not_count_as_positions() {
        // The blank third line is dropped, so "Nazarbayev University" becomes
        // index 2 and the Kazakh name index 3.
        let text = card(&[
            "Alice",
            "Smith",
            "",
            "Nazarbayev University",
            "Назарбаев Университеті",
            "01.09.2023",
        ]);
        let record = extract(&metadata("D:20230101", "D:20230101"), &text).unwrap();

        assert_eq!(record.full_name, "Alice Smith");
        assert_eq!(record.institution_name_local, "Назарбаев Университеті");
        assert_eq!(record.institution_name_secondary, "01.09.2023");
        assert_eq!(record.course_start, NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());
    }

    #[test]
    fn test_mod_date_flips_only_unmodified() {
        let baseline = extract(&metadata("D:20230101", "D:20230101"), CARD_TEXT).unwrap();
        let edited = extract(&metadata("D:20230101", "D:20230315"), CARD_TEXT).unwrap();

        assert!(baseline.unmodified);
        assert!(!edited.unmodified);
        assert_eq!(
            StudentRecord {
                unmodified: true,
                ..edited
            },
            baseline
        );
    }

    #[test]
    fn test_extract_is_deterministic() {
        let meta = metadata("D:20230101", "D:20230101");
        let first = extract(&meta, CARD_TEXT).unwrap();
        let second = extract(&meta, CARD_TEXT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_graduation_year() {
        let text = "A\nB\nC\nD\nE\n01.01.2000";
        let record = extract(&metadata("x", "x"), text).unwrap();
        assert_eq!(record.course_start.year(), 2000);
        assert_eq!(record.graduation_year, 2004);
        assert_eq!(record.graduation_year, record.course_start.year() + STUDY_DURATION_YEARS);
    }

    #[test]
    fn test_malformed_date_fails() {
        let text = "A\nB\nC\nD\nE\nab.cd.efgh";
        let err = extract(&metadata("x", "x"), text).unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedDate { .. }));

        let text = "A\nB\nC\nD\nE\n15.2021";
        assert!(matches!(
            extract(&metadata("x", "x"), text),
            Err(ExtractionError::MalformedDate { .. })
        ));
    }

    #[test]
    fn test_too_few_lines() {
        let err = extract(&metadata("x", "x"), "Alice\nSmith\n01.09.2023").unwrap_err();
        assert_eq!(err, ExtractionError::TooFewLines { required: 5, found: 3 });

        let err = extract(&metadata("x", "x"), "  \n\n").unwrap_err();
        assert_eq!(err, ExtractionError::TooFewLines { required: 5, found: 0 });
    }

    #[test]
    fn test_unvalidated_huge_index_is_too_few_lines() {
        let layout = CardLayout {
            institution_local: LinePosition::Index(usize::MAX),
            ..Default::default()
        };
        let err = StudentCardExtractor::new()
            .with_layout(layout)
            .extract(&metadata("x", "x"), CARD_TEXT)
            .unwrap_err();
        assert_eq!(err, ExtractionError::TooFewLines { required: usize::MAX, found: 6 });
    }

    #[test]
    fn test_custom_layout() {
        let layout = CardLayout {
            name_lines: vec![LinePosition::Index(1), LinePosition::Index(0)],
            institution_local: LinePosition::Index(2),
            institution_secondary: LinePosition::Index(2),
            course_start: LinePosition::Last,
        };
        let extractor = StudentCardExtractor::new().with_layout(layout);
        let record = extractor
            .extract(&metadata("x", "y"), "Smith\nAlice\nNU\n15.09.2021")
            .unwrap();

        assert_eq!(record.full_name, "Alice Smith");
        assert_eq!(record.institution_name_local, "NU");
        assert_eq!(record.institution_name_secondary, "NU");
        assert_eq!(record.course_start, NaiveDate::from_ymd_opt(2021, 9, 15).unwrap());
        assert_eq!(record.graduation_year, 2025);
        assert!(!record.unmodified);
    }
}
