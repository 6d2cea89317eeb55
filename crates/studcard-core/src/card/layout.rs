//! Line layout table mapping record fields to positions in the text layer.

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Highest line index a layout may address.
pub const MAX_LINE_INDEX: usize = 255;

/// Position of a field within the normalized line sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinePosition {
    /// Zero-based index from the top.
    Index(usize),
    /// The final line.
    Last,
}

impl LinePosition {
    /// Minimum number of lines needed for this position to resolve.
    pub fn min_lines(self) -> usize {
        match self {
            Self::Index(i) => i.saturating_add(1),
            Self::Last => 1,
        }
    }

    /// Resolve against a line sequence.
    pub fn resolve<'a>(self, lines: &[&'a str]) -> Option<&'a str> {
        match self {
            Self::Index(i) => lines.get(i).copied(),
            Self::Last => lines.last().copied(),
        }
    }
}

/// Which normalized line holds which field.
///
/// The default matches the card issued by the university: surname and given
/// name on the first two lines, the institution name in two languages on
/// lines 3 and 4, and the course start date at the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardLayout {
    /// Lines joined with a space to form the full name.
    pub name_lines: Vec<LinePosition>,

    /// Institution name, local language.
    pub institution_local: LinePosition,

    /// Institution name, secondary language.
    pub institution_secondary: LinePosition,

    /// Course start date (`DD.MM.YYYY`).
    pub course_start: LinePosition,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            name_lines: vec![LinePosition::Index(0), LinePosition::Index(1)],
            institution_local: LinePosition::Index(3),
            institution_secondary: LinePosition::Index(4),
            course_start: LinePosition::Last,
        }
    }
}

impl CardLayout {
    /// Minimum number of normalized lines every position needs.
    pub fn required_lines(&self) -> usize {
        self.positions()
            .map(LinePosition::min_lines)
            .max()
            .unwrap_or(0)
    }

    /// Check the layout is usable.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.name_lines.is_empty() {
            return Err(CardError::Config(
                "layout.name_lines must name at least one line".to_string(),
            ));
        }
        for pos in self.positions() {
            if let LinePosition::Index(i) = pos {
                if i > MAX_LINE_INDEX {
                    return Err(CardError::Config(format!(
                        "layout line index {} exceeds {}",
                        i, MAX_LINE_INDEX
                    )));
                }
            }
        }
        Ok(())
    }

    fn positions(&self) -> impl Iterator<Item = LinePosition> + '_ {
        self.name_lines.iter().copied().chain([
            self.institution_local,
            self.institution_secondary,
            self.course_start,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_requires_five_lines() {
        assert_eq!(CardLayout::default().required_lines(), 5);
    }

    #[test]
    fn test_required_lines_custom() {
        let layout = CardLayout {
            name_lines: vec![LinePosition::Index(0)],
            institution_local: LinePosition::Index(1),
            institution_secondary: LinePosition::Index(1),
            course_start: LinePosition::Last,
        };
        assert_eq!(layout.required_lines(), 2);
    }

    #[test]
    fn test_resolve() {
        let lines = ["a", "b", "c"];
        assert_eq!(LinePosition::Index(1).resolve(&lines), Some("b"));
        assert_eq!(LinePosition::Index(3).resolve(&lines), None);
        assert_eq!(LinePosition::Last.resolve(&lines), Some("c"));
        assert_eq!(LinePosition::Last.resolve(&[]), None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(CardLayout::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name_lines": [{"index": 0}, {"index": 1}],
                "institution_local": {"index": 3},
                "institution_secondary": {"index": 4},
                "course_start": "last",
            })
        );
    }

    #[test]
    fn test_huge_index_does_not_overflow() {
        let layout: CardLayout =
            serde_json::from_str(r#"{"institution_local": {"index": 18446744073709551615}}"#)
                .unwrap();
        assert_eq!(layout.institution_local, LinePosition::Index(usize::MAX));
        assert_eq!(layout.required_lines(), usize::MAX);
        assert!(matches!(layout.validate(), Err(CardError::Config(_))));
    }

    #[test]
    fn test_validate_index_bound() {
        let mut layout = CardLayout::default();
        layout.course_start = LinePosition::Index(MAX_LINE_INDEX);
        assert!(layout.validate().is_ok());

        layout.name_lines.push(LinePosition::Index(MAX_LINE_INDEX + 1));
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let layout = CardLayout {
            name_lines: vec![],
            ..Default::default()
        };
        assert!(layout.validate().is_err());
        assert!(CardLayout::default().validate().is_ok());
    }
}
