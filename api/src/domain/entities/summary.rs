//! Summary domain entity
//!
//! A daily summary is a Markdown object stored under `news/<date>.md`.
//! The date is the only identity a summary has.

use chrono::NaiveDate;

use crate::error::DomainError;

/// Suffix every summary object carries
pub const SUMMARY_SUFFIX: &str = ".md";

/// Object-key prefix for summaries
pub const SUMMARY_PREFIX: &str = "news/";

/// A validated `YYYY-MM-DD` calendar date identifying one summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SummaryDate(pub NaiveDate);

impl SummaryDate {
    /// Parse a strict `YYYY-MM-DD` date.
    ///
    /// Anything else (including `..`, slashes, or unpadded months) is a validation error,
    /// so user input never becomes an arbitrary object key.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if !has_date_shape(raw) {
            return Err(DomainError::Validation(format!(
                "Invalid summary date '{}': expected YYYY-MM-DD",
                raw
            )));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(SummaryDate)
            .map_err(|e| {
                DomainError::Validation(format!("Invalid summary date '{}': {}", raw, e))
            })
    }

    /// Object key of this summary, e.g. `news/2025-05-07.md`
    pub fn key(&self) -> SummaryKey {
        SummaryKey(format!("{}{}{}", SUMMARY_PREFIX, self, SUMMARY_SUFFIX))
    }
}

impl std::fmt::Display for SummaryDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::str::FromStr for SummaryDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Exactly four digits, `-`, two digits, `-`, two digits
fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Object key of a stored summary
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummaryKey(pub String);

impl SummaryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SummaryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Date label for a listed file name (`2025-05-07.md` -> `2025-05-07`).
///
/// Listing is not validated: whatever the store holds is reported.
pub fn date_from_file_name(file_name: &str) -> &str {
    file_name
        .strip_suffix(SUMMARY_SUFFIX)
        .unwrap_or(file_name)
}
