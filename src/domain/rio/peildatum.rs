use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::domain::DomainError;

/// Reference date ("peildatum") at which registry records must be valid.
///
/// Sent upstream as the `datumGeldigOp` query parameter in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Peildatum(NaiveDate);

impl Peildatum {
    pub const QUERY_PARAM: &'static str = "datumGeldigOp";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `YYYY-MM-DD` date
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DomainError::validation("Datum moet in formaat YYYY-MM-DD"))
    }

    /// Parse an optional date; absent or blank input means no reference date
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, DomainError> {
        match value {
            Some(raw) if !raw.trim().is_empty() => Self::parse(raw).map(Some),
            _ => Ok(None),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn as_query_value(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Peildatum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl Serialize for Peildatum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_query_value())
    }
}
