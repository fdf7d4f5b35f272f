//! `DateYearLess` (`--MM-DD`) from common-schema.

use crate::error::{DataModelError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn date_year_less_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^--((0[13578]|1[02])-31|(0[13-9]|1[0-2])-30|(0\d|1[0-2])-([0-2]\d))$")
            .expect("date pattern is valid")
    })
}

/// Whether `d` suits `DateYearLess`.
pub fn validate_date_year_less(d: &str) -> bool {
    date_year_less_regex().is_match(d)
}

/// Calendar day without a year, e.g. `--12-24`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateYearLess(String);

impl DateYearLess {
    pub fn parse(s: &str) -> Result<Self> {
        if validate_date_year_less(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(DataModelError::InvalidDateYearLess(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DateYearLess {
    type Error = DataModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<DateYearLess> for String {
    fn from(value: DateYearLess) -> Self {
        value.0
    }
}

impl fmt::Display for DateYearLess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
