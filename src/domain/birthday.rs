//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Storage and parse format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// chrono accepts unpadded fields for %m/%d, so the shape is pinned first.
static BIRTHDAY_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile birthday regex")
});

fn parse_birthday(value: &str) -> Option<NaiveDate> {
    if !BIRTHDAY_SHAPE_REGEX.is_match(value) {
        return None;
    }
    // Year 0 exists in chrono's proleptic calendar but is not a real year.
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Check whether `value` is a real calendar date written as `YYYY-MM-DD`.
///
/// ```
/// use contact_book::domain::is_valid_birthday;
///
/// assert!(is_valid_birthday("1990-05-20"));
/// assert!(!is_valid_birthday("2023-02-29"));
/// assert!(!is_valid_birthday("20-05-1990"));
/// ```
pub fn is_valid_birthday(value: &str) -> bool {
    parse_birthday(value).is_some()
}

/// A validated birthday.
///
/// The original string is kept verbatim next to the parsed date so that
/// `value()` always returns exactly what was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input has the wrong
    /// shape or names a date that does not exist (e.g. `2024-02-30`).
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let value = birthday.into();

        match parse_birthday(&value) {
            Some(date) => Ok(Self { value, date }),
            None => Err(ValidationError::InvalidBirthday(value)),
        }
    }

    /// Get the birthday as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day() - 1))
    }

    /// The first occurrence of this birthday on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.in_year(today.year())?;
        if this_year < today {
            self.in_year(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Whole days from `today` until the next occurrence; 0 when it is today.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today).map(|next| (next - today).num_days())
    }
}

impl Field for Birthday {
    const LABEL: &'static str = "birthday";

    fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Birthday {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Birthday {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
