//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for birthdays.
///
/// The stored value is the canonical ISO-8601 calendar date (`YYYY-MM-DD`),
/// validated and zero-padded at construction time.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1994-02-26").unwrap();
/// assert_eq!(birthday.as_str(), "1994-02-26");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(String);

impl Birthday {
    /// Create a new Birthday, validating that it parses as a real
    /// `YYYY-MM-DD` calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` echoing the raw input if
    /// the date cannot be parsed.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = birthday.into();
        match NaiveDate::parse_from_str(birthday.trim(), "%Y-%m-%d") {
            Ok(date) => Ok(Self(date.format("%Y-%m-%d").to_string())),
            Err(_) => Err(ValidationError::InvalidBirthday(birthday)),
        }
    }

    /// Get the canonical date string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        // SAFETY: Constructor stores the canonical form of a parsed date
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").expect("birthday validated as ISO date")
    }

    /// Number of days from `today` until the next occurrence of this
    /// birthday.
    ///
    /// Takes this year's occurrence of the month/day, or next year's if it
    /// has already passed. A Feb-29 birthday in a non-leap target year is
    /// counted as the day after that year's Feb-28.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        let born = self.date();
        let (mut occurrence, mut leap_shift) = Self::occurrence_in(today.year(), &born);
        if occurrence < today {
            let (next, shift) = Self::occurrence_in(today.year() + 1, &born);
            occurrence = next;
            leap_shift = shift;
        }
        (occurrence - today).num_days() + leap_shift
    }

    /// The birthday's occurrence in `year`, with the extra day to add when
    /// Feb-29 falls back to Feb-28.
    fn occurrence_in(year: i32, born: &NaiveDate) -> (NaiveDate, i64) {
        match NaiveDate::from_ymd_opt(year, born.month(), born.day()) {
            Some(date) => (date, 0),
            // Only Feb-29 can fail to exist in another year
            None => (
                NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year"),
                1,
            ),
        }
    }
}

// Value objects also compare against raw strings.
impl PartialEq<str> for Birthday {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Birthday {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
