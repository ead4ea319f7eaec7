//! Contact record aggregate.

use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at construction and serves as the directory key.
/// Phone numbers keep their insertion order and never contain duplicates.
/// Every mutation validates its raw input through the field constructors
/// first, so a failed call leaves the record exactly as it was. Each record
/// owns its own phone list; nothing is shared between records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

/// Persisted form of a record, keyed externally by contact name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordSnapshot {
    /// Digits-only phone values, insertion order preserved
    pub phones: Vec<PhoneNumber>,

    /// Canonical `YYYY-MM-DD` string, or null when unset
    pub birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create an empty record for `name`.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record from raw field values.
    ///
    /// Each input runs through its field constructor; the first invalid
    /// field fails the whole construction. A duplicate inside `phones`
    /// fails the same way a repeated [`add_phone`](Self::add_phone) would.
    pub fn from_raw(name: &str, phones: &[&str], birthday: Option<&str>) -> BookResult<Self> {
        let mut record = Self::new(Name::new(name)?);
        for phone in phones {
            record.add_phone(phone)?;
        }
        if let Some(raw) = birthday {
            record.set_birthday(raw)?;
        }
        Ok(record)
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicatePhone` if an equal phone is already
    /// present, or the validation error for a malformed number.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhone(phone.into_inner()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Validate `raw` and remove the matching phone.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no equal phone is present.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        let index = self
            .phones
            .iter()
            .position(|p| *p == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.as_str().to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `old` is absent, or
    /// `BookError::DuplicatePhone` if `new` is already present on a
    /// different slot.
    pub fn change_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let old = PhoneNumber::new(old)?;
        let new = PhoneNumber::new(new)?;
        let index = self
            .phones
            .iter()
            .position(|p| *p == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.as_str().to_string()))?;
        if new != old && self.phones.contains(&new) {
            return Err(BookError::DuplicatePhone(new.into_inner()));
        }
        self.phones[index] = new;
        Ok(())
    }

    /// Validate `raw` and assign it as the birthday, replacing any
    /// existing one.
    ///
    /// Whether an already-set birthday may be overwritten is the caller's
    /// policy; the record itself accepts any valid date.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Same as [`set_birthday`](Self::set_birthday); kept for the
    /// change-style command handlers.
    pub fn change_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.set_birthday(raw)
    }

    /// Days until the next birthday, counted from the current local date.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NoBirthday` if no birthday is set.
    pub fn days_to_next_birthday(&self) -> BookResult<i64> {
        self.days_to_next_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`.
    pub fn days_to_next_birthday_from(&self, today: NaiveDate) -> BookResult<i64> {
        let birthday = self
            .birthday
            .as_ref()
            .ok_or_else(|| BookError::NoBirthday(self.name.as_str().to_string()))?;
        Ok(birthday.days_until_next(today))
    }

    /// Flattened text used for substring search: name, phones, birthday.
    pub fn search_text(&self) -> String {
        let mut text = self.name.as_str().to_string();
        for phone in &self.phones {
            text.push(' ');
            text.push_str(phone.as_str());
        }
        if let Some(birthday) = &self.birthday {
            text.push(' ');
            text.push_str(birthday.as_str());
        }
        text
    }

    /// The persisted form of this record (name is the external key).
    pub fn to_snapshot(&self) -> RecordSnapshot {
        RecordSnapshot {
            phones: self.phones.clone(),
            birthday: self.birthday.clone(),
        }
    }

    /// Rebuild a record from its persisted form.
    ///
    /// Snapshot phones are already validated by their deserializer, but
    /// uniqueness is re-checked on the way in.
    pub fn from_snapshot(name: &str, snapshot: RecordSnapshot) -> BookResult<Self> {
        let mut record = Self::new(Name::new(name)?);
        for phone in snapshot.phones {
            if record.phones.contains(&phone) {
                return Err(BookError::DuplicatePhone(phone.into_inner()));
            }
            record.phones.push(phone);
        }
        record.birthday = snapshot.birthday;
        Ok(record)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        if self.phones.is_empty() {
            write!(f, " no phones")?;
        }
        for phone in &self.phones {
            write!(f, " {}", phone)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday {}", birthday)?;
        }
        Ok(())
    }
}
