//! Record model representing one contact in the book.

use crate::domain::{Birthday, Field, Name, Phone};
use crate::error::ValidationResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, zero or more phone numbers, and an optional birthday.
///
/// The name is fixed for the life of the record. Phone numbers keep their
/// insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Name the record is filed under
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    /// Birthday, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Add an initial phone number.
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    /// Set an initial birthday.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Look up a phone number by its string value.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) {
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
    }

    /// Remove the first occurrence of `phone`.
    ///
    /// Returns `false` and leaves the record untouched if `phone` is absent.
    pub fn remove_phone(&mut self, phone: &Phone) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                tracing::debug!(name = %self.name, phone = %phone, "Removed phone");
                true
            }
            None => false,
        }
    }

    /// Replace the first occurrence of `old` with `new`, in place.
    ///
    /// Returns `false` and leaves the record untouched if `old` is absent.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> bool {
        match self.phones.iter_mut().find(|p| **p == *old) {
            Some(slot) => {
                tracing::debug!(name = %self.name, old = %old, new = %new, "Edited phone");
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// The birthday string as it was supplied, if set.
    pub fn birthday(&self) -> Option<&str> {
        self.birthday.as_ref().map(|b| b.value())
    }

    /// The validated birthday, if set.
    pub fn birthday_field(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or clear the birthday.
    ///
    /// `None` clears it. A string is validated first; on error the previous
    /// birthday is left in place.
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> ValidationResult<()> {
        self.birthday = birthday.map(Birthday::new).transpose()?;
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from today (local time) until the next birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(chrono::Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; `None` without a birthday.
    ///
    /// A birthday that falls on `today` yields 0.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", {}", birthday.labeled())?;
        }
        Ok(())
    }
}
