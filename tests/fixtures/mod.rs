//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable contacts and address books.

use chrono::NaiveDate;
use contact_book::{AddressBook, Phone, Record};

/// Build a phone number that is known to be valid.
pub fn phone(value: &str) -> Phone {
    Phone::new(value).expect("fixture phone must be valid")
}

/// Build a calendar date.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date must be valid")
}

/// Create a sample record with one phone number.
pub fn sample_record(name: &str, phone_number: &str) -> Record {
    Record::new(name).with_phone(phone(phone_number))
}

/// Create a sample record with a birthday and no phones.
#[allow(dead_code)]
pub fn sample_record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(name);
    record
        .set_birthday(Some(birthday))
        .expect("fixture birthday must be valid");
    record
}

/// Create a book holding `count` (at most 26) records named "A", "B", ...
///
/// Each record gets a distinct phone number derived from its position.
#[allow(dead_code)]
pub fn lettered_book(count: usize) -> AddressBook {
    (0..count)
        .map(|i| {
            let name = ((b'A' + i as u8) as char).to_string();
            sample_record(&name, &format!("+{:02}-{:03}-{:03}-{:03}", i, i, i, i))
        })
        .collect()
}
