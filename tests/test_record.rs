//! Integration tests for contact records.

mod fixtures;

use contact_book::{Record, ValidationError};
use fixtures::*;

#[test]
fn test_phone_lifecycle() {
    let mut record = sample_record("John", "+11-111-111-111");
    record.add_phone(phone("+22-222-222-222"));

    assert!(record.edit_phone(&phone("+22-222-222-222"), phone("+33-333-333-333")));
    assert!(record.find_phone("+33-333-333-333").is_some());
    assert!(record.find_phone("+22-222-222-222").is_none());

    assert!(record.remove_phone(&phone("+11-111-111-111")));
    assert_eq!(record.phones().len(), 1);
    assert_eq!(record.phones()[0].as_str(), "+33-333-333-333");
}

#[test]
fn test_edit_absent_phone_leaves_sequence_unchanged() {
    let mut record = sample_record("John", "+11-111-111-111");
    record.add_phone(phone("+22-222-222-222"));
    let before = record.phones().to_vec();

    assert!(!record.edit_phone(&phone("+44-444-444-444"), phone("+55-555-555-555")));
    assert_eq!(record.phones(), before.as_slice());
}

#[test]
fn test_edit_phone_replaces_first_duplicate_only() {
    let mut record = sample_record("John", "+11-111-111-111");
    record.add_phone(phone("+11-111-111-111"));

    record.edit_phone(&phone("+11-111-111-111"), phone("+22-222-222-222"));
    let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(values, vec!["+22-222-222-222", "+11-111-111-111"]);
}

#[test]
fn test_birthday_setter_validates() {
    let mut record = Record::new("John");
    assert!(matches!(
        record.set_birthday(Some("1990-02-30")),
        Err(ValidationError::InvalidBirthday(_))
    ));
    assert!(record.birthday().is_none());

    record.set_birthday(Some("1990-05-20")).unwrap();
    assert_eq!(record.birthday(), Some("1990-05-20"));

    record.clear_birthday();
    assert!(record.birthday().is_none());
}

#[test]
fn test_birthday_setter_rejects_year_zero() {
    let mut record = Record::new("John");
    assert!(matches!(
        record.set_birthday(Some("0000-02-29")),
        Err(ValidationError::InvalidBirthday(_))
    ));
    assert!(record.birthday().is_none());
    assert_eq!(record.days_to_birthday(), None);
}

#[test]
fn test_days_to_birthday_on_birthday_is_zero() {
    let record = sample_record_with_birthday("John", "1990-05-20");
    assert_eq!(record.days_to_birthday_from(date(2030, 5, 20)), Some(0));
}

#[test]
fn test_days_to_birthday_after_birthday_uses_next_year() {
    let record = sample_record_with_birthday("John", "1990-05-20");
    assert_eq!(record.days_to_birthday_from(date(2030, 5, 19)), Some(1));
    assert_eq!(record.days_to_birthday_from(date(2030, 5, 21)), Some(364));
}

#[test]
fn test_days_to_birthday_today_matches_local_date() {
    let today = chrono::Local::now().date_naive();
    let record = sample_record_with_birthday("John", &today.format("%Y-%m-%d").to_string());
    // The date can roll over between the two clock reads.
    let days = record.days_to_birthday().unwrap();
    assert!(days == 0 || days >= 364, "unexpected day count {}", days);
}

#[test]
fn test_days_to_birthday_without_birthday() {
    let record = Record::new("John");
    assert_eq!(record.days_to_birthday(), None);
}
