//! Data models for the contact book.
//!
//! A [`Record`] is one contact: a name, its phone numbers, and an optional
//! birthday, all built from the validated types in [`crate::domain`].

pub mod record;

pub use record::Record;
