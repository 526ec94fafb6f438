//! Domain value objects and types.
//!
//! This module contains the validated field types a contact is made of:
//! names, phone numbers, and birthdays. Phone numbers and birthdays are
//! checked at construction time, so an invalid value can never be
//! represented in a [`Record`](crate::models::Record).

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{is_valid_birthday, Birthday};
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{is_valid_phone, Phone};
