//! Contact Book - a small personal contact-book data model.
//!
//! Contacts are stored as [`Record`]s holding a name, validated phone numbers
//! and an optional validated birthday. An [`AddressBook`] keys records by name
//! and hands them out page by page.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (`Name`, `Phone`, `Birthday`) and validators
//! - **models**: The `Record` contact model
//! - **book**: The `AddressBook` collection and its `Pages` iterator
//! - **error**: Error types
//! - **config**: Configuration from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Pages};
pub use config::Config;
pub use domain::{is_valid_birthday, is_valid_phone, Birthday, Field, Name, Phone};
pub use error::{ConfigError, ValidationError};
pub use models::Record;
