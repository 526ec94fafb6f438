//! The contact collection.
//!
//! [`AddressBook`] maps contact names to [`Record`](crate::models::Record)s in
//! insertion order and hands them out page by page through [`Pages`].

pub mod address_book;
pub mod pages;

pub use address_book::{AddressBook, DEFAULT_PAGE_SIZE};
pub use pages::Pages;
