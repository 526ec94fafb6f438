//! Address book: the keyed, ordered collection of contact records.

use super::pages::Pages;
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of records per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A collection of contact records keyed by name.
///
/// Records keep the order in which their name was first added. Every key
/// equals the name of the record stored under it.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Phone, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John").with_phone(Phone::new("+11-111-111-111").unwrap()));
/// book.add_record(Record::new("Jane"));
///
/// let pages: Vec<_> = book.iterator().collect();
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0][0].name().as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
    page_size: usize,
}

impl AddressBook {
    /// Create an empty book with the default page size.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the page size used by [`iterator`](Self::iterator).
    ///
    /// A page size of 0 is treated as 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Insert a record under its name.
    ///
    /// An existing record with the same name is replaced in full and
    /// returned; the new record takes over the old one's position.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.records.insert(key, record);
        match replaced {
            Some(_) => tracing::debug!(total = self.records.len(), "Replaced record"),
            None => tracing::debug!(total = self.records.len(), "Added record"),
        }
        replaced
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for editing its phones or birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// The remaining records keep their relative order. Missing names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            tracing::debug!(name = %name, total = self.records.len(), "Deleted record");
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Pages of records using the book's configured page size.
    pub fn iterator(&self) -> Pages<'_> {
        self.pages(self.page_size)
    }

    /// Pages of at most `page_size` records each, in insertion order.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages::new(self.records.values(), page_size)
    }

    /// Records whose next birthday is at most `within_days` days after
    /// `today`, soonest first. Ties keep insertion order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .values()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

// Serde support - serialize as an ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - rebuild keys from record names
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
