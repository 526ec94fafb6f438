//! Paged traversal over an address book.

use crate::models::Record;
use std::iter::FusedIterator;

/// A lazy, forward-only sequence of pages over an [`AddressBook`].
///
/// Each page holds up to `page_size` records in insertion order; only the
/// last page may be shorter. The iterator borrows the book, so the book
/// cannot change while a traversal is in progress.
///
/// [`AddressBook`]: crate::book::AddressBook
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: indexmap::map::Values<'a, String, Record>,
    page_size: usize,
}

impl<'a> Pages<'a> {
    /// A `page_size` of 0 is treated as 1.
    pub(crate) fn new(
        records: indexmap::map::Values<'a, String, Record>,
        page_size: usize,
    ) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<&'a Record> = self.records.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            return None;
        }
        tracing::trace!(len = page.len(), "Emitting page");
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.records.len().div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
