//! Reactive state behind every record list page.
//!
//! DESIGN
//! ======
//! One generic `ListState<T>` replaces a per-page copy of the
//! fetch -> filter -> paginate -> merge cycle. Filtering and page maths are
//! delegated to `listing`; this type only adds the fetched collection, the
//! loading flag, the error banner and the merge operations used after a
//! successful mutation.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use listing::{Matcher, PageControls, Query};
use records::{Record, RecordId};

use crate::net::api::{self, ApiError};

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub query: Query,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), query: Query::default(), loading: false, error: None }
    }
}

impl<T: Record + Clone> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self { items: Vec::new(), query: Query::new(page_size), loading: false, error: None }
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetch result. A failure keeps the previous items and sets the
    /// banner.
    pub fn apply_fetch(&mut self, context: &str, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.replace_all(items),
            Err(e) => self.error = Some(api::report(context, &e)),
        }
    }

    /// Merge by full refetch.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.error = None;
    }

    /// Merge by local splice: replace the record with the same id or append.
    pub fn upsert(&mut self, record: T) {
        match self.items.iter_mut().find(|item| item.id() == record.id()) {
            Some(slot) => *slot = record,
            None => self.items.push(record),
        }
    }

    pub fn remove(&mut self, id: RecordId) {
        self.items.retain(|item| item.id() != id);
    }

    pub fn find(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn set_search(&mut self, term: String) {
        self.query.set_search(term);
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.query.set_category(category);
    }

    pub fn go_to(&mut self, page: usize) {
        self.query.go_to(page);
    }

    /// Records on the current page after filtering.
    pub fn visible(&self, matcher: &Matcher<T>) -> Vec<T> {
        listing::view(&self.items, &self.query, matcher).items.into_iter().cloned().collect()
    }

    pub fn controls(&self, matcher: &Matcher<T>) -> PageControls {
        listing::view(&self.items, &self.query, matcher).controls
    }
}
