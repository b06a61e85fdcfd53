//! Client-side search, category filter and pagination over an eagerly
//! fetched collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list screen in the dashboard (and every `list` command in the CLI)
//! runs the same three steps: filter by a substring on one field, optionally
//! narrow to one category, then slice out a 1-based page. The field and the
//! case rule are configured per list through a [`Matcher`].
//!
//! The current page is never adjusted when the search or category changes.
//! A page index past the filtered total yields an empty page.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Whether search matching folds case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchCase {
    Sensitive,
    #[default]
    Insensitive,
}

/// Which record fields a list searches and categorises by.
pub struct Matcher<T> {
    search_field: fn(&T) -> String,
    category_field: Option<fn(&T) -> String>,
    case: MatchCase,
}

impl<T> Matcher<T> {
    #[must_use]
    pub fn new(search_field: fn(&T) -> String, case: MatchCase) -> Self {
        Self { search_field, category_field: None, case }
    }

    #[must_use]
    pub fn with_category(mut self, category_field: fn(&T) -> String) -> Self {
        self.category_field = Some(category_field);
        self
    }

    #[must_use]
    pub fn case(&self) -> MatchCase {
        self.case
    }

    /// Substring test on the search field. An empty term matches everything.
    #[must_use]
    pub fn matches_search(&self, item: &T, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let haystack = (self.search_field)(item);
        match self.case {
            MatchCase::Sensitive => haystack.contains(term),
            MatchCase::Insensitive => haystack.to_lowercase().contains(&term.to_lowercase()),
        }
    }

    /// Exact test on the category field. `None`, or a matcher without a
    /// category field, matches everything.
    #[must_use]
    pub fn matches_category(&self, item: &T, category: Option<&str>) -> bool {
        match (category, self.category_field) {
            (Some(wanted), Some(field)) => field(item) == wanted,
            _ => true,
        }
    }
}

impl<T> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Matcher<T> {}

impl<T> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("case", &self.case)
            .field("has_category", &self.category_field.is_some())
            .finish_non_exhaustive()
    }
}

/// Search term, category and page position for one list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub search: String,
    pub category: Option<String>,
    /// 1-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl Query {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self { search: String::new(), category: None, page: 1, page_size: page_size.max(1) }
    }

    /// Replace the search term. Leaves `page` untouched.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Replace the category filter. Leaves `page` untouched.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.is_empty());
    }

    /// Jump to a page; 0 is treated as 1.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(10)
    }
}

/// `ceil(count / page_size)`, with a zero page size treated as 1.
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Page-button and navigation state for a pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current: usize,
    pub total_pages: usize,
    pub first_disabled: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub last_disabled: bool,
}

impl PageControls {
    #[must_use]
    pub fn new(count: usize, page_size: usize, current: usize) -> Self {
        let total = total_pages(count, page_size);
        let current = current.max(1);
        let at_start = current <= 1 || total == 0;
        let at_end = current >= total;
        Self {
            current,
            total_pages: total,
            first_disabled: at_start,
            prev_disabled: at_start,
            next_disabled: at_end,
            last_disabled: at_end,
        }
    }

    /// Page buttons to render, `1..=total_pages` (empty when there are no pages).
    #[must_use]
    pub fn buttons(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    #[must_use]
    pub fn prev(&self) -> Option<usize> {
        (!self.prev_disabled).then(|| self.current - 1)
    }

    #[must_use]
    pub fn next(&self) -> Option<usize> {
        (!self.next_disabled).then(|| self.current + 1)
    }

    #[must_use]
    pub fn last(&self) -> Option<usize> {
        (!self.last_disabled).then_some(self.total_pages)
    }
}

/// The records visible on the current page plus pagination state.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<'a, T> {
    pub items: Vec<&'a T>,
    pub filtered_count: usize,
    pub controls: PageControls,
}

/// Filter `items` by the query's search term and category.
#[must_use]
pub fn filter<'a, T>(items: &'a [T], query: &Query, matcher: &Matcher<T>) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matcher.matches_search(item, &query.search))
        .filter(|item| matcher.matches_category(item, query.category.as_deref()))
        .collect()
}

/// Slice one 1-based page out of `items`. Pages past the end are empty.
#[must_use]
pub fn paginate<T: Copy>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page_size = page_size.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).copied().collect()
}

/// Filter, then paginate.
#[must_use]
pub fn view<'a, T>(items: &'a [T], query: &Query, matcher: &Matcher<T>) -> PageView<'a, T> {
    let filtered = filter(items, query, matcher);
    let page_size = query.effective_page_size();
    PageView {
        items: paginate(&filtered, query.page, page_size),
        filtered_count: filtered.len(),
        controls: PageControls::new(filtered.len(), page_size, query.page),
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
