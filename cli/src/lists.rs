//! Search, category and paging for list commands.
//!
//! The CLI fetches a whole collection and narrows it locally with the same
//! `listing` rules the dashboard uses, so `--search` behaves identically in
//! both places (including which lists are case-sensitive).

#[cfg(test)]
#[path = "lists_test.rs"]
mod lists_test;

use clap::Args;
use listing::{MatchCase, Matcher, Query};
use records::assignment::AssignmentRow;
use records::device::Device;
use records::dispatch::DispatchRow;
use records::feedback::FeedbackLog;
use records::fuel_log::FuelLog;
use records::maintenance::MaintenanceSchedule;
use records::profile::UserProfile;
use records::vehicle::Vehicle;
use serde::Serialize;

use crate::error::CliError;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const FEEDBACK_PAGE_SIZE: usize = 4;

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Substring to look for in the list's search column.
    #[arg(long)]
    pub search: Option<String>,

    /// Exact category value: a status, a position or a dispatch phase label.
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page; each list has its own default.
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ListArgs {
    #[must_use]
    pub fn query(&self, default_page_size: usize) -> Query {
        let mut query = Query::new(self.page_size.unwrap_or(default_page_size));
        query.set_search(self.search.clone().unwrap_or_default());
        query.set_category(self.category.clone());
        query.go_to(self.page);
        query
    }
}

/// One printed page of a list command.
#[derive(Debug, Serialize)]
pub struct ListPage<'a, T> {
    pub items: Vec<&'a T>,
    pub page: usize,
    pub total_pages: usize,
    pub matched: usize,
    pub total: usize,
}

#[must_use]
pub fn page<'a, T>(items: &'a [T], query: &Query, matcher: &Matcher<T>) -> ListPage<'a, T> {
    let view = listing::view(items, query, matcher);
    ListPage {
        items: view.items,
        page: view.controls.current,
        total_pages: view.controls.total_pages,
        matched: view.filtered_count,
        total: items.len(),
    }
}

/// # Errors
///
/// Returns an error if the page fails to serialize.
pub fn print_page<T: Serialize>(items: &[T], args: &ListArgs, default_page_size: usize, matcher: &Matcher<T>) -> Result<(), CliError> {
    print_json(&page(items, &args.query(default_page_size), matcher))
}

/// # Errors
///
/// Returns an error if `value` fails to serialize.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[must_use]
pub fn vehicles() -> Matcher<Vehicle> {
    Matcher::new(|v: &Vehicle| v.plate_number.clone(), MatchCase::Insensitive).with_category(|v| v.status.as_str().to_owned())
}

#[must_use]
pub fn profiles() -> Matcher<UserProfile> {
    Matcher::new(UserProfile::full_name, MatchCase::Insensitive).with_category(|p| p.position.as_str().to_owned())
}

#[must_use]
pub fn assignments() -> Matcher<AssignmentRow> {
    Matcher::new(|row| row.vehicle.clone(), MatchCase::Sensitive)
}

#[must_use]
pub fn maintenance() -> Matcher<MaintenanceSchedule> {
    Matcher::new(|m: &MaintenanceSchedule| m.maintenance_type.clone(), MatchCase::Insensitive).with_category(|m| m.status.as_str().to_owned())
}

#[must_use]
pub fn fuel_logs() -> Matcher<FuelLog> {
    Matcher::new(|log| log.fuel_type.clone(), MatchCase::Sensitive)
}

#[must_use]
pub fn devices() -> Matcher<Device> {
    Matcher::new(|d| d.device_name.clone(), MatchCase::Insensitive)
}

#[must_use]
pub fn feedback() -> Matcher<FeedbackLog> {
    Matcher::new(|f| f.phone_number.clone(), MatchCase::Sensitive)
}

#[must_use]
pub fn dispatch() -> Matcher<DispatchRow> {
    Matcher::new(|row: &DispatchRow| row.vehicle.clone(), MatchCase::Insensitive).with_category(|row| row.phase.to_owned())
}
