//! Create/edit form models, one per editable resource.
//!
//! DESIGN
//! ======
//! A form holds raw input strings exactly as typed. `validate` turns them
//! into the resource's draft (or one message for the first problem found)
//! and `request` wraps that draft in the single API call for the current
//! mode. Parsing lives here so the modal state machine stays generic.


pub mod assignment;
pub mod device;
pub mod fuel_log;
pub mod maintenance;
pub mod profile;
pub mod vehicle;

use std::str::FromStr;

use chrono::NaiveDate;
use records::rest::{self, Editable};
use records::{ApiRequest, Record, RecordId, RequestError};
use serde::de::DeserializeOwned;

/// Whether the modal creates a record or edits an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(RecordId),
}

/// Uncommitted form state for one resource.
pub trait RecordForm: Clone + Default + Send + Sync + 'static {
    type Record: Record + DeserializeOwned + Clone + Send + Sync + 'static;
    type Draft;

    /// Prefill from an existing record for editing.
    fn from_record(record: &Self::Record) -> Self;

    /// Parse and check required fields.
    ///
    /// # Errors
    ///
    /// Returns a single user-facing message for the first invalid field.
    fn validate(&self) -> Result<Self::Draft, &'static str>;

    /// The one request that persists `draft` in `mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload fails to serialize.
    fn request(&self, mode: FormMode, draft: &Self::Draft) -> Result<ApiRequest, RequestError>;
}

/// JSON `POST` for create, JSON `PATCH` for edit.
///
/// # Errors
///
/// Returns an error if the draft fails to serialize.
pub fn editable_request<R: Editable>(mode: FormMode, draft: &R::Draft) -> Result<ApiRequest, RequestError> {
    match mode {
        FormMode::Create => rest::create::<R>(draft),
        FormMode::Edit(id) => rest::update::<R>(id, draft),
    }
}

pub(crate) fn required(value: &str, message: &'static str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(message) } else { Ok(trimmed.to_owned()) }
}

pub(crate) fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

pub(crate) fn parse_required<T: FromStr>(value: &str, message: &'static str) -> Result<T, &'static str> {
    value.trim().parse().map_err(|_| message)
}

pub(crate) fn parse_optional<T: FromStr>(value: &str, message: &'static str) -> Result<Option<T>, &'static str> {
    match optional_text(value) {
        None => Ok(None),
        Some(text) => text.parse().map(Some).map_err(|_| message),
    }
}

pub(crate) fn parse_date(value: &str, message: &'static str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| message)
}

pub(crate) fn parse_optional_date(value: &str, message: &'static str) -> Result<Option<NaiveDate>, &'static str> {
    match optional_text(value) {
        None => Ok(None),
        Some(text) => parse_date(&text, message).map(Some),
    }
}

/// Render an optional value back into an input string.
pub(crate) fn show<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
