//! Passenger feedback and the phone OTP verification that precedes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::Resource;
use crate::{ApiRequest, Record, RecordId, RequestError};

pub const OTP_LENGTH: usize = 6;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackLog {
    pub id: RecordId,
    pub phone_number: String,
    pub vehicle_id: RecordId,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub phone_number: String,
    pub vehicle_id: RecordId,
    pub rating: u8,
    pub comment: String,
}

/// Body of a successful `otp/verify` call.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OtpVerification {
    #[serde(default = "default_verified")]
    pub verified: bool,
}

fn default_verified() -> bool {
    true
}

impl Record for FeedbackLog {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for FeedbackLog {
    const COLLECTION: &'static str = "/feedback-logs";
}

impl FeedbackLog {
    /// Star string for list display, e.g. `★★★☆☆`.
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(MAX_RATING));
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

/// `POST /feedback-logs`
///
/// # Errors
///
/// Returns an error if the draft fails to serialize.
pub fn create(draft: &FeedbackDraft) -> Result<ApiRequest, RequestError> {
    ApiRequest::post_json(FeedbackLog::COLLECTION, draft)
}

/// `POST /feedback-logs/otp/generate`
///
/// # Errors
///
/// Returns an error if the payload fails to serialize.
pub fn generate_otp(phone_number: &str) -> Result<ApiRequest, RequestError> {
    ApiRequest::post_json(
        format!("{}/otp/generate", FeedbackLog::COLLECTION),
        &serde_json::json!({ "phone_number": phone_number }),
    )
}

/// `POST /feedback-logs/otp/verify`
///
/// # Errors
///
/// Returns an error if the payload fails to serialize.
pub fn verify_otp(phone_number: &str, otp: &str) -> Result<ApiRequest, RequestError> {
    ApiRequest::post_json(
        format!("{}/otp/verify", FeedbackLog::COLLECTION),
        &serde_json::json!({ "phone_number": phone_number, "otp": otp }),
    )
}

/// Normalise a Philippine mobile number to local `09XXXXXXXXX` form.
///
/// Accepts `09XXXXXXXXX`, `+639XXXXXXXXX` and `639XXXXXXXXX`; spaces and
/// dashes are ignored. Returns `None` for anything else.
#[must_use]
pub fn normalize_phone(raw: &str) -> Option<String> {
    let compact: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let local = if let Some(rest) = digits.strip_prefix("63") {
        format!("0{rest}")
    } else {
        digits.to_owned()
    };
    (local.len() == 11 && local.starts_with("09")).then_some(local)
}

#[must_use]
pub fn is_valid_otp(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

#[must_use]
pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;
