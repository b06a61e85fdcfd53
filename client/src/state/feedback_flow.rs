//! Passenger feedback submission flow with phone OTP verification.
//!
//! DESIGN
//! ======
//! `EnterPhone -> AwaitingOtp -> Verified -> Submitted`. Each step exposes a
//! method that validates local input and returns the one request to send;
//! the page performs the call and reports back with the matching `*_ok` or
//! `failed` method. A failure never moves the step, and nothing is returned
//! while a call is in flight.

#[cfg(test)]
#[path = "feedback_flow_test.rs"]
mod feedback_flow_test;

use records::feedback::{self, FeedbackDraft, MAX_RATING, OTP_LENGTH, OtpVerification};
use records::{ApiRequest, RecordId};

use crate::forms::parse_required;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackStep {
    #[default]
    EnterPhone,
    AwaitingOtp,
    Verified,
    Submitted,
}

#[derive(Clone, Debug)]
pub struct FeedbackFlow {
    pub step: FeedbackStep,
    pub phone_input: String,
    /// Normalised number the OTP was sent to.
    pub phone_number: Option<String>,
    /// Number of the generate call in flight.
    pending_phone: Option<String>,
    pub otp: String,
    pub vehicle_id: String,
    pub rating: u8,
    pub comment: String,
    pub busy: bool,
    pub message: Option<String>,
}

impl Default for FeedbackFlow {
    fn default() -> Self {
        Self {
            step: FeedbackStep::EnterPhone,
            phone_input: String::new(),
            phone_number: None,
            pending_phone: None,
            otp: String::new(),
            vehicle_id: String::new(),
            rating: MAX_RATING,
            comment: String::new(),
            busy: false,
            message: None,
        }
    }
}

impl FeedbackFlow {
    fn reject(&mut self, message: &str) -> Option<ApiRequest> {
        self.message = Some(message.to_owned());
        None
    }

    fn dispatch(&mut self, request: Result<ApiRequest, records::RequestError>) -> Option<ApiRequest> {
        match request {
            Ok(request) => {
                self.busy = true;
                self.message = None;
                Some(request)
            }
            Err(e) => {
                log::warn!("feedback payload failed to encode: {e}");
                self.reject(GENERIC_ERROR)
            }
        }
    }

    /// Send (or resend) a code to the entered phone number.
    pub fn request_otp(&mut self) -> Option<ApiRequest> {
        if self.busy || !matches!(self.step, FeedbackStep::EnterPhone | FeedbackStep::AwaitingOtp) {
            return None;
        }
        let Some(phone) = feedback::normalize_phone(&self.phone_input) else {
            return self.reject("Enter a mobile number like 09171234567.");
        };
        let request = feedback::generate_otp(&phone);
        self.pending_phone = Some(phone);
        self.dispatch(request)
    }

    pub fn otp_sent(&mut self) {
        self.busy = false;
        if let Some(phone) = self.pending_phone.take() {
            self.phone_number = Some(phone);
        }
        self.otp.clear();
        self.step = FeedbackStep::AwaitingOtp;
        self.message = Some(format!("We sent a {OTP_LENGTH}-digit code to your phone."));
    }

    pub fn verify(&mut self) -> Option<ApiRequest> {
        if self.busy || self.step != FeedbackStep::AwaitingOtp {
            return None;
        }
        let code = self.otp.trim().to_owned();
        if !feedback::is_valid_otp(&code) {
            return self.reject("Enter the 6-digit code.");
        }
        let Some(phone) = self.phone_number.clone() else {
            return self.reject(GENERIC_ERROR);
        };
        let request = feedback::verify_otp(&phone, &code);
        self.dispatch(request)
    }

    pub fn verify_ok(&mut self, result: &OtpVerification) {
        self.busy = false;
        if result.verified {
            self.step = FeedbackStep::Verified;
            self.message = None;
        } else {
            self.message = Some("That code is not valid. Try again.".to_owned());
        }
    }

    /// Build the final feedback request.
    pub fn submit(&mut self) -> Option<ApiRequest> {
        if self.busy || self.step != FeedbackStep::Verified {
            return None;
        }
        let vehicle_id: RecordId = match parse_required(&self.vehicle_id, "Choose the bus you rode.") {
            Ok(id) => id,
            Err(message) => return self.reject(message),
        };
        if !feedback::is_valid_rating(self.rating) {
            return self.reject("Pick a rating from 1 to 5.");
        }
        let comment = self.comment.trim().to_owned();
        let Some(phone_number) = self.phone_number.clone() else {
            return self.reject(GENERIC_ERROR);
        };
        let draft = FeedbackDraft { phone_number, vehicle_id, rating: self.rating, comment };
        let request = feedback::create(&draft);
        self.dispatch(request)
    }

    pub fn submit_ok(&mut self) {
        self.busy = false;
        self.step = FeedbackStep::Submitted;
        self.message = Some("Thank you for your feedback!".to_owned());
    }

    /// A call failed: stay on the current step with `banner`.
    pub fn failed(&mut self, banner: &str) {
        self.busy = false;
        self.pending_phone = None;
        self.message = Some(banner.to_owned());
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }
}

const GENERIC_ERROR: &str = "Something went wrong. Please try again.";
