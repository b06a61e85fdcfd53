use super::*;
use records::Method;

fn verified_flow() -> FeedbackFlow {
    let mut flow = FeedbackFlow { phone_input: "+63 917 123 4567".to_owned(), ..FeedbackFlow::default() };
    assert!(flow.request_otp().is_some());
    flow.otp_sent();
    flow.otp = "123456".to_owned();
    assert!(flow.verify().is_some());
    flow.verify_ok(&OtpVerification { verified: true });
    flow
}

// =============================================================
// Phone step
// =============================================================

#[test]
fn request_otp_normalises_phone_and_posts() {
    let mut flow = FeedbackFlow { phone_input: "0917-123-4567".to_owned(), ..FeedbackFlow::default() };
    let request = flow.request_otp().expect("request");
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/feedback-logs/otp/generate");
    assert_eq!(request.json(), Some(&serde_json::json!({ "phone_number": "09171234567" })));
    assert!(flow.busy);
}

#[test]
fn invalid_phone_stays_on_phone_step() {
    let mut flow = FeedbackFlow { phone_input: "12345".to_owned(), ..FeedbackFlow::default() };
    assert_eq!(flow.request_otp(), None);
    assert_eq!(flow.step, FeedbackStep::EnterPhone);
    assert!(flow.message.is_some());
    assert!(!flow.busy);
}

#[test]
fn no_second_request_while_busy() {
    let mut flow = FeedbackFlow { phone_input: "09171234567".to_owned(), ..FeedbackFlow::default() };
    assert!(flow.request_otp().is_some());
    assert_eq!(flow.request_otp(), None);
}

#[test]
fn generate_failure_keeps_step() {
    let mut flow = FeedbackFlow { phone_input: "09171234567".to_owned(), ..FeedbackFlow::default() };
    assert!(flow.request_otp().is_some());
    flow.failed("Something went wrong. Please try again.");
    assert_eq!(flow.step, FeedbackStep::EnterPhone);
    assert!(!flow.busy);
}

// =============================================================
// OTP step
// =============================================================

#[test]
fn verify_requires_six_digits() {
    let mut flow = FeedbackFlow { phone_input: "09171234567".to_owned(), ..FeedbackFlow::default() };
    assert!(flow.request_otp().is_some());
    flow.otp_sent();
    assert_eq!(flow.step, FeedbackStep::AwaitingOtp);
    flow.otp = "12a456".to_owned();
    assert_eq!(flow.verify(), None);
    assert_eq!(flow.message.as_deref(), Some("Enter the 6-digit code."));
}

#[test]
fn verify_posts_phone_and_code() {
    let mut flow = FeedbackFlow { phone_input: "09171234567".to_owned(), ..FeedbackFlow::default() };
    assert!(flow.request_otp().is_some());
    flow.otp_sent();
    flow.otp = " 654321 ".to_owned();
    let request = flow.verify().expect("request");
    assert_eq!(request.path, "/feedback-logs/otp/verify");
    assert_eq!(request.json(), Some(&serde_json::json!({ "phone_number": "09171234567", "otp": "654321" })));
}

#[test]
fn rejected_code_stays_awaiting() {
    let mut flow = FeedbackFlow { phone_input: "09171234567".to_owned(), ..FeedbackFlow::default() };
    assert!(flow.request_otp().is_some());
    flow.otp_sent();
    flow.otp = "000000".to_owned();
    assert!(flow.verify().is_some());
    flow.verify_ok(&OtpVerification { verified: false });
    assert_eq!(flow.step, FeedbackStep::AwaitingOtp);
    assert!(!flow.busy);
}

#[test]
fn failed_resend_keeps_the_number_that_received_a_code() {
    let mut flow = FeedbackFlow { phone_input: "09171234567".to_owned(), ..FeedbackFlow::default() };
    assert!(flow.request_otp().is_some());
    flow.otp_sent();
    flow.phone_input = "09998887777".to_owned();
    assert!(flow.request_otp().is_some());
    assert_eq!(flow.phone_number.as_deref(), Some("09171234567"));
    flow.failed("Something went wrong. Please try again.");
    flow.otp = "654321".to_owned();
    let request = flow.verify().expect("request");
    assert_eq!(request.json(), Some(&serde_json::json!({ "phone_number": "09171234567", "otp": "654321" })));
}

#[test]
fn successful_resend_switches_to_the_new_number() {
    let mut flow = FeedbackFlow { phone_input: "09171234567".to_owned(), ..FeedbackFlow::default() };
    assert!(flow.request_otp().is_some());
    flow.otp_sent();
    flow.phone_input = "09998887777".to_owned();
    assert!(flow.request_otp().is_some());
    flow.otp_sent();
    assert_eq!(flow.phone_number.as_deref(), Some("09998887777"));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_before_verification_yields_nothing() {
    let mut flow = FeedbackFlow { vehicle_id: "3".to_owned(), ..FeedbackFlow::default() };
    assert_eq!(flow.submit(), None);
}

#[test]
fn verified_submit_posts_feedback() {
    let mut flow = verified_flow();
    assert_eq!(flow.step, FeedbackStep::Verified);
    flow.vehicle_id = "3".to_owned();
    flow.rating = 4;
    flow.comment = "  Clean bus, polite PAO. ".to_owned();
    let request = flow.submit().expect("request");
    assert_eq!(request.path, "/feedback-logs");
    assert_eq!(
        request.json(),
        Some(&serde_json::json!({
            "phone_number": "09171234567",
            "vehicle_id": 3,
            "rating": 4,
            "comment": "Clean bus, polite PAO."
        }))
    );
    flow.submit_ok();
    assert_eq!(flow.step, FeedbackStep::Submitted);
}

#[test]
fn out_of_range_rating_is_rejected() {
    let mut flow = verified_flow();
    flow.vehicle_id = "3".to_owned();
    flow.rating = 0;
    assert_eq!(flow.submit(), None);
    assert_eq!(flow.step, FeedbackStep::Verified);
}

#[test]
fn restart_returns_to_phone_step() {
    let mut flow = verified_flow();
    flow.restart();
    assert_eq!(flow.step, FeedbackStep::EnterPhone);
    assert_eq!(flow.phone_number, None);
}
