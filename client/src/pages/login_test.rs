use super::*;

#[test]
fn validate_credentials_trims_username_only() {
    let credentials = validate_credentials("  admin  ", " secret ").expect("valid");
    assert_eq!(credentials.username, "admin");
    assert_eq!(credentials.password, " secret ");
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_credentials("admin", ""), Err("Enter both username and password."));
}

#[test]
fn unauthorized_login_reports_bad_credentials() {
    let err = ApiError::Status { status: 401, body: String::new() };
    assert_eq!(login_error_message(&err), "Invalid username or password.");
}

#[test]
fn other_login_failures_use_generic_banner() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(login_error_message(&err), err.banner());
}
