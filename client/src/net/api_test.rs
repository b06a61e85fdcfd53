use super::*;

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn api_base_url_defaults_to_local_api() {
    if option_env!("FLEET_API_BASE_URL").is_none() {
        assert_eq!(api_base_url(), DEFAULT_API_BASE_URL);
    }
}

#[test]
fn banner_is_generic_for_status_and_network_errors() {
    let status = ApiError::Status { status: 500, body: "boom".to_owned() };
    let network = ApiError::Network("offline".to_owned());
    assert_eq!(status.banner(), network.banner());
    assert!(!status.banner().contains("boom"));
}

#[test]
fn banner_flags_expired_session_on_401() {
    let err = ApiError::Status { status: 401, body: String::new() };
    assert!(err.is_unauthorized());
    assert_ne!(err.banner(), ApiError::Unavailable.banner());
}

#[test]
fn report_returns_banner_text() {
    let err = ApiError::Decode("missing field".to_owned());
    assert_eq!(report("vehicles", &err), err.banner());
}
