use super::*;
use records::rest;
use records::vehicle::Vehicle;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const BASE: &str = "http://127.0.0.1:8000/api";

fn client(token: Option<&str>) -> ApiClient {
    ApiClient::new(BASE, token.map(ToOwned::to_owned)).expect("client")
}

#[test]
fn blank_token_counts_as_missing() {
    let api = client(Some("   "));
    assert!(matches!(api.require_token(), Err(CliError::MissingToken)));
    assert!(client(Some("abc")).require_token().is_ok());
}

#[test]
fn build_joins_path_and_attaches_bearer() {
    let request = client(Some("abc")).build(&rest::get::<Vehicle>(7)).expect("build");
    assert_eq!(request.method(), reqwest::Method::GET);
    assert_eq!(request.url().as_str(), "http://127.0.0.1:8000/api/vehicles/7");
    let auth = request.headers().get(reqwest::header::AUTHORIZATION).expect("auth header");
    assert_eq!(auth.to_str().expect("ascii"), "Bearer abc");
}

#[test]
fn build_without_token_sends_no_authorization() {
    let request = client(None).build(&rest::list::<Vehicle>()).expect("build");
    assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
}

#[test]
fn build_encodes_json_body() {
    let api_request = records::feedback::generate_otp("09171234567").expect("request");
    let request = client(None).build(&api_request).expect("build");
    assert_eq!(request.method(), reqwest::Method::POST);
    let content_type = request.headers().get(reqwest::header::CONTENT_TYPE).expect("content type");
    assert_eq!(content_type.to_str().expect("ascii"), "application/json");
    let bytes = request.body().and_then(reqwest::Body::as_bytes).expect("buffered body");
    let sent: Value = serde_json::from_slice(bytes).expect("json");
    assert_eq!(sent, serde_json::json!({ "phone_number": "09171234567" }));
}

#[test]
fn build_sends_multipart_for_uploads() {
    let api_request = ApiRequest {
        method: Method::Post,
        path: "/fuel-logs".to_owned(),
        body: Body::Multipart(vec![
            FormPart::text("fuel_type", "Diesel"),
            FormPart::file("fuel_receipt", "receipt.jpg", vec![1, 2, 3]),
        ]),
    };
    let request = client(Some("abc")).build(&api_request).expect("build");
    let content_type = request.headers().get(reqwest::header::CONTENT_TYPE).expect("content type");
    assert!(content_type.to_str().expect("ascii").starts_with("multipart/form-data; boundary="));
}

/// Serve exactly one canned HTTP response on a local port.
async fn one_shot_server(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = vec![0_u8; 4096];
        let mut seen = Vec::new();
        while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("read");
            if n == 0 {
                break;
            }
            seen.extend_from_slice(&buf[..n]);
        }
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
    });
    format!("http://{addr}/api")
}

#[tokio::test]
async fn execute_reports_status_and_body_on_failure() {
    let base = one_shot_server(
        "HTTP/1.1 401 Unauthorized\r\ncontent-length: 4\r\nconnection: close\r\n\r\nnope",
    )
    .await;
    let api = ApiClient::new(base, Some("stale".to_owned())).expect("client");
    let err = api.execute(&rest::list::<Vehicle>()).await.expect_err("401");
    assert!(err.is_unauthorized());
    assert!(matches!(err, CliError::Status { status: 401, ref body } if body == "nope"));
}

#[tokio::test]
async fn execute_treats_empty_body_as_null() {
    let base = one_shot_server("HTTP/1.1 204 No Content\r\nconnection: close\r\n\r\n").await;
    let api = ApiClient::new(base, Some("abc".to_owned())).expect("client");
    let value = api.execute(&rest::delete::<Vehicle>(3)).await.expect("ok");
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn fetch_decodes_json_body() {
    let base = one_shot_server(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 2\r\nconnection: close\r\n\r\n[]",
    )
    .await;
    let api = ApiClient::new(base, Some("abc".to_owned())).expect("client");
    let vehicles: Vec<Vehicle> = api.fetch(&rest::list::<Vehicle>()).await.expect("ok");
    assert!(vehicles.is_empty());
}

#[test]
fn or_empty_swallows_failures() {
    let failed: Result<Vec<i64>, CliError> = Err(CliError::MissingToken);
    assert!(or_empty("vehicles", failed).is_empty());
    assert_eq!(or_empty("vehicles", Ok(vec![1, 2])), vec![1, 2]);
}
