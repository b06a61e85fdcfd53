use super::*;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn row(id: RecordId, vehicle: &str, crew: &[&str]) -> AssignmentRow {
    AssignmentRow {
        id,
        vehicle_id: id,
        vehicle: vehicle.to_owned(),
        crew: crew.iter().map(|name| (*name).to_owned()).collect(),
    }
}

fn log(id: RecordId, assignment: RecordId, stamps: &[&str]) -> DispatchLog {
    let field = |i: usize| stamps.get(i).copied();
    serde_json::from_value(json!({
        "id": id,
        "vehicle_assignment_id": assignment,
        "alley_start": field(0),
        "alley_end": field(1),
        "trip_start": field(2),
        "trip_end": field(3),
    }))
    .expect("dispatch fixture")
}

const T: &str = "2024-06-01T06:00:00Z";

fn snapshot() -> Snapshot {
    Snapshot {
        assignments: vec![row(1, "BUS-001 (ABC 1234)", &["Juan Dela Cruz", "Maria Santos"]), row(2, "BUS-002 (XYZ 9999)", &[])],
        dispatch_logs: vec![log(10, 1, &[T, T, T, T]), log(11, 1, &[T, T]), log(12, 7, &[T])],
    }
}

#[test]
fn dispatch_rows_are_newest_first_with_labels() {
    let rows = snapshot().dispatch_rows();
    let ids: Vec<RecordId> = rows.iter().map(|r| r.log.id).collect();
    assert_eq!(ids, vec![12, 11, 10]);
    assert_eq!(rows[1].vehicle, "BUS-001 (ABC 1234)");
    assert_eq!(rows[1].phase, "Queued for trip");
    assert_eq!(rows[1].next_action, Some("Start trip"));
    assert_eq!(rows[2].phase, "Completed");
    assert_eq!(rows[2].next_action, None);
}

#[test]
fn overview_attaches_open_dispatch_only() {
    let overview = snapshot().overview();
    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].dispatch_id, Some(11));
    assert_eq!(overview[0].dispatch_phase, Some("Queued for trip"));
    assert_eq!(overview[0].crew_label, "Juan Dela Cruz, Maria Santos");
    assert_eq!(overview[1].dispatch_id, None);
    assert_eq!(overview[1].crew_label, "—");
}

const LIST_OK: &str =
    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 2\r\nconnection: close\r\n\r\n[]";
const UNAUTHORIZED: &str = "HTTP/1.1 401 Unauthorized\r\ncontent-length: 4\r\nconnection: close\r\n\r\nnope";

/// Answer every request with an empty list, except `failing`, which gets a 401.
async fn api_failing_on(failing: &'static str) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = vec![0_u8; 4096];
                let mut seen = Vec::new();
                while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => seen.extend_from_slice(&buf[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&seen);
                let path = head.split_whitespace().nth(1).unwrap_or_default();
                let response = if path.ends_with(failing) { UNAUTHORIZED } else { LIST_OK };
                socket.write_all(response.as_bytes()).await.ok();
                socket.shutdown().await.ok();
            });
        }
    });
    ApiClient::new(format!("http://{addr}/api"), Some("abc".to_owned())).expect("client")
}

#[tokio::test]
async fn failed_lookup_falls_back_to_empty() {
    let api = api_failing_on("/vehicles").await;
    let snapshot = Snapshot::fetch(&api, Required::Both).await.expect("lookups are optional");
    assert_eq!(snapshot, Snapshot::default());
}

#[tokio::test]
async fn failed_dispatch_logs_fail_dispatch_views() {
    let api = api_failing_on("/dispatch-logs").await;
    let err = Snapshot::fetch(&api, Required::DispatchLogs).await.expect_err("logs required");
    assert!(err.is_unauthorized());
    assert!(Snapshot::fetch(&api, Required::Assignments).await.is_ok());
}

#[tokio::test]
async fn failed_assignments_fail_assignment_views() {
    let api = api_failing_on("/vehicle-assignments").await;
    let err = Snapshot::fetch(&api, Required::Assignments).await.expect_err("assignments required");
    assert!(err.is_unauthorized());
    assert!(Snapshot::fetch(&api, Required::DispatchLogs).await.is_ok());
}
