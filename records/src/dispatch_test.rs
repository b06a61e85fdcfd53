use super::*;
use crate::{Body, Method};
use chrono::TimeZone;

fn at(h: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, 6, 1, h, 0, 0).single()
}

fn log(id: RecordId, assignment: RecordId, stamps: [Option<DateTime<Utc>>; 4]) -> DispatchLog {
    let [alley_start, alley_end, trip_start, trip_end] = stamps;
    DispatchLog {
        id,
        vehicle_assignment_id: assignment,
        status: String::new(),
        alley_start,
        alley_end,
        trip_start,
        trip_end,
    }
}

#[test]
fn phase_follows_latest_timestamp() {
    assert_eq!(log(1, 1, [at(6), None, None, None]).phase(), DispatchPhase::InAlley);
    assert_eq!(log(1, 1, [at(6), at(7), None, None]).phase(), DispatchPhase::Queued);
    assert_eq!(log(1, 1, [at(6), at(7), at(7), None]).phase(), DispatchPhase::OnTrip);
    assert_eq!(log(1, 1, [at(6), at(7), at(7), at(9)]).phase(), DispatchPhase::Completed);
}

#[test]
fn next_action_walks_the_cycle() {
    assert_eq!(DispatchPhase::InAlley.next_action(), Some(DispatchAction::EndAlley));
    assert_eq!(DispatchPhase::Queued.next_action(), Some(DispatchAction::StartTrip));
    assert_eq!(DispatchPhase::OnTrip.next_action(), Some(DispatchAction::EndTrip));
    assert_eq!(DispatchPhase::Completed.next_action(), None);
}

#[test]
fn action_requests_patch_member_subpaths() {
    let request = DispatchAction::EndAlley.request(12);
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.path, "/dispatch-logs/12/end-alley");
    assert_eq!(request.body, Body::Empty);
    assert_eq!(DispatchAction::StartTrip.request(12).path, "/dispatch-logs/12/start-trip");
    assert_eq!(DispatchAction::EndTrip.request(12).path, "/dispatch-logs/12/end-trip");
}

#[test]
fn start_alley_posts_assignment_id() {
    let request = start_alley(7).expect("encode");
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/dispatch-logs/start-alley");
    assert_eq!(request.json(), Some(&serde_json::json!({ "vehicle_assignment_id": 7 })));
}

#[test]
fn open_log_for_ignores_completed_and_other_assignments() {
    let logs = vec![
        log(1, 5, [at(6), at(7), at(7), at(9)]),
        log(2, 5, [at(10), None, None, None]),
        log(3, 6, [at(10), None, None, None]),
    ];
    assert_eq!(open_log_for(&logs, 5).map(|l| l.id), Some(2));
    assert_eq!(open_log_for(&logs, 6).map(|l| l.id), Some(3));
    assert_eq!(open_log_for(&logs, 7), None);
}

fn assignment(id: RecordId, vehicle: &str) -> AssignmentRow {
    AssignmentRow { id, vehicle_id: id, vehicle: vehicle.to_owned(), crew: Vec::new() }
}

#[test]
fn dispatch_rows_label_vehicle_and_sort_newest_first() {
    let logs = vec![log(10, 1, [at(6), at(7), at(7), at(9)]), log(11, 1, [at(6), at(7), None, None]), log(12, 7, [at(8), None, None, None])];
    let rows = dispatch_rows(&logs, &[assignment(1, "BUS-001 (ABC 1234)")]);
    let ids: Vec<RecordId> = rows.iter().map(|r| r.log.id).collect();
    assert_eq!(ids, vec![12, 11, 10]);
    assert_eq!(rows[0].vehicle, "#7");
    assert_eq!(rows[0].phase, "In alley");
    assert_eq!(rows[1].vehicle, "BUS-001 (ABC 1234)");
    assert_eq!(rows[1].next_action, Some("Start trip"));
    assert_eq!(rows[2].phase, "Completed");
    assert_eq!(rows[2].next_action, None);
}

#[test]
fn dispatch_row_serializes_log_fields_inline() {
    let rows = dispatch_rows(&[log(11, 1, [at(6), at(7), None, None])], &[]);
    let value = serde_json::to_value(&rows[0]).expect("serialize");
    assert_eq!(value["id"], 11);
    assert_eq!(value["vehicle_assignment_id"], 1);
    assert_eq!(value["vehicle"], "#1");
    assert_eq!(value["phase"], "Queued for trip");
}
