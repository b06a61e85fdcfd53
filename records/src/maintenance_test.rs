use super::*;
use crate::{Body, Method};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn schedule(status: MaintenanceStatus) -> MaintenanceSchedule {
    MaintenanceSchedule {
        id: 5,
        vehicle_id: 2,
        maintenance_type: "Change oil".to_owned(),
        maintenance_date: day(2024, 3, 10),
        maintenance_cost: 3500.0,
        maintenance_address: "Pasig depot".to_owned(),
        status,
    }
}

#[test]
fn toggle_status_patches_action_path_without_body() {
    let request = toggle_status(5);
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.path, "/maintenance-scheduling/5/toggle-status");
    assert_eq!(request.body, Body::Empty);
}

#[test]
fn toggled_flips_between_pending_and_completed() {
    assert_eq!(MaintenanceStatus::Pending.toggled(), MaintenanceStatus::Completed);
    assert_eq!(MaintenanceStatus::Completed.toggled(), MaintenanceStatus::Pending);
}

#[test]
fn overdue_only_for_pending_past_dates() {
    assert!(schedule(MaintenanceStatus::Pending).is_overdue(day(2024, 3, 11)));
    assert!(!schedule(MaintenanceStatus::Pending).is_overdue(day(2024, 3, 10)));
    assert!(!schedule(MaintenanceStatus::Completed).is_overdue(day(2024, 4, 1)));
}

#[test]
fn schedule_decodes_iso_date() {
    let json = serde_json::json!({
        "id": 1,
        "vehicle_id": 3,
        "maintenance_type": "Brake check",
        "maintenance_date": "2024-05-02",
        "maintenance_cost": 1200.5,
        "status": "completed"
    });
    let decoded: MaintenanceSchedule = serde_json::from_value(json).expect("decode");
    assert_eq!(decoded.maintenance_date, day(2024, 5, 2));
    assert_eq!(decoded.status, MaintenanceStatus::Completed);
    assert_eq!(decoded.maintenance_address, "");
}
