use super::*;

fn sample_vehicle() -> Vehicle {
    Vehicle {
        id: 4,
        vehicle_number: "BUS-014".to_owned(),
        plate_number: "NBC 1234".to_owned(),
        vehicle_type: "Airconditioned".to_owned(),
        seating_capacity: 49,
        route: "Cubao - Baclaran".to_owned(),
        status: VehicleStatus::Active,
        or_number: Some("OR-77".to_owned()),
        or_date_issued: NaiveDate::from_ymd_opt(2024, 1, 10),
        cr_number: Some("CR-88".to_owned()),
        cr_date_issued: NaiveDate::from_ymd_opt(2024, 1, 10),
        tpl_policy_number: Some("TPL-1".to_owned()),
        tpl_expiry_date: NaiveDate::from_ymd_opt(2024, 7, 1),
        ci_policy_number: Some("CI-1".to_owned()),
        ci_expiry_date: NaiveDate::from_ymd_opt(2025, 1, 1),
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn status_round_trips_through_wire_names() {
    for status in VehicleStatus::ALL {
        assert_eq!(VehicleStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(VehicleStatus::parse("scrapped"), None);
}

#[test]
fn status_serializes_snake_case() {
    let json = serde_json::to_value(VehicleStatus::UnderMaintenance).expect("encode");
    assert_eq!(json, serde_json::json!("under_maintenance"));
}

#[test]
fn vehicle_deserializes_with_missing_optional_fields() {
    let json = serde_json::json!({
        "id": 1,
        "vehicle_number": "BUS-001",
        "plate_number": "ABC 123",
        "vehicle_type": "Ordinary",
        "seating_capacity": 60,
        "or_number": null,
        "or_date_issued": null,
        "cr_number": null,
        "cr_date_issued": null,
        "tpl_policy_number": null,
        "tpl_expiry_date": "2025-03-31",
        "ci_policy_number": null,
        "ci_expiry_date": null
    });
    let vehicle: Vehicle = serde_json::from_value(json).expect("decode");
    assert_eq!(vehicle.route, "");
    assert_eq!(vehicle.status, VehicleStatus::Active);
    assert_eq!(vehicle.tpl_expiry_date, Some(day(2025, 3, 31)));
}

#[test]
fn label_combines_unit_and_plate() {
    assert_eq!(sample_vehicle().label(), "BUS-014 (NBC 1234)");
}

#[test]
fn expiring_insurance_reports_policies_inside_horizon() {
    let vehicle = sample_vehicle();
    assert_eq!(vehicle.expiring_insurance(day(2024, 6, 1), 30), vec!["TPL"]);
    assert!(vehicle.expiring_insurance(day(2024, 5, 1), 30).is_empty());
    assert_eq!(vehicle.expiring_insurance(day(2025, 2, 1), 0), vec!["TPL", "CI"]);
}

#[test]
fn draft_copies_editable_fields() {
    let vehicle = sample_vehicle();
    let draft = vehicle.draft();
    assert_eq!(draft.plate_number, vehicle.plate_number);
    assert_eq!(draft.seating_capacity, 49);
    assert_eq!(draft.tpl_expiry_date, vehicle.tpl_expiry_date);
}
