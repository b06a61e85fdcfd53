use super::*;

fn bus(id: RecordId, plate: &str, status: &str) -> Vehicle {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "vehicle_number": format!("BUS-{id:03}"),
        "plate_number": plate,
        "vehicle_type": "Coach",
        "seating_capacity": 45,
        "status": status,
    }))
    .expect("vehicle fixture")
}

#[test]
fn plate_search_ignores_case() {
    let matcher = matcher();
    let vehicle = bus(1, "ABC 123", "active");
    assert!(matcher.matches_search(&vehicle, "abc"));
    assert!(!matcher.matches_search(&vehicle, "xyz"));
}

#[test]
fn status_filter_matches_wire_value() {
    let mut list = ListState::new(PAGE_SIZE);
    list.replace_all(vec![bus(1, "ABC 123", "active"), bus(2, "DEF 456", "under_maintenance")]);
    list.set_category(Some("under_maintenance".to_owned()));
    let visible = list.visible(&matcher());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 2);
}

#[test]
fn status_options_cover_every_status() {
    assert_eq!(status_options().len(), VehicleStatus::ALL.len());
    assert_eq!(status_options()[2], ("inactive", "Inactive"));
}
