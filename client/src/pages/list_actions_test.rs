use super::*;

fn bus(id: RecordId, number: &str, plate: &str) -> Vehicle {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "vehicle_number": number,
        "plate_number": plate,
        "vehicle_type": "Coach",
        "seating_capacity": 45,
        "or_number": null,
        "or_date_issued": null,
        "cr_number": null,
        "cr_date_issued": null,
        "tpl_policy_number": null,
        "tpl_expiry_date": null,
        "ci_policy_number": null,
        "ci_expiry_date": null
    }))
    .expect("vehicle fixture")
}

#[test]
fn vehicle_choices_use_id_as_value() {
    let vehicles = vec![bus(3, "BUS-003", "ABC 123")];
    assert_eq!(vehicle_choices(&vehicles), vec![("3".to_owned(), "BUS-003 (ABC 123)".to_owned())]);
}

#[test]
fn vehicle_label_falls_back_to_hash_id() {
    let vehicles = vec![bus(3, "BUS-003", "ABC 123")];
    assert_eq!(vehicle_label(&vehicles, 3), "BUS-003 (ABC 123)");
    assert_eq!(vehicle_label(&vehicles, 9), "#9");
}

#[test]
fn or_empty_keeps_successful_fetch() {
    let fetched = or_empty("load vehicles", Ok(vec![bus(1, "BUS-001", "AAA 111")]));
    assert_eq!(fetched.len(), 1);
}

#[test]
fn or_empty_turns_failure_into_empty_collection() {
    let fetched: Vec<Vehicle> = or_empty("load vehicles", Err(ApiError::Unavailable));
    assert!(fetched.is_empty());
}
