use super::*;
use crate::profile::{PersonnelStatus, Position};
use crate::vehicle::VehicleStatus;

fn vehicle(id: RecordId, number: &str, plate: &str) -> Vehicle {
    Vehicle {
        id,
        vehicle_number: number.to_owned(),
        plate_number: plate.to_owned(),
        vehicle_type: "Ordinary".to_owned(),
        seating_capacity: 50,
        route: String::new(),
        status: VehicleStatus::Active,
        or_number: None,
        or_date_issued: None,
        cr_number: None,
        cr_date_issued: None,
        tpl_policy_number: None,
        tpl_expiry_date: None,
        ci_policy_number: None,
        ci_expiry_date: None,
    }
}

fn person(id: RecordId, first: &str, last: &str, position: Position) -> UserProfile {
    UserProfile {
        id,
        first_name: first.to_owned(),
        middle_name: None,
        last_name: last.to_owned(),
        position,
        contact_number: String::new(),
        address: String::new(),
        date_of_birth: None,
        license_number: None,
        date_hired: None,
        status: PersonnelStatus::Active,
    }
}

fn assignment(id: RecordId, vehicle_id: RecordId, crew: &[RecordId]) -> VehicleAssignment {
    VehicleAssignment { id, vehicle_id, user_profile_ids: crew.to_vec(), assigned_at: None }
}

#[test]
fn resolve_rows_joins_vehicle_and_crew_labels() {
    let rows = resolve_rows(
        &[assignment(1, 10, &[100, 101])],
        &[vehicle(10, "BUS-010", "AAA 111")],
        &[person(100, "Ana", "Reyes", Position::Driver), person(101, "Ben", "Cruz", Position::Pao)],
    );

    assert_eq!(
        rows,
        vec![AssignmentRow {
            id: 1,
            vehicle_id: 10,
            vehicle: "BUS-010 (AAA 111)".to_owned(),
            crew: vec!["Ana Reyes".to_owned(), "Ben Cruz".to_owned()],
        }]
    );
    assert_eq!(rows[0].crew_label(), "Ana Reyes, Ben Cruz");
}

#[test]
fn resolve_rows_falls_back_to_ids_when_lookups_fail() {
    let rows = resolve_rows(&[assignment(2, 20, &[200])], &[], &[]);
    assert_eq!(rows[0].vehicle, "#20");
    assert_eq!(rows[0].crew, vec!["#200".to_owned()]);
}

#[test]
fn crew_label_placeholder_when_empty() {
    let rows = resolve_rows(&[assignment(3, 30, &[])], &[], &[]);
    assert_eq!(rows[0].crew_label(), "—");
}

#[test]
fn assignment_draft_serializes_profile_ids() {
    let draft = assignment(4, 40, &[1, 2]).draft();
    let json = serde_json::to_value(&draft).expect("encode");
    assert_eq!(json, serde_json::json!({ "vehicle_id": 40, "user_profile_ids": [1, 2] }));
}
