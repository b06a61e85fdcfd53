use super::*;
use chrono::NaiveDate;

fn oil_change() -> MaintenanceForm {
    MaintenanceForm {
        vehicle_id: "4".to_owned(),
        maintenance_type: "Oil change".to_owned(),
        maintenance_date: "2024-07-01".to_owned(),
        maintenance_cost: "3500".to_owned(),
        maintenance_address: "Shop 2, EDSA".to_owned(),
        ..MaintenanceForm::default()
    }
}

#[test]
fn valid_form_defaults_to_pending() {
    let draft = oil_change().validate().expect("valid");
    assert_eq!(draft.status, MaintenanceStatus::Pending);
    assert_eq!(draft.maintenance_date, NaiveDate::from_ymd_opt(2024, 7, 1).expect("date"));
    assert!((draft.maintenance_cost - 3500.0).abs() < f64::EPSILON);
}

#[test]
fn negative_cost_is_rejected() {
    let form = MaintenanceForm { maintenance_cost: "-1".to_owned(), ..oil_change() };
    assert_eq!(form.validate(), Err("Cost must be a number."));
}

#[test]
fn missing_date_is_rejected() {
    let form = MaintenanceForm { maintenance_date: String::new(), ..oil_change() };
    assert_eq!(form.validate(), Err("Maintenance date must be YYYY-MM-DD."));
}

#[test]
fn create_posts_to_maintenance_scheduling() {
    let form = oil_change();
    let draft = form.validate().expect("valid");
    let request = form.request(FormMode::Create, &draft).expect("request");
    assert_eq!(request.path, "/maintenance-scheduling");
    assert_eq!(request.json().map(|b| b["maintenance_type"].clone()), Some(serde_json::json!("Oil change")));
}
