use super::*;
use chrono::NaiveDate;
use records::Method;

fn pao_form() -> ProfileForm {
    ProfileForm {
        first_name: "Maria".to_owned(),
        last_name: "Santos".to_owned(),
        position: "pao".to_owned(),
        contact_number: "09171234567".to_owned(),
        date_of_birth: "1990-02-28".to_owned(),
        ..ProfileForm::default()
    }
}

#[test]
fn pao_without_license_is_valid() {
    let draft = pao_form().validate().expect("valid");
    assert_eq!(draft.position, Position::Pao);
    assert_eq!(draft.license_number, None);
    assert_eq!(draft.middle_name, None);
    assert_eq!(draft.date_of_birth, NaiveDate::from_ymd_opt(1990, 2, 28));
}

#[test]
fn driver_requires_license() {
    let form = ProfileForm { position: "driver".to_owned(), ..pao_form() };
    assert_eq!(form.validate(), Err("Drivers need a license number."));

    let licensed = ProfileForm { license_number: "N01-23-456789".to_owned(), ..form };
    assert!(licensed.validate().is_ok());
}

#[test]
fn unknown_position_is_rejected() {
    let form = ProfileForm { position: "conductor".to_owned(), ..pao_form() };
    assert_eq!(form.validate(), Err("Choose a position."));
}

#[test]
fn create_posts_to_user_profiles() {
    let form = pao_form();
    let draft = form.validate().expect("valid");
    let request = form.request(FormMode::Create, &draft).expect("request");
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/user-profiles");
    assert_eq!(request.json().map(|b| b["position"].clone()), Some(serde_json::json!("pao")));
}
