use super::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn profile(middle: Option<&str>) -> UserProfile {
    UserProfile {
        id: 11,
        first_name: "Juan".to_owned(),
        middle_name: middle.map(ToOwned::to_owned),
        last_name: "Dela Cruz".to_owned(),
        position: Position::Driver,
        contact_number: "09171234567".to_owned(),
        address: "Quezon City".to_owned(),
        date_of_birth: Some(day(2000, 6, 15)),
        license_number: Some("N01-23-456789".to_owned()),
        date_hired: Some(day(2021, 3, 1)),
        status: PersonnelStatus::Active,
    }
}

#[test]
fn age_counts_year_only_after_birthday() {
    let birth = day(2000, 6, 15);
    assert_eq!(age_on(birth, day(2024, 6, 14)), 23);
    assert_eq!(age_on(birth, day(2024, 6, 15)), 24);
    assert_eq!(age_on(birth, day(2024, 12, 31)), 24);
}

#[test]
fn age_for_leap_day_birthday_in_common_year() {
    let birth = day(2004, 2, 29);
    assert_eq!(age_on(birth, day(2023, 2, 28)), 18);
    assert_eq!(age_on(birth, day(2023, 3, 1)), 19);
    assert_eq!(age_on(birth, day(2024, 2, 29)), 20);
}

#[test]
fn age_is_zero_for_future_or_same_day_birth() {
    assert_eq!(age_on(day(2030, 1, 1), day(2024, 1, 1)), 0);
    assert_eq!(age_on(day(2024, 1, 1), day(2024, 1, 1)), 0);
}

#[test]
fn profile_age_requires_birth_date() {
    let mut p = profile(None);
    assert_eq!(p.age_on(day(2024, 6, 14)), Some(23));
    p.date_of_birth = None;
    assert_eq!(p.age_on(day(2024, 6, 14)), None);
}

#[test]
fn full_name_uses_middle_initial() {
    assert_eq!(profile(Some("Santos")).full_name(), "Juan S. Dela Cruz");
    assert_eq!(profile(None).full_name(), "Juan Dela Cruz");
    assert_eq!(profile(Some("  ")).full_name(), "Juan Dela Cruz");
}

#[test]
fn position_wire_names_and_crew_flag() {
    assert_eq!(serde_json::to_value(Position::Pao).expect("encode"), serde_json::json!("pao"));
    assert_eq!(Position::parse("driver"), Some(Position::Driver));
    assert_eq!(Position::parse("conductor"), None);
    assert!(Position::Pao.is_crew());
    assert!(!Position::Admin.is_crew());
}

#[test]
fn personnel_status_round_trips() {
    for status in PersonnelStatus::ALL {
        assert_eq!(PersonnelStatus::parse(status.as_str()), Some(status));
    }
}
