use super::*;

#[test]
fn new_device_defaults_to_active_and_unassigned() {
    let form = DeviceForm { device_name: "GPS-7".to_owned(), serial_number: "SN-0007".to_owned(), ..DeviceForm::default() };
    let draft = form.validate().expect("valid");
    assert!(draft.is_active);
    assert_eq!(draft.vehicle_id, None);
}

#[test]
fn serial_number_is_required() {
    let form = DeviceForm { device_name: "GPS-7".to_owned(), ..DeviceForm::default() };
    assert_eq!(form.validate(), Err("Serial number is required."));
}

#[test]
fn from_record_keeps_vehicle_link() {
    let device = Device {
        id: 5,
        device_name: "GPS-7".to_owned(),
        serial_number: "SN-0007".to_owned(),
        vehicle_id: Some(3),
        is_active: false,
        last_seen: None,
    };
    let form = DeviceForm::from_record(&device);
    assert_eq!(form.vehicle_id, "3");
    assert!(!form.is_active);
    let draft = form.validate().expect("valid");
    let request = form.request(FormMode::Edit(5), &draft).expect("request");
    assert_eq!(request.path, "/devices/5");
    assert_eq!(request.json().map(|b| b["vehicle_id"].clone()), Some(serde_json::json!(3)));
}
