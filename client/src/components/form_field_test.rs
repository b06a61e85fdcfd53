use super::*;
use records::vehicle::VehicleStatus;

#[test]
fn choices_pairs_wire_value_with_label() {
    let built = choices(&VehicleStatus::ALL, VehicleStatus::as_str, VehicleStatus::label);
    assert_eq!(built[0], ("active".to_owned(), "Active".to_owned()));
    assert_eq!(built[1], ("under_maintenance".to_owned(), "Under Maintenance".to_owned()));
    assert_eq!(built.len(), 3);
}

#[test]
fn upload_caption_reports_size_in_kilobytes() {
    let upload = Upload { file_name: "receipt.jpg".to_owned(), bytes: vec![0; 1500] };
    assert_eq!(upload_caption(Some(&upload)), "receipt.jpg (2 KB)");
    assert_eq!(upload_caption(None), "No new file chosen");
}
