use super::*;

fn entry(id: RecordId, phone: &str) -> FeedbackLog {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "phone_number": phone,
        "vehicle_id": 1,
        "rating": 4,
    }))
    .expect("feedback fixture")
}

fn five_entries() -> Vec<FeedbackLog> {
    (1..=5).map(|id| entry(id, &format!("0917000000{id}"))).collect()
}

#[test]
fn five_entries_split_four_then_one() {
    let mut list = ListState::new(PAGE_SIZE);
    list.replace_all(five_entries());
    let matcher = matcher();
    assert_eq!(list.visible(&matcher).len(), 4);
    list.go_to(2);
    let second: Vec<RecordId> = list.visible(&matcher).iter().map(|f| f.id).collect();
    assert_eq!(second, vec![5]);
    assert_eq!(list.controls(&matcher).total_pages, 2);
}

#[test]
fn phone_search_matches_substring() {
    let mut list = ListState::new(PAGE_SIZE);
    list.replace_all(five_entries());
    list.set_search("00003".to_owned());
    let ids: Vec<RecordId> = list.visible(&matcher()).iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn search_does_not_reset_page() {
    let mut list = ListState::new(PAGE_SIZE);
    list.replace_all(five_entries());
    list.go_to(2);
    list.set_search("00001".to_owned());
    assert_eq!(list.query.page, 2);
    assert!(list.visible(&matcher()).is_empty());
}

#[test]
fn comment_preview_keeps_short_first_line() {
    assert_eq!(comment_preview("Great driver\nwould ride again", 60), "Great driver");
    assert_eq!(comment_preview("", 60), "");
}

#[test]
fn comment_preview_truncates_long_line() {
    assert_eq!(comment_preview("The bus was very clean", 7), "The bus…");
}
