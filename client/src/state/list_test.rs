use super::*;
use listing::MatchCase;

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: RecordId,
    name: &'static str,
}

impl Record for Item {
    fn id(&self) -> RecordId {
        self.id
    }
}

fn item(id: RecordId, name: &'static str) -> Item {
    Item { id, name }
}

fn matcher() -> Matcher<Item> {
    Matcher::new(|i: &Item| i.name.to_owned(), MatchCase::Insensitive)
}

fn seeded(page_size: usize) -> ListState<Item> {
    let mut state = ListState::new(page_size);
    state.replace_all(vec![item(1, "one"), item(2, "two"), item(3, "three"), item(4, "four"), item(5, "five")]);
    state
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn begin_fetch_sets_loading_and_clears_error() {
    let mut state: ListState<Item> = ListState::new(4);
    state.error = Some("old".to_owned());
    state.begin_fetch();
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn apply_fetch_success_replaces_items() {
    let mut state = seeded(4);
    state.begin_fetch();
    state.apply_fetch("items", Ok(vec![item(9, "nine")]));
    assert!(!state.loading);
    assert_eq!(state.items, vec![item(9, "nine")]);
}

#[test]
fn apply_fetch_failure_keeps_stale_items_and_sets_banner() {
    let mut state = seeded(4);
    state.begin_fetch();
    state.apply_fetch("items", Err(ApiError::Network("offline".to_owned())));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 5);
    let banner = state.error.expect("banner");
    assert!(!banner.contains("offline"));
}

// =============================================================
// Merge
// =============================================================

#[test]
fn upsert_replaces_matching_id() {
    let mut state = seeded(4);
    state.upsert(item(2, "TWO"));
    assert_eq!(state.items.len(), 5);
    assert_eq!(state.find(2).map(|i| i.name), Some("TWO"));
}

#[test]
fn upsert_appends_new_id() {
    let mut state = seeded(4);
    state.upsert(item(6, "six"));
    assert_eq!(state.items.last(), Some(&item(6, "six")));
}

#[test]
fn remove_drops_by_id() {
    let mut state = seeded(4);
    state.remove(3);
    assert_eq!(state.find(3), None);
    assert_eq!(state.items.len(), 4);
}

// =============================================================
// View
// =============================================================

#[test]
fn visible_slices_filtered_page() {
    let mut state = seeded(4);
    assert_eq!(state.visible(&matcher()).len(), 4);
    state.go_to(2);
    assert_eq!(state.visible(&matcher()), vec![item(5, "five")]);
}

#[test]
fn search_change_keeps_current_page() {
    let mut state = seeded(2);
    state.go_to(3);
    state.set_search("f".to_owned());
    assert_eq!(state.query.page, 3);
    assert!(state.visible(&matcher()).is_empty());
    assert_eq!(state.controls(&matcher()).total_pages, 1);
}
