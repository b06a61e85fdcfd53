use super::*;

#[derive(Debug, PartialEq)]
struct Row {
    name: &'static str,
    kind: &'static str,
}

fn rows() -> Vec<Row> {
    vec![
        Row { name: "Alpha Bus", kind: "ordinary" },
        Row { name: "beta bus", kind: "aircon" },
        Row { name: "Gamma", kind: "ordinary" },
        Row { name: "Delta BUS", kind: "aircon" },
        Row { name: "Epsilon", kind: "ordinary" },
    ]
}

fn by_name(case: MatchCase) -> Matcher<Row> {
    Matcher::new(|r: &Row| r.name.to_owned(), case).with_category(|r: &Row| r.kind.to_owned())
}

fn names(view: &PageView<'_, Row>) -> Vec<&'static str> {
    view.items.iter().map(|r| r.name).collect()
}

// =============================================================
// Search
// =============================================================

#[test]
fn insensitive_search_matches_any_case() {
    let items = rows();
    let mut query = Query::new(10);
    query.set_search("bus");
    let found = filter(&items, &query, &by_name(MatchCase::Insensitive));
    assert_eq!(found.len(), 3);
}

#[test]
fn sensitive_search_matches_exact_case_only() {
    let items = rows();
    let mut query = Query::new(10);
    query.set_search("Bus");
    let found: Vec<_> = filter(&items, &query, &by_name(MatchCase::Sensitive)).into_iter().map(|r| r.name).collect();
    assert_eq!(found, vec!["Alpha Bus"]);
}

#[test]
fn filtered_records_always_contain_the_term() {
    let items = rows();
    let matcher = by_name(MatchCase::Insensitive);
    for term in ["a", "bus", "ps", "ETA", "zzz", ""] {
        let mut query = Query::new(10);
        query.set_search(term);
        for row in filter(&items, &query, &matcher) {
            assert!(row.name.to_lowercase().contains(&term.to_lowercase()), "{} lacks {term}", row.name);
        }
    }
}

#[test]
fn empty_search_matches_everything() {
    let items = rows();
    let found = filter(&items, &Query::new(10), &by_name(MatchCase::Sensitive));
    assert_eq!(found.len(), items.len());
}

#[test]
fn category_filter_is_exact() {
    let items = rows();
    let mut query = Query::new(10);
    query.set_category(Some("aircon".to_owned()));
    let found: Vec<_> = filter(&items, &query, &by_name(MatchCase::Insensitive)).into_iter().map(|r| r.name).collect();
    assert_eq!(found, vec!["beta bus", "Delta BUS"]);

    query.set_category(Some("air".to_owned()));
    assert!(filter(&items, &query, &by_name(MatchCase::Insensitive)).is_empty());
}

#[test]
fn empty_category_string_clears_filter() {
    let mut query = Query::new(10);
    query.set_category(Some(String::new()));
    assert_eq!(query.category, None);
}

#[test]
fn category_ignored_without_category_field() {
    let items = rows();
    let matcher = Matcher::new(|r: &Row| r.name.to_owned(), MatchCase::Insensitive);
    let mut query = Query::new(10);
    query.set_category(Some("aircon".to_owned()));
    assert_eq!(filter(&items, &query, &matcher).len(), items.len());
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn total_pages_is_ceiling_division() {
    assert_eq!(total_pages(0, 4), 0);
    assert_eq!(total_pages(4, 4), 1);
    assert_eq!(total_pages(5, 4), 2);
    assert_eq!(total_pages(9, 4), 3);
    assert_eq!(total_pages(3, 0), 3);
}

#[test]
fn five_records_four_per_page_split_four_and_one() {
    let items = rows();
    let matcher = by_name(MatchCase::Insensitive);
    let mut query = Query::new(4);

    let first = view(&items, &query, &matcher);
    assert_eq!(first.items.len(), 4);
    assert_eq!(first.controls.total_pages, 2);

    query.go_to(2);
    let second = view(&items, &query, &matcher);
    assert_eq!(names(&second), vec!["Epsilon"]);
}

#[test]
fn paginate_past_end_is_empty() {
    assert!(paginate(&[1, 2, 3], 3, 2).is_empty());
    assert_eq!(paginate(&[1, 2, 3], 0, 2), vec![1, 2]);
}

#[test]
fn narrowing_search_keeps_page_and_can_yield_empty_page() {
    let items = rows();
    let matcher = by_name(MatchCase::Insensitive);
    let mut query = Query::new(2);
    query.go_to(3);
    assert_eq!(names(&view(&items, &query, &matcher)), vec!["Epsilon"]);

    query.set_search("bus");
    assert_eq!(query.page, 3);
    let narrowed = view(&items, &query, &matcher);
    assert!(narrowed.items.is_empty());
    assert_eq!(narrowed.filtered_count, 3);
    assert_eq!(narrowed.controls.total_pages, 2);
}

#[test]
fn zero_page_size_treated_as_one() {
    let items = rows();
    let mut query = Query::new(0);
    assert_eq!(query.page_size, 1);
    query.page_size = 0;
    let page = view(&items, &query, &by_name(MatchCase::Insensitive));
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.controls.total_pages, 5);
}

// =============================================================
// PageControls
// =============================================================

#[test]
fn controls_disable_first_and_prev_on_first_page() {
    let controls = PageControls::new(10, 4, 1);
    assert!(controls.first_disabled);
    assert!(controls.prev_disabled);
    assert!(!controls.next_disabled);
    assert!(!controls.last_disabled);
    assert_eq!(controls.buttons().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(controls.next(), Some(2));
    assert_eq!(controls.prev(), None);
    assert_eq!(controls.last(), Some(3));
}

#[test]
fn controls_disable_next_and_last_on_last_page() {
    let controls = PageControls::new(10, 4, 3);
    assert!(!controls.first_disabled);
    assert!(!controls.prev_disabled);
    assert!(controls.next_disabled);
    assert!(controls.last_disabled);
    assert_eq!(controls.prev(), Some(2));
    assert_eq!(controls.next(), None);
}

#[test]
fn controls_single_page_disables_everything() {
    let controls = PageControls::new(3, 4, 1);
    assert!(controls.first_disabled && controls.prev_disabled);
    assert!(controls.next_disabled && controls.last_disabled);
    assert_eq!(controls.buttons().count(), 1);
}

#[test]
fn controls_with_no_records_render_no_buttons() {
    let controls = PageControls::new(0, 4, 1);
    assert_eq!(controls.total_pages, 0);
    assert_eq!(controls.buttons().count(), 0);
    assert!(controls.first_disabled && controls.prev_disabled);
    assert!(controls.next_disabled && controls.last_disabled);
}
