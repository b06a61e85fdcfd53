use super::*;

#[test]
fn dashboard_link_matches_root_only() {
    assert!(is_active_link("/", "/"));
    assert!(!is_active_link("/", "/vehicles"));
}

#[test]
fn section_link_matches_nested_paths() {
    assert!(is_active_link("/feedback", "/feedback"));
    assert!(is_active_link("/feedback", "/feedback/submit"));
    assert!(!is_active_link("/feedback", "/feedbacks"));
}

#[test]
fn nav_links_are_unique() {
    for (i, (href, _)) in NAV_LINKS.iter().enumerate() {
        assert!(NAV_LINKS.iter().skip(i + 1).all(|(other, _)| other != href), "duplicate {href}");
    }
}
