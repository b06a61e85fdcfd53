use super::*;

fn summary() -> DashboardSummary {
    DashboardSummary {
        vehicles_total: 12,
        vehicles_active: 9,
        vehicles_in_maintenance: 2,
        drivers: 10,
        paos: 8,
        assignments: 7,
        maintenance_pending: 3,
        maintenance_overdue: 1,
        devices_online: 5,
        devices_total: 6,
        open_dispatches: 4,
        feedback_count: 20,
        average_rating: Some(4.3),
        insurance_alerts: Vec::new(),
        failed: Vec::new(),
    }
}

#[test]
fn stat_cards_follow_nav_order() {
    let hrefs: Vec<&str> = stat_cards(&summary()).iter().map(|c| c.href).collect();
    assert_eq!(hrefs, vec!["/vehicles", "/personnel", "/assignments", "/maintenance", "/devices", "/feedback"]);
}

#[test]
fn personnel_card_sums_crew_roles() {
    let cards = stat_cards(&summary());
    assert_eq!(cards[1].value, "18");
    assert_eq!(cards[1].detail, "10 drivers, 8 PAOs");
}

#[test]
fn device_and_feedback_cards_format_values() {
    let cards = stat_cards(&summary());
    assert_eq!(cards[4].value, "5/6");
    assert_eq!(cards[5].value, "4.3 / 5");
    assert_eq!(cards[5].detail, "from 20 responses");
}
