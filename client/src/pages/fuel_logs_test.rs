use super::*;

fn log(id: RecordId, fuel_type: &str) -> FuelLog {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "vehicle_id": 1,
        "purchase_date": "2024-05-02",
        "odometer_km": 120_500.0,
        "fuel_type": fuel_type,
        "fuel_price": 58.5,
        "fuel_quantity": 40.0,
        "fuel_cost": 2340.0,
    }))
    .expect("fuel log fixture")
}

#[test]
fn fuel_type_search_is_case_sensitive() {
    let matcher = matcher();
    assert!(matcher.matches_search(&log(1, "Diesel"), "Die"));
    assert!(!matcher.matches_search(&log(1, "Diesel"), "diesel"));
}

#[test]
fn cost_preview_text_shows_rounded_total() {
    let form = FuelLogForm { fuel_price: "58.50".to_owned(), fuel_quantity: "40".to_owned(), ..FuelLogForm::default() };
    assert_eq!(cost_preview_text(&form), "Total: ₱2,340.00");
}

#[test]
fn cost_preview_text_prompts_until_both_numbers_parse() {
    let form = FuelLogForm { fuel_price: "58.50".to_owned(), ..FuelLogForm::default() };
    assert_eq!(cost_preview_text(&form), "Total: enter price and quantity");
}
