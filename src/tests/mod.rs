use crate::listing::{filter, paging, Listing};
use crate::model::{Business, Category};
use crate::tui::form::FormState;

fn record(id: i64, name: &str, city: &str, category: Category) -> Business {
    Business {
        business_id: Some(id),
        name: name.to_string(),
        category,
        address: "1 Main St".to_string(),
        city: city.to_string(),
        state: "IL".to_string(),
        zip_code: "62704".to_string(),
        phone_number: "555-1234".to_string(),
        website: None,
        rating: None,
    }
}

#[test]
fn filtered_result_is_exactly_the_matching_subset() {
    let records: Vec<Business> = (0..10)
        .map(|i| {
            let category = if i % 2 == 0 {
                Category::Restaurant
            } else {
                Category::Finance
            };
            record(i, &format!("biz-{i}"), "Springfield", category)
        })
        .collect();

    let filtered = filter::filter(&records, "restaurant");
    assert_eq!(filtered.len(), 5);
    assert!(filtered
        .iter()
        .all(|r| r.category == Category::Restaurant));

    let all = filter::filter(&records, "");
    assert_eq!(all.len(), records.len());
}

#[test]
fn search_composes_with_paging_through_the_listing() {
    let mut listing = Listing::new(10);
    let mut records: Vec<Business> = (0..25)
        .map(|i| record(i, &format!("cafe-{i}"), "Springfield", Category::Restaurant))
        .collect();
    records.extend((25..40).map(|i| record(i, &format!("shop-{i}"), "Dayton", Category::Retail)));
    listing.set_records(records);

    let view = listing.page_view();
    assert_eq!(view.total_records, 40);
    assert_eq!(view.total_pages, 4);
    assert_eq!(view.records.len(), 10);

    listing.goto_page(4);
    listing.set_search("cafe");
    let view = listing.page_view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_records, 25);
    assert_eq!(view.total_pages, 3);
    assert!(view.records.iter().all(|r| r.name.starts_with("cafe-")));
}

#[test]
fn page_math_matches_ceiling_division() {
    for total in 0..50 {
        let window = paging::page_window(total, 10, 1);
        let expected = (total + 9) / 10;
        assert_eq!(window.total_pages, expected, "total={total}");
    }
}

#[test]
fn update_payload_round_trips_through_the_wire_shape() {
    let mut form = FormState::edit(&record(7, "Joe's Cafe", "Springfield", Category::Restaurant));
    form.city = "Chatham".to_string();
    let edited = form.build_record().unwrap();

    let json = serde_json::to_value(&edited).unwrap();
    assert_eq!(json["businessID"], 7);
    assert_eq!(json["city"], "Chatham");
    assert_eq!(json["category"], "Restaurant");

    let back: Business = serde_json::from_value(json).unwrap();
    assert_eq!(back, edited);
}

#[test]
fn create_draft_never_carries_an_id() {
    let mut form = FormState::create();
    form.name = "Joe's Cafe".to_string();
    form.category = Some(1);
    form.address = "1 Main St".to_string();
    form.city = "Springfield".to_string();
    form.state = "IL".to_string();
    form.zip_code = "62704".to_string();
    form.phone_number = "555-1234".to_string();

    let draft = form.build_record().unwrap();
    assert!(draft.business_id.is_none());
    let json = serde_json::to_value(&draft).unwrap();
    assert!(!json.as_object().unwrap().contains_key("businessID"));
}

#[test]
fn list_response_decodes_like_the_remote_store_sends_it() {
    let raw = r#"[
        {"businessID": 1, "name": "Joe's Cafe", "category": "Restaurant",
         "address": "1 Main St", "city": "Springfield", "state": "IL",
         "zipCode": "62704", "phoneNumber": "555-1234",
         "website": "https://joes.example", "rating": 4.5},
        {"businessID": 2, "name": "Bitwise", "category": "IT Services",
         "address": "2 Oak Ave", "city": "Omaha", "state": "NE",
         "zipCode": "68102", "phoneNumber": "555-9876"}
    ]"#;
    let records: Vec<Business> = serde_json::from_str(raw).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].rating, Some(4.5));
    assert_eq!(records[1].category, Category::ItServices);
    assert!(records[1].website.is_none());
}
