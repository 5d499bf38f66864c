use crate::model::Business;

/// Filters the collection by case-insensitive substring match against the
/// name, city and category fields. An empty search matches everything.
pub fn filter<'a>(records: &'a [Business], search: &str) -> Vec<&'a Business> {
    if search.is_empty() {
        return records.iter().collect();
    }
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| matches_lowered(record, &needle))
        .collect()
}

fn matches_lowered(record: &Business, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.city.to_lowercase().contains(needle)
        || record.category.label().to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn record(name: &str, city: &str, category: Category) -> Business {
        Business {
            business_id: None,
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
    fn empty_search_returns_collection_unchanged() {
        let records = vec![
            record("Joe's Cafe", "Springfield", Category::Restaurant),
            record("Acme Motors", "Dayton", Category::Automobile),
        ];
        let filtered = filter(&records, "");
        assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn matches_name_city_or_category_case_insensitively() {
        let records = vec![
            record("Joe's Cafe", "Springfield", Category::Restaurant),
            record("Acme Motors", "Dayton", Category::Automobile),
            record("Bitwise", "Omaha", Category::ItServices),
        ];
        let by_name = filter(&records, "ACME");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Acme Motors");

        let by_city = filter(&records, "spring");
        assert_eq!(by_city.len(), 1);
        assert_eq!(by_city[0].city, "Springfield");

        let by_category = filter(&records, "it serv");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].name, "Bitwise");
    }

    #[test]
    fn address_is_not_searched() {
        let records = vec![record("Joe's Cafe", "Springfield", Category::Restaurant)];
        assert!(filter(&records, "main st").is_empty());
    }
}
