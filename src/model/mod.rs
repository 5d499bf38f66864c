use serde::{Deserialize, Serialize};

/// The closed set of business categories the directory accepts.
///
/// Serde renames carry the exact strings the remote API stores, so the
/// variants round-trip unchanged through the JSON payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "IT Services")]
    ItServices,
    Restaurant,
    Retail,
    Automobile,
    Healthcare,
    Finance,
    Education,
    #[serde(rename = "Real Estate")]
    RealEstate,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::ItServices,
        Category::Restaurant,
        Category::Retail,
        Category::Automobile,
        Category::Healthcare,
        Category::Finance,
        Category::Education,
        Category::RealEstate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::ItServices => "IT Services",
            Category::Restaurant => "Restaurant",
            Category::Retail => "Retail",
            Category::Automobile => "Automobile",
            Category::Healthcare => "Healthcare",
            Category::Finance => "Finance",
            Category::Education => "Education",
            Category::RealEstate => "Real Estate",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One directory listing as the remote store persists it.
///
/// `business_id` is assigned by the store and immutable afterwards; it is
/// never serialized on create. Optional fields map blank input to `None` so
/// they are omitted from the payload entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    #[serde(rename = "businessID", default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<i64>,
    pub name: String,
    pub category: Category,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Business {
        Business {
            business_id: Some(7),
            name: "Joe's Cafe".to_string(),
            category: Category::Restaurant,
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62704".to_string(),
            phone_number: "555-1234".to_string(),
            website: None,
            rating: None,
        }
    }

    #[test]
    fn serializes_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["businessID"], 7);
        assert_eq!(json["zipCode"], "62704");
        assert_eq!(json["phoneNumber"], "555-1234");
        assert_eq!(json["category"], "Restaurant");
    }

    #[test]
    fn create_payload_omits_unassigned_id_and_blank_optionals() {
        let mut record = sample();
        record.business_id = None;
        let json = serde_json::to_value(record).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("businessID"));
        assert!(!object.contains_key("website"));
        assert!(!object.contains_key("rating"));
    }

    #[test]
    fn category_round_trips_display_strings() {
        let json = serde_json::to_string(&Category::ItServices).unwrap();
        assert_eq!(json, "\"IT Services\"");
        let back: Category = serde_json::from_str("\"Real Estate\"").unwrap();
        assert_eq!(back, Category::RealEstate);
    }

    #[test]
    fn deserializes_record_missing_optionals() {
        let raw = r#"{
            "businessID": 3,
            "name": "Acme",
            "category": "Retail",
            "address": "9 Elm",
            "city": "Dayton",
            "state": "OH",
            "zipCode": "45402",
            "phoneNumber": "555-0000"
        }"#;
        let record: Business = serde_json::from_str(raw).unwrap();
        assert_eq!(record.business_id, Some(3));
        assert!(record.website.is_none());
        assert!(record.rating.is_none());
    }
}
