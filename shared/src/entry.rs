use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::spin_outcome::RawGift;
use crate::validation::{validate_imei, validate_phone_number};

/// The customer entry form as it is POSTed to the backend. Validated on
/// the client before submission; the backend revalidates and owns the
/// eligibility decision (IMEI allow-list, duplicates, draw window).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct CustomerEntryRequest {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(custom = "validate_phone_number")]
    pub phone_number: String,
    #[validate(email(message = "Invalid email"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Shop name is required"))]
    pub shop_name: String,
    #[validate(length(min = 1, message = "Sold area is required"))]
    pub sold_area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[validate(custom = "validate_imei")]
    pub imei: String,
    #[validate(length(min = 1, message = "This field is required"))]
    pub how_know_about_campaign: String,
    #[validate(length(min = 1, message = "Profession is required"))]
    pub profession: String,
    pub lucky_draw_system: i64,
}

/// Echo of the accepted entry, plus the prize assignment. The `gift`
/// field is the three-shaped payload handled by [`crate::spin_outcome`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub date_of_purchase: String,
    #[serde(default)]
    pub gift: RawGift,
    #[serde(default)]
    pub imei: String,
    #[serde(default)]
    pub phone_model: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub shop_name: String,
    #[serde(default)]
    pub sold_area: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::error_messages;

    fn valid_entry() -> CustomerEntryRequest {
        CustomerEntryRequest {
            customer_name: "Asha Shrestha".to_string(),
            phone_number: "9812345678".to_string(),
            email: None,
            shop_name: "City Mobile Center".to_string(),
            sold_area: "Kathmandu".to_string(),
            region: Some("Bagmati".to_string()),
            imei: "123456789012345".to_string(),
            how_know_about_campaign: "Radio".to_string(),
            profession: "Student".to_string(),
            lucky_draw_system: 3,
        }
    }

    #[test]
    fn test_valid_entry_passes() {
        assert!(valid_entry().validate().is_ok());
    }

    #[test]
    fn test_invalid_fields_are_reported_per_field() {
        let mut entry = valid_entry();
        entry.customer_name.clear();
        entry.imei = "123".to_string();
        entry.email = Some("not-an-email".to_string());

        let errors = entry.validate().unwrap_err();
        let messages = error_messages(&errors);
        assert_eq!(
            messages.get("customer_name").map(String::as_str),
            Some("Customer name is required")
        );
        assert_eq!(
            messages.get("imei").map(String::as_str),
            Some(crate::constants::INVALID_IMEI_ERROR)
        );
        assert_eq!(messages.get("email").map(String::as_str), Some("Invalid email"));
        assert!(!messages.contains_key("phone_number"));
    }

    #[test]
    fn test_submission_response_with_null_gift_parses() {
        let json = r#"{
            "customer_name": "Asha Shrestha",
            "date_of_purchase": "2024-10-02",
            "gift": null,
            "imei": "123456789012345",
            "phone_model": "A16",
            "phone_number": "9812345678",
            "shop_name": "City Mobile Center",
            "sold_area": "Kathmandu"
        }"#;
        let response: SubmissionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.gift, RawGift::Absent);
        assert_eq!(response.imei, "123456789012345");
    }
}
