use serde::Deserialize;
use shared::gift_catalog::Gift;

/// Standard paginated list envelope used by every backend list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paginated<T> {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LuckyDraw {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub redeem_condition: String,
    #[serde(default)]
    pub terms_and_conditions: String,
    #[serde(default)]
    pub how_to_participate: String,
    #[serde(default)]
    pub background_image: String,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub main_offer_stamp_image: String,
    #[serde(default)]
    pub qr: String,
    #[serde(rename = "type", default)]
    pub draw_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MobilePhoneOffer {
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub daily_quantity: u32,
    pub type_of_offer: String,
    pub offer_condition_value: String,
    pub gift: Gift,
    #[serde(default)]
    pub priority: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RechargeCardOffer {
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub daily_quantity: u32,
    pub type_of_offer: String,
    pub offer_condition_value: String,
    pub amount: u32,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomerEntry {
    pub id: i64,
    pub customer_name: String,
    pub phone_number: String,
    pub imei: String,
    #[serde(default)]
    pub date_of_purchase: String,
    #[serde(default)]
    pub prize: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_entries: u32,
    #[serde(default)]
    pub total_winners: u32,
    #[serde(default)]
    pub entries_today: u32,
    #[serde(default)]
    pub gifts_remaining: u32,
}
