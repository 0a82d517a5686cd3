pub const CUSTOMER_ENTRY_ENDPOINT: &str = "/api/offers/customers/";
pub const GIFT_LIST_ENDPOINT: &str = "/api/offers/get-gift-list/";
pub const GIFT_ITEMS_ENDPOINT: &str = "/api/offers/gift-items/";
pub const LUCKY_DRAW_SYSTEMS_ENDPOINT: &str = "/api/offers/lucky-draw-systems/";
pub const MOBILE_OFFERS_ENDPOINT: &str = "/api/offers/mobile-phone-offers/";
pub const RECHARGE_OFFERS_ENDPOINT: &str = "/api/offers/recharge-card-offers/";
pub const CUSTOMER_LIST_ENDPOINT: &str = "/api/offers/customer-list/";
pub const IMEI_UPLOAD_ENDPOINT: &str = "/api/offers/upload-imei/";
pub const ANALYTICS_ENDPOINT: &str = "/api/offers/analytics/";

pub const NO_WIN_GIFT_NAME: &str = "Better Luck";
pub const NO_WIN_GIFT_IMAGE: &str = "/betterlucknexttime.png";

pub const INVALID_PHONE_ERROR: &str = "Contact number must be at least 10 digits";
pub const INVALID_IMEI_ERROR: &str = "IMEI must be 15 to 17 digits";
pub const NETWORK_ERROR: &str = "Network error. Please try again";

pub const IMEI_MIN_LENGTH: usize = 15;
pub const IMEI_MAX_LENGTH: usize = 17;
pub const PHONE_MIN_LENGTH: usize = 10;

/// Answer options for the "how did you hear about us" field. "Other"
/// switches the form to a free-text input.
pub const CAMPAIGN_SOURCES: &[&str] = &[
    "Social Media",
    "Radio",
    "Television",
    "Newspaper",
    "Shop Display",
    "Friends and Family",
    "Other",
];

pub const PROFESSIONS: &[&str] = &[
    "Student",
    "Business",
    "Agriculture",
    "Government Service",
    "Private Service",
    "Homemaker",
    "Other",
];

/// (city, region) pairs used by the sold-area select. The region is
/// derived from the chosen city before submission.
pub const CITIES: &[(&str, &str)] = &[
    ("Kathmandu", "Bagmati"),
    ("Lalitpur", "Bagmati"),
    ("Bhaktapur", "Bagmati"),
    ("Hetauda", "Bagmati"),
    ("Pokhara", "Gandaki"),
    ("Baglung", "Gandaki"),
    ("Butwal", "Lumbini"),
    ("Bhairahawa", "Lumbini"),
    ("Nepalgunj", "Lumbini"),
    ("Biratnagar", "Koshi"),
    ("Dharan", "Koshi"),
    ("Itahari", "Koshi"),
    ("Janakpur", "Madhesh"),
    ("Birgunj", "Madhesh"),
    ("Surkhet", "Karnali"),
    ("Dhangadhi", "Sudurpashchim"),
    ("Mahendranagar", "Sudurpashchim"),
];

pub fn region_for_city(city: &str) -> Option<&'static str> {
    CITIES
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, region)| *region)
}
