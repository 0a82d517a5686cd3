pub mod analytics;
pub mod dashboard;
pub mod details;
pub mod entries;
pub mod gift_items;
pub mod manage;
pub mod offers;
pub mod upload_imei;

pub use dashboard::AdminDashboard;
pub use manage::ManageLuckyDraw;
