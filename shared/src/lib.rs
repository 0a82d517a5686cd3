pub mod constants;
pub mod entry;
pub mod gift_catalog;
pub mod reveal;
pub mod spin_outcome;
pub mod validation;
pub mod wheel_geometry;
