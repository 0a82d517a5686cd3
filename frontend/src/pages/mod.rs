pub mod admin;
pub mod enter;
pub mod home;
pub mod not_found;
pub mod offer;
