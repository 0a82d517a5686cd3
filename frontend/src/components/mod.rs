pub mod confetti;
pub mod form_controls;
pub mod header;
pub mod result_modal;
pub mod spin_wheel;
pub mod submission_result;

pub use confetti::Confetti;
pub use form_controls::{SelectField, TextField};
pub use header::Header;
pub use result_modal::ResultModal;
pub use spin_wheel::SpinWheel;
pub use submission_result::SubmissionResult;
