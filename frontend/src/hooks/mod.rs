pub mod form_state;
pub mod use_lucky_draw;
pub mod use_reveal;

pub use form_state::use_form_state;
pub use use_lucky_draw::use_lucky_draw;
pub use use_reveal::use_reveal;
