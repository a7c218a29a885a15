pub mod dialogue_card;
pub mod error_alert;
pub mod generate_panel;
pub mod header;
pub mod shared;
