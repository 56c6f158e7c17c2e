// Reusable components live here.

pub mod error_notice;
pub mod listing_card;
pub mod loading_spinner;
pub mod navigation;
