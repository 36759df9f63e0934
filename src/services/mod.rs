pub mod badge_service;
pub mod labeling;
pub mod reporting;
pub mod scanning;
