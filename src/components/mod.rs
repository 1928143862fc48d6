pub mod last_modified;
pub mod profile_card;
pub mod ui;
