pub mod avatar;
pub mod ui;
