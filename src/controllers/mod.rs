pub mod ui_controller;
pub mod messages_controller;

pub mod gallery_controller;
pub mod detail_controller;
pub mod team_controller;
