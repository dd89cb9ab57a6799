#![windows_subsystem = "windows"]

mod app;
mod catalog;
mod config;
mod controllers;
mod errors;
mod logger;
mod messages;
mod model;
mod pages;
mod roster;
mod state;
mod ui;

pub fn main() -> iced::Result {
    controllers::ui_controller::run()
}
