use iced::{Element, Theme};

// IMPORTANT: Keep app.rs thin. View composition lives in ui_shell.rs.
#[path = "ui_shell.rs"]
mod ui_shell;

// --- RE-EXPORTS (Facade) ---
pub use crate::state::AppState;
pub use crate::messages::{
    Message,
    GalleryMessage,
    DetailMessage,
    TeamMessage,
};

pub const APP_NAME: &str = "Character Gallery";

pub fn app_theme(_state: &AppState) -> Theme {
    Theme::Dark
}

// --- VIEW FACADE ---
pub fn view(state: &AppState) -> Element<'_, Message> {
    ui_shell::view(state)
}
