pub mod header;
pub mod gallery;
pub mod detail;
pub mod team;

// --- RE-EXPORTS ---
pub use header::header;
pub use gallery::gallery_page;
pub use detail::detail_panel;
pub use team::team_panel;

pub type E<'a> = iced::Element<'a, crate::messages::Message>;
