// Design tokens + helpers de widgets compartidos por ui_shell y pages.

use std::path::Path;

use iced::widget::{button, container, image, text};
use iced::{Background, Border, Color, Element, Length, Theme};

use crate::messages::Message;

#[derive(Debug, Clone, Copy)]
pub struct Tokens {
    pub background: Color,
    pub shell_a: Color,
    pub shell_b: Color,
    pub foreground: Color,
    pub muted_fg: Color,
    pub accent: Color,
    pub danger: Color,
    pub success: Color,
}

impl Tokens {
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x12, 0x13, 0x1a),
            shell_a: Color::from_rgb8(0x1a, 0x1c, 0x26),
            shell_b: Color::from_rgb8(0x22, 0x25, 0x33),
            foreground: Color::from_rgb8(0xe8, 0xe6, 0xf0),
            muted_fg: Color::from_rgb8(0x8e, 0x8c, 0xa3),
            accent: Color::from_rgb8(0xd4, 0xa8, 0x4b),
            danger: Color::from_rgb8(0xd9, 0x53, 0x4f),
            success: Color::from_rgb8(0x4c, 0xaf, 0x7a),
        }
    }
}

pub fn alpha(c: Color, a: f32) -> Color {
    Color { a, ..c }
}

pub fn container_style(bg: Color, fg: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(fg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: alpha(fg, 0.08),
        },
        ..container::Style::default()
    }
}

fn button_style(bg: Color, fg: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => alpha(bg, 0.85),
            button::Status::Pressed => alpha(bg, 0.7),
            button::Status::Disabled => alpha(bg, 0.35),
            _ => bg,
        };

        button::Style {
            background: Some(Background::Color(bg)),
            text_color: fg,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

pub fn card<'a>(t: Tokens, content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(move |_: &Theme| container_style(t.shell_b, t.foreground))
        .into()
}

pub fn page_padding<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content).padding(24).into()
}

pub fn h_divider<'a>(t: Tokens) -> Element<'a, Message> {
    container(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(move |_: &Theme| container::Style {
            background: Some(Background::Color(alpha(t.muted_fg, 0.25))),
            ..container::Style::default()
        })
        .into()
}

pub fn primary_button<'a>(t: Tokens, label: String, msg: Message) -> Element<'a, Message> {
    button(text(label).size(13))
        .padding([8, 14])
        .style(button_style(t.accent, t.background))
        .on_press(msg)
        .into()
}

pub fn danger_button<'a>(t: Tokens, label: String, msg: Message) -> Element<'a, Message> {
    button(text(label).size(13))
        .padding([8, 14])
        .style(button_style(t.danger, t.foreground))
        .on_press(msg)
        .into()
}

pub fn ghost_button<'a>(t: Tokens, label: String, msg: Message) -> Element<'a, Message> {
    button(text(label).size(13))
        .padding([8, 14])
        .style(button_style(alpha(t.foreground, 0.06), t.foreground))
        .on_press(msg)
        .into()
}

/// Toggle tipo "tab": activo = accent, inactivo = ghost.
pub fn toggle_button<'a>(t: Tokens, label: String, active: bool, msg: Message) -> Element<'a, Message> {
    if active {
        primary_button(t, label, msg)
    } else {
        ghost_button(t, label, msg)
    }
}

/// Retrato de un personaje. `imageUrl` relativo se resuelve contra `asset_dir`;
/// URLs remotas no se descargan (solo se muestra el placeholder).
pub fn portrait<'a>(t: Tokens, asset_dir: &Path, image_url: &str, size: f32) -> Element<'a, Message> {
    let is_remote = image_url.starts_with("http://") || image_url.starts_with("https://");

    let inner: Element<'a, Message> = if is_remote || image_url.is_empty() {
        text("?").size(size / 3.0).color(t.muted_fg).into()
    } else {
        let path = asset_dir.join(image_url.trim_start_matches('/'));
        image(image::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    };

    container(inner)
        .center(Length::Fixed(size))
        .style(move |_: &Theme| container_style(t.shell_a, t.foreground))
        .into()
}
