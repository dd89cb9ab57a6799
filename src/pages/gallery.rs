use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{Alignment, Background, Length, Theme};

use crate::app::{AppState, DetailMessage, GalleryMessage, Message};
use crate::model::Character;
use crate::state::LoadState;
use crate::{pages::E, ui};

const GRID_COLUMNS: usize = 5;
const CARD_PORTRAIT: f32 = 120.0;

pub fn gallery_page<'a>(state: &'a AppState, t: ui::Tokens) -> E<'a> {
    let body: E<'a> = match &state.characters {
        LoadState::Idle | LoadState::Loading => status_line("Loading characters…", t),

        LoadState::Unavailable(reason) => {
            let col = Column::new()
                .spacing(12)
                .push(text("Data unavailable").size(18).color(t.danger))
                .push(text(reason.as_str()).size(13).color(t.muted_fg))
                .push(ui::primary_button(
                    t,
                    "Retry".to_string(),
                    Message::Gallery(GalleryMessage::Retry),
                ));
            ui::card(t, col.into())
        }

        LoadState::Ready(chars) if chars.is_empty() => {
            status_line("No characters match this region.", t)
        }

        LoadState::Ready(chars) => character_grid(state, chars, t),
    };

    scrollable(ui::page_padding(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_line<'a>(msg: &'a str, t: ui::Tokens) -> E<'a> {
    text(msg).size(14).color(t.muted_fg).into()
}

fn character_grid<'a>(state: &'a AppState, chars: &'a [Character], t: ui::Tokens) -> E<'a> {
    let mut grid = Column::new().spacing(16);

    for chunk in chars.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(16);
        for c in chunk {
            row = row.push(character_card(state, c, t));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn character_card<'a>(state: &'a AppState, c: &'a Character, t: ui::Tokens) -> E<'a> {
    let in_team = state.current_team().is_some_and(|team| team.contains(&c.name));

    let name_color = if in_team { t.accent } else { t.foreground };

    let content = Column::new()
        .spacing(6)
        .align_x(Alignment::Center)
        .push(ui::portrait(t, &state.asset_dir, &c.image_url, CARD_PORTRAIT))
        .push(text(&c.name).size(15).color(name_color))
        .push(text(&c.region).size(12).color(t.muted_fg));

    button(
        container(content)
            .padding(12)
            .width(Length::Fixed(CARD_PORTRAIT + 40.0)),
    )
    .padding(0)
    .style(move |_: &Theme, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => ui::alpha(t.accent, 0.12),
            _ => t.shell_b,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: t.foreground,
            border: iced::Border {
                radius: 10.0.into(),
                width: 1.0,
                color: if in_team { t.accent } else { ui::alpha(t.foreground, 0.08) },
            },
            ..button::Style::default()
        }
    })
    .on_press(Message::Detail(DetailMessage::Open(c.clone())))
    .into()
}
