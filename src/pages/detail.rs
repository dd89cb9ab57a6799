use iced::widget::{container, opaque, text, Column, Row};
use iced::{Alignment, Background, Length, Theme};

use crate::app::{AppState, DetailMessage, Message};
use crate::model::Character;
use crate::{pages::E, ui};

const DETAIL_PORTRAIT: f32 = 260.0;

/// Overlay modal del personaje seleccionado.
pub fn detail_panel<'a>(state: &'a AppState, c: &'a Character, t: ui::Tokens) -> E<'a> {
    let in_team = state.selection_in_team();
    let team_btn = if in_team {
        ui::danger_button(
            t,
            state.team_button_label().to_string(),
            Message::Detail(DetailMessage::ToggleTeam),
        )
    } else {
        ui::primary_button(
            t,
            state.team_button_label().to_string(),
            Message::Detail(DetailMessage::ToggleTeam),
        )
    };

    let panel = Column::new()
        .spacing(14)
        .padding(24)
        .align_x(Alignment::Center)
        .push(ui::portrait(t, &state.asset_dir, &c.image_url, DETAIL_PORTRAIT))
        .push(text(&c.name).size(24).color(t.foreground))
        .push(text(&c.region).size(14).color(t.muted_fg))
        .push(
            Row::new()
                .spacing(10)
                .push(team_btn)
                .push(ui::ghost_button(
                    t,
                    "CLOSE".to_string(),
                    Message::Detail(DetailMessage::Close),
                )),
        );

    let boxed = container(panel)
        .width(Length::Fixed(DETAIL_PORTRAIT + 120.0))
        .style(move |_: &Theme| ui::container_style(t.shell_b, t.foreground));

    // Backdrop opaco: los clicks no llegan a la grilla de atrás.
    opaque(
        container(boxed)
            .center(Length::Fill)
            .style(move |_: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(ui::alpha(t.background, 0.75))),
                ..iced::widget::container::Style::default()
            }),
    )
}
