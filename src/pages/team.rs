use iced::widget::{container, scrollable, text, Column, Row};
use iced::{Alignment, Length, Theme};

use crate::app::AppState;
use crate::model::Character;
use crate::{pages::E, ui};

const TEAM_PANEL_WIDTH: f32 = 300.0;
const MEMBER_PORTRAIT: f32 = 56.0;

pub fn team_panel<'a>(state: &'a AppState, t: ui::Tokens) -> E<'a> {
    let members: &[Character] = state.current_team().map(|team| team.members()).unwrap_or(&[]);

    let mut content = Column::new()
        .spacing(12)
        .padding(20)
        .push(text(format!("{} TEAM", state.current_game.label().to_uppercase())).size(16).color(t.foreground))
        .push(text(format!("{} members", members.len())).size(12).color(t.muted_fg))
        .push(ui::h_divider(t));

    if state.current_team().is_none_or(|team| team.is_empty()) {
        content = content.push(text("No characters in your team yet.").size(13).color(t.muted_fg));
    } else {
        for c in members {
            content = content.push(member_row(state, c, t));
        }
    }

    container(scrollable(content).height(Length::Fill))
        .width(Length::Fixed(TEAM_PANEL_WIDTH))
        .height(Length::Fill)
        .style(move |_: &Theme| ui::container_style(t.shell_a, t.foreground))
        .into()
}

fn member_row<'a>(state: &'a AppState, c: &'a Character, t: ui::Tokens) -> E<'a> {
    Row::new()
        .spacing(12)
        .align_y(Alignment::Center)
        .push(ui::portrait(t, &state.asset_dir, &c.image_url, MEMBER_PORTRAIT))
        .push(
            Column::new()
                .spacing(2)
                .push(text(&c.name).size(14).color(t.foreground))
                .push(text(&c.region).size(12).color(t.muted_fg)),
        )
        .into()
}
