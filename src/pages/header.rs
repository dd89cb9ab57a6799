use iced::widget::{container, pick_list, text, Row};
use iced::{Alignment, Length, Theme};

use crate::app::{AppState, GalleryMessage, Message, TeamMessage, APP_NAME};
use crate::catalog::region_options;
use crate::model::{GameId, RegionFilter};
use crate::state::LoadState;
use crate::{pages::E, ui};

pub fn header<'a>(state: &'a AppState, t: ui::Tokens) -> E<'a> {
    let mut games = Row::new().spacing(8);
    for game in GameId::ALL {
        games = games.push(ui::toggle_button(
            t,
            game.label().to_string(),
            state.current_game == game,
            Message::Gallery(GalleryMessage::SwitchGame(game.as_str().to_string())),
        ));
    }

    let team_label = format!(
        "{} ({})",
        if state.team_panel_open { "HIDE TEAM" } else { "VIEW TEAM" },
        state.team_len(state.current_game)
    );

    let row = Row::new()
        .spacing(16)
        .align_y(Alignment::Center)
        .push(text(APP_NAME).size(20).color(t.foreground))
        .push(games)
        .push(container(text("")).width(Length::Fill))
        .push(region_selector(state, t))
        .push(ui::ghost_button(t, team_label, Message::Team(TeamMessage::TogglePanel)));

    container(row)
        .padding([12, 24])
        .width(Length::Fill)
        .style(move |_: &Theme| ui::container_style(t.shell_a, t.foreground))
        .into()
}

fn region_selector<'a>(state: &'a AppState, t: ui::Tokens) -> E<'a> {
    match &state.regions {
        LoadState::Ready(regions) => {
            let options: Vec<RegionFilter> = region_options(regions);
            pick_list(options, Some(state.region_filter.clone()), |r| {
                Message::Gallery(GalleryMessage::RegionSelected(r))
            })
            .placeholder("Region")
            .width(Length::Fixed(220.0))
            .into()
        }
        LoadState::Unavailable(_) => text("Regions unavailable").size(13).color(t.danger).into(),
        LoadState::Idle | LoadState::Loading => text("Loading regions…").size(13).color(t.muted_fg).into(),
    }
}
