use crate::app::{AppState, TeamMessage};

pub fn update(state: &mut AppState, message: TeamMessage) {
    match message {
        TeamMessage::TogglePanel => toggle_team_display(state),
    }
}

/// El contenido del panel sale del roster actual en cada view, así que
/// abrirlo siempre muestra el team vigente.
pub fn toggle_team_display(state: &mut AppState) {
    state.team_panel_open = !state.team_panel_open;

    crate::logger::info(&format!(
        "👥 Team panel {} ({} members, game={})",
        if state.team_panel_open { "opened" } else { "closed" },
        state.team_len(state.current_game),
        state.current_game
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_visibility_without_touching_selection() {
        let mut state = AppState::default();
        state.selection = Some(crate::model::Character {
            name: "Furina".into(),
            region: "Fontaine".into(),
            image_url: String::new(),
        });

        toggle_team_display(&mut state);
        assert!(state.team_panel_open);
        assert!(state.selection.is_some());

        toggle_team_display(&mut state);
        assert!(!state.team_panel_open);
    }
}
