use crate::app::{AppState, DetailMessage};
use crate::model::Character;
use crate::roster::TeamChange;
use crate::state::ToastKind;

pub fn update(state: &mut AppState, message: DetailMessage) {
    match message {
        DetailMessage::Open(character) => show_character_detail(state, character),
        DetailMessage::Close => hide_character_detail(state),
        DetailMessage::ToggleTeam => toggle_team_membership(state),
    }
}

pub fn show_character_detail(state: &mut AppState, character: Character) {
    crate::logger::info(&format!(
        "🔍 Detail: {} ({}) | in_team={}",
        character.name,
        character.region,
        state.current_team().is_some_and(|t| t.contains(&character.name))
    ));
    state.selection = Some(character);
}

/// Cierra el panel y limpia la selección (no queda una selección "fantasma").
pub fn hide_character_detail(state: &mut AppState) {
    if let Some(c) = state.selection.take() {
        crate::logger::info(&format!("🔍 Detail closed: {}", c.name));
    }
}

pub fn toggle_team_membership(state: &mut AppState) {
    let Some(character) = state.selection.clone() else {
        crate::logger::warn("⚠️ toggle_team_membership ignored: no character selected");
        return;
    };

    let game = state.current_game;
    let change = state.current_team_mut().toggle(&character);
    let size = state.team_len(game);

    match change {
        TeamChange::Added => {
            crate::logger::info(&format!("➕ {} added to {} team ({})", character.name, game, size));
            state.show_toast(format!("{} added to team", character.name), ToastKind::Success);
        }
        TeamChange::Removed => {
            crate::logger::info(&format!("➖ {} removed from {} team ({})", character.name, game, size));
            state.show_toast(format!("{} removed from team", character.name), ToastKind::Info);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GameId;

    fn ch(name: &str) -> Character {
        Character {
            name: name.into(),
            region: "Mondstadt".into(),
            image_url: format!("images/{}.png", name),
        }
    }

    #[test]
    fn toggle_without_selection_is_a_noop() {
        let mut state = AppState::default();

        toggle_team_membership(&mut state);

        assert_eq!(state.team_len(GameId::Genshin), 0);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn label_follows_membership() {
        let mut state = AppState::default();
        show_character_detail(&mut state, ch("Diluc"));
        assert_eq!(state.team_button_label(), "ADD TO TEAM");

        toggle_team_membership(&mut state);
        assert_eq!(state.team_button_label(), "REMOVE FROM TEAM");

        toggle_team_membership(&mut state);
        assert_eq!(state.team_button_label(), "ADD TO TEAM");
    }

    #[test]
    fn hide_clears_selection_so_toggle_cannot_use_stale_character() {
        let mut state = AppState::default();
        show_character_detail(&mut state, ch("Venti"));
        hide_character_detail(&mut state);

        assert!(state.selection.is_none());

        toggle_team_membership(&mut state);
        assert_eq!(state.team_len(GameId::Genshin), 0);
    }

    #[test]
    fn team_is_per_game() {
        let mut state = AppState::default();
        show_character_detail(&mut state, ch("Diluc"));
        toggle_team_membership(&mut state);

        state.current_game = GameId::Zzz;
        assert!(!state.selection_in_team());

        toggle_team_membership(&mut state);
        assert_eq!(state.team_len(GameId::Genshin), 1);
        assert_eq!(state.team_len(GameId::Zzz), 1);
    }
}
