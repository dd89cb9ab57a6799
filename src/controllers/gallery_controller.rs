use iced::Task;

use crate::app::{AppState, GalleryMessage, Message};
use crate::catalog::Catalog;
use crate::model::{Character, GameId, RegionFilter};
use crate::state::{LoadKind, LoadState, ToastKind};

pub fn update(state: &mut AppState, catalog: &Catalog, message: GalleryMessage) -> Vec<Task<Message>> {
    match message {
        GalleryMessage::SwitchGame(raw_id) => switch_game(state, catalog, &raw_id),
        GalleryMessage::RegionSelected(region) => select_region(state, catalog, region),
        GalleryMessage::Retry => {
            crate::logger::info(&format!("🔁 Retry load ({})", state.current_game));
            reload_all(state, catalog)
        }
    }
}

/// Boot + cambio de juego: regiones y personajes se piden en paralelo.
pub fn reload_all(state: &mut AppState, catalog: &Catalog) -> Vec<Task<Message>> {
    vec![load_regions(state, catalog), load_characters(state, catalog)]
}

// --- SWITCH GAME ---

pub fn switch_game(state: &mut AppState, catalog: &Catalog, raw_id: &str) -> Vec<Task<Message>> {
    let game = match raw_id.parse::<GameId>() {
        Ok(g) => g,
        Err(e) => {
            crate::logger::warn(&format!("⚠️ switch_game rejected: {}", e));
            state.show_toast(format!("Cannot switch game: {}", e), ToastKind::Error);
            return vec![];
        }
    };

    crate::logger::info(&format!("🎮 Switch game: {} -> {}", state.current_game, game));

    state.current_game = game;
    state.region_filter = RegionFilter::All;

    // La selección pertenece al juego anterior: cerrar detalle para no
    // togglear un personaje ajeno en el team nuevo.
    state.selection = None;

    reload_all(state, catalog)
}

// --- REGION FILTER ---

pub fn select_region(state: &mut AppState, catalog: &Catalog, region: RegionFilter) -> Vec<Task<Message>> {
    crate::logger::info(&format!("🗺️ Region filter: {} -> {}", state.region_filter, region));
    state.region_filter = region;
    vec![load_characters(state, catalog)]
}

// --- LOADS ---

pub fn load_regions(state: &mut AppState, catalog: &Catalog) -> Task<Message> {
    let game = state.current_game;
    let generation = state.begin_load(LoadKind::Regions);

    crate::logger::info(&format!("🔄 Loading regions (game={}, gen={})", game, generation));

    let catalog = catalog.clone();
    Task::perform(
        async move { catalog.fetch_regions(game).await.map_err(|e| e.to_string()) },
        move |result| Message::RegionsFetched {
            game,
            generation,
            result,
        },
    )
}

pub fn load_characters(state: &mut AppState, catalog: &Catalog) -> Task<Message> {
    let game = state.current_game;
    let region = state.region_filter.clone();
    let generation = state.begin_load(LoadKind::Characters);

    crate::logger::info(&format!(
        "🔄 Loading characters (game={}, region={}, gen={})",
        game, region, generation
    ));

    let catalog = catalog.clone();
    let req_region = region.clone();
    Task::perform(
        async move {
            catalog
                .fetch_characters(game, &req_region)
                .await
                .map_err(|e| e.to_string())
        },
        move |result| Message::CharactersFetched {
            game,
            region,
            generation,
            result,
        },
    )
}

// --- FETCH HANDLERS ---

pub fn handle_regions_fetched(
    state: &mut AppState,
    catalog: &Catalog,
    game: GameId,
    generation: u64,
    result: Result<Vec<String>, String>,
) -> Vec<Task<Message>> {
    if !state.is_latest(LoadKind::Regions, generation) {
        crate::logger::warn(&format!(
            "⏭️ Ignoring RegionsFetched out-of-order (game={}, gen={}, latest={})",
            game, generation, state.regions_generation
        ));
        return vec![];
    }

    match result {
        Ok(regions) => {
            crate::logger::info(&format!("✅ Loaded {} regions ({})", regions.len(), game));

            // Si el filtro actual ya no existe en este dataset, volvemos a ALL.
            let stale_filter = match &state.region_filter {
                RegionFilter::All => false,
                RegionFilter::Region(r) => !regions.contains(r),
            };

            state.regions = LoadState::Ready(regions);

            if stale_filter {
                crate::logger::warn(&format!(
                    "⚠️ Region '{}' not present in {}; resetting to ALL",
                    state.region_filter, game
                ));
                state.region_filter = RegionFilter::All;
                return vec![load_characters(state, catalog)];
            }
        }
        Err(e) => {
            crate::logger::error(&format!("❌ Fetch regions failed ({}): {}", game, e));
            state.regions = LoadState::Unavailable(e);
        }
    }

    vec![]
}

pub fn handle_characters_fetched(
    state: &mut AppState,
    game: GameId,
    region: RegionFilter,
    generation: u64,
    result: Result<Vec<Character>, String>,
) {
    if !state.is_latest(LoadKind::Characters, generation) {
        crate::logger::warn(&format!(
            "⏭️ Ignoring CharactersFetched out-of-order (game={}, region={}, gen={}, latest={})",
            game, region, generation, state.characters_generation
        ));
        return;
    }

    match result {
        Ok(characters) => {
            crate::logger::info(&format!(
                "✅ Loaded {} characters ({} / {})",
                characters.len(),
                game,
                region
            ));
            state.characters = LoadState::Ready(characters);
        }
        Err(e) => {
            crate::logger::error(&format!("❌ Fetch characters failed ({}): {}", game, e));
            state.show_toast(format!("Data unavailable: {}", e), ToastKind::Error);
            state.characters = LoadState::Unavailable(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::DetailMessage;

    fn ch(name: &str, region: &str) -> Character {
        Character {
            name: name.into(),
            region: region.into(),
            image_url: String::new(),
        }
    }

    fn catalog() -> Catalog {
        // Nunca se ejecutan las tasks en estos tests; el path no importa.
        Catalog::new("unused")
    }

    #[test]
    fn switch_game_rejects_unknown_id_and_keeps_state() {
        let mut state = AppState::default();
        state.selection = Some(ch("Diluc", "Mondstadt"));

        let tasks = switch_game(&mut state, &catalog(), "starrail");

        assert!(tasks.is_empty());
        assert_eq!(state.current_game, GameId::Genshin);
        assert!(state.selection.is_some());
        assert_eq!(state.regions_generation, 0);
        assert!(matches!(state.toasts.last().map(|t| t.kind), Some(ToastKind::Error)));
    }

    #[test]
    fn switch_game_resets_view_but_not_rosters() {
        let mut state = AppState::default();
        state.current_team_mut().toggle(&ch("Diluc", "Mondstadt"));
        state.region_filter = RegionFilter::Region("Mondstadt".into());
        state.selection = Some(ch("Diluc", "Mondstadt"));
        state.characters = LoadState::Ready(vec![ch("Diluc", "Mondstadt")]);

        let tasks = switch_game(&mut state, &catalog(), "zzz");

        assert_eq!(tasks.len(), 2);
        assert_eq!(state.current_game, GameId::Zzz);
        assert_eq!(state.region_filter, RegionFilter::All);
        assert!(state.selection.is_none());
        assert!(state.characters.is_loading());
        assert!(state.regions.is_loading());
        assert_eq!(state.team_len(GameId::Genshin), 1);
        assert_eq!(state.team_len(GameId::Zzz), 0);
    }

    #[test]
    fn stale_character_response_is_discarded() {
        let mut state = AppState::default();
        let cat = catalog();

        let _ = load_characters(&mut state, &cat);
        let old_gen = state.characters_generation;
        let _ = select_region(&mut state, &cat, RegionFilter::Region("Liyue".into()));
        let new_gen = state.characters_generation;

        // la respuesta nueva llega primero
        handle_characters_fetched(
            &mut state,
            GameId::Genshin,
            RegionFilter::Region("Liyue".into()),
            new_gen,
            Ok(vec![ch("Zhongli", "Liyue")]),
        );
        // y después la vieja (lenta)
        handle_characters_fetched(
            &mut state,
            GameId::Genshin,
            RegionFilter::All,
            old_gen,
            Ok(vec![ch("Diluc", "Mondstadt"), ch("Zhongli", "Liyue")]),
        );

        assert_eq!(state.characters.ready(), Some(&vec![ch("Zhongli", "Liyue")]));
    }

    #[test]
    fn stale_regions_response_is_discarded() {
        let mut state = AppState::default();
        let cat = catalog();

        let _ = load_regions(&mut state, &cat);
        let old_gen = state.regions_generation;
        let _ = switch_game(&mut state, &cat, "zzz");
        let new_gen = state.regions_generation;

        let tasks = handle_regions_fetched(
            &mut state,
            &cat,
            GameId::Genshin,
            old_gen,
            Ok(vec!["Mondstadt".into()]),
        );
        assert!(tasks.is_empty());
        assert!(state.regions.is_loading());

        let _ = handle_regions_fetched(
            &mut state,
            &cat,
            GameId::Zzz,
            new_gen,
            Ok(vec!["Cunning Hares".into()]),
        );
        assert_eq!(state.regions.ready(), Some(&vec!["Cunning Hares".to_string()]));
    }

    #[test]
    fn fetch_failure_becomes_unavailable() {
        let mut state = AppState::default();
        let cat = catalog();
        let _ = reload_all(&mut state, &cat);

        let generation = state.regions_generation;
        let _ = handle_regions_fetched(
            &mut state,
            &cat,
            GameId::Genshin,
            generation,
            Err("could not read data/genshin-characters.json".into()),
        );
        let generation = state.characters_generation;
        handle_characters_fetched(
            &mut state,
            GameId::Genshin,
            RegionFilter::All,
            generation,
            Err("could not read data/genshin-characters.json".into()),
        );

        assert!(matches!(state.regions, LoadState::Unavailable(_)));
        assert!(matches!(state.characters, LoadState::Unavailable(_)));
    }

    #[test]
    fn unknown_region_filter_resets_to_all() {
        let mut state = AppState::default();
        let cat = catalog();
        state.region_filter = RegionFilter::Region("Snezhnaya".into());
        let _ = load_regions(&mut state, &cat);
        let before = state.characters_generation;
        let generation = state.regions_generation;

        let tasks = handle_regions_fetched(
            &mut state,
            &cat,
            GameId::Genshin,
            generation,
            Ok(vec!["Mondstadt".into(), "Liyue".into()]),
        );

        assert_eq!(tasks.len(), 1);
        assert_eq!(state.region_filter, RegionFilter::All);
        assert_eq!(state.characters_generation, before + 1);
    }

    #[test]
    fn filter_then_toggle_scenario() {
        // dataset [{A,X},{B,Y}]; región X -> solo A; toggle A -> [A]; toggle -> []
        let mut state = AppState::default();
        let cat = catalog();

        let _ = select_region(&mut state, &cat, RegionFilter::Region("X".into()));
        let data = crate::catalog::filter_by_region(
            vec![ch("A", "X"), ch("B", "Y")],
            &state.region_filter,
        );
        let generation = state.characters_generation;
        handle_characters_fetched(
            &mut state,
            GameId::Genshin,
            RegionFilter::Region("X".into()),
            generation,
            Ok(data),
        );
        assert_eq!(state.characters.ready(), Some(&vec![ch("A", "X")]));

        crate::controllers::detail_controller::update(&mut state, DetailMessage::Open(ch("A", "X")));
        crate::controllers::detail_controller::update(&mut state, DetailMessage::ToggleTeam);
        let names: Vec<&str> = state
            .current_team()
            .map(|t| t.members().iter().map(|c| c.name.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(names, vec!["A"]);

        crate::controllers::detail_controller::update(&mut state, DetailMessage::ToggleTeam);
        assert_eq!(state.team_len(GameId::Genshin), 0);
    }
}
