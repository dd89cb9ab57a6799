use iced::Task;

use crate::app::{AppState, Message};
use crate::catalog::Catalog;
use crate::controllers::{detail_controller, gallery_controller, team_controller};

/// Dispatcher central: cada módulo maneja sus propios mensajes.
pub fn update(state: &mut AppState, catalog: &Catalog, message: Message) -> Vec<Task<Message>> {
    let mut tasks: Vec<Task<Message>> = Vec::new();

    match message {
        Message::Tick => state.prune_toasts(),
        Message::ToastDismiss(id) => state.dismiss_toast(id),

        Message::Gallery(msg) => tasks.extend(gallery_controller::update(state, catalog, msg)),
        Message::Detail(msg) => detail_controller::update(state, msg),
        Message::Team(msg) => team_controller::update(state, msg),

        // ==========================================================
        // Fetch results: siempre con (game, generation)
        // ==========================================================
        Message::RegionsFetched {
            game,
            generation,
            result,
        } => tasks.extend(gallery_controller::handle_regions_fetched(
            state, catalog, game, generation, result,
        )),

        Message::CharactersFetched {
            game,
            region,
            generation,
            result,
        } => gallery_controller::handle_characters_fetched(state, game, region, generation, result),
    }

    tasks
}
