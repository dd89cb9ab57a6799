use iced::{Element, Size, Subscription, Task, Theme};

use crate::app::{AppState, Message, APP_NAME};
use crate::catalog::Catalog;
use crate::config::GalleryConfig;

use std::time::Duration;

pub fn run() -> iced::Result {
    let _ = crate::logger::init();

    let config = GalleryConfig::load();
    let size = Size::new(config.window_width, config.window_height);

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(size)
        .run()
}

struct App {
    state: AppState,
    // La fuente de datos vive fuera del state (igual que una conexión).
    catalog: Catalog,
}

impl App {
    fn new(config: GalleryConfig) -> (Self, Task<Message>) {
        crate::logger::info(&format!("{} starting (game={})", APP_NAME, config.default_game));

        let mut app = Self {
            state: AppState::new(config.default_game, config.asset_dir.clone()),
            catalog: Catalog::new(config.data_dir),
        };

        crate::logger::info(&format!(
            "📂 Catalog: {} / {}",
            app.catalog.path_for(crate::model::GameId::Genshin).display(),
            app.catalog.path_for(crate::model::GameId::Zzz).display()
        ));

        let boot = crate::controllers::gallery_controller::reload_all(&mut app.state, &app.catalog);

        (app, Task::batch(boot))
    }

    fn title(&self) -> String {
        let game = self.state.current_game.label();
        match self.state.characters.ready() {
            Some(chars) => format!("{} - {} ({} characters)", APP_NAME, game, chars.len()),
            None if self.state.characters.is_loading() => format!("{} - {} (loading…)", APP_NAME, game),
            None => format!("{} - {}", APP_NAME, game),
        }
    }

    fn theme(&self) -> Theme {
        crate::app::app_theme(&self.state)
    }

    fn subscription(&self) -> Subscription<Message> {
        // Toast TTL tick (1 Hz), solo si hay toasts vivos
        if self.state.toasts.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick)
        }
    }

    fn view(&self) -> Element<'_, Message> {
        crate::app::view(&self.state)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let tasks = crate::controllers::messages_controller::update(
            &mut self.state,
            &self.catalog,
            message,
        );

        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }
}
