use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use crate::model::{Character, GameId, RegionFilter};
use crate::roster::TeamRoster;

// ================================
// Carga asíncrona (regions / characters)
// ================================
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// "data unavailable": se renderiza en lugar de la grilla / selector.
    Unavailable(String),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Qué pedido está en vuelo. Cada kind tiene su propio contador de generación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadKind {
    Regions,
    Characters,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind { Info, Success, Error }

#[derive(Debug)]
pub struct AppState {
    pub current_game: GameId,
    pub region_filter: RegionFilter,

    pub regions: LoadState<Vec<String>>,
    pub characters: LoadState<Vec<Character>>,

    // ✅ Última generación emitida por kind; respuestas con otra generación se descartan.
    pub regions_generation: u64,
    pub characters_generation: u64,

    /// Personaje inspeccionado (panel de detalle). None = panel cerrado.
    pub selection: Option<Character>,
    pub team_panel_open: bool,

    pub teams: HashMap<GameId, TeamRoster>,

    /// Raíz para resolver `imageUrl`.
    pub asset_dir: PathBuf,

    pub toasts: Vec<Toast>,
    pub toast_counter: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_game: GameId::default(),
            region_filter: RegionFilter::All,

            regions: LoadState::Idle,
            characters: LoadState::Idle,

            regions_generation: 0,
            characters_generation: 0,

            selection: None,
            team_panel_open: false,

            teams: GameId::ALL
                .iter()
                .map(|g| (*g, TeamRoster::default()))
                .collect(),

            asset_dir: PathBuf::from("."),

            toasts: vec![],
            toast_counter: 0,
        }
    }
}

impl AppState {
    pub fn new(default_game: GameId, asset_dir: PathBuf) -> Self {
        Self {
            current_game: default_game,
            asset_dir,
            ..Self::default()
        }
    }

    // ============================================
    // Team helpers
    // ============================================

    pub fn current_team(&self) -> Option<&TeamRoster> {
        self.teams.get(&self.current_game)
    }

    pub fn current_team_mut(&mut self) -> &mut TeamRoster {
        self.teams.entry(self.current_game).or_default()
    }

    pub fn team_len(&self, game: GameId) -> usize {
        self.teams.get(&game).map(TeamRoster::len).unwrap_or(0)
    }

    /// ¿El seleccionado está en el team del juego actual? (false sin selección)
    pub fn selection_in_team(&self) -> bool {
        match (&self.selection, self.current_team()) {
            (Some(c), Some(team)) => team.contains(&c.name),
            _ => false,
        }
    }

    pub fn team_button_label(&self) -> &'static str {
        if self.selection_in_team() {
            "REMOVE FROM TEAM"
        } else {
            "ADD TO TEAM"
        }
    }

    // ============================================
    // Request generations
    // ============================================

    /// Abre un pedido nuevo: incrementa la generación y pone el kind en Loading.
    pub fn begin_load(&mut self, kind: LoadKind) -> u64 {
        match kind {
            LoadKind::Regions => {
                self.regions_generation += 1;
                self.regions = LoadState::Loading;
                self.regions_generation
            }
            LoadKind::Characters => {
                self.characters_generation += 1;
                self.characters = LoadState::Loading;
                self.characters_generation
            }
        }
    }

    pub fn is_latest(&self, kind: LoadKind, generation: u64) -> bool {
        match kind {
            LoadKind::Regions => self.regions_generation == generation,
            LoadKind::Characters => self.characters_generation == generation,
        }
    }

    // ============================================
    // Toasts
    // ============================================

    pub fn show_toast(&mut self, msg: impl Into<String>, kind: ToastKind) {
        const MAX_TOASTS: usize = 10;

        // Poda de expirados antes de agregar
        let now = Instant::now();
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at).as_secs() < t.ttl_secs);

        self.toast_counter += 1;

        self.toasts.push(Toast {
            id: self.toast_counter,
            message: msg.into(),
            kind,
            created_at: now,
            ttl_secs: 4,
        });

        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(0..overflow);
        }
    }

    pub fn prune_toasts(&mut self) {
        let now = Instant::now();
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at).as_secs() < t.ttl_secs);
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
