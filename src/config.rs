// Config de la galería: defaults -> config.json (dir de config de la plataforma) -> env vars.
// Nunca falla el arranque: cualquier problema se loguea y se sigue con defaults.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::GalleryError;
use crate::model::GameId;

pub const ENV_DATA_DIR: &str = "GALLERY_DATA_DIR";
pub const ENV_ASSET_DIR: &str = "GALLERY_ASSET_DIR";
pub const ENV_DEFAULT_GAME: &str = "GALLERY_DEFAULT_GAME";

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Carpeta con `<game>-characters.json`.
    pub data_dir: PathBuf,
    /// Raíz contra la que se resuelven los `imageUrl` relativos.
    pub asset_dir: PathBuf,
    pub default_game: GameId,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            asset_dir: PathBuf::from("."),
            default_game: GameId::Genshin,
            window_width: 1280.0,
            window_height: 860.0,
        }
    }
}

/// Forma "cruda" del config.json: todo opcional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    data_dir: Option<PathBuf>,
    asset_dir: Option<PathBuf>,
    default_game: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "CharacterGallery", "Gallery").map(|p| p.config_dir().join("config.json"))
}

fn read_raw(path: &Path) -> Result<Option<RawConfig>, GalleryError> {
    let json = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(GalleryError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str::<RawConfig>(&json)
        .map(Some)
        .map_err(|source| GalleryError::Config {
            path: path.to_path_buf(),
            source,
        })
}

impl GalleryConfig {
    /// Punto de entrada del boot.
    pub fn load() -> Self {
        let raw = match config_path() {
            Some(path) => Self::raw_or_default(&path),
            None => RawConfig::default(),
        };

        Self::from_sources(raw, |key| std::env::var(key).ok())
    }

    /// Lee un config.json concreto (mismas reglas que `load`, sin env).
    #[cfg(test)]
    pub fn load_from(path: &Path) -> Self {
        Self::from_sources(Self::raw_or_default(path), |_| None)
    }

    fn raw_or_default(path: &Path) -> RawConfig {
        match read_raw(path) {
            Ok(Some(raw)) => {
                crate::logger::info(&format!("⚙️ Config loaded from {}", path.display()));
                raw
            }
            Ok(None) => RawConfig::default(),
            Err(e) => {
                crate::logger::warn(&format!("⚠️ {}. Using defaults.", e));
                RawConfig::default()
            }
        }
    }

    fn from_sources(raw: RawConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(d) = raw.data_dir {
            cfg.data_dir = d;
        }
        if let Some(d) = raw.asset_dir {
            cfg.asset_dir = d;
        }
        if let Some(w) = raw.window_width.filter(|w| *w > 0.0) {
            cfg.window_width = w;
        }
        if let Some(h) = raw.window_height.filter(|h| *h > 0.0) {
            cfg.window_height = h;
        }

        let mut game = raw.default_game;

        // env gana sobre el archivo
        if let Some(d) = env(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            cfg.data_dir = PathBuf::from(d);
        }
        if let Some(d) = env(ENV_ASSET_DIR).filter(|v| !v.trim().is_empty()) {
            cfg.asset_dir = PathBuf::from(d);
        }
        if let Some(g) = env(ENV_DEFAULT_GAME) {
            game = Some(g);
        }

        if let Some(g) = game {
            match g.parse::<GameId>() {
                Ok(id) => cfg.default_game = id,
                Err(e) => {
                    crate::logger::warn(&format!(
                        "⚠️ default_game rejected ({}). Falling back to '{}'",
                        e, cfg.default_game
                    ));
                }
            }
        }

        cfg
    }
}
