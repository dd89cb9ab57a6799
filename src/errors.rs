use std::path::PathBuf;

use thiserror::Error;

/// Errores de la capa de datos / config.
/// En la frontera de mensajes viajan como String (Message tiene que ser Clone).
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("unknown game id '{0}'")]
    UnknownGame(String),

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid character data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
