// Fachada de logging: el resto de la app llama crate::logger::{info, warn, error}
// y no depende directo de `log`.

use std::io::Write;

const TARGET: &str = "gallery";

/// Inicializa env_logger (nivel `info` salvo que RUST_LOG diga otra cosa).
/// Llamarlo dos veces no es error fatal: el segundo init devuelve Err y se ignora.
pub fn init() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init()
}

pub fn info(msg: &str) {
    log::info!(target: TARGET, "{}", msg);
}

pub fn warn(msg: &str) {
    log::warn!(target: TARGET, "{}", msg);
}

pub fn error(msg: &str) {
    log::error!(target: TARGET, "{}", msg);
}
