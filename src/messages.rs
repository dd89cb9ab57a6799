use crate::model::{Character, GameId, RegionFilter};

#[derive(Debug, Clone)]
pub enum GalleryMessage {
    /// Id crudo del juego (se valida en el controller).
    SwitchGame(String),
    RegionSelected(RegionFilter),
    Retry,
}

#[derive(Debug, Clone)]
pub enum DetailMessage {
    Open(Character),
    Close,
    ToggleTeam,
}

#[derive(Debug, Clone)]
pub enum TeamMessage {
    TogglePanel,
}

#[derive(Debug, Clone)]
pub enum Message {
    Tick,
    ToastDismiss(u64),

    Gallery(GalleryMessage),
    Detail(DetailMessage),
    Team(TeamMessage),

    // ✅ identidad + generación (evita aplicar responses out-of-order)
    RegionsFetched {
        game: GameId,
        generation: u64,
        result: Result<Vec<String>, String>,
    },

    CharactersFetched {
        game: GameId,
        region: RegionFilter,
        generation: u64,
        result: Result<Vec<Character>, String>,
    },
}
