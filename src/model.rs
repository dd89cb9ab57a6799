use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GalleryError;

// --- GAMES ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Genshin,
    Zzz,
}

impl GameId {
    /// Orden de los toggles en el header.
    pub const ALL: [GameId; 2] = [GameId::Genshin, GameId::Zzz];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Genshin => "genshin",
            Self::Zzz => "zzz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Genshin => "Genshin Impact",
            Self::Zzz => "Zenless Zone Zero",
        }
    }

    /// `<game>-characters.json`
    pub fn data_file_name(self) -> String {
        format!("{}-characters.json", self.as_str())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::Genshin
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameId {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "genshin" => Ok(Self::Genshin),
            "zzz" => Ok(Self::Zzz),
            _ => Err(GalleryError::UnknownGame(s.to_string())),
        }
    }
}

// --- CHARACTERS ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub region: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// --- REGION FILTER ---
pub const ALL_REGIONS_LABEL: &str = "ALL";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Region(String),
}

impl RegionFilter {
    pub fn matches(&self, character: &Character) -> bool {
        match self {
            Self::All => true,
            Self::Region(r) => character.region == *r,
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL_REGIONS_LABEL),
            Self::Region(r) => write!(f, "{}", r),
        }
    }
}
