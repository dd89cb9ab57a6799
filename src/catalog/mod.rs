// ========================================
// catalog - fuente de datos estática (un JSON por juego)
// ========================================
// Sin cache a propósito: cada load relee el archivo.

use std::path::PathBuf;

use crate::errors::GalleryError;
use crate::model::{Character, GameId, RegionFilter};

mod query;

pub use query::{distinct_regions, filter_by_region, region_options};

#[derive(Debug, Clone)]
pub struct Catalog {
    data_dir: PathBuf,
}

impl Catalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, game: GameId) -> PathBuf {
        self.data_dir.join(game.data_file_name())
    }

    /// Dataset completo del juego, en el orden del archivo.
    pub async fn load_all(&self, game: GameId) -> Result<Vec<Character>, GalleryError> {
        let path = self.path_for(game);

        let bytes = tokio::fs::read(&path).await.map_err(|source| GalleryError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_slice::<Vec<Character>>(&bytes)
            .map_err(|source| GalleryError::Parse { path, source })
    }

    /// Regiones distintas (orden de primera aparición).
    pub async fn fetch_regions(&self, game: GameId) -> Result<Vec<String>, GalleryError> {
        let data = self.load_all(game).await?;
        Ok(distinct_regions(&data))
    }

    /// Dataset filtrado por región (ALL = passthrough).
    pub async fn fetch_characters(
        &self,
        game: GameId,
        region: &RegionFilter,
    ) -> Result<Vec<Character>, GalleryError> {
        let data = self.load_all(game).await?;
        Ok(filter_by_region(data, region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENSHIN: &str = r#"[
        {"name":"Diluc","region":"Mondstadt","imageUrl":"images/genshin/diluc.png"},
        {"name":"Zhongli","region":"Liyue","imageUrl":"images/genshin/zhongli.png"},
        {"name":"Venti","region":"Mondstadt","imageUrl":"images/genshin/venti.png"}
    ]"#;

    fn catalog_with(game: GameId, json: &str) -> (tempfile::TempDir, Catalog) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(game.data_file_name()), json).unwrap();
        let catalog = Catalog::new(dir.path());
        (dir, catalog)
    }

    #[tokio::test]
    async fn load_all_keeps_file_order() {
        let (_dir, catalog) = catalog_with(GameId::Genshin, GENSHIN);

        let all = catalog.load_all(GameId::Genshin).await.unwrap();
        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Diluc", "Zhongli", "Venti"]);
    }

    #[tokio::test]
    async fn fetch_regions_dedupes_in_first_seen_order() {
        let (_dir, catalog) = catalog_with(GameId::Genshin, GENSHIN);

        let regions = catalog.fetch_regions(GameId::Genshin).await.unwrap();
        assert_eq!(regions, vec!["Mondstadt".to_string(), "Liyue".to_string()]);
    }

    #[tokio::test]
    async fn fetch_characters_filters_by_region() {
        let (_dir, catalog) = catalog_with(GameId::Genshin, GENSHIN);

        let got = catalog
            .fetch_characters(GameId::Genshin, &RegionFilter::Region("Mondstadt".into()))
            .await
            .unwrap();
        let names: Vec<&str> = got.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Diluc", "Venti"]);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(dir.path());

        let err = catalog.load_all(GameId::Zzz).await.unwrap_err();
        assert!(matches!(err, GalleryError::Io { .. }));
        assert!(err.to_string().contains("zzz-characters.json"));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let (_dir, catalog) = catalog_with(GameId::Zzz, r#"[{"name":"Anby"}]"#);

        let err = catalog.load_all(GameId::Zzz).await.unwrap_err();
        assert!(matches!(err, GalleryError::Parse { .. }));
    }
}
