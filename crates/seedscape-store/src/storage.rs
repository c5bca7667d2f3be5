//! Campaign and tile file I/O

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use seedscape::generation::{HexGenerator, Tile};
use seedscape::HexCoord;

use crate::campaign::CampaignMeta;
use crate::error::{Error, Result};

const CAMPAIGNS_DIR: &str = "campaigns";
const META_FILE: &str = "meta.json";
const HEXES_DIR: &str = "hexes";

/// File-backed campaign store.
///
/// Caches one generator per campaign; saving a campaign drops its entry.
pub struct Store {
    root: PathBuf,
    generators: Mutex<HashMap<String, Arc<HexGenerator>>>,
}

impl Store {
    /// Open a store rooted at `data_dir`. Directories are created lazily.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: data_dir.into(),
            generators: Mutex::new(HashMap::new()),
        }
    }

    /// Open the store named by `SEEDSCAPE_DATA_DIR`.
    pub fn from_env() -> Self {
        Self::open(crate::env::data_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn campaigns_dir(&self) -> PathBuf {
        self.root.join(CAMPAIGNS_DIR)
    }

    fn campaign_dir(&self, name: &str) -> Result<PathBuf> {
        validate_name("campaign", name)?;
        Ok(self.campaigns_dir().join(name))
    }

    fn meta_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.campaign_dir(name)?.join(META_FILE))
    }

    /// Path of a tile file: `<campaign>/hexes/<tile id>.json`
    pub fn tile_path(&self, campaign: &str, tile_id: &str) -> Result<PathBuf> {
        validate_name("tile", tile_id)?;
        Ok(self.campaign_dir(campaign)?.join(HEXES_DIR).join(format!("{}.json", tile_id)))
    }

    /// Names of all campaign directories, sorted.
    pub async fn list_campaigns(&self) -> Result<Vec<String>> {
        let dir = self.campaigns_dir();
        if !tokio::fs::try_exists(&dir).await? {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub async fn campaign_exists(&self, name: &str) -> Result<bool> {
        Ok(tokio::fs::try_exists(self.campaign_dir(name)?).await?)
    }

    /// Create a new campaign. Empty category domains are rejected up front.
    pub async fn create_campaign(&self, meta: CampaignMeta) -> Result<CampaignMeta> {
        meta.domains().validate()?;
        if self.campaign_exists(&meta.name).await? {
            return Err(Error::CampaignExists(meta.name));
        }

        tokio::fs::create_dir_all(self.campaign_dir(&meta.name)?.join(HEXES_DIR)).await?;
        self.save_campaign(&meta).await?;
        log::info!("Created campaign '{}'", meta.name);
        Ok(meta)
    }

    /// Load campaign metadata, or `None` if the campaign has no `meta.json`.
    pub async fn load_campaign(&self, name: &str) -> Result<Option<CampaignMeta>> {
        let path = self.meta_path(name)?;
        if !tokio::fs::try_exists(&path).await? {
            return Ok(None);
        }
        let text = tokio::fs::read_to_string(&path).await?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Write campaign metadata and drop any cached generator for it.
    ///
    /// The cache lock is held across the write so no generator built from the
    /// previous metadata can be inserted after this returns.
    pub async fn save_campaign(&self, meta: &CampaignMeta) -> Result<()> {
        let path = self.meta_path(&meta.name)?;
        let mut generators = self.generators.lock().await;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, serde_json::to_string_pretty(meta)?).await?;

        generators.remove(&meta.name);
        Ok(())
    }

    pub async fn load_tile(&self, campaign: &str, tile_id: &str) -> Result<Option<Tile>> {
        let path = self.tile_path(campaign, tile_id)?;
        if !tokio::fs::try_exists(&path).await? {
            return Ok(None);
        }
        let text = tokio::fs::read_to_string(&path).await?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    pub async fn save_tile(&self, campaign: &str, tile: &Tile) -> Result<()> {
        let path = self.tile_path(campaign, &tile.id)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, serde_json::to_string_pretty(tile)?).await?;
        Ok(())
    }

    /// Return the persisted tile, or generate, persist and return a fresh one.
    ///
    /// `coord` adds the terrain block to freshly generated tiles; persisted
    /// tiles are returned unchanged.
    pub async fn get_or_generate_tile(
        &self,
        campaign: &str,
        tile_id: &str,
        coord: Option<HexCoord>,
    ) -> Result<Tile> {
        if let Some(tile) = self.load_tile(campaign, tile_id).await? {
            return Ok(tile);
        }
        log::debug!("Tile '{}' of '{}' not on disk, generating", tile_id, campaign);

        let generator = self.generator(campaign).await?;
        let tile = match coord {
            Some(c) => generator.generate_at(tile_id, c)?,
            None => generator.generate(tile_id)?,
        };
        self.save_tile(campaign, &tile).await?;

        log::info!("Generated tile '{}' for campaign '{}' ({})", tile_id, campaign, tile.biome);
        Ok(tile)
    }

    /// Cached per-campaign generator; key material is derived once per campaign.
    ///
    /// Loading and inserting happen under one lock, serialized with `save_campaign`.
    async fn generator(&self, campaign: &str) -> Result<Arc<HexGenerator>> {
        let mut generators = self.generators.lock().await;
        if let Some(generator) = generators.get(campaign) {
            return Ok(Arc::clone(generator));
        }

        let meta = self
            .load_campaign(campaign)
            .await?
            .ok_or_else(|| Error::CampaignNotFound(campaign.to_string()))?;
        let generator = Arc::new(HexGenerator::new(&meta.generation_config())?);

        generators.insert(campaign.to_string(), Arc::clone(&generator));
        Ok(generator)
    }
}

/// Names become path components: reject empty, dotted and separator-bearing names.
fn validate_name(kind: &'static str, name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(Error::InvalidName { kind, name: name.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedscape::generation::CategoryDomains;
    use tempfile::TempDir;

    fn test_meta(name: &str) -> CampaignMeta {
        CampaignMeta::new(name, "abc", CategoryDomains::new(["x", "y"], ["f1", "f2"], ["e1", "e2"]))
    }

    #[tokio::test]
    async fn test_list_campaigns_empty_store() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Store::open(temp_dir.path());
        assert!(store.list_campaigns().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_load_campaign() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Store::open(temp_dir.path());

        let meta = store.create_campaign(test_meta("westmarch")).await.expect("create failed");
        assert!(store.campaign_exists("westmarch").await.unwrap());
        assert_eq!(store.list_campaigns().await.unwrap(), vec!["westmarch".to_string()]);

        let loaded = store.load_campaign("westmarch").await.unwrap().expect("campaign missing");
        assert_eq!(loaded, meta);
        assert!(temp_dir.path().join("campaigns/westmarch/hexes").is_dir());
    }

    #[tokio::test]
    async fn test_create_duplicate_campaign_fails() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Store::open(temp_dir.path());
        store.create_campaign(test_meta("dup")).await.unwrap();

        let err = store.create_campaign(test_meta("dup")).await.unwrap_err();
        assert!(matches!(err, Error::CampaignExists(name) if name == "dup"));
    }

    #[tokio::test]
    async fn test_create_campaign_rejects_empty_domain() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Store::open(temp_dir.path());
        let mut meta = test_meta("empty");
        meta.encounters.clear();

        let err = store.create_campaign(meta).await.unwrap_err();
        assert!(matches!(err, Error::Generation(ref e) if e.is_configuration()));
        assert!(err.to_string().contains("encounter"));
        assert!(!store.campaign_exists("empty").await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_names_rejected() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Store::open(temp_dir.path());

        for name in ["", "..", "a/b", "a\\b"] {
            assert!(matches!(
                store.load_campaign(name).await,
                Err(Error::InvalidName { kind: "campaign", .. })
            ));
        }
        assert!(matches!(
            store.tile_path("ok", "../escape"),
            Err(Error::InvalidName { kind: "tile", .. })
        ));
    }

    #[tokio::test]
    async fn test_get_or_generate_persists_once() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Store::open(temp_dir.path());
        store.create_campaign(test_meta("c")).await.unwrap();

        assert!(store.load_tile("c", "H4").await.unwrap().is_none());
        let first = store.get_or_generate_tile("c", "H4", None).await.expect("generate failed");
        assert!(store.tile_path("c", "H4").unwrap().exists());

        let second = store.get_or_generate_tile("c", "H4", None).await.unwrap();
        assert_eq!(first, second);
        assert!(first.discovered);
        assert!(["x", "y"].contains(&first.biome.as_str()));
    }

    #[tokio::test]
    async fn test_get_or_generate_returns_persisted_tile_unchanged() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Store::open(temp_dir.path());
        store.create_campaign(test_meta("c")).await.unwrap();

        let mut tile = store.get_or_generate_tile("c", "A1", None).await.unwrap();
        tile.notes = Some("A ruined watchtower".to_string());
        store.save_tile("c", &tile).await.unwrap();

        let loaded = store.get_or_generate_tile("c", "A1", None).await.unwrap();
        assert_eq!(loaded.notes.as_deref(), Some("A ruined watchtower"));
    }

    #[tokio::test]
    async fn test_generated_tile_matches_core() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Store::open(temp_dir.path());
        let meta = store.create_campaign(test_meta("c")).await.unwrap();

        let coord = HexCoord::new(2, -1);
        let stored = store.get_or_generate_tile("c", "2,-1", Some(coord)).await.unwrap();
        let direct = HexGenerator::new(&meta.generation_config())
            .unwrap()
            .generate_with("2,-1", Some(coord), stored.created_at)
            .unwrap();
        assert_eq!(stored, direct);
        assert!(stored.terrain.is_some());
    }

    #[tokio::test]
    async fn test_missing_campaign() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Store::open(temp_dir.path());

        let err = store.get_or_generate_tile("nowhere", "H4", None).await.unwrap_err();
        assert!(matches!(err, Error::CampaignNotFound(name) if name == "nowhere"));
    }

    #[tokio::test]
    async fn test_save_campaign_invalidates_generator() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Store::open(temp_dir.path());
        let mut meta = store.create_campaign(test_meta("c")).await.unwrap();
        store.get_or_generate_tile("c", "T0", None).await.unwrap();

        meta.biomes = vec!["only".to_string()];
        store.save_campaign(&meta).await.unwrap();

        let tile = store.get_or_generate_tile("c", "T1", None).await.unwrap();
        assert_eq!(tile.biome, "only");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_generation_never_caches_stale_campaign() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = Arc::new(Store::open(temp_dir.path()));
        let mut meta = store.create_campaign(test_meta("c")).await.unwrap();

        for round in 0..10 {
            let readers: Vec<_> = (0..8)
                .map(|i| {
                    let store = Arc::clone(&store);
                    tokio::spawn(async move {
                        store.get_or_generate_tile("c", &format!("R{}-{}", round, i), None).await
                    })
                })
                .collect();

            let biome = format!("biome-{}", round);
            meta.biomes = vec![biome.clone()];
            store.save_campaign(&meta).await.unwrap();

            for reader in readers {
                reader.await.expect("task panicked").expect("generation failed");
            }

            let tile = store
                .get_or_generate_tile("c", &format!("after-{}", round), None)
                .await
                .unwrap();
            assert_eq!(tile.biome, biome);
        }
    }
}
