//! Tile generation: turns a campaign seed and tile id into a [`Tile`].
//!
//! The generator orchestrates:
//! 1. Domain validation (fails before any hashing)
//! 2. Category selection for biome, feature and encounter
//! 3. Fractal noise sampling for altitude and humidity (located tiles only)
//!
//! Generation is pure and holds no mutable state: one [`HexGenerator`] per
//! campaign may be shared freely across threads.

pub mod config;
pub mod select;
pub mod tile;

pub use config::{CategoryDomains, GenerationConfig, TerrainScale};
pub use select::{CategoryAttribute, CategorySelector};
pub use tile::{Terrain, Tile, TileId, TILE_SCHEMA_VERSION};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::core::Result;
use crate::math::{sround, HexCoord};
use crate::noise::{ChannelTable, KeyMaterial, Noise, NoiseChannel};

/// Per-campaign generator: key material derived once, reused for every tile.
#[derive(Clone)]
pub struct HexGenerator {
    key: Arc<KeyMaterial>,
    selector: CategorySelector,
    noise: Noise,
    domains: CategoryDomains,
    terrain: TerrainScale,
}

impl HexGenerator {
    /// Create a generator with the standard channel table.
    ///
    /// Empty domains are rejected before the channel salts are hashed.
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        config.domains.validate()?;
        Self::with_channels(config, &ChannelTable::standard()?)
    }

    /// Create a generator with custom channel parameters.
    pub fn with_channels(config: &GenerationConfig, channels: &ChannelTable) -> Result<Self> {
        config.domains.validate()?;

        let key = Arc::new(KeyMaterial::derive(&config.seed));
        log::debug!(
            "Generator ready: {} biomes, {} features, {} encounters",
            config.domains.biomes.len(),
            config.domains.features.len(),
            config.domains.encounters.len()
        );

        Ok(Self {
            selector: CategorySelector::new(&key),
            noise: Noise::new(&key, channels),
            key,
            domains: config.domains.clone(),
            terrain: config.terrain.clone(),
        })
    }

    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }

    pub fn noise(&self) -> &Noise {
        &self.noise
    }

    pub fn domains(&self) -> &CategoryDomains {
        &self.domains
    }

    /// Generate an unlocated tile stamped with the current time.
    pub fn generate(&self, tile_id: &str) -> Result<Tile> {
        self.generate_with(tile_id, None, Utc::now())
    }

    /// Generate a tile at `coord`, including its terrain block.
    pub fn generate_at(&self, tile_id: &str, coord: HexCoord) -> Result<Tile> {
        self.generate_with(tile_id, Some(coord), Utc::now())
    }

    /// Generate with an explicit timestamp. Identical inputs give identical tiles.
    pub fn generate_with(
        &self,
        tile_id: &str,
        coord: Option<HexCoord>,
        created_at: DateTime<Utc>,
    ) -> Result<Tile> {
        let pick = |attribute| self.selector.select(attribute, tile_id, self.domains.get(attribute));

        let biome = pick(CategoryAttribute::Biome)?;
        let feature = pick(CategoryAttribute::Feature)?;
        let encounter = pick(CategoryAttribute::Encounter)?;

        Ok(Tile {
            id: tile_id.to_string(),
            biome: biome.to_string(),
            features: vec![feature.to_string()],
            encounter: encounter.to_string(),
            discovered: true,
            notes: None,
            terrain: coord.map(|c| self.terrain_at(c)),
            created_at,
            version: TILE_SCHEMA_VERSION.to_string(),
        })
    }

    /// Continuous attributes at a hex cell.
    pub fn terrain_at(&self, coord: HexCoord) -> Terrain {
        let digits = self.terrain.significant_digits;
        let altitude01 = self.noise.noise(NoiseChannel::Altitude, coord);
        let humidity = self.noise.noise(NoiseChannel::Humidity, coord);
        let span = self.terrain.max_altitude - self.terrain.min_altitude;

        Terrain {
            altitude: sround(self.terrain.min_altitude + altitude01 * span, digits),
            humidity: sround(humidity, digits),
        }
    }

    /// Generate every tile within `radius` of `center`, in parallel.
    ///
    /// `id_of` names each cell; output order follows [`HexCoord::range`].
    pub fn generate_area<F>(
        &self,
        center: HexCoord,
        radius: u32,
        created_at: DateTime<Utc>,
        id_of: F,
    ) -> Result<Vec<(HexCoord, Tile)>>
    where
        F: Fn(HexCoord) -> TileId + Sync,
    {
        let cells = center.range(radius);
        let start = std::time::Instant::now();

        let tiles = cells
            .par_iter()
            .map(|&coord| {
                let id = id_of(coord);
                self.generate_with(&id, Some(coord), created_at).map(|t| (coord, t))
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Generated {} tiles (radius {}) in {:.1}ms",
            tiles.len(),
            radius,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(tiles)
    }
}

/// Single-shot entry point: `(seed, domains, tile_id) -> Tile`.
///
/// Empty domains abort with a configuration error before any hashing.
pub fn generate(
    seed: &str,
    domains: &CategoryDomains,
    tile_id: &str,
    created_at: Option<DateTime<Utc>>,
) -> Result<Tile> {
    let config = GenerationConfig::new(seed, domains.clone());
    HexGenerator::new(&config)?.generate_with(tile_id, None, created_at.unwrap_or_else(Utc::now))
}

/// Axial coordinate as a tile id, `"q,r"`.
pub fn axial_id(coord: HexCoord) -> TileId {
    format!("{},{}", coord.q, coord.r)
}
