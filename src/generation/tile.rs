//! Generated tile record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema version stamped on every generated tile.
pub const TILE_SCHEMA_VERSION: &str = "0.1";

/// Identifier of a tile within a campaign (opaque to the generator).
pub type TileId = String;

/// Continuous attributes sampled from the campaign's noise channels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    /// Metres, rounded to the configured significant digits.
    pub altitude: f64,
    /// Relative humidity in [0, 1], rounded to the configured significant digits.
    pub humidity: f64,
}

/// A generated hex tile.
///
/// Everything except `created_at` is a pure function of the campaign seed,
/// its category domains and the tile id (plus the coordinate, for `terrain`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub biome: String,
    /// At least one entry.
    pub features: Vec<String>,
    pub encounter: String,
    #[serde(default)]
    pub discovered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<Terrain>,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    TILE_SCHEMA_VERSION.to_string()
}

impl Tile {
    /// Primary feature (first entry).
    pub fn feature(&self) -> Option<&str> {
        self.features.first().map(String::as_str)
    }
}
