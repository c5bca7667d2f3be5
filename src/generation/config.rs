//! Campaign-level generation configuration.

use serde::{Deserialize, Serialize};

use crate::core::ConfigurationError;
use super::select::CategoryAttribute;

/// Per-campaign category lists for the discrete tile attributes.
///
/// Every list must be non-empty; there are no built-in fallbacks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDomains {
    pub biomes: Vec<String>,
    pub features: Vec<String>,
    pub encounters: Vec<String>,
}

impl CategoryDomains {
    pub fn new<S: Into<String>>(
        biomes: impl IntoIterator<Item = S>,
        features: impl IntoIterator<Item = S>,
        encounters: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            biomes: biomes.into_iter().map(Into::into).collect(),
            features: features.into_iter().map(Into::into).collect(),
            encounters: encounters.into_iter().map(Into::into).collect(),
        }
    }

    /// The domain backing one attribute.
    pub fn get(&self, attribute: CategoryAttribute) -> &[String] {
        match attribute {
            CategoryAttribute::Biome => &self.biomes,
            CategoryAttribute::Feature => &self.features,
            CategoryAttribute::Encounter => &self.encounters,
        }
    }

    /// Fails on the first empty domain, in biome, feature, encounter order.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for attribute in CategoryAttribute::ALL {
            if self.get(attribute).is_empty() {
                return Err(ConfigurationError::EmptyDomain {
                    attribute: attribute.label().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Maps the [0, 1) altitude field onto metres.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainScale {
    pub min_altitude: f64,
    pub max_altitude: f64,
    /// Significant digits kept when rounding continuous attributes.
    pub significant_digits: u32,
}

impl Default for TerrainScale {
    fn default() -> Self {
        Self {
            min_altitude: -100.0,
            max_altitude: 10_000.0,
            significant_digits: 3,
        }
    }
}

/// Everything the generator needs from the campaign configuration collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sole root of determinism for the campaign.
    pub seed: String,
    pub domains: CategoryDomains,
    #[serde(default)]
    pub terrain: TerrainScale,
}

impl GenerationConfig {
    pub fn new(seed: impl Into<String>, domains: CategoryDomains) -> Self {
        Self {
            seed: seed.into(),
            domains,
            terrain: TerrainScale::default(),
        }
    }
}
