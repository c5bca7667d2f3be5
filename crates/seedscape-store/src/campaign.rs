//! Campaign metadata as persisted in `meta.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seedscape::generation::{CategoryDomains, GenerationConfig, TerrainScale};

pub const CAMPAIGN_SCHEMA_VERSION: &str = "0.1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignMeta {
    pub name: String,
    pub seed: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_version")]
    pub version: String,
    pub biomes: Vec<String>,
    /// Stylesheet file inside the campaign directory, served by the frontend.
    #[serde(default)]
    pub biomes_css: String,
    pub features: Vec<String>,
    pub encounters: Vec<String>,
    #[serde(default)]
    pub terrain: TerrainScale,
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

fn default_version() -> String {
    CAMPAIGN_SCHEMA_VERSION.to_string()
}

impl CampaignMeta {
    pub fn new(name: impl Into<String>, seed: impl Into<String>, domains: CategoryDomains) -> Self {
        Self {
            name: name.into(),
            seed: seed.into(),
            description: String::new(),
            created_at: Utc::now(),
            version: default_version(),
            biomes: domains.biomes,
            biomes_css: "biomes.css".to_string(),
            features: domains.features,
            encounters: domains.encounters,
            terrain: TerrainScale::default(),
        }
    }

    pub fn domains(&self) -> CategoryDomains {
        CategoryDomains {
            biomes: self.biomes.clone(),
            features: self.features.clone(),
            encounters: self.encounters.clone(),
        }
    }

    /// Everything the generator needs from this campaign.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            seed: self.seed.clone(),
            domains: self.domains(),
            terrain: self.terrain.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_from_minimal_json() {
        let json = r#"{
            "name": "westmarch",
            "seed": "abc",
            "biomes": ["forest", "swamp"],
            "features": ["ruins"],
            "encounters": ["wolves"]
        }"#;
        let meta: CampaignMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.version, CAMPAIGN_SCHEMA_VERSION);
        assert_eq!(meta.description, "");
        assert_eq!(meta.domains().biomes, vec!["forest", "swamp"]);
    }

    #[test]
    fn test_generation_config_carries_seed_and_domains() {
        let meta = CampaignMeta::new("c", "seed-1", CategoryDomains::new(["b"], ["f"], ["e"]));
        let config = meta.generation_config();
        assert_eq!(config.seed, "seed-1");
        assert_eq!(config.domains, meta.domains());
    }
}
