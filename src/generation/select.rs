//! Deterministic category selection for discrete tile attributes.

use crate::core::ConfigurationError;
use crate::noise::key::{salt_for, KeyMaterial, KeyedHash};

/// Discrete attributes drawn from campaign-configured domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryAttribute {
    Biome,
    Feature,
    Encounter,
}

impl CategoryAttribute {
    pub const ALL: [CategoryAttribute; 3] = [
        CategoryAttribute::Biome,
        CategoryAttribute::Feature,
        CategoryAttribute::Encounter,
    ];

    /// Salt label; distinct per attribute so choices for one tile are independent.
    pub fn label(self) -> &'static str {
        match self {
            CategoryAttribute::Biome => "biome",
            CategoryAttribute::Feature => "feature",
            CategoryAttribute::Encounter => "encounter",
        }
    }
}

/// Picks domain entries by keyed hash of (tile id, attribute salt).
#[derive(Clone)]
pub struct CategorySelector {
    hashers: [KeyedHash; 3],
}

impl CategorySelector {
    pub fn new(key: &KeyMaterial) -> Self {
        Self {
            hashers: CategoryAttribute::ALL.map(|a| KeyedHash::new(key, &salt_for(a.label()))),
        }
    }

    fn hasher(&self, attribute: CategoryAttribute) -> &KeyedHash {
        &self.hashers[attribute as usize]
    }

    /// Index into a domain of `len` entries for this tile and attribute.
    pub fn index(&self, attribute: CategoryAttribute, tile_id: &str, len: usize) -> usize {
        (self.hasher(attribute).hash_parts(&[tile_id.as_bytes()]) % len as u64) as usize
    }

    /// Select one entry of `domain`. Empty domains are a configuration error.
    pub fn select<'d>(
        &self,
        attribute: CategoryAttribute,
        tile_id: &str,
        domain: &'d [String],
    ) -> Result<&'d str, ConfigurationError> {
        if domain.is_empty() {
            return Err(ConfigurationError::EmptyDomain {
                attribute: attribute.label().to_string(),
            });
        }
        Ok(&domain[self.index(attribute, tile_id, domain.len())])
    }
}

/// One-off selection with an arbitrary salt label.
pub fn select<'d>(
    key: &KeyMaterial,
    tile_id: &str,
    salt_label: &str,
    domain: &'d [String],
) -> Result<&'d str, ConfigurationError> {
    if domain.is_empty() {
        return Err(ConfigurationError::EmptyDomain {
            attribute: salt_label.to_string(),
        });
    }
    let h = KeyedHash::new(key, &salt_for(salt_label)).hash_parts(&[tile_id.as_bytes()]);
    Ok(&domain[(h % domain.len() as u64) as usize])
}
