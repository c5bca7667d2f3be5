//! Fractal (multi-octave) value noise

use super::channel::ChannelConfig;
use super::key::KeyMaterial;
use super::lattice::LatticeHash;
use super::value::ValueNoiseField;
use super::MAX_BELOW_ONE;
use crate::math::HexCoord;

/// Weighted sum of value-noise octaves for one channel, normalized to [0, 1).
#[derive(Clone)]
pub struct FractalNoise {
    field: ValueNoiseField,
    config: ChannelConfig,
}

impl FractalNoise {
    pub fn new(key: &KeyMaterial, config: &ChannelConfig) -> Self {
        Self {
            field: ValueNoiseField::new(LatticeHash::new(key, config)),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    pub fn field(&self) -> &ValueNoiseField {
        &self.field
    }

    /// Sample at plane position `(x, y)`.
    ///
    /// Octave `k` is sampled at `base_frequency * lacunarity^k` with weight
    /// `gain^k`; the result is the weighted average.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut amplitude = 1.0;
        let mut frequency = self.config.base_frequency();
        let mut total = 0.0;
        let mut weight = 0.0;

        for _ in 0..self.config.octaves() {
            total += amplitude * self.field.sample(x * frequency, y * frequency);
            weight += amplitude;
            amplitude *= self.config.gain();
            frequency *= self.config.lacunarity();
        }

        // weight >= 1: the first octave always contributes amplitude 1
        (total / weight).min(MAX_BELOW_ONE)
    }

    /// Sample at the plane center of a hex cell.
    pub fn sample_hex(&self, coord: HexCoord) -> f64 {
        let p = coord.to_plane();
        self.sample(p.x, p.y)
    }
}
