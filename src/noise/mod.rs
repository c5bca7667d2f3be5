//! Keyed-hash value noise for hex maps.
//!
//! The pipeline, leaf to root:
//! 1. [`KeyMaterial`] derived once per campaign seed
//! 2. [`LatticeHash`]: keyed BLAKE2b of (channel salt, q, r) into [0, 1)
//! 3. [`ValueNoiseField`]: fade-weighted bilinear blend of lattice values
//! 4. [`FractalNoise`]: octave sum normalized by total amplitude
//!
//! [`Noise`] bundles one fractal field per [`NoiseChannel`] for a campaign.

pub mod key;
pub mod channel;
pub mod lattice;
pub mod value;
pub mod fractal;

pub use key::{KeyMaterial, KeyedHash};
pub use channel::{ChannelConfig, ChannelTable, NoiseChannel};
pub use lattice::LatticeHash;
pub use value::ValueNoiseField;
pub use fractal::FractalNoise;

use crate::core::{Error, Result};
use crate::math::{lerp, HexCoord};

/// Version of the hash scheme + fade curve. Bump on any change that alters output.
pub const NOISE_FORMAT_VERSION: u32 = 1;

/// Largest f64 strictly below 1.0.
pub(crate) const MAX_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Per-campaign noise: one fractal field per channel, sharing one key.
#[derive(Clone)]
pub struct Noise {
    altitude: FractalNoise,
    humidity: FractalNoise,
}

impl Noise {
    pub fn new(key: &KeyMaterial, channels: &ChannelTable) -> Self {
        Self {
            altitude: FractalNoise::new(key, channels.get(NoiseChannel::Altitude)),
            humidity: FractalNoise::new(key, channels.get(NoiseChannel::Humidity)),
        }
    }

    /// Noise for a seed with the standard channel table.
    pub fn from_seed(seed: &str) -> Result<Self> {
        let channels = ChannelTable::standard()?;
        Ok(Self::new(&KeyMaterial::derive(seed), &channels))
    }

    pub fn channel(&self, channel: NoiseChannel) -> &FractalNoise {
        match channel {
            NoiseChannel::Altitude => &self.altitude,
            NoiseChannel::Humidity => &self.humidity,
        }
    }

    /// Fractal noise of `channel` at the center of `coord`, in [0, 1).
    pub fn noise(&self, channel: NoiseChannel, coord: HexCoord) -> f64 {
        self.channel(channel).sample_hex(coord)
    }

    /// Blend a cell's noise toward the mean of its six neighbors.
    ///
    /// `frac = 0` is the cell's own value, `frac = 1` the neighbor mean.
    pub fn smooth_noise(&self, channel: NoiseChannel, coord: HexCoord, frac: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&frac) {
            return Err(Error::SmoothingFraction(frac));
        }

        let center = self.noise(channel, coord);
        let neighbors = coord.neighbors();
        let mean = neighbors
            .iter()
            .map(|&n| self.noise(channel, n))
            .sum::<f64>()
            / neighbors.len() as f64;

        Ok(lerp(center, mean, frac))
    }
}
