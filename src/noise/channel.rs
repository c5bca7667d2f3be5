//! Named noise channels and their fractal parameters

use crate::core::ConfigurationError;
use super::key::{salt_for, Salt};

/// Immutable descriptor of one noise channel. Validated at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelConfig {
    label: String,
    salt: Salt,
    base_frequency: f64,
    octaves: u32,
    lacunarity: f64,
    gain: f64,
}

impl ChannelConfig {
    /// Build a channel, rejecting frequencies outside (0, 1], zero octaves and
    /// non-positive lacunarity or gain.
    pub fn new(
        label: &str,
        base_frequency: f64,
        octaves: u32,
        lacunarity: f64,
        gain: f64,
    ) -> Result<Self, ConfigurationError> {
        if !(base_frequency > 0.0 && base_frequency <= 1.0) {
            return Err(ConfigurationError::InvalidFrequency {
                label: label.to_string(),
                value: base_frequency,
            });
        }
        if octaves < 1 {
            return Err(ConfigurationError::InvalidOctaves {
                label: label.to_string(),
                octaves,
            });
        }
        for (parameter, value) in [("lacunarity", lacunarity), ("gain", gain)] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigurationError::NonPositive {
                    label: label.to_string(),
                    parameter,
                    value,
                });
            }
        }

        Ok(Self {
            label: label.to_string(),
            salt: salt_for(label),
            base_frequency,
            octaves,
            lacunarity,
            gain,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn base_frequency(&self) -> f64 {
        self.base_frequency
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }
}

/// Continuous fields sampled for every located tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseChannel {
    Altitude,
    Humidity,
}

impl NoiseChannel {
    pub const ALL: [NoiseChannel; 2] = [NoiseChannel::Altitude, NoiseChannel::Humidity];

    /// Label doubling as the channel's salt source.
    pub fn label(self) -> &'static str {
        match self {
            NoiseChannel::Altitude => "altitude",
            NoiseChannel::Humidity => "humidity",
        }
    }

    /// Tuned defaults: (base_frequency, octaves, lacunarity, gain).
    fn defaults(self) -> (f64, u32, f64, f64) {
        match self {
            NoiseChannel::Altitude => (0.05, 4, 2.0, 0.5),
            NoiseChannel::Humidity => (0.05, 4, 2.0, 0.5),
        }
    }

    fn index(self) -> usize {
        match self {
            NoiseChannel::Altitude => 0,
            NoiseChannel::Humidity => 1,
        }
    }

    /// The channel's default configuration.
    pub fn default_config(self) -> Result<ChannelConfig, ConfigurationError> {
        let (freq, octaves, lacunarity, gain) = self.defaults();
        ChannelConfig::new(self.label(), freq, octaves, lacunarity, gain)
    }
}

/// One validated [`ChannelConfig`] per [`NoiseChannel`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelTable {
    configs: [ChannelConfig; 2],
}

impl ChannelTable {
    /// The built-in channel table, validated eagerly.
    pub fn standard() -> Result<Self, ConfigurationError> {
        Ok(Self {
            configs: [
                NoiseChannel::Altitude.default_config()?,
                NoiseChannel::Humidity.default_config()?,
            ],
        })
    }

    /// Replace one channel's parameters.
    pub fn with_channel(mut self, channel: NoiseChannel, config: ChannelConfig) -> Self {
        self.configs[channel.index()] = config;
        self
    }

    pub fn get(&self, channel: NoiseChannel) -> &ChannelConfig {
        &self.configs[channel.index()]
    }
}
