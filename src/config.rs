//! Construction-time settings for a simulation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_BIRTH_PROBABILITY: f64 = 0.3;
/// Largest side length the shell can lay out
pub const MAX_DIMENSION: usize = 1000;

/// Grid size, cadence and seeding density of a simulation.
/// Fixed for the lifetime of the simulation it builds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Delay between the end of one tick and the start of the next.
    #[serde(rename = "tick_delay_ms", with = "millis")]
    pub tick_delay: Duration,
    /// Chance that `randomize` makes a given cell alive.
    pub birth_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_delay: DEFAULT_TICK_DELAY,
            birth_probability: DEFAULT_BIRTH_PROBABILITY,
        }
    }
}

impl SimulationConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tick_delay(mut self, tick_delay: Duration) -> Self {
        self.tick_delay = tick_delay;
        self
    }

    pub fn with_birth_probability(mut self, probability: f64) -> Self {
        self.birth_probability = probability;
        self
    }

    /// Reject values that cannot drive a simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid("grid dimensions must be positive"));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(ConfigError::Invalid("grid cell count overflows"));
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::Invalid("grid dimensions exceed 1000 cells per side"));
        }
        if self.tick_delay.is_zero() {
            return Err(ConfigError::Invalid("tick delay must be positive"));
        }
        if !(0.0..=1.0).contains(&self.birth_probability) {
            return Err(ConfigError::Invalid(
                "birth probability must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
