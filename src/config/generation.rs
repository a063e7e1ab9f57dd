//! Generation limits.

use config::ConfigError;
use serde::Deserialize;

/// Bounds applied to incoming generation requests.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Maximum draws per batch.
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,

    /// Maximum numbers in `combinationNumbers`.
    #[serde(default = "default_max_inclusion")]
    pub max_inclusion: usize,

    /// Maximum numbers in `excludeNumbers`.
    #[serde(default = "default_max_exclusion")]
    pub max_exclusion: usize,

    /// Maximum special set ids.
    #[serde(default = "default_max_special_sets")]
    pub max_special_sets: usize,

    /// Maximum touch digits.
    #[serde(default = "default_max_digits")]
    pub max_touches: usize,

    /// Maximum sum digits.
    #[serde(default = "default_max_digits")]
    pub max_sums: usize,
}

const fn default_max_quantity() -> u32 {
    50
}

const fn default_max_inclusion() -> usize {
    40
}

const fn default_max_exclusion() -> usize {
    10
}

const fn default_max_special_sets() -> usize {
    5
}

const fn default_max_digits() -> usize {
    10
}

impl GenerationConfig {
    /// Validate the limits.
    ///
    /// # Errors
    ///
    /// Returns an error if any limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("generation.max_quantity", self.max_quantity as usize),
            ("generation.max_inclusion", self.max_inclusion),
            ("generation.max_exclusion", self.max_exclusion),
            ("generation.max_special_sets", self.max_special_sets),
            ("generation.max_touches", self.max_touches),
            ("generation.max_sums", self.max_sums),
        ];
        for (key, value) in limits {
            if value == 0 {
                return Err(ConfigError::Message(format!("{key} cannot be 0")));
            }
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_quantity: default_max_quantity(),
            max_inclusion: default_max_inclusion(),
            max_exclusion: default_max_exclusion(),
            max_special_sets: default_max_special_sets(),
            max_touches: default_max_digits(),
            max_sums: default_max_digits(),
        }
    }
}
