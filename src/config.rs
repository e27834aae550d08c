//! # World Configuration
//!
//! Construction-time parameters for a [`World`](crate::voxels::world::World),
//! loadable from JSON. Both sizes are fixed for the lifetime of the world
//! once it has been built.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::error::VoxelError;

/// Parameters used to build a world.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorldConfig {
    /// Seed string for the terrain generator. The same seed always yields the
    /// same terrain, on every thread and in every process.
    #[serde(default = "default_seed")]
    pub seed: String,

    /// Edge length of one grid cell in world units. Must be at least 1.
    #[serde(default = "default_grid_item_size")]
    pub grid_item_size: i32,

    /// Edge length of a chunk's square x/z footprint in blocks. Must be at
    /// least 1.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i32,
}

fn default_seed() -> String {
    "default".to_string()
}

fn default_grid_item_size() -> i32 {
    1
}

fn default_chunk_size() -> i32 {
    16
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            seed: default_seed(),
            grid_item_size: default_grid_item_size(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl WorldConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Arguments
    /// * `json` - JSON text with any subset of the configuration fields;
    ///   missing fields take their defaults
    ///
    /// # Returns
    /// The validated configuration, or an error describing the first invalid
    /// field.
    pub fn from_json_str(json: &str) -> Result<Self, VoxelError> {
        let config: WorldConfig = serde_json::from_str(json)
            .map_err(|e| VoxelError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, VoxelError> {
        let file = File::open(path).map_err(|e| VoxelError::InvalidConfig(e.to_string()))?;
        let reader = BufReader::new(file);
        let config: WorldConfig = serde_json::from_reader(reader)
            .map_err(|e| VoxelError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> Result<(), VoxelError> {
        if self.grid_item_size < 1 {
            return Err(VoxelError::InvalidConfig(format!(
                "grid_item_size must be >= 1, got {}",
                self.grid_item_size
            )));
        }
        if self.chunk_size < 1 {
            return Err(VoxelError::InvalidConfig(format!(
                "chunk_size must be >= 1, got {}",
                self.chunk_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.grid_item_size, 1);
    }

    #[test]
    fn parses_partial_json() {
        let config = WorldConfig::from_json_str(r#"{ "seed": "alpine", "chunk_size": 8 }"#)
            .expect("partial config should parse");
        assert_eq!(config.seed, "alpine");
        assert_eq!(config.chunk_size, 8);
        assert_eq!(config.grid_item_size, 1);
    }

    #[test]
    fn rejects_non_positive_sizes() {
        assert!(WorldConfig::from_json_str(r#"{ "chunk_size": 0 }"#).is_err());
        assert!(WorldConfig::from_json_str(r#"{ "grid_item_size": -3 }"#).is_err());
    }
}
