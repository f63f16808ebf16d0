//! Physics world configuration

use crate::spatial::QuadTreeConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a physics world
///
/// The initial dimensions seed both the world bounds and the quadtree
/// region; both grow on demand as bodies are added, so these are starting
/// values, not limits. Hosts typically pass their viewport size here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Initial world width in grid units
    pub initial_width: f32,

    /// Initial world height in grid units
    pub initial_height: f32,

    /// Quadtree tuning
    #[serde(default)]
    pub tree: QuadTreeConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            initial_width: 80.0,
            initial_height: 25.0,
            tree: QuadTreeConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Load configuration from a TOML or RON file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to a TOML or RON file
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();

        assert_eq!(config.initial_width, 80.0);
        assert_eq!(config.initial_height, 25.0);
        assert_eq!(config.tree.max_objects_per_node, 8);
    }

    #[test]
    fn test_toml_round_trip() {
        let path = std::env::temp_dir().join("arcade_physics_world_config.toml");
        let path = path.to_str().unwrap();

        let mut config = WorldConfig::default();
        config.initial_width = 120.0;
        config.tree.max_depth = 5;

        config.save_to_file(path).unwrap();
        let loaded = WorldConfig::load_from_file(path).unwrap();

        assert_eq!(loaded.initial_width, 120.0);
        assert_eq!(loaded.tree.max_depth, 5);
    }

    #[test]
    fn test_unsupported_format() {
        let result = WorldConfig::default().save_to_file("world.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
