use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::grid::{Cell, Grid};

/// How key presses that arrive between two ticks are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputPolicy {
    /// The most recent valid press is used
    #[default]
    LastWins,
    /// The first valid press is kept, later ones are dropped
    FirstWins,
}

/// Reasons a configuration cannot be played
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("origin ({}, {}) lies outside the {width}x{height} grid", .origin.x, .origin.y)]
    OriginOutOfBounds {
        origin: Cell,
        width: usize,
        height: usize,
    },

    #[error("grid sides are limited to {max} cells, got {width}x{height}")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("speed_start must be positive")]
    ZeroSpeed,

    #[error("speed_start ({start}) cannot exceed speed_max ({max})")]
    SpeedAboveMax { start: u32, max: u32 },

    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Cell a fresh snake starts from; the grid center when unset
    pub origin: Option<Cell>,

    /// Ticks per second at the start of every run
    pub speed_start: u32,
    /// Ticks per second added for each apple eaten
    pub speed_step: u32,
    /// Optional upper bound on the tick rate; speed grows without limit when unset
    pub speed_max: Option<u32>,

    /// Seed for the random source; a fresh one is drawn when unset
    pub seed: Option<u64>,
    /// How presses between two ticks are combined
    pub input_policy: InputPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            origin: None,
            speed_start: 20,
            speed_step: 1,
            speed_max: None,
            seed: None,
            input_policy: InputPolicy::LastWins,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Same configuration with a fixed random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a TOML document; missing keys take their default value
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if self.grid_width > Grid::MAX_SIDE || self.grid_height > Grid::MAX_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: Grid::MAX_SIDE,
            });
        }

        if let Some(origin) = self.origin {
            if !self.grid().contains(origin) {
                return Err(ConfigError::OriginOutOfBounds {
                    origin,
                    width: self.grid_width,
                    height: self.grid_height,
                });
            }
        }

        if self.speed_start == 0 {
            return Err(ConfigError::ZeroSpeed);
        }

        if let Some(max) = self.speed_max {
            if self.speed_start > max {
                return Err(ConfigError::SpeedAboveMax {
                    start: self.speed_start,
                    max,
                });
            }
        }

        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Where new snakes are placed
    pub fn origin(&self) -> Cell {
        self.origin.unwrap_or_else(|| self.grid().center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.speed_start, 20);
        assert_eq!(config.speed_max, None);
        assert_eq!(config.origin(), Cell::new(16, 12));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.input_policy, InputPolicy::LastWins);
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            GameConfig::new(0, 5).validate(),
            Err(ConfigError::EmptyGrid { .. })
        ));

        let mut config = GameConfig::small();
        config.origin = Some(Cell::new(10, 0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OriginOutOfBounds { .. })
        ));

        let mut config = GameConfig::small();
        config.speed_start = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSpeed)));

        let mut config = GameConfig::small();
        config.speed_max = Some(5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpeedAboveMax { start: 20, max: 5 })
        ));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(matches!(
            GameConfig::new(1usize << 32, 4).validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));
        assert!(matches!(
            GameConfig::new(4, Grid::MAX_SIDE + 1).validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));
        assert!(GameConfig::new(Grid::MAX_SIDE, 1).validate().is_ok());
    }

    #[test]
    fn test_speed_max_from_toml() {
        let config = GameConfig::from_toml_str("speed_max = 45").unwrap();
        assert_eq!(config.speed_max, Some(45));
        assert_eq!(GameConfig::from_toml_str("").unwrap().speed_max, None);
    }

    #[test]
    fn test_from_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            grid_width = 8
            grid_height = 6
            seed = 42
            input_policy = "first-wins"

            [origin]
            x = 1
            y = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.grid_width, 8);
        assert_eq!(config.grid_height, 6);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.input_policy, InputPolicy::FirstWins);
        assert_eq!(config.origin(), Cell::new(1, 2));
        // Untouched keys keep their defaults
        assert_eq!(config.speed_start, 20);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        assert!(matches!(
            GameConfig::from_toml_str("grid_width = 0"),
            Err(ConfigError::EmptyGrid { .. })
        ));
        assert!(matches!(
            GameConfig::from_toml_str("grid_width = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = GameConfig::from_toml_file(Path::new("/nonexistent/torus_snake.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
