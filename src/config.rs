//! Game configuration: field geometry, physics constants, and timing.
//!
//! All values the simulation reads are collected here so tests can run the
//! core against small, deterministic fields instead of the default play area.

use std::fmt;

/// Frame interval for the fixed-step simulation, in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Geometry and physics inputs, fixed at startup.
///
/// Units are abstract field units (the render layer scales them to terminal
/// cells). Velocities are per-frame; there is no delta-time scaling.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Play field width in field units.
    pub field_width: f64,
    /// Play field height in field units. The ground sits at this y.
    pub field_height: f64,
    /// Bird bounding box width.
    pub bird_width: f64,
    /// Bird bounding box height.
    pub bird_height: f64,
    /// Bird's fixed horizontal position (left edge).
    pub bird_x: f64,
    /// Downward velocity added each frame.
    pub gravity: f64,
    /// Velocity assigned on flap (negative = upward).
    pub flap_strength: f64,
    /// Pipe column width.
    pub pipe_width: f64,
    /// Vertical opening between a pipe's top and bottom segments.
    pub gap_size: f64,
    /// Leftward distance every pipe travels per frame.
    pub pipe_speed: f64,
    /// A new pipe spawns every this many frames (frame 0 included).
    pub spawn_interval: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 320.0,
            field_height: 480.0,
            bird_width: 30.0,
            bird_height: 20.0,
            bird_x: 50.0,
            gravity: 0.2,
            flap_strength: -5.0,
            pipe_width: 50.0,
            gap_size: 120.0,
            pipe_speed: 2.0,
            spawn_interval: 150,
        }
    }
}

/// A configuration the simulation cannot run against.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension or speed that must be positive is zero or negative.
    NonPositive(&'static str),
    /// `spawn_interval` is zero; the spawn check divides by it.
    ZeroSpawnInterval,
    /// The random gap placement range `[20, field_height - gap_size - 50)`
    /// is empty or inverted.
    EmptySpawnRange { gap_size: f64, field_height: f64 },
    /// The bird cannot fit between ceiling and ground.
    BirdExceedsField { bird_height: f64, field_height: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive(name) => {
                write!(f, "{} must be positive", name)
            }
            ConfigError::ZeroSpawnInterval => {
                write!(f, "spawn_interval must be at least 1 frame")
            }
            ConfigError::EmptySpawnRange {
                gap_size,
                field_height,
            } => write!(
                f,
                "gap_size {} leaves no room for pipe placement in a field of height {} \
                 (gap_size + 70 must be below field_height)",
                gap_size, field_height
            ),
            ConfigError::BirdExceedsField {
                bird_height,
                field_height,
            } => write!(
                f,
                "bird height {} does not fit in a field of height {}",
                bird_height, field_height
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Margin the gap placement keeps above the lowest allowed gap top.
const GAP_TOP_MIN: f64 = 20.0;
/// Margin the gap placement keeps below the highest allowed gap bottom.
const GAP_BOTTOM_MARGIN: f64 = 50.0;

impl GameConfig {
    /// Lower bound (inclusive) of the random gap-top range.
    pub fn gap_top_min(&self) -> f64 {
        GAP_TOP_MIN
    }

    /// Upper bound (exclusive) of the random gap-top range.
    pub fn gap_top_max(&self) -> f64 {
        self.field_height - self.gap_size - GAP_BOTTOM_MARGIN
    }

    /// Reject degenerate geometry before any session starts.
    ///
    /// The pipe spawner draws from `[gap_top_min, gap_top_max)` without
    /// re-checking the range, so an empty range must never reach it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("gap_size", self.gap_size),
            ("pipe_speed", self.pipe_speed),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive(name));
            }
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.bird_height >= self.field_height {
            return Err(ConfigError::BirdExceedsField {
                bird_height: self.bird_height,
                field_height: self.field_height,
            });
        }
        if self.gap_top_max() <= self.gap_top_min() {
            return Err(ConfigError::EmptySpawnRange {
                gap_size: self.gap_size,
                field_height: self.field_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_gap_filling_field_is_rejected() {
        let config = GameConfig {
            gap_size: 480.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptySpawnRange { .. })
        ));
    }

    #[test]
    fn test_spawn_range_boundary() {
        // gap_size + 70 == field_height: range is exactly empty.
        let config = GameConfig {
            field_height: 480.0,
            gap_size: 410.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptySpawnRange { .. })
        ));

        // One unit of slack is enough.
        let config = GameConfig {
            field_height: 480.0,
            gap_size: 409.0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_non_positive_dimensions_are_rejected() {
        let config = GameConfig {
            pipe_speed: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositive("pipe_speed")));

        let config = GameConfig {
            field_width: -1.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive("field_width"))
        );
    }

    #[test]
    fn test_zero_spawn_interval_is_rejected() {
        let config = GameConfig {
            spawn_interval: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSpawnInterval));
    }

    #[test]
    fn test_oversized_bird_is_rejected() {
        let config = GameConfig {
            bird_height: 480.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BirdExceedsField { .. })
        ));
    }
}
