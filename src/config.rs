use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::{GridSize, Position};
use crate::error::ConfigError;
use crate::input::Direction;

const APP_DIR_NAME: &str = "grid-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default grid height in cells; with the HUD and border the board fits an
/// 80x24 terminal.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Fixed tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Score granted per food eaten.
pub const DEFAULT_POINTS_PER_FOOD: u32 = 1;

/// Frame pacing for the render/input loop, independent of the tick rate.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Glyphs used by the terminal renderer.
pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_SNAKE_BODY: &str = "■";
pub const GLYPH_SNAKE_TAIL: &str = "▪";
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Settings for one game session.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid: GridSize,
    /// Starting cell; `None` means the grid center.
    pub start: Option<Position>,
    pub start_direction: Direction,
    pub points_per_food: u32,
    /// Only read by the frontend loop.
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            start: None,
            start_direction: Direction::Right,
            points_per_food: DEFAULT_POINTS_PER_FOOD,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Creates the default configuration on a custom grid.
    #[must_use]
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            grid: GridSize { width, height },
            ..Self::default()
        }
    }

    /// Returns the configured start cell, falling back to the grid center.
    #[must_use]
    pub fn start_position(&self) -> Position {
        self.start.unwrap_or_else(|| self.grid.center())
    }

    /// Checks the invariants the session relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }

        let start = self.start_position();
        if !self.grid.in_bounds(start) {
            return Err(ConfigError::Invalid(format!(
                "start cell ({}, {}) is outside the {}x{} grid",
                start.x, start.y, self.grid.width, self.grid.height
            )));
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick interval must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Loads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the config at the default location.
    ///
    /// Returns the defaults when no file exists there yet.
    pub fn load_default() -> Result<Self, ConfigError> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };

        match Self::load(&path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }
}

/// Returns the platform-correct config file path, if the platform has one.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::board::Position;
    use crate::error::ConfigError;
    use crate::input::Direction;

    use super::{GameConfig, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

    #[test]
    fn default_config_starts_centered_heading_right() {
        let config = GameConfig::default();

        assert_eq!(config.grid.width, DEFAULT_GRID_WIDTH);
        assert_eq!(config.grid.height, DEFAULT_GRID_HEIGHT);
        assert_eq!(config.start_position(), Position { x: 16, y: 10 });
        assert_eq!(config.start_direction, Direction::Right);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_grid_and_outside_start() {
        let empty = GameConfig::with_grid(0, 5);
        assert!(matches!(empty.validate(), Err(ConfigError::Invalid(_))));

        let outside = GameConfig {
            start: Some(Position { x: 5, y: 0 }),
            ..GameConfig::with_grid(5, 5)
        };
        assert!(matches!(outside.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let path = unique_test_path("partial");
        write_test_file(
            &path,
            r#"{ "grid": { "width": 10, "height": 8 }, "start_direction": "up", "points_per_food": 10 }"#,
        );

        let config = GameConfig::load(&path).expect("partial config should load");

        assert_eq!(config.grid.width, 10);
        assert_eq!(config.grid.height, 8);
        assert_eq!(config.start_direction, Direction::Up);
        assert_eq!(config.points_per_food, 10);
        assert_eq!(config.start, None);
        assert_eq!(config.tick_interval_ms, GameConfig::default().tick_interval_ms);

        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_file_returns_parse_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));

        cleanup_test_path(&path);
    }

    #[test]
    fn missing_file_returns_read_error() {
        let path = unique_test_path("missing");

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Read { .. })
        ));
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
