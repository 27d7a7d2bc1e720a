//! World and physics settings
//!
//! Loaded from JSON; every field falls back to the built-in defaults in
//! [`crate::consts`] when omitted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Terrain dimensions and generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// World width in tiles
    pub width: usize,
    /// World height in tiles
    pub height: usize,
    /// Tile edge length in pixels
    pub tile_size: f32,

    // === Height map ===
    /// Row index of the flat surface before hills are applied
    pub base_height: i32,
    /// Hill amplitude in rows
    pub hill_amplitude: f32,
    /// Hill frequency in radians per column
    pub hill_frequency: f32,
    /// Per-column random offset range in rows (uniform in [-jitter, jitter))
    pub hill_jitter: f32,
    /// Rows of dirt kept under the grass before stone begins
    pub dirt_depth: i32,

    // === Features ===
    /// Per-column chance of carving a pond
    pub pond_chance: f32,
    pub pond_width: usize,
    pub pond_depth: usize,
    /// Per-column chance of growing a tree
    pub tree_chance: f32,
    pub trunk_height: i32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            tile_size: TILE_SIZE,

            base_height: BASE_HEIGHT,
            hill_amplitude: HILL_AMPLITUDE,
            hill_frequency: HILL_FREQUENCY,
            hill_jitter: HILL_JITTER,
            dirt_depth: DIRT_DEPTH,

            pond_chance: POND_CHANCE,
            pond_width: POND_WIDTH,
            pond_depth: POND_DEPTH,
            tree_chance: TREE_CHANCE,
            trunk_height: TRUNK_HEIGHT,
        }
    }
}

impl WorldSettings {
    /// Flat world with no jitter and no features (handy for scenarios)
    pub fn flat(width: usize, height: usize, base_height: i32) -> Self {
        Self {
            width,
            height,
            base_height,
            hill_amplitude: 0.0,
            hill_jitter: 0.0,
            pond_chance: 0.0,
            tree_chance: 0.0,
            ..Self::default()
        }
    }

    /// World width in pixels
    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * self.tile_size
    }

    /// World height in pixels
    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * self.tile_size
    }
}

/// Body movement constants (all in pixels per tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_velocity: f32,
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal pixel position the player spawns at
    pub player_spawn_x: f32,

    pub animal_gravity: f32,
    pub animal_speed: f32,
    pub animal_width: f32,
    pub animal_height: f32,
    pub animal_count: usize,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            player_speed: PLAYER_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_spawn_x: PLAYER_SPAWN_X,

            animal_gravity: ANIMAL_GRAVITY,
            animal_speed: ANIMAL_SPEED,
            animal_width: ANIMAL_WIDTH,
            animal_height: ANIMAL_HEIGHT,
            animal_count: ANIMAL_COUNT,
        }
    }
}

/// Screen viewport size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
        }
    }
}

/// Day/night cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    /// Day fraction added each tick
    pub day_increment: f32,
    /// Overlay alpha at midnight
    pub max_darkness: f32,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            day_increment: DAY_INCREMENT,
            max_darkness: MAX_DARKNESS,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub world: WorldSettings,
    pub physics: PhysicsSettings,
    pub view: ViewSettings,
    pub clock: ClockSettings,
}

impl Settings {
    /// Parse settings from a JSON document and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.world;
        cell_count(w.width, w.height)?;

        let rows = w.height as i64;
        let ranged = [
            ("world.base_height", i64::from(w.base_height), rows - 1),
            ("world.dirt_depth", i64::from(w.dirt_depth), rows),
            ("world.trunk_height", i64::from(w.trunk_height), rows),
            ("world.pond_width", saturating_i64(w.pond_width), w.width as i64),
            ("world.pond_depth", saturating_i64(w.pond_depth), rows),
        ];
        for (field, value, max) in ranged {
            if !(0..=max).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    min: 0,
                    max,
                });
            }
        }

        let positive = [
            ("world.tile_size", w.tile_size),
            ("physics.player_width", self.physics.player_width),
            ("physics.player_height", self.physics.player_height),
            ("physics.animal_width", self.physics.animal_width),
            ("physics.animal_height", self.physics.animal_height),
            ("view.viewport_width", self.view.viewport_width),
            ("view.viewport_height", self.view.viewport_height),
        ];
        for (field, value) in positive {
            // Also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let unit = [
            ("world.pond_chance", w.pond_chance),
            ("world.tree_chance", w.tree_chance),
            ("clock.day_increment", self.clock.day_increment),
            ("clock.max_darkness", self.clock.max_darkness),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { field, value });
            }
        }

        if w.hill_jitter < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "world.hill_jitter",
                value: w.hill_jitter,
            });
        }

        Ok(())
    }
}

/// Number of cells in a `width x height` grid, refusing empty or oversized worlds
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize, ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::DegenerateWorld { width, height });
    }
    width
        .checked_mul(height)
        .filter(|&cells| cells <= MAX_WORLD_CELLS)
        .ok_or(ConfigError::WorldTooLarge {
            width,
            height,
            max: MAX_WORLD_CELLS,
        })
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
