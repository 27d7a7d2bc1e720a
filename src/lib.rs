//! Tile World - a side-view block world simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, grid, collision, crops, camera, clock)
//! - `platform`: Host glue (held keys, fixed-step tick driver)
//! - `settings`: Data-driven world/physics configuration
//! - `error`: Configuration errors

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz animation frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// World dimensions in tiles
    pub const WORLD_WIDTH: usize = 50;
    pub const WORLD_HEIGHT: usize = 50;
    /// Edge length of one tile in pixels
    pub const TILE_SIZE: f32 = 16.0;
    /// Largest grid (width * height) a world may allocate
    pub const MAX_WORLD_CELLS: usize = 1 << 24;

    /// Terrain shape
    pub const BASE_HEIGHT: i32 = 30;
    pub const HILL_AMPLITUDE: f32 = 4.0;
    pub const HILL_FREQUENCY: f32 = 0.15;
    pub const HILL_JITTER: f32 = 1.0;
    /// Rows below the surface that stay dirt before stone begins
    pub const DIRT_DEPTH: i32 = 5;

    /// Feature scattering
    pub const POND_CHANCE: f32 = 0.03;
    pub const POND_WIDTH: usize = 4;
    pub const POND_DEPTH: usize = 2;
    pub const TREE_CHANCE: f32 = 0.08;
    pub const TRUNK_HEIGHT: i32 = 3;

    /// Player physics (pixels per tick)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_VELOCITY: f32 = -10.0;
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PLAYER_WIDTH: f32 = 28.0;
    pub const PLAYER_HEIGHT: f32 = 28.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;

    /// Animal physics (reduced gravity, slow wander)
    pub const ANIMAL_GRAVITY: f32 = 0.3;
    pub const ANIMAL_SPEED: f32 = 1.0;
    pub const ANIMAL_WIDTH: f32 = 24.0;
    pub const ANIMAL_HEIGHT: f32 = 16.0;
    pub const ANIMAL_COUNT: usize = 3;

    /// Viewport (screen) size in pixels
    pub const VIEWPORT_WIDTH: f32 = 640.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;

    /// Day fraction advanced per tick (one day per minute at 60 Hz)
    pub const DAY_INCREMENT: f32 = 1.0 / 3600.0;
    /// Darkness overlay alpha at midnight
    pub const MAX_DARKNESS: f32 = 0.6;
}

/// Tile index containing a pixel coordinate (floor division, negative-safe)
#[inline]
pub fn pixel_to_tile(px: f32, tile_size: f32) -> i32 {
    (px / tile_size).floor() as i32
}

/// Inclusive tile range covered by a span `[start, start + extent)` on one axis
///
/// The far edge is `ceil((start + extent) / T) - 1` rather than the usual
/// `floor((start + extent - 1) / T)`. Both agree for integer coordinates; for
/// fractional ones a span ending exactly on a tile boundary does not claim the
/// next tile, and a span ending a fraction past it does.
#[inline]
pub fn tile_span(start: f32, extent: f32, tile_size: f32) -> (i32, i32) {
    let first = pixel_to_tile(start, tile_size);
    let last = ((start + extent) / tile_size).ceil() as i32 - 1;
    (first, last.max(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_tile_negative() {
        assert_eq!(pixel_to_tile(-0.5, 16.0), -1);
        assert_eq!(pixel_to_tile(0.0, 16.0), 0);
        assert_eq!(pixel_to_tile(15.99, 16.0), 0);
        assert_eq!(pixel_to_tile(16.0, 16.0), 1);
    }

    #[test]
    fn test_tile_span_aligned_does_not_claim_next() {
        assert_eq!(tile_span(32.0, 16.0, 16.0), (2, 2));
        assert_eq!(tile_span(32.0, 28.0, 16.0), (2, 3));
        // floor((x + w - 1) / T) would stop at 2 and miss the half pixel in tile 3
        assert_eq!(tile_span(32.5, 16.0, 16.0), (2, 3));
    }

    #[test]
    fn test_tile_span_matches_integer_formula() {
        // floor((x + w - 1) / T) for integer coordinates
        for x in 0..64 {
            for w in 1..40 {
                let (_, last) = tile_span(x as f32, w as f32, 16.0);
                assert_eq!(last, (x + w - 1) / 16);
            }
        }
    }
}
