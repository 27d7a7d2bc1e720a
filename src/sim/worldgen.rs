//! Procedural terrain generation
//!
//! Randomness is consumed in a fixed order so a seeded RNG always produces the
//! same world: one draw per column for the height map (left to right), then one
//! per column for ponds, then one per eligible column for trees.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::block::Block;
use super::grid::TileGrid;
use crate::error::ConfigError;
use crate::settings::WorldSettings;

/// A freshly generated world and the surface row of each column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedWorld {
    pub grid: TileGrid,
    /// Grass row per column (before pond/tree overwrites)
    pub heights: Vec<i32>,
}

/// Build the initial world from settings and a random source
pub fn generate<R: Rng + ?Sized>(
    settings: &WorldSettings,
    rng: &mut R,
) -> Result<GeneratedWorld, ConfigError> {
    let mut grid = TileGrid::new(settings.width, settings.height)?;
    let heights = height_map(settings, rng);

    fill_columns(&mut grid, &heights, settings.dirt_depth);
    let ponds = carve_ponds(&mut grid, &heights, settings, rng);
    let trees = plant_trees(&mut grid, &heights, settings, rng);

    log::info!(
        "Generated {}x{} world: {} ponds, {} trees",
        settings.width,
        settings.height,
        ponds,
        trees
    );

    Ok(GeneratedWorld { grid, heights })
}

/// Rolling hills with a little per-column jitter, clamped into the world
fn height_map<R: Rng + ?Sized>(settings: &WorldSettings, rng: &mut R) -> Vec<i32> {
    let max_row = settings.height as i32 - 1;
    (0..settings.width)
        .map(|x| {
            let jitter = (rng.random::<f32>() * 2.0 - 1.0) * settings.hill_jitter;
            let wave = (x as f32 * settings.hill_frequency).sin() * settings.hill_amplitude;
            let offset = (wave + jitter).round() as i32;
            settings.base_height.saturating_add(offset).clamp(0, max_row)
        })
        .collect()
}

/// Air above the surface, grass on it, dirt below, stone once deep enough
fn fill_columns(grid: &mut TileGrid, heights: &[i32], dirt_depth: i32) {
    for (x, &surface) in heights.iter().enumerate() {
        let x = x as i32;
        for y in surface..grid.height() as i32 {
            let block = if y == surface {
                Block::Grass
            } else if y > surface.saturating_add(dirt_depth) {
                Block::Stone
            } else {
                Block::Dirt
            };
            grid.set(x, y, block);
        }
    }
}

fn carve_ponds<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    heights: &[i32],
    settings: &WorldSettings,
    rng: &mut R,
) -> usize {
    let depth = settings.pond_depth.min(grid.height());
    let mut count = 0;
    for (x, &surface) in heights.iter().enumerate() {
        if rng.random::<f32>() >= settings.pond_chance {
            continue;
        }
        count += 1;
        for dx in 0..settings.pond_width.min(grid.width() - x) {
            for dy in 0..depth {
                // set() clips rows below the world
                grid.set((x + dx) as i32, surface + dy as i32, Block::Water);
            }
        }
    }
    count
}

fn plant_trees<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    heights: &[i32],
    settings: &WorldSettings,
    rng: &mut R,
) -> usize {
    let trunk = settings.trunk_height.clamp(0, grid.height() as i32);
    let mut count = 0;
    for x in 2..heights.len().saturating_sub(2) {
        if rng.random::<f32>() >= settings.tree_chance {
            continue;
        }
        count += 1;
        let ground = heights[x];
        let x = x as i32;

        for t in 1..=trunk {
            grid.set(x, ground - t, Block::Wood);
        }

        // 3x3 canopy overlapping the trunk top; only fills air
        for dy in -(trunk + 1)..=-(trunk - 1) {
            for dx in -1..=1 {
                let (lx, ly) = (x + dx, ground + dy);
                if grid.get(lx, ly) == Some(Block::Air) {
                    grid.set(lx, ly, Block::Leaves);
                }
            }
        }
    }
    count
}
