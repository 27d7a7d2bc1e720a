//! Crop growth on farmland
//!
//! A farmland cell grows only once seeded (timer > 0); the stage is derived
//! from the timer on demand and never stored.

use super::grid::TileGrid;

/// Timer value at which each stage from 2 upward begins
pub const STAGE_THRESHOLDS: [u32; 3] = [300, 600, 900];

/// Final (fully grown) stage
pub const MAX_STAGE: u8 = 4;

/// Advance every seeded farmland timer by one tick
pub fn tick(grid: &mut TileGrid) {
    for timer in grid.farmland_timers_mut() {
        if *timer > 0 {
            *timer = timer.saturating_add(1);
        }
    }
}

/// Growth stage (0..=4) for a timer value
pub fn stage_of(timer: u32) -> u8 {
    if timer == 0 {
        return 0;
    }
    1 + STAGE_THRESHOLDS.iter().filter(|&&t| timer >= t).count() as u8
}
