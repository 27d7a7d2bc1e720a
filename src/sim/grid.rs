//! The tile grid: authoritative world state
//!
//! Blocks and crop-growth timers live side by side in one owner. Timers are only
//! observable for Farmland cells and are reseeded whenever a cell's block changes,
//! so the two arrays can never drift apart.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::block::Block;
use crate::error::ConfigError;
use crate::settings::cell_count;

/// Fixed-size 2D array of blocks with per-cell growth timers
///
/// Row 0 is the top of the world; rows grow downward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    blocks: Vec<Block>,
    timers: Vec<u32>,
}

impl TileGrid {
    /// Create an all-Air grid
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let cells = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            blocks: vec![Block::Air; cells],
            timers: vec![0; cells],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Block at a tile (None outside the world)
    pub fn get(&self, x: i32, y: i32) -> Option<Block> {
        self.index(x, y).map(|i| self.blocks[i])
    }

    /// Whether a tile stops bodies; out-of-world tiles never do
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Block::is_solid)
    }

    /// Growth timer of a Farmland tile (None for any other tile)
    pub fn crop_timer(&self, x: i32, y: i32) -> Option<u32> {
        let i = self.index(x, y)?;
        (self.blocks[i] == Block::Farmland).then_some(self.timers[i])
    }

    /// Replace a tile's block, reseeding its timer for the new block
    ///
    /// Returns false (and changes nothing) outside the world.
    pub(crate) fn set(&mut self, x: i32, y: i32, block: Block) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.blocks[i] = block;
                self.timers[i] = block.seed_timer();
                true
            }
            None => false,
        }
    }

    /// Mutable timers of every Farmland cell, row-major
    pub(crate) fn farmland_timers_mut(&mut self) -> impl Iterator<Item = &mut u32> {
        self.blocks
            .iter()
            .zip(self.timers.iter_mut())
            .filter(|(block, _)| **block == Block::Farmland)
            .map(|(_, timer)| timer)
    }

    /// Top-most row in which any of the given columns is solid
    pub fn first_solid_row(&self, columns: Range<i32>) -> Option<i32> {
        (0..self.height as i32).find(|&y| columns.clone().any(|x| self.is_solid(x, y)))
    }

    /// Cells in a rectangular tile range, clipped to the world (row-major)
    pub fn region(
        &self,
        xs: Range<i32>,
        ys: Range<i32>,
    ) -> impl Iterator<Item = (i32, i32, Block)> + '_ {
        let x0 = xs.start.max(0);
        let x1 = xs.end.min(self.width as i32);
        let y0 = ys.start.max(0);
        let y1 = ys.end.min(self.height as i32);
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y, self.blocks[self.idx(x, y)])))
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Number of cells holding a block kind
    pub fn count(&self, block: Block) -> usize {
        self.blocks.iter().filter(|b| **b == block).count()
    }
}
