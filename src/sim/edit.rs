//! Block placement and breaking
//!
//! Every rejection is silent: the grid is left untouched and the outcome says
//! which rule applied.

use serde::{Deserialize, Serialize};

use super::block::Block;
use super::collision::Rect;
use super::grid::TileGrid;

/// Result of a place/break request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOutcome {
    Placed(Block),
    Broken(Block),
    /// Target tile lies outside the world
    OutOfBounds,
    /// Place target already holds a block
    Occupied,
    /// Break target is already air
    AlreadyEmpty,
    /// Target tile overlaps the player
    OverlapsPlayer,
    /// Requested block cannot be placed (air, or an empty hotbar slot)
    NotPlaceable,
}

impl EditOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, EditOutcome::Placed(_) | EditOutcome::Broken(_))
    }
}

fn overlaps_player(x: i32, y: i32, player: &Rect, tile_size: f32) -> bool {
    Rect::tile(x, y, tile_size).overlaps(player)
}

/// Place `block` at a tile if it is air and clear of the player
///
/// Farmland is seeded with timer 1 so it starts growing; any other block gets 0.
pub fn place(
    grid: &mut TileGrid,
    x: i32,
    y: i32,
    block: Block,
    player: &Rect,
    tile_size: f32,
) -> EditOutcome {
    if block.is_air() {
        return EditOutcome::NotPlaceable;
    }
    match grid.get(x, y) {
        None => EditOutcome::OutOfBounds,
        Some(current) if !current.is_air() => EditOutcome::Occupied,
        Some(_) if overlaps_player(x, y, player, tile_size) => EditOutcome::OverlapsPlayer,
        Some(_) => {
            grid.set(x, y, block);
            EditOutcome::Placed(block)
        }
    }
}

/// Turn a tile back into air if it is not already air and clear of the player
pub fn break_block(
    grid: &mut TileGrid,
    x: i32,
    y: i32,
    player: &Rect,
    tile_size: f32,
) -> EditOutcome {
    match grid.get(x, y) {
        None => EditOutcome::OutOfBounds,
        Some(Block::Air) => EditOutcome::AlreadyEmpty,
        Some(_) if overlaps_player(x, y, player, tile_size) => EditOutcome::OverlapsPlayer,
        Some(current) => {
            grid.set(x, y, Block::Air);
            EditOutcome::Broken(current)
        }
    }
}
