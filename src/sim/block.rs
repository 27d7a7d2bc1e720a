//! Block kinds, solidity and the hotbar slot table

use serde::{Deserialize, Serialize};

/// Kind of block occupying one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Block {
    #[default]
    Air,
    Grass,
    Dirt,
    Stone,
    Wood,
    Leaves,
    Water,
    /// Tilled soil; the only block with per-cell data (growth timer)
    Farmland,
}

impl Block {
    /// Whether bodies collide with this block
    ///
    /// Leaves are solid so trees can be climbed; water is decoration.
    pub fn is_solid(self) -> bool {
        match self {
            Block::Air | Block::Water => false,
            Block::Grass
            | Block::Dirt
            | Block::Stone
            | Block::Wood
            | Block::Leaves
            | Block::Farmland => true,
        }
    }

    pub fn is_air(self) -> bool {
        self == Block::Air
    }

    /// Growth timer seeded when this block is freshly placed
    pub fn seed_timer(self) -> u32 {
        match self {
            Block::Farmland => 1,
            _ => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Block::Air => "Air",
            Block::Grass => "Grass",
            Block::Dirt => "Dirt",
            Block::Stone => "Stone",
            Block::Wood => "Wood",
            Block::Leaves => "Leaves",
            Block::Water => "Water",
            Block::Farmland => "Farmland",
        }
    }
}

/// Blocks the player can select for placement, in hotbar order
pub const HOTBAR: [Block; 7] = [
    Block::Grass,
    Block::Dirt,
    Block::Stone,
    Block::Wood,
    Block::Leaves,
    Block::Water,
    Block::Farmland,
];

/// Block in a hotbar slot (None for an out-of-range index)
pub fn hotbar_block(slot: usize) -> Option<Block> {
    HOTBAR.get(slot).copied()
}
