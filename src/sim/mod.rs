//! Deterministic simulation module
//!
//! All world logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only, consumed in a fixed order
//! - Stable iteration order (row-major grid, animals by index)
//! - No rendering or platform dependencies

pub mod block;
pub mod body;
pub mod camera;
pub mod clock;
pub mod collision;
pub mod crops;
pub mod edit;
pub mod frame;
pub mod grid;
pub mod state;
pub mod tick;
pub mod worldgen;

pub use block::{Block, HOTBAR, hotbar_block};
pub use body::{Animal, Body, Player};
pub use camera::Camera;
pub use clock::{DayClock, darkness};
pub use collision::{AxisResolution, Rect, resolve_horizontal, resolve_vertical};
pub use crops::{MAX_STAGE, STAGE_THRESHOLDS, stage_of};
pub use edit::{EditOutcome, break_block, place};
pub use frame::{BodyKind, BodyView, FrameView, TileView};
pub use grid::TileGrid;
pub use state::{ANIMAL_COLORS, WorldState, is_grounded};
pub use tick::{PointerAction, PointerEvent, TickInput, tick};
pub use worldgen::{GeneratedWorld, generate};
