//! Read-only per-frame snapshot for the presentation layer
//!
//! Everything a renderer needs to draw one frame: visible tiles with their
//! screen positions, body rectangles, camera offset and darkness.

use glam::Vec2;
use serde::Serialize;

use super::block::Block;
use super::collision::Rect;
use super::crops::stage_of;
use super::state::WorldState;
use crate::tile_span;

/// Who a body belongs to, for picking how to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BodyKind {
    Player,
    Animal { color: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyView {
    pub kind: BodyKind,
    /// Rectangle in world pixels
    pub pos: Vec2,
    pub size: Vec2,
    /// Top-left corner on screen
    pub screen: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileView {
    pub x: i32,
    pub y: i32,
    pub block: Block,
    /// Growth stage for farmland
    pub crop_stage: Option<u8>,
    /// Top-left corner on screen
    pub screen: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameView {
    pub camera_offset_x: f32,
    pub day_fraction: f32,
    /// Overlay alpha for the night tint
    pub darkness: f32,
    pub tile_size: f32,
    /// Non-air tiles inside the viewport
    pub tiles: Vec<TileView>,
    /// Player first, then animals in order
    pub bodies: Vec<BodyView>,
}

impl WorldState {
    /// Tile ranges (end-exclusive) covered by the viewport, stopping at the
    /// bottom of the world
    pub fn visible_tile_range(&self) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
        let tile = self.tile_size();
        let view = self.camera.viewport;
        let depth = view.y.min(self.settings.world.pixel_height());
        let (x0, x1) = tile_span(self.camera.offset_x, view.x, tile);
        let (y0, y1) = tile_span(0.0, depth, tile);
        (x0..x1 + 1, y0..y1 + 1)
    }

    /// Snapshot for drawing the current frame
    pub fn frame(&self) -> FrameView {
        let tile = self.tile_size();
        let (xs, ys) = self.visible_tile_range();

        let tiles = self
            .grid
            .region(xs, ys)
            .filter(|(_, _, block)| !block.is_air())
            .map(|(x, y, block)| {
                let world = Rect::tile(x, y, tile).pos;
                TileView {
                    x,
                    y,
                    block,
                    crop_stage: self.grid.crop_timer(x, y).map(stage_of),
                    screen: self.camera.world_to_screen(world),
                }
            })
            .collect();

        let body_view = |kind, body: &super::body::Body| BodyView {
            kind,
            pos: body.pos,
            size: body.size,
            screen: self.camera.world_to_screen(body.pos),
        };
        let bodies = std::iter::once(body_view(BodyKind::Player, &self.player.body))
            .chain(
                self.animals
                    .iter()
                    .map(|a| body_view(BodyKind::Animal { color: a.color }, &a.body)),
            )
            .collect();

        FrameView {
            camera_offset_x: self.camera.offset_x,
            day_fraction: self.clock.fraction(),
            darkness: self.darkness(),
            tile_size: tile,
            tiles,
            bodies,
        }
    }
}
