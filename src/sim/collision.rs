//! Axis-separated collision between rectangular bodies and the tile grid
//!
//! Horizontal and vertical motion are resolved as two independent passes per
//! tick. A blocked horizontal move is dropped entirely; a blocked vertical move
//! snaps the body flush against the obstructing row.

use glam::Vec2;

use super::body::Body;
use super::grid::TileGrid;
use crate::tile_span;

/// Outcome of resolving one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisResolution {
    /// Body position after resolution
    pub position: Vec2,
    /// Whether the tentative move hit a solid tile
    pub blocked: bool,
    /// Whether the velocity on this axis was zeroed
    pub velocity_zeroed: bool,
}

/// Axis-aligned rectangle in world pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Pixel rectangle of a tile
    pub fn tile(x: i32, y: i32, tile_size: f32) -> Self {
        Self {
            pos: Vec2::new(x as f32 * tile_size, y as f32 * tile_size),
            size: Vec2::splat(tile_size),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Strict overlap; rectangles sharing only an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a0, a1) = (self.pos, self.max());
        let (b0, b1) = (other.pos, other.max());
        !(a1.x <= b0.x || a0.x >= b1.x || a1.y <= b0.y || a0.y >= b1.y)
    }
}

/// Whether any of `rows` is solid in column `a` or column `b`
fn column_pair_blocked(grid: &TileGrid, a: i32, b: i32, rows: (i32, i32)) -> bool {
    (rows.0..=rows.1).any(|y| grid.is_solid(a, y) || grid.is_solid(b, y))
}

/// Whether any of `cols` is solid in row `a` or row `b`
fn row_pair_blocked(grid: &TileGrid, a: i32, b: i32, cols: (i32, i32)) -> bool {
    (cols.0..=cols.1).any(|x| grid.is_solid(x, a) || grid.is_solid(x, b))
}

/// Move a body horizontally by `dx`, refusing the whole move if it would enter a solid tile
pub fn resolve_horizontal(
    body: &mut Body,
    grid: &TileGrid,
    dx: f32,
    tile_size: f32,
) -> AxisResolution {
    let new_x = body.pos.x + dx;
    let (left, right) = tile_span(new_x, body.size.x, tile_size);
    let rows = tile_span(body.pos.y, body.size.y, tile_size);

    let blocked = column_pair_blocked(grid, left, right, rows);
    if !blocked {
        body.pos.x = new_x;
    }

    AxisResolution {
        position: body.pos,
        blocked,
        velocity_zeroed: false,
    }
}

/// Move a body vertically by `dy`, snapping onto floors and under ceilings
///
/// Uses the body's already-resolved x. A blocked fall lands the body (clears
/// `airborne`); an unblocked move leaves it airborne.
pub fn resolve_vertical(
    body: &mut Body,
    grid: &TileGrid,
    dy: f32,
    tile_size: f32,
) -> AxisResolution {
    let new_y = body.pos.y + dy;
    let (top, bottom) = tile_span(new_y, body.size.y, tile_size);
    let cols = tile_span(body.pos.x, body.size.x, tile_size);

    let blocked = row_pair_blocked(grid, top, bottom, cols);
    if blocked {
        if dy > 0.0 {
            body.pos.y = bottom as f32 * tile_size - body.size.y;
            body.airborne = false;
        } else if dy < 0.0 {
            body.pos.y = (top + 1) as f32 * tile_size;
        }
        body.vel.y = 0.0;
    } else {
        body.pos.y = new_y;
        body.airborne = true;
    }

    AxisResolution {
        position: body.pos,
        blocked,
        velocity_zeroed: blocked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::block::Block;

    const T: f32 = 16.0;

    fn floor_grid() -> TileGrid {
        let mut grid = TileGrid::new(10, 10).unwrap();
        for x in 0..10 {
            grid.set(x, 5, Block::Stone);
        }
        grid
    }

    #[test]
    fn test_rect_overlap_strict() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::splat(16.0));
        let touching = Rect::new(Vec2::new(16.0, 0.0), Vec2::splat(16.0));
        let inside = Rect::new(Vec2::new(15.0, 15.0), Vec2::splat(16.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_fall_lands_on_floor() {
        let grid = floor_grid();
        // Bottom edge 4 px above the floor row (row 5 starts at y=80)
        let mut body = Body::new(Vec2::new(16.0, 48.0), Vec2::new(16.0, 28.0));
        body.airborne = true;
        body.vel.y = 6.0;

        let res = resolve_vertical(&mut body, &grid, 6.0, T);
        assert!(res.blocked);
        assert!(res.velocity_zeroed);
        assert_eq!(body.pos.y, 80.0 - 28.0);
        assert_eq!(body.vel.y, 0.0);
        assert!(!body.airborne);
    }

    #[test]
    fn test_resting_body_stays_grounded() {
        let grid = floor_grid();
        let mut body = Body::new(Vec2::new(20.0, 52.0), Vec2::new(28.0, 28.0));
        body.vel.y = 0.5;

        let res = resolve_vertical(&mut body, &grid, 0.5, T);
        assert!(res.blocked);
        assert_eq!(body.pos.y, 52.0);
        assert!(!body.airborne);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_rise_snaps_under_ceiling() {
        let mut grid = TileGrid::new(10, 10).unwrap();
        for x in 0..10 {
            grid.set(x, 2, Block::Dirt);
        }
        // Top edge at 50, ceiling row 2 spans 32..48
        let mut body = Body::new(Vec2::new(0.0, 50.0), Vec2::new(16.0, 16.0));
        body.vel.y = -10.0;
        body.airborne = true;

        let res = resolve_vertical(&mut body, &grid, -10.0, T);
        assert!(res.blocked);
        assert_eq!(body.pos.y, 48.0);
        assert_eq!(body.vel.y, 0.0);
        assert!(body.airborne);
    }

    #[test]
    fn test_unblocked_fall_commits() {
        let grid = floor_grid();
        let mut body = Body::new(Vec2::new(0.0, 0.0), Vec2::new(16.0, 16.0));
        let res = resolve_vertical(&mut body, &grid, 3.5, T);
        assert!(!res.blocked);
        assert_eq!(body.pos.y, 3.5);
        assert!(body.airborne);
    }

    #[test]
    fn test_wall_on_right_blocks_right_only() {
        let mut grid = TileGrid::new(10, 10).unwrap();
        for y in 0..10 {
            grid.set(4, y, Block::Stone);
        }
        // Tile-aligned, one tile wide, flush against column 4
        let mut body = Body::new(Vec2::new(48.0, 32.0), Vec2::new(16.0, 16.0));

        let res = resolve_horizontal(&mut body, &grid, 3.0, T);
        assert!(res.blocked);
        assert_eq!(body.pos.x, 48.0);

        let res = resolve_horizontal(&mut body, &grid, -3.0, T);
        assert!(!res.blocked);
        assert_eq!(body.pos.x, 45.0);
    }

    #[test]
    fn test_blocked_move_is_not_clamped() {
        let mut grid = TileGrid::new(10, 10).unwrap();
        grid.set(5, 0, Block::Wood);
        // 10 px gap to the wall, moving 12 px: full stop, no partial advance
        let mut body = Body::new(Vec2::new(54.0, 0.0), Vec2::new(16.0, 16.0));
        let res = resolve_horizontal(&mut body, &grid, 12.0, T);
        assert!(res.blocked);
        assert_eq!(body.pos.x, 54.0);
    }

    #[test]
    fn test_outside_world_is_open() {
        let grid = floor_grid();
        let mut body = Body::new(Vec2::new(150.0, 52.0), Vec2::new(16.0, 28.0));
        let res = resolve_horizontal(&mut body, &grid, 20.0, T);
        assert!(!res.blocked);
        let res = resolve_vertical(&mut body, &grid, 5.0, T);
        assert!(!res.blocked);
        assert_eq!(body.pos, Vec2::new(170.0, 57.0));
    }

    #[test]
    fn test_water_does_not_block() {
        let mut grid = TileGrid::new(10, 10).unwrap();
        for x in 0..10 {
            grid.set(x, 5, Block::Water);
            grid.set(x, 6, Block::Dirt);
        }
        let mut body = Body::new(Vec2::new(0.0, 60.0), Vec2::new(16.0, 16.0));
        // Sinks through the water row (80..96) and lands on the dirt at 96
        resolve_vertical(&mut body, &grid, 8.0, T);
        resolve_vertical(&mut body, &grid, 8.0, T);
        assert_eq!(body.pos.y, 76.0);
        let res = resolve_vertical(&mut body, &grid, 8.0, T);
        assert!(res.blocked);
        assert_eq!(body.pos.y, 80.0);
    }
}
