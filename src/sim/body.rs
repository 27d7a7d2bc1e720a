//! Dynamic bodies: the player and wandering animals

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, resolve_horizontal, resolve_vertical};
use super::grid::TileGrid;
use super::tick::TickInput;
use crate::settings::PhysicsSettings;

/// A moving rectangle in world pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (fixed for the body's lifetime)
    pub size: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Not resting on a solid surface
    pub airborne: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            airborne: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Horizontal center in world pixels
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Horizontal speed while a direction is held
    pub speed: f32,
    /// Movement keys held during the last tick
    pub input: TickInput,
}

impl Player {
    pub fn new(pos: Vec2, physics: &PhysicsSettings) -> Self {
        Self {
            body: Body::new(pos, Vec2::new(physics.player_width, physics.player_height)),
            speed: physics.player_speed,
            input: TickInput::default(),
        }
    }

    /// Advance one tick: input to velocity, gravity, then collision per axis
    pub fn step(
        &mut self,
        input: &TickInput,
        grid: &TileGrid,
        physics: &PhysicsSettings,
        tile_size: f32,
    ) {
        self.input = input.clone();
        let body = &mut self.body;

        // No acceleration: held direction is full speed, nothing held is a stop
        body.vel.x = if input.left {
            -self.speed
        } else if input.right {
            self.speed
        } else {
            0.0
        };

        if input.jump && !body.airborne {
            body.vel.y = physics.jump_velocity;
            body.airborne = true;
        }

        body.vel.y += physics.gravity;

        let dx = body.vel.x;
        resolve_horizontal(body, grid, dx, tile_size);
        let dy = body.vel.y;
        resolve_vertical(body, grid, dy, tile_size);
    }
}

/// A wandering animal
///
/// Animals only collide vertically: they follow the terrain by snapping onto it
/// and turn around at the world edges, never at walls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub body: Body,
    /// +1.0 walking right, -1.0 walking left
    pub direction: f32,
    /// Display color (0xRRGGBB)
    pub color: u32,
}

impl Animal {
    pub fn new(pos: Vec2, direction: f32, color: u32, physics: &PhysicsSettings) -> Self {
        Self {
            body: Body::new(pos, Vec2::new(physics.animal_width, physics.animal_height)),
            direction: direction.signum(),
            color,
        }
    }

    /// Advance one tick
    pub fn step(
        &mut self,
        grid: &TileGrid,
        physics: &PhysicsSettings,
        tile_size: f32,
        world_pixel_width: f32,
    ) {
        let body = &mut self.body;
        body.vel.x = self.direction * physics.animal_speed;

        let new_x = body.pos.x + body.vel.x;
        if new_x < 0.0 || new_x + body.size.x > world_pixel_width {
            self.direction = -self.direction;
        } else {
            body.pos.x = new_x;
        }

        body.vel.y += physics.animal_gravity;
        let dy = body.vel.y;
        resolve_vertical(body, grid, dy, tile_size);
    }
}
