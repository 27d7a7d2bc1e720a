//! Horizontal follow camera with world-edge clamping

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-to-screen translation; only the horizontal offset moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Left edge of the viewport in world pixels
    pub offset_x: f32,
    pub viewport: Vec2,
    pub world_pixel_width: f32,
}

impl Camera {
    pub fn new(viewport: Vec2, world_pixel_width: f32) -> Self {
        Self {
            offset_x: 0.0,
            viewport,
            world_pixel_width,
        }
    }

    /// Largest offset that keeps the viewport inside the world (0 if the world is narrower)
    pub fn max_offset(&self) -> f32 {
        (self.world_pixel_width - self.viewport.x).max(0.0)
    }

    /// Center on a body horizontally, clamped to the world
    pub fn update(&mut self, player_x: f32, player_width: f32) -> f32 {
        let centered = player_x + player_width / 2.0 - self.viewport.x / 2.0;
        self.offset_x = centered.clamp(0.0, self.max_offset());
        self.offset_x
    }

    /// World position to screen position
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x - self.offset_x, world.y)
    }

    /// Screen position (e.g. a click) to world position
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x + self.offset_x, screen.y)
    }
}
