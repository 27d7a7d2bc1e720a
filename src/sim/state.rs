//! World state: everything one simulation owns
//!
//! Grid, bodies, camera and clock live together in one value that is passed to
//! `tick`, so a world can be built and stepped without any rendering surface.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::block::Block;
use super::body::{Animal, Body, Player};
use super::camera::Camera;
use super::clock::DayClock;
use super::crops::stage_of;
use super::edit::{self, EditOutcome};
use super::grid::TileGrid;
use super::tick::{PointerAction, PointerEvent};
use super::worldgen::{self, GeneratedWorld};
use crate::error::ConfigError;
use crate::settings::Settings;
use crate::{pixel_to_tile, tile_span};

/// Animal coat colors (0xRRGGBB)
pub const ANIMAL_COLORS: [u32; 3] = [0xF0F0F0, 0xF4A6B8, 0x8B5A2B];

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Seed the world was generated from
    pub seed: u64,
    pub settings: Settings,
    pub grid: TileGrid,
    /// Surface row per column at generation time
    pub heights: Vec<i32>,
    pub player: Player,
    /// Animals (stable order, index is identity)
    pub animals: Vec<Animal>,
    pub camera: Camera,
    pub clock: DayClock,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Outcomes of the edits applied during the last tick
    pub last_edits: Vec<EditOutcome>,
    /// Pointer events waiting for the next tick boundary
    pending: VecDeque<PointerEvent>,
}

impl WorldState {
    /// Generate a new world from settings and a seed
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = worldgen::generate(&settings.world, &mut rng)?;
        let state = Self::from_generated(settings, seed, world, &mut rng);
        log::info!(
            "World ready (seed {}): player at ({:.1}, {:.1}), {} animals",
            seed,
            state.player.body.pos.x,
            state.player.body.pos.y,
            state.animals.len()
        );
        Ok(state)
    }

    /// Populate an already generated world with a player, animals, camera and clock
    pub fn from_generated<R: Rng + ?Sized>(
        settings: Settings,
        seed: u64,
        world: GeneratedWorld,
        rng: &mut R,
    ) -> Self {
        let GeneratedWorld { grid, heights } = world;
        let tile = settings.world.tile_size;
        let world_px = settings.world.pixel_width();
        let physics = &settings.physics;

        let px = clamp_into_world(physics.player_spawn_x, physics.player_width, world_px);
        let py = spawn_y(&grid, px, physics.player_width, physics.player_height, tile);
        let player = Player::new(Vec2::new(px, py), physics);

        let animals = (0..physics.animal_count)
            .map(|_| {
                let column = rng.random_range(0..grid.width());
                let x = column as f32 * tile + (tile - physics.animal_width) / 2.0;
                let x = clamp_into_world(x, physics.animal_width, world_px);
                let y = spawn_y(&grid, x, physics.animal_width, physics.animal_height, tile);
                let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                let color = ANIMAL_COLORS[rng.random_range(0..ANIMAL_COLORS.len())];
                Animal::new(Vec2::new(x, y), direction, color, physics)
            })
            .collect();

        let viewport = Vec2::new(settings.view.viewport_width, settings.view.viewport_height);
        let mut camera = Camera::new(viewport, world_px);
        camera.update(player.body.pos.x, player.body.size.x);

        Self {
            seed,
            grid,
            heights,
            player,
            animals,
            camera,
            clock: DayClock::default(),
            time_ticks: 0,
            last_edits: Vec::new(),
            pending: VecDeque::new(),
            settings,
        }
    }

    pub fn tile_size(&self) -> f32 {
        self.settings.world.tile_size
    }

    /// Queue a pointer event; it is applied at the start of the next tick
    pub fn push_pointer(&mut self, event: PointerEvent) {
        self.pending.push_back(event);
    }

    pub fn pending_pointer_events(&self) -> usize {
        self.pending.len()
    }

    /// Apply every queued pointer event in arrival order
    pub(crate) fn drain_pointer_events(&mut self) {
        self.last_edits.clear();
        while let Some(event) = self.pending.pop_front() {
            let outcome = self.apply_pointer(&event);
            log::debug!("pointer {:?} -> {:?}", event, outcome);
            self.last_edits.push(outcome);
        }
    }

    fn apply_pointer(&mut self, event: &PointerEvent) -> EditOutcome {
        let tile = self.tile_size();
        let x = pixel_to_tile(event.world_x, tile);
        let y = pixel_to_tile(event.world_y, tile);
        match event.action {
            PointerAction::Break => self.break_block(x, y),
            PointerAction::Place { slot } => match super::block::hotbar_block(slot) {
                Some(block) => self.place(x, y, block),
                None => EditOutcome::NotPlaceable,
            },
        }
    }

    /// Place a block at a tile, checked against the player's current rectangle
    pub fn place(&mut self, x: i32, y: i32, block: Block) -> EditOutcome {
        let tile = self.tile_size();
        let player = self.player.body.rect();
        edit::place(&mut self.grid, x, y, block, &player, tile)
    }

    /// Break the block at a tile, checked against the player's current rectangle
    pub fn break_block(&mut self, x: i32, y: i32) -> EditOutcome {
        let tile = self.tile_size();
        let player = self.player.body.rect();
        edit::break_block(&mut self.grid, x, y, &player, tile)
    }

    /// Crop stage of a tile (None unless it is farmland)
    pub fn crop_stage(&self, x: i32, y: i32) -> Option<u8> {
        self.grid.crop_timer(x, y).map(stage_of)
    }

    /// Overlay alpha for the current time of day
    pub fn darkness(&self) -> f32 {
        self.clock.darkness(self.settings.clock.max_darkness)
    }

    /// Move the player's body, e.g. when teleporting or respawning
    pub fn set_player_position(&mut self, pos: Vec2) {
        self.player.body.pos = pos;
        self.player.body.vel = Vec2::ZERO;
    }
}

fn clamp_into_world(x: f32, width: f32, world_px: f32) -> f32 {
    x.min(world_px - width).max(0.0)
}

/// Y that rests a body of the given size on the highest solid tile under it
fn spawn_y(grid: &TileGrid, x: f32, width: f32, height: f32, tile: f32) -> f32 {
    let (c0, c1) = tile_span(x, width, tile);
    match grid.first_solid_row(c0..c1 + 1) {
        Some(row) => row as f32 * tile - height,
        None => 0.0,
    }
}

/// Whether a body ends up resting on something solid
pub fn is_grounded(body: &Body, grid: &TileGrid, tile: f32) -> bool {
    let (c0, c1) = tile_span(body.pos.x, body.size.x, tile);
    let bottom = body.pos.y + body.size.y;
    let row = (bottom / tile).round() as i32;
    (bottom - row as f32 * tile).abs() < 1e-3 && (c0..=c1).any(|x| grid.is_solid(x, row))
}
