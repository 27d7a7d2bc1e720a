//! Platform glue between a host loop and the simulation
//!
//! Handles:
//! - Raw key-down/up events folded into held movement intents
//! - Screen-space pointer presses mapped into world space
//! - Fixed-step ticking from variable host frame times

use glam::Vec2;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{PointerAction, PointerEvent, TickInput, WorldState, tick};

/// Movement keys currently held, fed by raw key events
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    input: TickInput,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key-down (`pressed = true`) or key-up event by key code
    ///
    /// Returns false for keys that do not drive movement.
    pub fn apply(&mut self, code: &str, pressed: bool) -> bool {
        let slot = match code {
            "ArrowLeft" | "KeyA" => &mut self.input.left,
            "ArrowRight" | "KeyD" => &mut self.input.right,
            "ArrowUp" | "KeyW" | "Space" => &mut self.input.jump,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    /// Snapshot for the next tick
    pub fn input(&self) -> &TickInput {
        &self.input
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.input = TickInput::default();
    }
}

/// Queue a pointer press given in screen pixels, translated through the camera
pub fn queue_screen_pointer(state: &mut WorldState, screen: Vec2, action: PointerAction) {
    let world = state.camera.screen_to_world(screen);
    state.push_pointer(PointerEvent {
        world_x: world.x,
        world_y: world.y,
        action,
    });
}

/// Runs fixed ticks from variable frame times
#[derive(Debug, Clone, Default)]
pub struct TickDriver {
    accumulator: f32,
    pub keys: HeldKeys,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a host frame of `frame_dt` seconds; returns ticks run
    ///
    /// Caps the backlog at `MAX_SUBSTEPS` ticks so a stalled host does not
    /// spiral trying to catch up.
    pub fn update(&mut self, state: &mut WorldState, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, self.keys.input());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }
}
