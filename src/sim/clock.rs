//! Day/night clock

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// Phase of day in `[0, 1)`; 0 is midnight, 0.5 is noon
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DayClock {
    fraction: f32,
}

impl DayClock {
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction: fraction.rem_euclid(1.0),
        }
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Advance by `increment`, wrapping at 1
    pub fn advance(&mut self, increment: f32) {
        // rem_euclid can round up to exactly 1.0 for tiny negatives
        let next = (self.fraction + increment).rem_euclid(1.0);
        self.fraction = if next >= 1.0 { 0.0 } else { next };
    }

    /// Overlay alpha: `max_darkness` at midnight, 0 at noon
    pub fn darkness(&self, max_darkness: f32) -> f32 {
        darkness(self.fraction, max_darkness)
    }
}

/// Overlay alpha for a day fraction
pub fn darkness(day_fraction: f32, max_darkness: f32) -> f32 {
    max_darkness * ((TAU * day_fraction).cos() + 1.0) / 2.0
}
