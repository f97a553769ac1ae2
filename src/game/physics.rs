//! Bird physics: Euler integration with fixed per-frame gravity.
//!
//! Velocities are per-frame with no delta-time scaling; the simulation is
//! frame-rate-dependent and driven at a fixed interval by the caller.

use crate::config::GameConfig;
use crate::game::types::Bird;

/// What the bird touched during a physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsContact {
    Clear,
    /// Bird reached the ground. Ends the session.
    Ground,
    /// Bird reached the ceiling. Clamped and stopped, but not fatal.
    Ceiling,
}

/// Advance the bird by one frame and clamp it into the field.
///
/// Ground contact clamps position and reports `Ground`; ceiling contact
/// clamps position and zeroes velocity so the bird cannot keep drifting up
/// off-field. Only the ground ends the game; the ceiling just stops the
/// climb.
pub fn tick(bird: &mut Bird, config: &GameConfig) -> BoundsContact {
    bird.velocity += config.gravity;
    bird.y += bird.velocity;

    let ground_y = config.field_height;
    if bird.y + config.bird_height > ground_y {
        bird.y = ground_y - config.bird_height;
        return BoundsContact::Ground;
    }
    if bird.y < 0.0 {
        bird.y = 0.0;
        bird.velocity = 0.0;
        return BoundsContact::Ceiling;
    }
    BoundsContact::Clear
}

/// Apply a flap impulse: velocity is set, not added.
pub fn flap(bird: &mut Bird, flap_strength: f64) {
    bird.velocity = flap_strength;
}
