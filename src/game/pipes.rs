//! The pipe field: spawning, scrolling, collision, scoring, pruning.

use crate::config::GameConfig;
use crate::game::types::{Bird, Pipe};
use rand::Rng;

/// Pipes currently alive, oldest first. Order matters for display and
/// pruning, not for the gameplay checks themselves.
#[derive(Debug, Default)]
pub struct PipeField {
    pub pipes: Vec<Pipe>,
}

impl PipeField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a pipe at the right edge when the frame counter lands on the
    /// spawn interval. Frame 0 counts, so the first pipe appears the moment
    /// a session starts.
    ///
    /// The gap-top range is guaranteed non-empty by config validation; this
    /// does not re-check it.
    pub fn spawn_if_due<R: Rng>(&mut self, frame_counter: u64, rng: &mut R, config: &GameConfig) {
        if frame_counter % config.spawn_interval != 0 {
            return;
        }
        let gap_top = rng.gen_range(config.gap_top_min()..config.gap_top_max());
        self.pipes.push(Pipe {
            x: config.field_width,
            gap_top,
            gap_bottom: gap_top + config.gap_size,
            passed: false,
        });
    }

    /// Scroll every pipe left by one frame's travel.
    pub fn advance(&mut self, pipe_speed: f64) {
        for pipe in &mut self.pipes {
            pipe.x -= pipe_speed;
        }
    }

    /// True when the bird overlaps any pipe outside its gap.
    ///
    /// Every pipe is checked; the hit flag is sticky rather than an early
    /// return, so the caller's scoring pass still sees the whole field on
    /// the frame the session ends.
    pub fn check_collision(&self, bird: &Bird, config: &GameConfig) -> bool {
        let bird_left = config.bird_x;
        let bird_right = config.bird_x + config.bird_width;
        let bird_top = bird.y;
        let bird_bottom = bird.y + config.bird_height;

        let mut hit = false;
        for pipe in &self.pipes {
            let overlaps_horizontally =
                bird_left < pipe.x + config.pipe_width && bird_right > pipe.x;
            if overlaps_horizontally && (bird_top < pipe.gap_top || bird_bottom > pipe.gap_bottom)
            {
                hit = true;
            }
        }
        hit
    }

    /// Mark pipes whose trailing edge has crossed the bird's leading edge
    /// and return how many points that is worth. Each pipe scores once.
    pub fn update_scoring(&mut self, bird_x: f64, pipe_width: f64) -> u32 {
        let mut delta = 0;
        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.x + pipe_width < bird_x {
                pipe.passed = true;
                delta += 1;
            }
        }
        delta
    }

    /// Drop pipes that have fully left the field. `retain` compacts in one
    /// stable pass, so no pipe is skipped the way index-juggling removal
    /// during iteration would.
    pub fn prune_offscreen(&mut self, pipe_width: f64) {
        self.pipes.retain(|pipe| pipe.x + pipe_width >= 0.0);
    }
}
