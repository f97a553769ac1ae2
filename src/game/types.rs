//! Simulation data: the bird and individual pipes.

/// The player's bird. Horizontal position is fixed by the configuration;
/// only the vertical axis simulates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Top edge in field units. 0 = ceiling; clamped every frame to
    /// `[0, field_height - bird_height]`.
    pub y: f64,
    /// Vertical velocity in field units per frame (positive = downward).
    pub velocity: f64,
}

/// A pipe pair: a top segment down to `gap_top` and a bottom segment from
/// `gap_bottom`, with the open corridor between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge in field units. Decremented every frame.
    pub x: f64,
    /// Bottom of the top segment.
    pub gap_top: f64,
    /// Top of the bottom segment: `gap_top + gap_size`.
    pub gap_bottom: f64,
    /// Set once when the pipe's trailing edge crosses the bird; never
    /// reverts. Guards the score increment.
    pub passed: bool,
}
