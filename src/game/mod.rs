//! Core simulation: bird physics, the pipe field, and the per-frame
//! session loop that composes them.

pub mod physics;
pub mod pipes;
pub mod session;
pub mod types;

pub use pipes::PipeField;
pub use session::{GameOverSummary, GameSession};
pub use types::{Bird, Pipe};
