//! Flappy Rank - Terminal Flappy Bird with a Local Leaderboard
//!
//! This module exposes the game logic for testing and external use.

pub mod config;
pub mod game;
pub mod identity;
pub mod ranking;
pub mod screen;
pub mod storage;

// Rendering is tightly coupled to the terminal; the binary is its only
// consumer.
pub mod ui;

pub use config::{ConfigError, GameConfig, FRAME_INTERVAL_MS};
pub use game::{GameOverSummary, GameSession};
pub use identity::{IdentityError, IdentitySession, UserId};
pub use ranking::{RankingStore, UserRecord};
pub use screen::{Screen, ScreenEvent};
pub use storage::{FileStorage, MemoryStorage, Storage};
