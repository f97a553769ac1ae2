//! One playthrough: start, per-frame tick, and the game-over report.

use crate::config::GameConfig;
use crate::game::physics::{self, BoundsContact};
use crate::game::pipes::PipeField;
use crate::game::types::Bird;
use crate::identity::IdentitySession;
use crate::ranking::RankingStore;
use crate::storage::Storage;
use rand::Rng;
use std::io;

/// A single session from start to game-over. Built fresh for every run;
/// `is_over` is terminal and never resets.
#[derive(Debug)]
pub struct GameSession {
    pub bird: Bird,
    pub pipes: PipeField,
    pub score: u32,
    pub frame_counter: u64,
    pub is_over: bool,
}

impl GameSession {
    /// A fresh session: bird centered and at rest, no pipes, score 0.
    pub fn start(config: &GameConfig) -> Self {
        Self {
            bird: Bird {
                y: config.field_height / 2.0 - config.bird_height / 2.0,
                velocity: 0.0,
            },
            pipes: PipeField::new(),
            score: 0,
            frame_counter: 0,
            is_over: false,
        }
    }

    /// Advance the session by one frame.
    ///
    /// Order per frame: bird physics (ground contact ends the session) →
    /// pipe spawn → scroll → collision (ends the session) → scoring →
    /// prune → frame counter. The frame keeps running to completion even
    /// when the session ends mid-frame, so pipes passed on the final frame
    /// still score.
    ///
    /// Returns true exactly once: on the frame `is_over` flips. The guard
    /// at entry makes every later call a no-op.
    pub fn tick<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> bool {
        if self.is_over {
            return false;
        }

        if physics::tick(&mut self.bird, config) == BoundsContact::Ground {
            self.is_over = true;
        }

        self.pipes.spawn_if_due(self.frame_counter, rng, config);
        self.pipes.advance(config.pipe_speed);
        if self.pipes.check_collision(&self.bird, config) {
            self.is_over = true;
        }
        self.score += self.pipes.update_scoring(config.bird_x, config.pipe_width);
        self.pipes.prune_offscreen(config.pipe_width);

        self.frame_counter += 1;
        self.is_over
    }

    /// Apply the flap impulse. Ignored once the session is over.
    pub fn flap(&mut self, config: &GameConfig) {
        if self.is_over {
            return;
        }
        physics::flap(&mut self.bird, config.flap_strength);
    }
}

/// What the game-over screen displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverSummary {
    pub final_score: u32,
    /// The signed-in player's best, after this session was recorded.
    pub best_score: u32,
}

/// End-of-session side effects: record the score in the ranking and
/// return the numbers the game-over screen shows.
///
/// Call once, on the tick that ended the session. Without a signed-in
/// identity the ranking is untouched and the session score doubles as the
/// best.
pub fn report_game_over<S: Storage>(
    session: &GameSession,
    identity: &IdentitySession,
    ranking: &mut RankingStore<S>,
) -> io::Result<GameOverSummary> {
    ranking.upsert_best(identity.current(), session.score)?;
    let best_score = match identity.current() {
        Some(id) => ranking.best_score_for(id),
        None => session.score,
    };
    Ok(GameOverSummary {
        final_score: session.score,
        best_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_config() -> GameConfig {
        GameConfig::default()
    }

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_start_resets_everything() {
        let config = test_config();
        let session = GameSession::start(&config);

        assert_eq!(session.bird.y, 230.0);
        assert_eq!(session.bird.velocity, 0.0);
        assert!(session.pipes.pipes.is_empty());
        assert_eq!(session.score, 0);
        assert_eq!(session.frame_counter, 0);
        assert!(!session.is_over);
    }

    #[test]
    fn test_first_pipe_spawns_on_frame_zero() {
        let config = test_config();
        let mut session = GameSession::start(&config);
        let mut rng = seeded_rng();

        session.tick(&config, &mut rng);
        assert_eq!(session.pipes.pipes.len(), 1);
        assert_eq!(session.frame_counter, 1);
    }

    #[test]
    fn test_free_fall_ends_on_the_ground() {
        let config = test_config();
        let mut session = GameSession::start(&config);
        let mut rng = seeded_rng();

        let mut ended_frames = 0;
        for _ in 0..10_000 {
            if session.tick(&config, &mut rng) {
                ended_frames += 1;
            }
            if session.is_over {
                break;
            }
        }

        assert!(session.is_over);
        assert_eq!(ended_frames, 1);
        assert_eq!(
            session.bird.y,
            config.field_height - config.bird_height,
            "bird rests on the ground"
        );
    }

    #[test]
    fn test_tick_after_game_over_is_a_no_op() {
        let config = test_config();
        let mut session = GameSession::start(&config);
        let mut rng = seeded_rng();

        while !session.tick(&config, &mut rng) {}
        let frames = session.frame_counter;
        let score = session.score;

        for _ in 0..10 {
            assert!(!session.tick(&config, &mut rng));
        }
        assert_eq!(session.frame_counter, frames);
        assert_eq!(session.score, score);
    }

    #[test]
    fn test_flap_is_ignored_after_game_over() {
        let config = test_config();
        let mut session = GameSession::start(&config);
        let mut rng = seeded_rng();

        while !session.tick(&config, &mut rng) {}
        let velocity = session.bird.velocity;
        session.flap(&config);
        assert_eq!(session.bird.velocity, velocity);
    }

    #[test]
    fn test_flap_sets_upward_velocity() {
        let config = test_config();
        let mut session = GameSession::start(&config);
        session.flap(&config);
        assert_eq!(session.bird.velocity, config.flap_strength);
    }

    #[test]
    fn test_ceiling_does_not_end_the_session() {
        let config = test_config();
        let mut session = GameSession::start(&config);
        let mut rng = seeded_rng();
        session.bird.y = 1.0;
        session.bird.velocity = -10.0;

        let ended = session.tick(&config, &mut rng);
        assert!(!ended);
        assert!(!session.is_over);
        assert_eq!(session.bird.y, 0.0);
        assert_eq!(session.bird.velocity, 0.0);
    }

    #[test]
    fn test_report_updates_ranking_and_summary() {
        let config = test_config();
        let mut identity = IdentitySession::new();
        let id = identity.validate("ABC").unwrap();
        let mut ranking = RankingStore::new(MemoryStorage::new());

        let mut session = GameSession::start(&config);
        session.score = 7;
        session.is_over = true;

        let summary = report_game_over(&session, &identity, &mut ranking).unwrap();
        assert_eq!(summary.final_score, 7);
        assert_eq!(summary.best_score, 7);
        assert_eq!(ranking.best_score_for(&id), 7);
    }

    #[test]
    fn test_report_keeps_higher_stored_best() {
        let config = test_config();
        let mut identity = IdentitySession::new();
        let id = identity.validate("ABC").unwrap();
        let mut ranking = RankingStore::new(MemoryStorage::new());
        ranking.upsert_best(Some(&id), 20).unwrap();

        let mut session = GameSession::start(&config);
        session.score = 7;
        session.is_over = true;

        let summary = report_game_over(&session, &identity, &mut ranking).unwrap();
        assert_eq!(summary.final_score, 7);
        assert_eq!(summary.best_score, 20);
        assert_eq!(ranking.best_score_for(&id), 20);
    }

    #[test]
    fn test_report_without_identity_leaves_ranking_untouched() {
        let config = test_config();
        let identity = IdentitySession::new();
        let mut ranking = RankingStore::new(MemoryStorage::new());

        let mut session = GameSession::start(&config);
        session.score = 7;
        session.is_over = true;

        let summary = report_game_over(&session, &identity, &mut ranking).unwrap();
        assert_eq!(summary.final_score, 7);
        assert_eq!(summary.best_score, 7);
        assert!(ranking.load().is_empty());
    }
}
