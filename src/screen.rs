//! Screen state machine: which screen is live and how events move between
//! them.
//!
//! Transitions are a pure function; side effects (clearing identity,
//! building a fresh session, halting the tick loop) belong to the driver.
//! The tick loop runs only while [`Screen::Playing`] is current.

/// The five screens of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Identity entry: the player types a 3-character ID.
    IdEntry,
    /// Pre-game screen shown after signing in.
    StartScreen,
    /// Live session; the only state where the tick loop runs.
    Playing,
    /// Post-session screen with final and best score.
    GameOver,
    /// Leaderboard table.
    RankingView,
}

/// Everything that can move the screen machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// The entered identifier validated successfully.
    IdentityValidated,
    /// Player asked to start a session.
    StartRequested,
    /// The running session reached game over.
    SessionOver,
    /// Player asked to play again from the game-over screen.
    RestartRequested,
    /// Player asked to sign out from the game-over screen.
    ExitRequested,
    /// Player asked for the leaderboard. Valid from any screen.
    ViewRankingRequested,
    /// Player asked to leave the leaderboard.
    BackRequested,
}

impl Screen {
    /// Apply one event. Pairs outside the transition table leave the screen
    /// unchanged.
    ///
    /// `identity_set` decides where leaving the ranking view lands: back to
    /// the start screen when signed in, back to identity entry otherwise.
    pub fn apply(self, event: ScreenEvent, identity_set: bool) -> Screen {
        use Screen::*;
        use ScreenEvent::*;

        match (self, event) {
            (_, ViewRankingRequested) => RankingView,
            (IdEntry, IdentityValidated) => StartScreen,
            (StartScreen, StartRequested) => Playing,
            (Playing, SessionOver) => GameOver,
            (GameOver, RestartRequested) => Playing,
            (GameOver, ExitRequested) => IdEntry,
            (RankingView, BackRequested) => {
                if identity_set {
                    StartScreen
                } else {
                    IdEntry
                }
            }
            (unchanged, _) => unchanged,
        }
    }

    /// True for the single state whose loop ticks the simulation.
    pub fn is_playing(&self) -> bool {
        *self == Screen::Playing
    }
}
