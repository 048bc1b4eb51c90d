pub mod best_scores;
pub mod deck;
pub mod difficulty;
pub mod session;

use std::time::Instant;

pub use best_scores::BestScores;
pub use difficulty::{
    Difficulty,
    GridSize,
};
use rand::{
    rngs::StdRng,
    SeedableRng,
};
pub use session::{
    Card,
    CardState,
    ClickOutcome,
    GameSession,
    Phase,
};
use tracing::info;

use crate::{
    core::AppError,
    persistence::KeyValueStore,
};

pub const WIN_MESSAGE: &str = "🎉 You matched all pairs! Well done!";

/// Counters shown above the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub moves: u32,
    pub matches: usize,
    pub total_pairs: usize,
    pub elapsed: String,
}

/// Owns the current session, the difficulty selection and the best scores.
/// Starting a session drops the previous one together with its clock and any
/// pending flip-back, so only one clock is ever live.
pub struct MemoryGame {
    difficulty: Difficulty,
    session: Option<GameSession>,
    best: BestScores,
    store: Box<dyn KeyValueStore>,
    rng: StdRng,
}

impl MemoryGame {
    pub fn new(store: Box<dyn KeyValueStore>, difficulty: Difficulty) -> Self {
        Self::with_rng(store, difficulty, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(store: Box<dyn KeyValueStore>, difficulty: Difficulty, rng: StdRng) -> Self {
        let best = BestScores::load(store.as_ref());
        Self { difficulty, session: None, best, store, rng }
    }

    /// Start and restart both deal a new board for the selected difficulty.
    pub fn start(&mut self, now: Instant) {
        self.session = None;
        self.session = Some(GameSession::start(self.difficulty, &mut self.rng, now));
        info!(difficulty = %self.difficulty, "memory game started");
    }

    /// Changes the selection; a new board is dealt only when a session
    /// already exists. Returns whether a new board was dealt.
    pub fn set_difficulty(&mut self, difficulty: Difficulty, now: Instant) -> bool {
        self.difficulty = difficulty;
        if self.session.is_some() {
            self.start(now);
            true
        } else {
            false
        }
    }

    pub fn click(&mut self, index: usize, now: Instant) -> Result<ClickOutcome, AppError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(ClickOutcome::Ignored);
        };

        let outcome = session.click(index, now);
        if let ClickOutcome::Match { finished: true } = outcome {
            let (difficulty, moves) = (session.difficulty(), session.moves());
            info!(%difficulty, moves, time = %session.elapsed_text(), "memory game finished");
            self.best.record(difficulty, moves, self.store.as_mut())?;
        }
        Ok(outcome)
    }

    pub fn poll(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.poll(now);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.as_ref().and_then(GameSession::next_deadline)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn can_restart(&self) -> bool {
        self.session.is_some()
    }

    pub fn best_scores(&self) -> &BestScores {
        &self.best
    }

    pub fn completion_message(&self) -> Option<&'static str> {
        self.session.as_ref().filter(|s| s.is_finished()).map(|_| WIN_MESSAGE)
    }

    pub fn stats(&self) -> GameStats {
        match &self.session {
            Some(session) => GameStats {
                moves: session.moves(),
                matches: session.matches(),
                total_pairs: session.total_pairs(),
                elapsed: session.elapsed_text(),
            },
            None => GameStats {
                moves: 0,
                matches: 0,
                total_pairs: self.difficulty.grid().pairs(),
                elapsed: session::format_time(0),
            },
        }
    }
}
