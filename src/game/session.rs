use std::time::{
    Duration,
    Instant,
};

use rand::Rng;
use tracing::debug;

use super::{
    deck::build_deck,
    difficulty::{
        Difficulty,
        GridSize,
    },
};
use crate::core::{
    timer,
    Ticker,
    Timeout,
};

/// How long a mismatched pair stays face-up.
pub const REVEAL_DELAY: Duration = Duration::from_secs(1);
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
pub const HIDDEN_FACE: &str = "?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Hidden,
    Flipped,
    Matched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub symbol: &'static str,
    pub state: CardState,
}

impl Card {
    pub fn new(symbol: &'static str) -> Self {
        Self { symbol, state: CardState::Hidden }
    }

    /// What the player currently sees on this card.
    pub fn face(&self) -> &'static str {
        match self.state {
            CardState::Hidden => HIDDEN_FACE,
            CardState::Flipped | CardState::Matched => self.symbol,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstPick,
    AwaitingSecondPick { first: usize },
    Locked { first: usize, second: usize, flip_back: Timeout },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    FirstPick,
    Match { finished: bool },
    Mismatch,
}

#[derive(Debug)]
pub struct GameSession {
    difficulty: Difficulty,
    grid: GridSize,
    total_pairs: usize,
    moves: u32,
    matches: usize,
    cards: Vec<Card>,
    phase: Phase,
    ticker: Ticker,
}

impl GameSession {
    /// Deals a fresh shuffled board for `difficulty` and starts the clock.
    pub fn start<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R, now: Instant) -> Self {
        let deck = build_deck(difficulty.grid().pairs(), rng);
        Self::with_deck(difficulty, deck, now)
    }

    /// Starts a session over a fixed card order.
    pub fn with_deck(difficulty: Difficulty, deck: Vec<&'static str>, now: Instant) -> Self {
        let total_pairs = deck.len() / 2;
        debug!(%difficulty, total_pairs, "dealing board");

        Self {
            difficulty,
            grid: difficulty.grid(),
            total_pairs,
            moves: 0,
            matches: 0,
            cards: deck.into_iter().map(Card::new).collect(),
            phase: Phase::AwaitingFirstPick,
            ticker: Ticker::start(now, TICK_PERIOD),
        }
    }

    pub fn click(&mut self, index: usize, now: Instant) -> ClickOutcome {
        self.poll(now);

        match self.phase {
            Phase::Locked { .. } | Phase::Finished => return ClickOutcome::Ignored,
            _ => {}
        }
        match self.cards.get(index) {
            Some(card) if card.state == CardState::Hidden => {}
            _ => return ClickOutcome::Ignored,
        }

        self.cards[index].state = CardState::Flipped;

        let first = match self.phase {
            Phase::AwaitingSecondPick { first } => first,
            _ => {
                self.phase = Phase::AwaitingSecondPick { first: index };
                return ClickOutcome::FirstPick;
            }
        };

        self.moves += 1;

        if self.cards[first].symbol == self.cards[index].symbol {
            self.cards[first].state = CardState::Matched;
            self.cards[index].state = CardState::Matched;
            self.matches += 1;

            let finished = self.matches == self.total_pairs;
            if finished {
                self.phase = Phase::Finished;
                self.ticker.stop();
                debug!(moves = self.moves, seconds = self.elapsed_seconds(), "board cleared");
            } else {
                self.phase = Phase::AwaitingFirstPick;
            }
            ClickOutcome::Match { finished }
        } else {
            self.phase = Phase::Locked {
                first,
                second: index,
                flip_back: Timeout::after(now, REVEAL_DELAY),
            };
            ClickOutcome::Mismatch
        }
    }

    /// Advances the clock and flips a mismatched pair back once its reveal
    /// delay has passed.
    pub fn poll(&mut self, now: Instant) {
        self.ticker.poll(now);

        if let Phase::Locked { first, second, flip_back } = self.phase {
            if flip_back.is_due(now) {
                self.cards[first].state = CardState::Hidden;
                self.cards[second].state = CardState::Hidden;
                self.phase = Phase::AwaitingFirstPick;
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        let flip_back = match self.phase {
            Phase::Locked { flip_back, .. } => Some(flip_back.deadline()),
            _ => None,
        };
        timer::earliest(flip_back, self.ticker.next_tick())
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matches(&self) -> usize {
        self.matches
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.ticker.ticks()
    }

    pub fn elapsed_text(&self) -> String {
        format_time(self.elapsed_seconds())
    }
}

/// `MM:SS`
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
