use std::collections::HashMap;

use tracing::{
    info,
    warn,
};

use super::difficulty::Difficulty;
use crate::{
    core::AppError,
    persistence::KeyValueStore,
};

pub const NO_SCORE_PLACEHOLDER: &str = "–";

/// Lowest finishing move count per difficulty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BestScores {
    scores: HashMap<Difficulty, u32>,
}

impl BestScores {
    /// Reads both slots. Absent or unparsable values count as "no record".
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut scores = HashMap::new();
        for difficulty in Difficulty::ALL {
            let Some(raw) = store.get_item(difficulty.storage_key()) else {
                continue;
            };
            match raw.trim().parse::<u32>() {
                Ok(moves) => {
                    scores.insert(difficulty, moves);
                }
                Err(_) => warn!(key = difficulty.storage_key(), value = %raw, "ignoring malformed best score"),
            }
        }
        Self { scores }
    }

    pub fn get(&self, difficulty: Difficulty) -> Option<u32> {
        self.scores.get(&difficulty).copied()
    }

    pub fn display(&self, difficulty: Difficulty) -> String {
        match self.get(difficulty) {
            Some(moves) => moves.to_string(),
            None => NO_SCORE_PLACEHOLDER.to_string(),
        }
    }

    /// Stores `moves` when it beats the current record or none exists.
    /// Returns whether the record changed.
    pub fn record(
        &mut self,
        difficulty: Difficulty,
        moves: u32,
        store: &mut dyn KeyValueStore,
    ) -> Result<bool, AppError> {
        if self.get(difficulty).is_some_and(|best| moves >= best) {
            return Ok(false);
        }

        self.scores.insert(difficulty, moves);
        info!(%difficulty, moves, "new best score");
        store.set_item(difficulty.storage_key(), &moves.to_string())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn first_result_always_sets_the_record() {
        let mut store = MemoryStore::new();
        let mut scores = BestScores::load(&store);
        assert_eq!(scores.display(Difficulty::Easy), NO_SCORE_PLACEHOLDER);

        assert!(scores.record(Difficulty::Easy, 30, &mut store).unwrap());
        assert_eq!(scores.get(Difficulty::Easy), Some(30));
        assert_eq!(store.get_item("memory_best_easy").as_deref(), Some("30"));
        assert_eq!(scores.get(Difficulty::Hard), None);
    }

    #[test]
    fn only_strict_improvements_are_written() {
        let mut store = MemoryStore::new();
        let mut scores = BestScores::default();
        scores.record(Difficulty::Hard, 20, &mut store).unwrap();

        assert!(!scores.record(Difficulty::Hard, 20, &mut store).unwrap());
        assert!(!scores.record(Difficulty::Hard, 25, &mut store).unwrap());
        assert!(scores.record(Difficulty::Hard, 18, &mut store).unwrap());
        assert_eq!(store.get_item("memory_best_hard").as_deref(), Some("18"));
    }

    #[test]
    fn malformed_values_read_as_absent() {
        let mut store = MemoryStore::new();
        store.set_item("memory_best_easy", "fast").unwrap();
        store.set_item("memory_best_hard", "12").unwrap();

        let scores = BestScores::load(&store);
        assert_eq!(scores.get(Difficulty::Easy), None);
        assert_eq!(scores.display(Difficulty::Easy), NO_SCORE_PLACEHOLDER);
        assert_eq!(scores.display(Difficulty::Hard), "12");
    }
}
