use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
}

impl GridSize {
    pub fn cards(&self) -> usize {
        self.cols * self.rows
    }

    pub fn pairs(&self) -> usize {
        self.cards() / 2
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    pub fn grid(&self) -> GridSize {
        match self {
            Difficulty::Easy => GridSize { cols: 4, rows: 3 },
            Difficulty::Hard => GridSize { cols: 6, rows: 4 },
        }
    }

    /// Key of this difficulty's best score in the key/value store.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "memory_best_easy",
            Difficulty::Hard => "memory_best_hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (4×3)",
            Difficulty::Hard => "Hard (6×4)",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}
