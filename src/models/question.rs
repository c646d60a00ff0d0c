use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const NUM_OPTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// Per-language override of an item's prompt and options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: u32,
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_index: usize,
    pub difficulty: Difficulty,
    pub subject: String,
    /// Keyed by language code (`"ta"`, `"hi"`, ...).
    #[serde(default)]
    pub localized: BTreeMap<String, LocalizedText>,
}

impl QuizItem {
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}
