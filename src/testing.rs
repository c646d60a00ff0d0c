//! Fixtures shared by unit tests.

use std::collections::BTreeMap;

use crate::models::{Difficulty, QuizItem};

/// An item whose correct option is `1`.
pub fn item(id: u32, difficulty: Difficulty) -> QuizItem {
    QuizItem {
        id,
        prompt: format!("Question {id}"),
        options: ["a", "b", "c", "d"].map(String::from),
        correct_index: 1,
        difficulty,
        subject: "General".to_string(),
        localized: BTreeMap::new(),
    }
}

/// `easy` easy items, then `medium` medium items, then `hard` hard items.
pub fn tiered(easy: u32, medium: u32, hard: u32) -> Vec<QuizItem> {
    let tiers = [
        (Difficulty::Easy, easy),
        (Difficulty::Medium, medium),
        (Difficulty::Hard, hard),
    ];
    let mut id = 0;
    let mut items = Vec::new();
    for (difficulty, count) in tiers {
        for _ in 0..count {
            id += 1;
            items.push(item(id, difficulty));
        }
    }
    items
}
