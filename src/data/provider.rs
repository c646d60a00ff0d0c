use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, QuizItem};

use super::demo;
use super::loader::{LoadError, load_items_from_json};

/// A source of quiz items.
pub trait ContentProvider {
    /// All items, or only those whose subject matches `category`.
    fn items(&self, category: Option<&str>) -> Result<Vec<QuizItem>, LoadError>;

    /// Short human-readable name, for logs.
    fn describe(&self) -> String;
}

/// Items held in memory.
#[derive(Debug, Clone)]
pub struct StaticContent {
    items: Vec<QuizItem>,
}

impl StaticContent {
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self { items }
    }

    /// The built-in demo question bank.
    pub fn demo() -> Self {
        Self::new(demo::questions())
    }
}

impl ContentProvider for StaticContent {
    fn items(&self, category: Option<&str>) -> Result<Vec<QuizItem>, LoadError> {
        Ok(filter_by_category(self.items.clone(), category))
    }

    fn describe(&self) -> String {
        format!("built-in ({} questions)", self.items.len())
    }
}

/// Items read from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct JsonContent {
    path: PathBuf,
}

impl JsonContent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentProvider for JsonContent {
    fn items(&self, category: Option<&str>) -> Result<Vec<QuizItem>, LoadError> {
        let items = load_items_from_json(&self.path)?;
        Ok(filter_by_category(items, category))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keep the items whose subject matches `category`, ignoring case.
pub fn filter_by_category(items: Vec<QuizItem>, category: Option<&str>) -> Vec<QuizItem> {
    match category {
        Some(category) => items
            .into_iter()
            .filter(|item| item.subject.eq_ignore_ascii_case(category))
            .collect(),
        None => items,
    }
}

/// Distinct subjects in order of first appearance.
pub fn subjects(items: &[QuizItem]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(&item.subject)) {
            seen.push(&item.subject);
        }
    }
    seen
}

/// How many items of each difficulty one attempt draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl Default for TierCounts {
    fn default() -> Self {
        Self {
            easy: 3,
            medium: 4,
            hard: 3,
        }
    }
}

impl TierCounts {
    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }
}

/// Build the item sequence for one attempt: the first `easy` easy items,
/// then medium, then hard, each in source order.
///
/// Tiers with too few items contribute what they have.
pub fn select_session_items(items: &[QuizItem], counts: TierCounts) -> Vec<QuizItem> {
    let tiers = [
        (Difficulty::Easy, counts.easy),
        (Difficulty::Medium, counts.medium),
        (Difficulty::Hard, counts.hard),
    ];

    let mut selected = Vec::with_capacity(counts.total());
    for (difficulty, wanted) in tiers {
        let before = selected.len();
        selected.extend(
            items
                .iter()
                .filter(|item| item.difficulty == difficulty)
                .take(wanted)
                .cloned(),
        );
        let got = selected.len() - before;
        if got < wanted {
            tracing::debug!(difficulty = difficulty.as_str(), wanted, got, "short tier");
        }
    }
    selected
}
