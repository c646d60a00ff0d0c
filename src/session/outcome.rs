use serde::{Deserialize, Serialize};

/// Points awarded per correct answer.
pub const POINTS_PER_CORRECT: u32 = 100;

/// Final result of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub score: u32,
    /// Rounded percentage in `0..=100`.
    pub accuracy: u32,
    pub correct: usize,
    pub total: usize,
}

impl Outcome {
    pub fn from_counts(correct: usize, total: usize) -> Self {
        let accuracy = if total == 0 {
            0
        } else {
            (correct as f64 / total as f64 * 100.0).round() as u32
        };

        Self {
            score: correct as u32 * POINTS_PER_CORRECT,
            accuracy,
            correct,
            total,
        }
    }

    pub fn incorrect(&self) -> usize {
        self.total - self.correct
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}
