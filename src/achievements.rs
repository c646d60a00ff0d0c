//! Badges awarded at the end of a quiz.

use crate::models::Achievement;
use crate::session::Outcome;

pub const FIRST_QUIZ: u32 = 1;
pub const PERFECT_SCORE: u32 = 2;

/// The badge a finished quiz earns, if any.
///
/// Perfect Score wins over First Quiz; a badge that is already earned is
/// never awarded again.
pub fn badge_for<'a>(outcome: &Outcome, achievements: &'a [Achievement]) -> Option<&'a Achievement> {
    let mut candidates = Vec::with_capacity(2);
    if outcome.is_perfect() {
        candidates.push(PERFECT_SCORE);
    }
    if outcome.correct > 0 {
        candidates.push(FIRST_QUIZ);
    }

    candidates.into_iter().find_map(|id| {
        achievements
            .iter()
            .find(|a| a.id == id && !a.earned)
    })
}

/// Share of achievements earned, as a rounded percentage.
pub fn completion_percentage(achievements: &[Achievement]) -> u32 {
    if achievements.is_empty() {
        return 0;
    }
    let earned = achievements.iter().filter(|a| a.earned).count();
    (earned as f64 / achievements.len() as f64 * 100.0).round() as u32
}
