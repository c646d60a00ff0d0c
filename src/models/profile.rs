//! Learner profile snapshot.
//!
//! The profile is owned by the application and handed to each view by
//! reference. The only writer is [`Profile::record_completion`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attempts::AttemptRecord;
use crate::session::Outcome;

/// Score points needed per level.
const POINTS_PER_LEVEL: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub accuracy: u32,
    pub avatar: String,
    /// Marks the row belonging to the current learner.
    #[serde(default)]
    pub is_you: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub earned: bool,
    pub earned_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_score: u32,
    pub accuracy: u32,
    pub current_streak: u32,
    pub completed_quizzes: u32,
    pub level: u32,
}

impl UserStats {
    /// Percentage progress toward the next level, in `0..100`.
    pub fn level_progress(&self) -> u32 {
        (self.level % 10) * 10
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectScore {
    pub subject: String,
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub score_over_time: Vec<DatedValue>,
    pub accuracy_trend: Vec<DatedValue>,
    pub subject_performance: Vec<SubjectScore>,
}

/// One student's row on the teacher's class page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProgress {
    pub name: String,
    pub avatar: String,
    pub total_score: u32,
    pub accuracy: u32,
    pub completed_quizzes: u32,
    pub current_streak: u32,
    pub level: u32,
    pub last_active: String,
    pub subjects: Vec<SubjectScore>,
}

impl StudentProgress {
    /// Rounded mean of the per-subject scores, 0 with no subjects.
    pub fn subject_average(&self) -> u32 {
        if self.subjects.is_empty() {
            return 0;
        }
        let sum: u32 = self.subjects.iter().map(|s| s.score).sum();
        (sum as f64 / self.subjects.len() as f64).round() as u32
    }

    pub fn strongest_subject(&self) -> Option<&SubjectScore> {
        self.subjects.iter().max_by_key(|s| s.score)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub display_name: String,
    pub stats: UserStats,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Per-student progress shown to teachers.
    pub class: Vec<StudentProgress>,
    pub achievements: Vec<Achievement>,
    pub analytics: AnalyticsData,
    pub history: Vec<AttemptRecord>,
}

impl Profile {
    pub fn achievement(&self, id: u32) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn earned_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.earned).count()
    }

    /// Fold a finished quiz into the stats, leaderboard and analytics series.
    pub fn record_completion(&mut self, outcome: &Outcome, badge: Option<u32>, today: NaiveDate) {
        let previous = self.stats.completed_quizzes;
        let weighted = self.stats.accuracy as f64 * previous as f64 + outcome.accuracy as f64;

        self.stats.completed_quizzes = previous + 1;
        self.stats.total_score += outcome.score;
        self.stats.accuracy = (weighted / self.stats.completed_quizzes as f64).round() as u32;
        self.stats.level = self
            .stats
            .level
            .max(self.stats.total_score / POINTS_PER_LEVEL + 1);

        if let Some(id) = badge {
            if let Some(achievement) = self.achievements.iter_mut().find(|a| a.id == id) {
                achievement.earned = true;
                achievement.earned_date = Some(today);
            }
        }

        if let Some(entry) = self.leaderboard.iter_mut().find(|e| e.is_you) {
            entry.score = self.stats.total_score;
            entry.accuracy = self.stats.accuracy;
        }

        self.analytics.score_over_time.push(DatedValue {
            date: today,
            value: self.stats.total_score,
        });
        self.analytics.accuracy_trend.push(DatedValue {
            date: today,
            value: self.stats.accuracy,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn completion_updates_stats() {
        let mut profile = demo::profile();
        let before = profile.stats;
        let outcome = Outcome::from_counts(7, 10);

        profile.record_completion(&outcome, None, today());

        assert_eq!(profile.stats.completed_quizzes, before.completed_quizzes + 1);
        assert_eq!(profile.stats.total_score, before.total_score + 700);
        // (88 * 25 + 70) / 26 = 87.3
        assert_eq!(profile.stats.accuracy, 87);
        assert_eq!(profile.stats.level, 8);
    }

    #[test]
    fn completion_updates_own_leaderboard_row() {
        let mut profile = demo::profile();
        profile.record_completion(&Outcome::from_counts(10, 10), None, today());

        let you = profile.leaderboard.iter().find(|e| e.is_you).unwrap();
        assert_eq!(you.score, 3200);
        assert_eq!(
            profile.analytics.score_over_time.last().map(|p| p.value),
            Some(3200)
        );
    }

    #[test]
    fn completion_marks_badge_earned() {
        let mut profile = demo::profile();
        profile.achievements[0].earned = false;
        profile.achievements[0].earned_date = None;

        profile.record_completion(&Outcome::from_counts(1, 10), Some(1), today());

        let first = profile.achievement(1).unwrap();
        assert!(first.earned);
        assert_eq!(first.earned_date, Some(today()));
    }

    #[test]
    fn level_rises_with_total_score() {
        let mut profile = demo::profile();
        profile.stats.total_score = 8_900;
        profile.record_completion(&Outcome::from_counts(2, 2), None, today());
        assert_eq!(profile.stats.level, 10);
    }

    #[test]
    fn student_subject_average() {
        let alex = &demo::class_progress()[0];
        // (98 + 92 + 95 + 94) / 4 = 94.75
        assert_eq!(alex.subject_average(), 95);
        assert_eq!(
            alex.strongest_subject().map(|s| s.subject.as_str()),
            Some("Mathematics")
        );

        let mut empty = alex.clone();
        empty.subjects.clear();
        assert_eq!(empty.subject_average(), 0);
        assert!(empty.strongest_subject().is_none());
    }
}
