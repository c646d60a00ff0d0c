//! Aggregates over the learner's recorded attempts.

use chrono::{Days, NaiveDate};

use crate::attempts::AttemptRecord;

pub const WEEK: usize = 7;

/// Attempts at or above this accuracy extend a subject streak.
pub const PASS_ACCURACY: u32 = 50;

/// Streaks only look back over this many attempts.
const STREAK_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStats {
    pub date: NaiveDate,
    pub attempts: usize,
    pub average_score: u32,
}

fn average_score<'a>(records: impl Iterator<Item = &'a AttemptRecord>) -> (usize, u32) {
    let (count, total) = records.fold((0usize, 0u64), |(count, total), r| {
        (count + 1, total + u64::from(r.score))
    });
    if count == 0 {
        return (0, 0);
    }
    (count, (total as f64 / count as f64).round() as u32)
}

/// Attempts and average score for each of the seven days ending on `today`,
/// oldest first. Days are taken in UTC.
pub fn weekly_progress(history: &[AttemptRecord], today: NaiveDate) -> [DayStats; WEEK] {
    std::array::from_fn(|i| {
        let back = (WEEK - 1 - i) as u64;
        let date = today.checked_sub_days(Days::new(back)).unwrap_or(today);
        let (attempts, average_score) = average_score(
            history
                .iter()
                .filter(|r| r.finished_at.date_naive() == date),
        );
        DayStats {
            date,
            attempts,
            average_score,
        }
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubjectProgress {
    pub completed: usize,
    pub average_score: u32,
    pub streak: usize,
}

fn matches_subject(record: &AttemptRecord, subject: &str) -> bool {
    record
        .subject
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case(subject))
}

/// Completed quizzes, average score and current pass streak in one subject.
pub fn subject_progress(history: &[AttemptRecord], subject: &str) -> SubjectProgress {
    let in_subject: Vec<&AttemptRecord> = history
        .iter()
        .filter(|r| matches_subject(r, subject))
        .collect();
    let (completed, average_score) = average_score(in_subject.iter().copied());
    let streak = in_subject
        .iter()
        .rev()
        .take(STREAK_WINDOW)
        .take_while(|r| r.accuracy >= PASS_ACCURACY)
        .count();

    SubjectProgress {
        completed,
        average_score,
        streak,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: String,
    pub attempts: usize,
    pub average_score: u32,
    pub average_accuracy: u32,
}

/// Attempts, average score and average accuracy per subject, in order of
/// first attempt. Mixed quizzes are left out.
pub fn category_stats(history: &[AttemptRecord]) -> Vec<CategoryStats> {
    let mut categories: Vec<&str> = Vec::new();
    for subject in history.iter().filter_map(|r| r.subject.as_deref()) {
        if !categories.iter().any(|c| c.eq_ignore_ascii_case(subject)) {
            categories.push(subject);
        }
    }

    categories
        .into_iter()
        .map(|category| {
            let in_category = || history.iter().filter(|r| matches_subject(r, category));
            let (attempts, average_score) = average_score(in_category());
            let accuracy_sum: u32 = in_category().map(|r| r.accuracy).sum();
            let average_accuracy = if attempts == 0 {
                0
            } else {
                (accuracy_sum as f64 / attempts as f64).round() as u32
            };
            CategoryStats {
                category: category.to_string(),
                attempts,
                average_score,
                average_accuracy,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::i18n::Language;
    use crate::session::Outcome;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn attempt(d: u32, correct: usize, subject: Option<&str>) -> AttemptRecord {
        let mut record = AttemptRecord::new(
            Uuid::new_v4(),
            &Outcome::from_counts(correct, 10),
            Language::En,
            subject.map(String::from),
            None,
        );
        record.finished_at = Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap();
        record
    }

    #[test]
    fn empty_history_gives_seven_empty_days() {
        let week = weekly_progress(&[], day(10));
        assert_eq!(week[0].date, day(4));
        assert_eq!(week[6].date, day(10));
        assert!(week.iter().all(|d| d.attempts == 0 && d.average_score == 0));
    }

    #[test]
    fn weekly_progress_averages_per_day() {
        let history = vec![
            attempt(10, 6, None),
            attempt(10, 9, Some("Science")),
            attempt(8, 3, None),
        ];
        let week = weekly_progress(&history, day(10));

        assert_eq!(week[6].attempts, 2);
        // (600 + 900) / 2
        assert_eq!(week[6].average_score, 750);
        assert_eq!(week[4].attempts, 1);
        assert_eq!(week[4].average_score, 300);
        // a day with no attempts in the middle of the week
        assert_eq!(week[5].attempts, 0);
        assert_eq!(week[5].average_score, 0);
    }

    #[test]
    fn weekly_progress_covers_exactly_seven_days() {
        let history = vec![attempt(4, 5, None), attempt(3, 5, None), attempt(11, 5, None)];
        let week = weekly_progress(&history, day(10));
        // the 4th is the oldest day shown; the 3rd and the 11th fall outside
        assert_eq!(week[0].attempts, 1);
        assert_eq!(week.iter().map(|d| d.attempts).sum::<usize>(), 1);
    }

    #[test]
    fn subject_progress_counts_only_that_subject() {
        let history = vec![
            attempt(1, 8, Some("Science")),
            attempt(2, 2, Some("Science")),
            attempt(3, 7, Some("science")),
            attempt(4, 9, Some("science")),
            attempt(5, 10, Some("History")),
            attempt(6, 10, None),
        ];
        let science = subject_progress(&history, "Science");

        assert_eq!(science.completed, 4);
        // (800 + 200 + 700 + 900) / 4
        assert_eq!(science.average_score, 650);
        // the 20% attempt breaks the streak
        assert_eq!(science.streak, 2);
        assert_eq!(subject_progress(&history, "Physics"), SubjectProgress::default());
    }

    #[test]
    fn streak_is_capped_to_recent_attempts() {
        let history: Vec<AttemptRecord> =
            (1..=12).map(|d| attempt(d, 10, Some("Physics"))).collect();
        assert_eq!(subject_progress(&history, "Physics").streak, STREAK_WINDOW);
    }

    #[test]
    fn category_stats_skip_mixed_quizzes() {
        let history = vec![
            attempt(1, 4, Some("History")),
            attempt(2, 10, None),
            attempt(3, 8, Some("Science")),
            attempt(4, 6, Some("history")),
        ];
        assert_eq!(
            category_stats(&history),
            vec![
                CategoryStats {
                    category: "History".to_string(),
                    attempts: 2,
                    average_score: 500,
                    average_accuracy: 50,
                },
                CategoryStats {
                    category: "Science".to_string(),
                    attempts: 1,
                    average_score: 800,
                    average_accuracy: 80,
                },
            ]
        );
    }
}
