//! Leaderboard ranking and the teacher's class overview.

use crate::models::{LeaderboardEntry, StudentProgress};

/// Students below this accuracy are flagged on the class overview.
pub const ATTENTION_THRESHOLD: u32 = 85;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub entry: &'a LeaderboardEntry,
}

/// Rank by score, then accuracy, then name.
pub fn ranked(entries: &[LeaderboardEntry]) -> Vec<RankedEntry<'_>> {
    let mut sorted: Vec<&LeaderboardEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.accuracy.cmp(&a.accuracy))
            .then_with(|| a.name.cmp(&b.name))
    });

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassSummary<'a> {
    pub students: usize,
    pub average_score: u32,
    pub average_accuracy: u32,
    pub needs_attention: Vec<&'a LeaderboardEntry>,
}

pub fn class_summary(entries: &[LeaderboardEntry]) -> ClassSummary<'_> {
    let students = entries.len();
    let average = |value: fn(&LeaderboardEntry) -> u32| {
        if students == 0 {
            return 0;
        }
        let sum: u32 = entries.iter().map(value).sum();
        (sum as f64 / students as f64).round() as u32
    };

    let mut needs_attention: Vec<&LeaderboardEntry> = entries
        .iter()
        .filter(|e| e.accuracy < ATTENTION_THRESHOLD)
        .collect();
    needs_attention.sort_by_key(|e| e.accuracy);

    ClassSummary {
        students,
        average_score: average(|e| e.score),
        average_accuracy: average(|e| e.accuracy),
        needs_attention,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectAverage {
    pub subject: String,
    pub average: f64,
    pub students: usize,
}

/// Mean score per subject across the class, best subject first.
///
/// Subjects keep the order they are first seen in when averages tie.
pub fn class_subject_averages(students: &[StudentProgress]) -> Vec<SubjectAverage> {
    let mut totals: Vec<(String, u32, usize)> = Vec::new();
    for score in students.iter().flat_map(|s| &s.subjects) {
        match totals.iter_mut().find(|(subject, _, _)| *subject == score.subject) {
            Some((_, sum, count)) => {
                *sum += score.score;
                *count += 1;
            }
            None => totals.push((score.subject.clone(), score.score, 1)),
        }
    }

    let mut averages: Vec<SubjectAverage> = totals
        .into_iter()
        .map(|(subject, sum, students)| SubjectAverage {
            subject,
            average: sum as f64 / students as f64,
            students,
        })
        .collect();
    averages.sort_by(|a, b| b.average.total_cmp(&a.average));
    averages
}

/// Students ordered by completed quizzes, then streak.
pub fn most_active(students: &[StudentProgress]) -> Vec<&StudentProgress> {
    let mut sorted: Vec<&StudentProgress> = students.iter().collect();
    sorted.sort_by(|a, b| {
        b.completed_quizzes
            .cmp(&a.completed_quizzes)
            .then_with(|| b.current_streak.cmp(&a.current_streak))
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo;

    fn entry(name: &str, score: u32, accuracy: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            accuracy,
            avatar: String::new(),
            is_you: false,
        }
    }

    #[test]
    fn ranks_by_score_then_accuracy_then_name() {
        let entries = vec![
            entry("Cleo", 100, 80),
            entry("Bea", 200, 70),
            entry("Ash", 100, 80),
            entry("Dev", 100, 90),
        ];
        let names: Vec<&str> = ranked(&entries)
            .iter()
            .map(|r| r.entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bea", "Dev", "Ash", "Cleo"]);
    }

    #[test]
    fn ranks_start_at_one() {
        let board = demo::leaderboard();
        let ranked = ranked(&board);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].entry.name, "Alex Chen");
        let you = ranked.iter().find(|r| r.entry.is_you).unwrap();
        assert_eq!(you.rank, 3);
    }

    #[test]
    fn class_summary_of_demo_board() {
        let board = demo::leaderboard();
        let summary = class_summary(&board);
        assert_eq!(summary.students, 8);
        // 17280 / 8
        assert_eq!(summary.average_score, 2160);
        // 709 / 8 = 88.6
        assert_eq!(summary.average_accuracy, 89);
        let flagged: Vec<&str> = summary.needs_attention.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(flagged, vec!["Emily Davis"]);
    }

    #[test]
    fn empty_class() {
        let summary = class_summary(&[]);
        assert_eq!(summary.students, 0);
        assert_eq!(summary.average_score, 0);
        assert!(summary.needs_attention.is_empty());
    }

    #[test]
    fn subject_averages_of_demo_class() {
        let averages = class_subject_averages(&demo::class_progress());
        let rows: Vec<(&str, f64, usize)> = averages
            .iter()
            .map(|a| (a.subject.as_str(), a.average, a.students))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Literature", 91.25, 4),
                ("Mathematics", 90.75, 4),
                ("Science", 90.5, 4),
                ("Geography", 89.25, 4),
            ]
        );
    }

    #[test]
    fn subject_averages_count_only_students_with_the_subject() {
        let mut class = demo::class_progress();
        class[0].subjects.retain(|s| s.subject == "Mathematics");
        let averages = class_subject_averages(&class);
        let science = averages.iter().find(|a| a.subject == "Science").unwrap();
        assert_eq!(science.students, 3);
        // (95 + 88 + 87) / 3
        assert_eq!(science.average, 90.0);
        assert!(class_subject_averages(&[]).is_empty());
    }

    #[test]
    fn most_active_orders_by_quizzes_then_streak() {
        let mut class = demo::class_progress();
        class[1].completed_quizzes = 30;
        let names: Vec<&str> = most_active(&class).iter().map(|s| s.name.as_str()).collect();
        // Sarah and Priya both have 30 quizzes; Sarah's streak is longer
        assert_eq!(
            names,
            vec!["Alex Chen", "Sarah Johnson", "Priya Sharma", "Mohammed Ali"]
        );
    }
}
