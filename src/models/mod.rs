mod profile;
mod question;

pub use profile::{
    Achievement, AnalyticsData, DatedValue, LeaderboardEntry, Profile, StudentProgress,
    SubjectScore, UserStats,
};
pub use question::{Difficulty, LocalizedText, NUM_OPTIONS, QuizItem};
