//! Built-in demo content and learner profile.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{
    Achievement, AnalyticsData, DatedValue, Difficulty, LeaderboardEntry, LocalizedText, Profile,
    QuizItem, StudentProgress, SubjectScore, UserStats,
};

type Options = [&'static str; 4];

fn override_text(prompt: &str, options: Options) -> LocalizedText {
    LocalizedText {
        prompt: prompt.to_string(),
        options: options.map(String::from),
    }
}

#[allow(clippy::too_many_arguments)]
fn question(
    id: u32,
    prompt: &str,
    options: Options,
    correct_index: usize,
    difficulty: Difficulty,
    subject: &str,
    ta: (&str, Options),
    hi: (&str, Options),
) -> QuizItem {
    let localized = BTreeMap::from([
        ("ta".to_string(), override_text(ta.0, ta.1)),
        ("hi".to_string(), override_text(hi.0, hi.1)),
    ]);

    QuizItem {
        id,
        prompt: prompt.to_string(),
        options: options.map(String::from),
        correct_index,
        difficulty,
        subject: subject.to_string(),
        localized,
    }
}

pub fn questions() -> Vec<QuizItem> {
    use Difficulty::*;

    vec![
        question(
            1,
            "What is 2 + 2?",
            ["3", "4", "5", "6"],
            1,
            Easy,
            "Mathematics",
            ("2 + 2 என்ன?", ["3", "4", "5", "6"]),
            ("2 + 2 क्या है?", ["3", "4", "5", "6"]),
        ),
        question(
            2,
            "Which planet is closest to the Sun?",
            ["Venus", "Mercury", "Earth", "Mars"],
            1,
            Easy,
            "Science",
            (
                "சூரியனுக்கு மிக அருகில் உள்ள கிரகம் எது?",
                ["வெள்ளி", "புதன்", "பூமி", "செவ்வாய்"],
            ),
            (
                "सूर्य के सबसे नजदीक कौन सा ग्रह है?",
                ["शुक्र", "बुध", "पृथ्वी", "मंगल"],
            ),
        ),
        question(
            3,
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            2,
            Easy,
            "Geography",
            (
                "பிரான்சின் தலைநகரம் எது?",
                ["லண்டன்", "பெர்லின்", "பாரிஸ்", "மாட்ரிட்"],
            ),
            (
                "फ्रांस की राजधानी क्या है?",
                ["लंदन", "बर्लिन", "पेरिस", "मैड्रिड"],
            ),
        ),
        question(
            4,
            "What is 15 × 7?",
            ["95", "105", "115", "125"],
            1,
            Medium,
            "Mathematics",
            ("15 × 7 என்ன?", ["95", "105", "115", "125"]),
            ("15 × 7 क्या है?", ["95", "105", "115", "125"]),
        ),
        question(
            5,
            "Which gas makes up most of Earth's atmosphere?",
            ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
            1,
            Medium,
            "Science",
            (
                "பூமியின் வளிமண்டலத்தில் அதிகம் உள்ள வாயு எது?",
                ["ஆக்ஸிஜன்", "நைட்ரஜன்", "கார்பன் டை ஆக்சைடு", "ஹைட்ரஜன்"],
            ),
            (
                "पृथ्वी के वायुमंडल में सबसे ज्यादा कौन सी गैस है?",
                ["ऑक्सीजन", "नाइट्रोजन", "कार्बन डाइऑक्साइड", "हाइड्रोजन"],
            ),
        ),
        question(
            6,
            "Who wrote 'Romeo and Juliet'?",
            ["Charles Dickens", "William Shakespeare", "Jane Austen", "Mark Twain"],
            1,
            Medium,
            "Literature",
            (
                "'Romeo and Juliet' யார் எழுதினார்?",
                ["சார்லஸ் டிக்கன்ஸ்", "வில்லியம் ஷேக்ஸ்பியர்", "ஜேன் ஆஸ்டன்", "மார்க் ட்வைன்"],
            ),
            (
                "'Romeo and Juliet' किसने लिखा?",
                ["चार्ल्स डिकेंस", "विलियम शेक्सपियर", "जेन ऑस्टन", "मार्क ट्वेन"],
            ),
        ),
        question(
            7,
            "What is the derivative of x²?",
            ["x", "2x", "x²", "2x²"],
            1,
            Hard,
            "Mathematics",
            ("x² இன் வகைக்கெழு என்ன?", ["x", "2x", "x²", "2x²"]),
            ("x² का अवकलन क्या है?", ["x", "2x", "x²", "2x²"]),
        ),
        question(
            8,
            "Which element has the chemical symbol 'Au'?",
            ["Silver", "Gold", "Aluminum", "Argon"],
            1,
            Hard,
            "Chemistry",
            (
                "'Au' என்ற வேதியியல் குறியீடு கொண்ட தனிமம் எது?",
                ["வெள்ளி", "தங்கம்", "அலுமினியம்", "ஆர்கான்"],
            ),
            (
                "किस तत्व का रासायनिक प्रतीक 'Au' है?",
                ["चांदी", "सोना", "एल्यूमिनियम", "आर्गन"],
            ),
        ),
        question(
            9,
            "In which year did World War II end?",
            ["1944", "1945", "1946", "1947"],
            1,
            Hard,
            "History",
            (
                "இரண்டாம் உலகப் போர் எந்த ஆண்டில் முடிந்தது?",
                ["1944", "1945", "1946", "1947"],
            ),
            (
                "द्वितीय विश्व युद्ध किस वर्ष समाप्त हुआ?",
                ["1944", "1945", "1946", "1947"],
            ),
        ),
        question(
            10,
            "What is the speed of light in vacuum?",
            ["299,792,458 m/s", "300,000,000 m/s", "299,792,458 km/s", "300,000 km/s"],
            0,
            Hard,
            "Physics",
            (
                "வெற்றிடத்தில் ஒளியின் வேகம் என்ன?",
                ["299,792,458 m/s", "300,000,000 m/s", "299,792,458 km/s", "300,000 km/s"],
            ),
            (
                "निर्वात में प्रकाश की गति क्या है?",
                ["299,792,458 m/s", "300,000,000 m/s", "299,792,458 km/s", "300,000 km/s"],
            ),
        ),
    ]
}

fn entry(name: &str, score: u32, accuracy: u32, avatar: &str, is_you: bool) -> LeaderboardEntry {
    LeaderboardEntry {
        name: name.to_string(),
        score,
        accuracy,
        avatar: avatar.to_string(),
        is_you,
    }
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        entry("Alex Chen", 2450, 95, "👨‍💻", false),
        entry("Priya Sharma", 2380, 92, "👩‍🎓", false),
        entry("Student (You)", 2200, 88, "👤", true),
        entry("Mohammed Ali", 2150, 85, "👨‍🎓", false),
        entry("Sarah Johnson", 2100, 90, "👩‍💼", false),
        entry("Raj Patel", 2050, 87, "👨‍🔬", false),
        entry("Emily Davis", 2000, 83, "👩‍🏫", false),
        entry("Carlos Rodriguez", 1950, 89, "👨‍🎨", false),
    ]
}

fn subject_scores(scores: &[(&str, u32)]) -> Vec<SubjectScore> {
    scores
        .iter()
        .map(|(subject, score)| SubjectScore {
            subject: subject.to_string(),
            score: *score,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn student(
    name: &str,
    avatar: &str,
    total_score: u32,
    accuracy: u32,
    completed_quizzes: u32,
    current_streak: u32,
    level: u32,
    last_active: &str,
    subjects: [u32; 4],
) -> StudentProgress {
    let [maths, science, geography, literature] = subjects;
    StudentProgress {
        name: name.to_string(),
        avatar: avatar.to_string(),
        total_score,
        accuracy,
        completed_quizzes,
        current_streak,
        level,
        last_active: last_active.to_string(),
        subjects: subject_scores(&[
            ("Mathematics", maths),
            ("Science", science),
            ("Geography", geography),
            ("Literature", literature),
        ]),
    }
}

/// Progress of the students in the demo class.
pub fn class_progress() -> Vec<StudentProgress> {
    vec![
        student("Alex Chen", "👨‍💻", 2450, 95, 32, 12, 9, "2 hours ago", [98, 92, 95, 94]),
        student("Priya Sharma", "👩‍🎓", 2380, 92, 28, 8, 8, "1 day ago", [90, 95, 88, 96]),
        student("Mohammed Ali", "👨‍🎓", 2150, 85, 25, 5, 7, "3 hours ago", [82, 88, 85, 84]),
        student("Sarah Johnson", "👩‍💼", 2100, 90, 30, 15, 8, "5 hours ago", [93, 87, 89, 91]),
    ]
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn achievement(
    id: u32,
    name: &str,
    description: &str,
    icon: &str,
    earned_date: Option<NaiveDate>,
) -> Achievement {
    Achievement {
        id,
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        earned: earned_date.is_some(),
        earned_date,
    }
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        achievement(1, "First Quiz", "Complete your first quiz", "🎯", date(2024, 1, 15)),
        achievement(2, "Perfect Score", "Get 100% on any quiz", "⭐", date(2024, 2, 1)),
        achievement(3, "Speed Learner", "Complete 5 quizzes in one day", "⚡", None),
        achievement(
            4,
            "Math Master",
            "Score 90% or higher on 3 math quizzes",
            "🧮",
            date(2024, 2, 10),
        ),
        achievement(5, "Science Explorer", "Complete all science topics", "🔬", None),
        achievement(6, "Streak Master", "Maintain a 7-day learning streak", "🔥", None),
        achievement(7, "Multilingual", "Take quizzes in all 3 languages", "🌍", None),
        achievement(8, "Top Performer", "Reach top 3 on leaderboard", "🏆", date(2024, 2, 15)),
    ]
}

pub fn user_stats() -> UserStats {
    UserStats {
        total_score: 2200,
        accuracy: 88,
        current_streak: 5,
        completed_quizzes: 25,
        level: 8,
    }
}

fn series(points: &[(u32, u32, u32)]) -> Vec<DatedValue> {
    points
        .iter()
        .filter_map(|(month, day, value)| {
            date(2024, *month, *day).map(|date| DatedValue {
                date,
                value: *value,
            })
        })
        .collect()
}

pub fn analytics() -> AnalyticsData {
    let subjects = [
        ("Mathematics", 92),
        ("Science", 88),
        ("Geography", 85),
        ("Literature", 90),
        ("History", 82),
        ("Chemistry", 86),
        ("Physics", 89),
    ];

    AnalyticsData {
        score_over_time: series(&[
            (1, 1, 1200),
            (1, 8, 1350),
            (1, 15, 1500),
            (1, 22, 1680),
            (1, 29, 1820),
            (2, 5, 1950),
            (2, 12, 2100),
            (2, 19, 2200),
        ]),
        accuracy_trend: series(&[
            (1, 1, 75),
            (1, 8, 78),
            (1, 15, 80),
            (1, 22, 82),
            (1, 29, 85),
            (2, 5, 86),
            (2, 12, 87),
            (2, 19, 88),
        ]),
        subject_performance: subject_scores(&subjects),
    }
}

/// The demo learner, with an empty attempt history.
pub fn profile() -> Profile {
    Profile {
        display_name: "Student".to_string(),
        stats: user_stats(),
        leaderboard: leaderboard(),
        class: class_progress(),
        achievements: achievements(),
        analytics: analytics(),
        history: Vec::new(),
    }
}
