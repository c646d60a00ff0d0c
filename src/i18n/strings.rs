use super::Language;

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    ("app.title", "EduLearn"),
    ("app.subtitle", "Personalized Learning for Every Student"),
    ("nav.dashboard", "Dashboard"),
    ("nav.quiz", "Quiz"),
    ("nav.leaderboard", "Leaderboard"),
    ("nav.achievements", "Achievements"),
    ("nav.analytics", "Analytics"),
    ("nav.class", "Class"),
    ("nav.subjects", "Subjects"),
    ("dashboard.welcome", "Welcome back"),
    ("dashboard.progress", "Your Progress"),
    ("dashboard.totalScore", "Total Score"),
    ("dashboard.accuracy", "Accuracy"),
    ("dashboard.streak", "Current Streak"),
    ("dashboard.completedQuizzes", "Completed Quizzes"),
    ("dashboard.startQuiz", "Start New Quiz"),
    ("dashboard.viewAnalytics", "View Analytics"),
    ("dashboard.level", "Level"),
    ("subjects.title", "Subject Quizzes"),
    ("subjects.questions", "Questions"),
    ("subjects.completed", "Completed"),
    ("subjects.averageScore", "Average Score"),
    ("subjects.streak", "Streak"),
    ("subjects.start", "Start Quiz"),
    ("quiz.title", "Adaptive Quiz"),
    ("quiz.question", "Question"),
    ("quiz.of", "of"),
    ("quiz.correct", "Correct! Well done!"),
    ("quiz.incorrect", "Not quite right. Keep trying!"),
    ("quiz.completed", "Quiz Completed!"),
    ("quiz.yourScore", "Your Score"),
    ("quiz.newBadge", "New Badge Earned!"),
    ("quiz.empty", "No questions available for this quiz."),
    ("quiz.correctAnswers", "Correct Answers"),
    ("quiz.incorrectAnswers", "Incorrect"),
    ("leaderboard.title", "Top Performers"),
    ("leaderboard.rank", "Rank"),
    ("leaderboard.name", "Name"),
    ("leaderboard.score", "Score"),
    ("leaderboard.accuracy", "Accuracy"),
    ("achievements.title", "Your Achievements"),
    ("achievements.earned", "Earned"),
    ("achievements.locked", "Locked"),
    ("analytics.title", "Performance Analytics"),
    ("analytics.scoreOverTime", "Score Over Time"),
    ("analytics.accuracyTrend", "Accuracy Trend"),
    ("analytics.subjectPerformance", "Subject Performance"),
    ("analytics.recentAttempts", "Recent Attempts"),
    ("analytics.noAttempts", "No attempts recorded yet"),
    ("analytics.weeklyProgress", "Weekly Progress"),
    ("analytics.attempts", "attempts"),
    ("analytics.categoryStats", "Category Stats"),
    ("class.title", "Class Overview"),
    ("class.students", "Students"),
    ("class.averageScore", "Average Score"),
    ("class.averageAccuracy", "Average Accuracy"),
    ("class.needsAttention", "Needs Attention"),
    ("class.allOnTrack", "Everyone is at or above"),
    ("class.studentProgress", "Student Progress"),
    ("class.subjectPerformance", "Subject Performance"),
    ("class.lastActive", "Last active"),
    ("class.quizzes", "quizzes"),
];

const TA: Table = &[
    ("app.subtitle", "ஒவ்வொரு மாணவருக்கும் தனிப்பயனாக்கப்பட்ட கற்றல்"),
    ("nav.dashboard", "டாஷ்போர்டு"),
    ("nav.quiz", "வினாடி வினா"),
    ("nav.leaderboard", "தலைமை பலகை"),
    ("nav.achievements", "சாதனைகள்"),
    ("nav.analytics", "பகுப்பாய்வு"),
    ("dashboard.welcome", "மீண்டும் நல்வரவு"),
    ("dashboard.progress", "உங்கள் முன்னேற்றம்"),
    ("dashboard.totalScore", "மொத்த மதிப்பெண்"),
    ("dashboard.accuracy", "துல்லியம்"),
    ("dashboard.streak", "தற்போதைய வரிசை"),
    ("dashboard.completedQuizzes", "முடிக்கப்பட்ட வினாக்கள்"),
    ("dashboard.startQuiz", "புதிய வினாடி வினா தொடங்கவும்"),
    ("dashboard.viewAnalytics", "பகுப்பாய்வு பார்க்கவும்"),
    ("quiz.title", "தகவமைப்பு வினாடி வினா"),
    ("quiz.question", "கேள்வி"),
    ("quiz.of", "இல்"),
    ("quiz.correct", "சரி! நல்லது!"),
    ("quiz.incorrect", "சரியாக இல்லை. தொடர்ந்து முயற்சிக்கவும்!"),
    ("quiz.completed", "வினாடி வினா முடிந்தது!"),
    ("quiz.yourScore", "உங்கள் மதிப்பெண்"),
    ("quiz.newBadge", "புதிய பதக்கம் பெற்றீர்கள்!"),
    ("leaderboard.title", "சிறந்த செயல்பாட்டாளர்கள்"),
    ("achievements.title", "உங்கள் சாதனைகள்"),
    ("analytics.title", "செயல்திறன் பகுப்பாய்வு"),
    ("analytics.noAttempts", "இதுவரை முயற்சிகள் எதுவும் பதிவு செய்யப்படவில்லை"),
    ("analytics.weeklyProgress", "வாராந்திர முன்னேற்றம்"),
    ("nav.subjects", "பாடங்கள்"),
    ("subjects.title", "பாட வினாடி வினாக்கள்"),
];

const HI: Table = &[
    ("app.subtitle", "हर छात्र के लिए व्यक्तिगत शिक्षा"),
    ("nav.dashboard", "डैशबोर्ड"),
    ("nav.quiz", "प्रश्नोत्तरी"),
    ("nav.leaderboard", "लीडरबोर्ड"),
    ("nav.achievements", "उपलब्धियां"),
    ("nav.analytics", "एनालिटिक्स"),
    ("dashboard.welcome", "वापसी पर स्वागत है"),
    ("dashboard.progress", "आपकी प्रगति"),
    ("dashboard.totalScore", "कुल स्कोर"),
    ("dashboard.accuracy", "सटीकता"),
    ("dashboard.streak", "वर्तमान स्ट्रीक"),
    ("dashboard.completedQuizzes", "पूर्ण प्रश्नोत्तरी"),
    ("dashboard.startQuiz", "नई प्रश्नोत्तरी शुरू करें"),
    ("dashboard.viewAnalytics", "एनालिटिक्स देखें"),
    ("quiz.title", "अनुकूली प्रश्नोत्तरी"),
    ("quiz.question", "प्रश्न"),
    ("quiz.of", "का"),
    ("quiz.correct", "सही! बहुत बढ़िया!"),
    ("quiz.incorrect", "बिल्कुल सही नहीं। कोशिश करते रहें!"),
    ("quiz.completed", "प्रश्नोत्तरी पूर्ण!"),
    ("quiz.yourScore", "आपका स्कोर"),
    ("quiz.newBadge", "नया बैज अर्जित!"),
    ("leaderboard.title", "शीर्ष प्रदर्शनकर्ता"),
    ("achievements.title", "आपकी उपलब्धियां"),
    ("analytics.title", "प्रदर्शन एनालिटिक्स"),
    ("analytics.noAttempts", "अभी तक कोई प्रयास दर्ज नहीं"),
    ("analytics.weeklyProgress", "साप्ताहिक प्रगति"),
    ("nav.subjects", "विषय"),
    ("subjects.title", "विषय प्रश्नोत्तरी"),
];

fn table(language: Language) -> Table {
    match language {
        Language::En => EN,
        Language::Ta => TA,
        Language::Hi => HI,
    }
}

fn lookup(table: Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Look up a UI string, falling back to English and then to the key itself.
pub fn t(language: Language, key: &str) -> &str {
    lookup(table(language), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translated_key() {
        assert_eq!(t(Language::Hi, "quiz.title"), "अनुकूली प्रश्नोत्तरी");
        assert_eq!(t(Language::En, "quiz.title"), "Adaptive Quiz");
    }

    #[test]
    fn untranslated_key_falls_back_to_english() {
        assert_eq!(t(Language::Ta, "class.title"), "Class Overview");
    }

    #[test]
    fn empty_state_messages_are_translated() {
        assert_eq!(t(Language::En, "analytics.noAttempts"), "No attempts recorded yet");
        assert_eq!(t(Language::Hi, "analytics.noAttempts"), "अभी तक कोई प्रयास दर्ज नहीं");
        assert_eq!(t(Language::Ta, "class.allOnTrack"), "Everyone is at or above");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        assert_eq!(t(Language::Ta, "no.such.key"), "no.such.key");
    }

    #[test]
    fn every_translation_has_an_english_source() {
        for table in [TA, HI] {
            for (key, _) in table {
                assert!(lookup(EN, key).is_some(), "missing english for {key}");
            }
        }
    }
}
