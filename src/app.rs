use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chrono::Local;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::achievements;
use crate::attempts::AttemptRecord;
use crate::config::{Role, Settings};
use crate::data::{TierCounts, filter_by_category, select_session_items, subjects};
use crate::i18n::Language;
use crate::models::{NUM_OPTIONS, Profile, QuizItem};
use crate::session::{Outcome, QuizSession, SessionError, Transition};

/// The screen being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Subjects,
    Quiz,
    Result,
    Leaderboard,
    Achievements,
    Analytics,
    Class,
}

/// A finished attempt, kept for the result screen after its session is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedQuiz {
    pub session_id: Uuid,
    pub subject: Option<String>,
    pub outcome: Outcome,
    pub badge: Option<String>,
    pub items: Vec<QuizItem>,
    pub answers: BTreeMap<usize, usize>,
}

pub struct App {
    pub page: Page,
    role: Role,
    language: Language,
    bank: Vec<QuizItem>,
    tiers: TierCounts,
    feedback_delay: Duration,
    session: Option<QuizSession>,
    /// Subject of the running quiz; `None` for a mixed quiz.
    subject: Option<String>,
    subject_cursor: usize,
    selected_option: usize,
    profile: Profile,
    last_result: Option<CompletedQuiz>,
    result_scroll: usize,
    completions_tx: mpsc::UnboundedSender<(Uuid, Outcome)>,
    completions_rx: mpsc::UnboundedReceiver<(Uuid, Outcome)>,
    attempt_sink: Option<mpsc::UnboundedSender<AttemptRecord>>,
}

impl App {
    pub fn new(settings: &Settings, bank: Vec<QuizItem>, profile: Profile) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Self {
            page: home_page(settings.role),
            role: settings.role,
            language: settings.language,
            bank,
            tiers: settings.tiers,
            feedback_delay: settings.feedback_delay(),
            session: None,
            subject: None,
            subject_cursor: 0,
            selected_option: 0,
            profile,
            last_result: None,
            result_scroll: 0,
            completions_tx,
            completions_rx,
            attempt_sink: None,
        }
    }

    /// Forward every finished attempt to `sink`.
    pub fn with_attempt_sink(mut self, sink: mpsc::UnboundedSender<AttemptRecord>) -> Self {
        self.attempt_sink = Some(sink);
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn last_result(&self) -> Option<&CompletedQuiz> {
        self.last_result.as_ref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Subjects of the question bank, for the subject picker.
    pub fn subjects(&self) -> Vec<&str> {
        subjects(&self.bank)
    }

    pub fn question_count(&self, subject: &str) -> usize {
        self.bank
            .iter()
            .filter(|item| item.subject.eq_ignore_ascii_case(subject))
            .count()
    }

    pub fn subject_cursor(&self) -> usize {
        self.subject_cursor
    }

    pub fn current_subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn select_next_subject(&mut self) {
        let count = self.subjects().len();
        if count > 0 {
            self.subject_cursor = (self.subject_cursor + 1) % count;
        }
    }

    pub fn select_previous_subject(&mut self) {
        let count = self.subjects().len();
        if count > 0 {
            self.subject_cursor = (self.subject_cursor + count - 1) % count;
        }
    }

    /// Start a quiz limited to the highlighted subject.
    pub fn start_subject_quiz(&mut self) {
        let subject = self.subjects().get(self.subject_cursor).map(|s| s.to_string());
        if let Some(subject) = subject {
            self.begin(Some(subject));
        }
    }

    pub fn home_page(&self) -> Page {
        home_page(self.role)
    }

    pub fn show(&mut self, page: Page) {
        self.page = page;
    }

    pub fn go_home(&mut self) {
        self.page = self.home_page();
    }

    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
        tracing::info!(language = %self.language, "language changed");
    }

    /// Start a new mixed attempt, replacing any session in progress.
    ///
    /// With no questions available the quiz page shows its empty state.
    pub fn start_quiz(&mut self) {
        self.begin(None);
    }

    fn begin(&mut self, subject: Option<String>) {
        self.page = Page::Quiz;
        self.selected_option = 0;
        self.result_scroll = 0;

        let items = match subject.as_deref() {
            Some(subject) => select_session_items(
                &filter_by_category(self.bank.clone(), Some(subject)),
                self.tiers,
            ),
            None => select_session_items(&self.bank, self.tiers),
        };
        self.subject = subject;
        self.session = match QuizSession::new(items) {
            Ok(session) => {
                let id = session.id();
                let tx = self.completions_tx.clone();
                tracing::info!(
                    session = %id,
                    items = session.len(),
                    subject = self.subject.as_deref().unwrap_or("mixed"),
                    "quiz started"
                );
                Some(
                    session
                        .with_feedback_delay(self.feedback_delay)
                        .on_complete(move |outcome| {
                            let _ = tx.send((id, outcome));
                        }),
                )
            }
            Err(SessionError::Empty) => {
                tracing::info!("no questions available, showing empty quiz");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not start quiz");
                None
            }
        };
    }

    /// Leave the quiz; any pending advance is dropped with the session.
    pub fn abandon_quiz(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(session = %session.id(), answered = session.answered_count(), "quiz abandoned");
        }
        self.go_home();
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    /// Answer with the highlighted option.
    pub fn submit_answer(&mut self, now: Instant) {
        self.answer(self.selected_option, now);
    }

    pub fn answer(&mut self, option: usize, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.select_option(option, now) {
            Ok(_) => self.selected_option = option,
            Err(err) => tracing::debug!(error = %err, "answer ignored"),
        }
    }

    /// Fire a due auto-advance and handle any finished attempt.
    pub fn tick(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            if let Some(Transition::Next { .. }) = session.tick(now) {
                self.selected_option = 0;
            }
        }
        self.drain_completions();
    }

    fn drain_completions(&mut self) {
        while let Ok((session_id, outcome)) = self.completions_rx.try_recv() {
            self.complete(session_id, outcome);
        }
    }

    fn complete(&mut self, session_id: Uuid, outcome: Outcome) {
        let Some(session) = self.session.take_if(|s| s.id() == session_id) else {
            tracing::debug!(session = %session_id, "ignoring completion of a replaced session");
            return;
        };

        let badge = achievements::badge_for(&outcome, &self.profile.achievements)
            .map(|a| (a.id, a.name.clone()));
        let today = Local::now().date_naive();
        self.profile
            .record_completion(&outcome, badge.as_ref().map(|(id, _)| *id), today);

        let badge_name = badge.map(|(_, name)| name);
        let record = AttemptRecord::new(
            session_id,
            &outcome,
            self.language,
            self.subject.clone(),
            badge_name.clone(),
        );
        if let Some(sink) = &self.attempt_sink {
            if sink.send(record.clone()).is_err() {
                tracing::warn!("attempt writer stopped, attempt not saved");
            }
        }
        self.profile.history.push(record);

        if let Some(name) = &badge_name {
            tracing::info!(badge = %name, "badge earned");
        }

        self.last_result = Some(CompletedQuiz {
            session_id,
            subject: self.subject.clone(),
            outcome,
            badge: badge_name,
            items: session.items().to_vec(),
            answers: session.selected_answers().clone(),
        });
        self.result_scroll = 0;
        self.page = Page::Result;
    }

    /// Start again with the same subject as the last quiz.
    pub fn restart(&mut self) {
        self.begin(self.subject.clone());
    }

    pub fn scroll_results_down(&mut self) {
        let total = self.last_result.as_ref().map_or(0, |r| r.items.len());
        if self.result_scroll + 1 < total {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

fn home_page(role: Role) -> Page {
    match role {
        Role::Student => Page::Dashboard,
        Role::Teacher => Page::Class,
    }
}
