//! # edulearn
//!
//! A terminal quiz trainer with adaptive difficulty labels and English,
//! Tamil and Hindi content.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use edulearn::{EduLearn, EduLearnError, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), EduLearnError> {
//!     let settings = Settings::load(None)?;
//!     EduLearn::new(settings)?.run().await
//! }
//! ```
//!
//! The quiz state machine is usable without the TUI:
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use edulearn::data::demo;
//! use edulearn::session::QuizSession;
//!
//! let mut session = QuizSession::new(demo::questions())
//!     .unwrap()
//!     .with_feedback_delay(Duration::ZERO);
//! let now = Instant::now();
//! session.select_option(1, now).unwrap();
//! session.tick(now);
//! assert_eq!(session.current_index(), 1);
//! ```

pub mod achievements;
pub mod app;
pub mod attempts;
pub mod config;
pub mod data;
pub mod i18n;
pub mod leaderboard;
pub mod models;
pub mod progress;
pub mod session;
pub mod terminal;
#[cfg(test)]
mod testing;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{App, Page};
pub use attempts::AttemptLogError;
pub use config::{ConfigError, Overrides, Role, Settings};
pub use data::{ContentProvider, JsonContent, LoadError, StaticContent};
pub use i18n::Language;
pub use models::QuizItem;
pub use session::{Outcome, QuizSession, SessionError};

/// How long one loop iteration waits for input before ticking again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum EduLearnError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Attempts(#[from] AttemptLogError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// The application: content, learner profile and settings, ready to run.
pub struct EduLearn {
    app: App,
    settings: Settings,
}

impl EduLearn {
    /// Load the question bank and the attempt history named by `settings`.
    pub fn new(settings: Settings) -> Result<Self, EduLearnError> {
        let provider: Box<dyn ContentProvider> = match &settings.questions {
            Some(path) => Box::new(JsonContent::new(path.clone())),
            None => Box::new(StaticContent::demo()),
        };
        let bank = provider.items(settings.category.as_deref())?;
        tracing::info!(
            source = %provider.describe(),
            category = settings.category.as_deref().unwrap_or("all"),
            questions = bank.len(),
            "question bank loaded"
        );

        let mut profile = data::demo::profile();
        profile.history = attempts::read_attempts(&settings.attempts_log)?;
        tracing::info!(attempts = profile.history.len(), "attempt history loaded");

        Ok(Self {
            app: App::new(&settings, bank, profile),
            settings,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Run the TUI until the user quits.
    ///
    /// Finished attempts are appended to the attempt log by a background
    /// task, which is drained before this returns.
    pub async fn run(self) -> Result<(), EduLearnError> {
        let (sink, writer) = attempts::spawn_writer(self.settings.attempts_log.clone());
        let mut app = self.app.with_attempt_sink(sink);

        let result = match terminal::TerminalGuard::enter() {
            Ok(mut guard) => run_event_loop(guard.terminal_mut(), &mut app).await,
            Err(err) => Err(err.into()),
        };

        // dropping the app closes the writer's channel
        drop(app);
        if let Err(err) = writer.await {
            tracing::warn!(error = %err, "attempt writer did not finish");
        }
        result
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
) -> Result<(), EduLearnError> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_input(app, key.code) {
                    break;
                }
            }
        }

        tokio::task::yield_now().await;
    }

    tracing::info!("quit requested");
    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.page {
        Page::Dashboard => handle_dashboard_input(app, key),
        Page::Subjects => handle_subjects_input(app, key),
        Page::Quiz => handle_quiz_input(app, key),
        Page::Result => handle_result_input(app, key),
        Page::Class => handle_class_input(app, key),
        Page::Leaderboard | Page::Achievements | Page::Analytics => {
            if key == KeyCode::Esc {
                app.go_home();
            }
        }
    }
    false
}

fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.start_quiz(),
        KeyCode::Char('s') => app.show(Page::Subjects),
        KeyCode::Char('b') => app.show(Page::Leaderboard),
        KeyCode::Char('a') => app.show(Page::Achievements),
        KeyCode::Char('n') => app.show(Page::Analytics),
        KeyCode::Char('l') => app.cycle_language(),
        _ => {}
    }
}

fn handle_subjects_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_subject(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_subject(),
        KeyCode::Enter => app.start_subject_quiz(),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}

fn handle_class_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('b') => app.show(Page::Leaderboard),
        KeyCode::Char('n') => app.show(Page::Analytics),
        KeyCode::Char('l') => app.cycle_language(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    let now = Instant::now();
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(now),
        KeyCode::Char(c @ '1'..='4') => app.answer(c as usize - '1' as usize, now),
        KeyCode::Esc => app.abandon_quiz(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}
