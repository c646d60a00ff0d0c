use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::models::{Difficulty, NUM_OPTIONS, QuizItem};

use super::error::SessionError;
use super::outcome::Outcome;
use super::schedule::{AdvanceToken, PendingAdvance};

/// How long answer feedback stays on screen before the quiz moves on.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

/// Positions `0..FIRST_TIER_END` form the first tier.
const FIRST_TIER_END: usize = 3;
/// Positions `FIRST_TIER_END..SECOND_TIER_END` form the second tier.
const SECOND_TIER_END: usize = 7;

/// Invoked once, with the final outcome, when the last item advances.
pub type CompletionCallback = Box<dyn FnOnce(Outcome) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an answer to the current item.
    Active,
    /// The current item was answered; waiting for the advance.
    Feedback { correct: bool },
    /// Every item has been answered and advanced past.
    Terminal,
}

/// Result of an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub difficulty: Difficulty,
    pub advance: AdvanceToken,
}

/// What an advance did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved on to the item at `index`.
    Next { index: usize },
    /// Moved past the last item.
    Finished(Outcome),
}

pub struct QuizSession {
    id: Uuid,
    items: Vec<QuizItem>,
    current_index: usize,
    selected_answers: BTreeMap<usize, usize>,
    correct_count: usize,
    difficulty_label: Difficulty,
    phase: Phase,
    pending: Option<PendingAdvance>,
    feedback_delay: Duration,
    on_complete: Option<CompletionCallback>,
}

impl QuizSession {
    pub fn new(items: Vec<QuizItem>) -> Result<Self, SessionError> {
        if items.is_empty() {
            return Err(SessionError::Empty);
        }

        let session = Self {
            id: Uuid::new_v4(),
            items,
            current_index: 0,
            selected_answers: BTreeMap::new(),
            correct_count: 0,
            difficulty_label: Difficulty::Easy,
            phase: Phase::Active,
            pending: None,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            on_complete: None,
        };
        tracing::debug!(session = %session.id, items = session.items.len(), "quiz session created");
        Ok(session)
    }

    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The item being answered, or `None` once terminal.
    pub fn current_item(&self) -> Option<&QuizItem> {
        self.items.get(self.current_index)
    }

    pub fn selected_answer(&self, index: usize) -> Option<usize> {
        self.selected_answers.get(&index).copied()
    }

    pub fn selected_answers(&self) -> &BTreeMap<usize, usize> {
        &self.selected_answers
    }

    pub fn answered_count(&self) -> usize {
        self.selected_answers.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn difficulty_label(&self) -> Difficulty {
        self.difficulty_label
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the last answer was correct, while its feedback is showing.
    pub fn feedback(&self) -> Option<bool> {
        match self.phase {
            Phase::Feedback { correct } => Some(correct),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Fraction of items advanced past, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        self.current_index as f64 / self.items.len() as f64
    }

    pub fn pending_advance(&self) -> Option<&PendingAdvance> {
        self.pending.as_ref()
    }

    /// Answer the current item.
    ///
    /// Only the first answer per item is accepted; the session then shows
    /// feedback and schedules the advance for `now + feedback_delay`.
    pub fn select_option(
        &mut self,
        option: usize,
        now: Instant,
    ) -> Result<AnswerFeedback, SessionError> {
        let index = self.current_index;
        match self.phase {
            Phase::Terminal => return Err(SessionError::Finished),
            Phase::Feedback { .. } => return Err(SessionError::AlreadyAnswered { index }),
            Phase::Active => {}
        }
        if option >= NUM_OPTIONS {
            return Err(SessionError::OptionOutOfRange {
                option,
                len: NUM_OPTIONS,
            });
        }

        let correct = self.items[index].is_correct(option);
        self.selected_answers.insert(index, option);
        if correct {
            self.correct_count += 1;
        }
        self.adapt_difficulty(index, correct);

        let pending = PendingAdvance::new(self.id, index, now + self.feedback_delay);
        self.pending = Some(pending);
        self.phase = Phase::Feedback { correct };

        tracing::debug!(
            session = %self.id,
            index,
            option,
            correct,
            difficulty = self.difficulty_label.as_str(),
            "answer recorded"
        );

        Ok(AnswerFeedback {
            correct,
            difficulty: self.difficulty_label,
            advance: pending.token(),
        })
    }

    /// Fire the pending advance if its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        let pending = self.pending.filter(|p| p.is_due(now))?;
        self.apply(pending.token()).ok()
    }

    /// Advance past the answered item named by `token`.
    ///
    /// The token must come from this session and name the item currently
    /// showing feedback.
    pub fn apply(&mut self, token: AdvanceToken) -> Result<Transition, SessionError> {
        let matches_current = token.session == self.id
            && token.index == self.current_index
            && matches!(self.phase, Phase::Feedback { .. });
        if !matches_current {
            return Err(SessionError::StaleAdvance { index: token.index });
        }

        Ok(self.advance())
    }

    /// Drop the scheduled advance. The session keeps showing feedback until
    /// [`apply`](Self::apply) is called with the returned token.
    pub fn cancel_pending(&mut self) -> Option<PendingAdvance> {
        self.pending.take()
    }

    pub fn summarize(&self) -> Result<Outcome, SessionError> {
        if !self.is_terminal() {
            return Err(SessionError::PrematureSummarize {
                answered: self.answered_count(),
                total: self.items.len(),
            });
        }
        Ok(Outcome::from_counts(self.correct_count, self.items.len()))
    }

    // The label follows the position tier, not the item's own difficulty,
    // and never changes which item comes next.
    fn adapt_difficulty(&mut self, index: usize, correct: bool) {
        if index < FIRST_TIER_END {
            if correct {
                self.difficulty_label = Difficulty::Medium;
            }
        } else if index < SECOND_TIER_END {
            self.difficulty_label = if correct {
                Difficulty::Hard
            } else {
                Difficulty::Easy
            };
        }
    }

    fn advance(&mut self) -> Transition {
        self.pending = None;
        self.current_index += 1;

        if self.current_index < self.items.len() {
            self.phase = Phase::Active;
            return Transition::Next {
                index: self.current_index,
            };
        }

        self.phase = Phase::Terminal;
        let outcome = Outcome::from_counts(self.correct_count, self.items.len());
        tracing::info!(
            session = %self.id,
            score = outcome.score,
            accuracy = outcome.accuracy,
            "quiz finished"
        );
        if let Some(callback) = self.on_complete.take() {
            callback(outcome);
        }
        Transition::Finished(outcome)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("id", &self.id)
            .field("items", &self.items.len())
            .field("current_index", &self.current_index)
            .field("correct_count", &self.correct_count)
            .field("difficulty_label", &self.difficulty_label)
            .field("phase", &self.phase)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use proptest::prelude::*;

    use super::*;
    use crate::testing::{item, tiered};

    fn answer_and_advance(session: &mut QuizSession, option: usize) -> Transition {
        let now = Instant::now();
        session.select_option(option, now).unwrap();
        session.tick(now + DEFAULT_FEEDBACK_DELAY).unwrap()
    }

    #[test]
    fn empty_session_is_rejected() {
        assert_eq!(QuizSession::new(Vec::new()).unwrap_err(), SessionError::Empty);
    }

    #[test]
    fn single_correct_answer_finishes_with_full_marks() {
        let mut session = QuizSession::new(vec![item(1, Difficulty::Easy)]).unwrap();
        let now = Instant::now();

        let feedback = session.select_option(1, now).unwrap();
        assert!(feedback.correct);
        assert_eq!(session.correct_count(), 1);
        assert!(!session.is_terminal());

        let transition = session.tick(now + DEFAULT_FEEDBACK_DELAY).unwrap();
        assert!(session.is_terminal());

        let outcome = session.summarize().unwrap();
        assert_eq!(transition, Transition::Finished(outcome));
        assert_eq!(outcome.score, 100);
        assert_eq!(outcome.accuracy, 100);
    }

    #[test]
    fn all_wrong_scores_zero() {
        let mut session = QuizSession::new(tiered(3, 4, 3)).unwrap();
        for _ in 0..10 {
            answer_and_advance(&mut session, 0);
        }
        let outcome = session.summarize().unwrap();
        assert_eq!((outcome.score, outcome.accuracy), (0, 0));
    }

    #[test]
    fn difficulty_label_follows_position_tiers() {
        let mut session = QuizSession::new(tiered(3, 4, 3)).unwrap();
        assert_eq!(session.difficulty_label(), Difficulty::Easy);

        answer_and_advance(&mut session, 1);
        assert_eq!(session.difficulty_label(), Difficulty::Medium);
        answer_and_advance(&mut session, 1);
        answer_and_advance(&mut session, 1);
        assert_eq!(session.difficulty_label(), Difficulty::Medium);

        // second tier: correct -> hard, wrong -> easy
        answer_and_advance(&mut session, 1);
        assert_eq!(session.difficulty_label(), Difficulty::Hard);
        answer_and_advance(&mut session, 0);
        assert_eq!(session.difficulty_label(), Difficulty::Easy);
        answer_and_advance(&mut session, 0);
        answer_and_advance(&mut session, 1);
        assert_eq!(session.difficulty_label(), Difficulty::Hard);

        // third tier leaves the label alone
        answer_and_advance(&mut session, 0);
        answer_and_advance(&mut session, 0);
        assert_eq!(session.difficulty_label(), Difficulty::Hard);
    }

    #[test]
    fn wrong_answer_in_first_tier_keeps_label() {
        let mut session = QuizSession::new(tiered(3, 4, 3)).unwrap();
        answer_and_advance(&mut session, 2);
        assert_eq!(session.difficulty_label(), Difficulty::Easy);
    }

    #[test]
    fn label_does_not_change_item_order() {
        let items = tiered(3, 4, 3);
        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        let mut session = QuizSession::new(items).unwrap();

        let mut served = Vec::new();
        while let Some(current) = session.current_item() {
            served.push(current.id);
            answer_and_advance(&mut session, 1);
        }
        assert_eq!(served, ids);
    }

    #[test]
    fn out_of_range_option_is_rejected_without_change() {
        let mut session = QuizSession::new(tiered(3, 4, 3)).unwrap();
        let err = session.select_option(5, Instant::now()).unwrap_err();

        assert_eq!(err, SessionError::OptionOutOfRange { option: 5, len: 4 });
        assert!(session.selected_answers().is_empty());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), Phase::Active);
        assert!(session.pending_advance().is_none());
    }

    #[test]
    fn second_answer_before_advance_is_ignored() {
        let mut session = QuizSession::new(tiered(3, 4, 3)).unwrap();
        let now = Instant::now();
        session.select_option(0, now).unwrap();

        let err = session.select_option(1, now).unwrap_err();
        assert_eq!(err, SessionError::AlreadyAnswered { index: 0 });
        assert_eq!(session.selected_answer(0), Some(0));
        assert_eq!(session.correct_count(), 0);
    }

    #[test]
    fn terminal_session_rejects_answers() {
        let mut session = QuizSession::new(vec![item(1, Difficulty::Hard)]).unwrap();
        answer_and_advance(&mut session, 1);
        assert_eq!(
            session.select_option(1, Instant::now()).unwrap_err(),
            SessionError::Finished
        );
    }

    #[test]
    fn summarize_before_finish_fails() {
        let mut session = QuizSession::new(tiered(1, 1, 0)).unwrap();
        answer_and_advance(&mut session, 1);
        assert_eq!(
            session.summarize().unwrap_err(),
            SessionError::PrematureSummarize {
                answered: 1,
                total: 2
            }
        );
    }

    #[test]
    fn summarize_is_idempotent() {
        let mut session = QuizSession::new(tiered(2, 1, 1)).unwrap();
        for option in [1, 0, 1, 1] {
            answer_and_advance(&mut session, option);
        }
        assert_eq!(session.summarize(), session.summarize());
        assert_eq!(session.summarize().unwrap().accuracy, 75);
    }

    #[test]
    fn tick_waits_for_the_deadline() {
        let mut session = QuizSession::new(tiered(2, 0, 0))
            .unwrap()
            .with_feedback_delay(Duration::from_millis(500));
        let now = Instant::now();
        session.select_option(1, now).unwrap();

        assert_eq!(session.tick(now + Duration::from_millis(499)), None);
        assert_eq!(session.feedback(), Some(true));

        assert_eq!(
            session.tick(now + Duration::from_millis(500)),
            Some(Transition::Next { index: 1 })
        );
        assert_eq!(session.feedback(), None);
        assert_eq!(session.phase(), Phase::Active);
    }

    #[test]
    fn tick_without_pending_advance_does_nothing() {
        let mut session = QuizSession::new(tiered(1, 0, 0)).unwrap();
        assert_eq!(session.tick(Instant::now() + Duration::from_secs(60)), None);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn token_from_another_session_is_stale() {
        let mut first = QuizSession::new(tiered(2, 0, 0)).unwrap();
        let mut second = QuizSession::new(tiered(2, 0, 0)).unwrap();
        let now = Instant::now();

        let token = first.select_option(1, now).unwrap().advance;
        second.select_option(1, now).unwrap();

        assert_eq!(
            second.apply(token).unwrap_err(),
            SessionError::StaleAdvance { index: 0 }
        );
        assert_eq!(second.current_index(), 0);
        assert_eq!(first.apply(token), Ok(Transition::Next { index: 1 }));
    }

    #[test]
    fn token_cannot_be_replayed() {
        let mut session = QuizSession::new(tiered(3, 0, 0)).unwrap();
        let token = session.select_option(1, Instant::now()).unwrap().advance;
        session.apply(token).unwrap();

        assert!(session.apply(token).is_err());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn cancelled_advance_can_be_applied_by_hand() {
        let mut session = QuizSession::new(tiered(2, 0, 0)).unwrap();
        let now = Instant::now();
        session.select_option(1, now).unwrap();

        let pending = session.cancel_pending().unwrap();
        assert_eq!(session.tick(now + Duration::from_secs(10)), None);
        assert_eq!(session.current_index(), 0);

        assert_eq!(
            session.apply(pending.token()),
            Ok(Transition::Next { index: 1 })
        );
    }

    #[test]
    fn completion_callback_fires_once() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let mut session = QuizSession::new(tiered(1, 1, 0))
            .unwrap()
            .on_complete(move |outcome| sink.lock().unwrap().push(outcome));

        answer_and_advance(&mut session, 1);
        assert!(calls.lock().unwrap().is_empty());
        answer_and_advance(&mut session, 3);

        let _ = session.select_option(1, Instant::now());
        let _ = session.tick(Instant::now() + Duration::from_secs(10));

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].score, 100);
        assert_eq!(calls[0].accuracy, 50);
    }

    #[test]
    fn progress_counts_advanced_items() {
        let mut session = QuizSession::new(tiered(2, 2, 0)).unwrap();
        assert_eq!(session.progress(), 0.0);
        answer_and_advance(&mut session, 1);
        assert_eq!(session.progress(), 0.25);
    }

    proptest! {
        #[test]
        fn counts_stay_consistent(answers in proptest::collection::vec(0usize..6, 1..12)) {
            let mut session = QuizSession::new(tiered(3, 4, 3)).unwrap();
            let now = Instant::now();

            for option in answers {
                let before = session.answered_count();
                match session.select_option(option, now) {
                    Ok(_) => {
                        prop_assert_eq!(session.answered_count(), before + 1);
                        prop_assert!(session.correct_count() <= session.answered_count());
                        // a second answer at the same position is never taken
                        prop_assert!(session.select_option(option % 4, now).is_err());
                        session.tick(now + DEFAULT_FEEDBACK_DELAY);
                        prop_assert!(session.correct_count() <= session.current_index());
                    }
                    Err(_) => {
                        prop_assert_eq!(session.answered_count(), before);
                    }
                }
                prop_assert!(session.current_index() <= session.len());
            }
        }

        #[test]
        fn outcome_matches_correct_count(correct in proptest::collection::vec(any::<bool>(), 1..15)) {
            let items: Vec<QuizItem> = (0..correct.len() as u32).map(|id| item(id, Difficulty::Medium)).collect();
            let mut session = QuizSession::new(items).unwrap();

            for right in &correct {
                answer_and_advance(&mut session, if *right { 1 } else { 2 });
            }

            let expected = correct.iter().filter(|c| **c).count();
            let outcome = session.summarize().unwrap();
            prop_assert_eq!(outcome.score as usize, expected * 100);
            let accuracy = (expected as f64 / correct.len() as f64 * 100.0).round() as u32;
            prop_assert_eq!(outcome.accuracy, accuracy);
        }
    }
}
