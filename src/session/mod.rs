//! Quiz attempt state machine.
//!
//! A [`QuizSession`] owns the items of one attempt, the answers given so far
//! and the pending auto-advance that follows each answer.

mod controller;
mod error;
mod outcome;
mod schedule;

pub use controller::{
    AnswerFeedback, CompletionCallback, DEFAULT_FEEDBACK_DELAY, Phase, QuizSession, Transition,
};
pub use error::SessionError;
pub use outcome::{Outcome, POINTS_PER_CORRECT};
pub use schedule::{AdvanceToken, PendingAdvance};
