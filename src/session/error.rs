use thiserror::Error;

/// Rejected session operations. None of these mutate the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A session needs at least one item.
    #[error("cannot start a quiz without questions")]
    Empty,

    /// The session already reached its terminal state.
    #[error("quiz is already finished")]
    Finished,

    /// The current item was answered and is waiting for its advance.
    #[error("question {index} was already answered")]
    AlreadyAnswered { index: usize },

    /// The option index does not name one of the item's options.
    #[error("option {option} is out of range for {len} options")]
    OptionOutOfRange { option: usize, len: usize },

    /// `summarize` was called before the last item advanced.
    #[error("quiz is not finished yet ({answered}/{total} answered)")]
    PrematureSummarize { answered: usize, total: usize },

    /// An advance token that does not belong to the current pending advance.
    #[error("stale advance for question {index}")]
    StaleAdvance { index: usize },
}
