use std::time::Instant;

use uuid::Uuid;

/// Identifies one scheduled advance: the session it belongs to and the item
/// it will move past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken {
    pub session: Uuid,
    pub index: usize,
}

/// The auto-advance scheduled after an answer.
///
/// It lives inside the session, so dropping or replacing the session drops
/// the pending advance with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    token: AdvanceToken,
    deadline: Instant,
}

impl PendingAdvance {
    pub(super) fn new(session: Uuid, index: usize, deadline: Instant) -> Self {
        Self {
            token: AdvanceToken { session, index },
            deadline,
        }
    }

    pub fn token(&self) -> AdvanceToken {
        self.token
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}
