//! Sequential yes/no question flow.
//!
//! One-way machine: `Inactive` until activated, then `Showing(0)` through
//! `Showing(len - 1)` one affirmative at a time, then `Exhausted` for good.
//! There is deliberately no backward or negative transition; declining is
//! handled by the dodging button, not by state.

/// Where the question flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionFlow {
    /// No prompt shown; the flow has not been activated yet.
    Inactive,
    /// Prompt visible, showing the question at this cursor.
    Showing(usize),
    /// Every question answered; the flow never runs again.
    Exhausted,
}

impl QuestionFlow {
    /// Opens the flow at the first question. Only `Inactive` with a
    /// non-empty question list activates; anything else is a no-op.
    pub fn activate(&mut self, len: usize) {
        if *self == QuestionFlow::Inactive && len > 0 {
            *self = QuestionFlow::Showing(0);
        }
    }

    /// Advances past the current question. Moves the cursor up by exactly
    /// one, or into `Exhausted` when the last question was showing.
    pub fn advance(&mut self, len: usize) {
        if let QuestionFlow::Showing(i) = *self {
            *self = if i + 1 < len {
                QuestionFlow::Showing(i + 1)
            } else {
                QuestionFlow::Exhausted
            };
        }
    }

    /// Index of the question currently on screen, if any.
    pub fn current(&self) -> Option<usize> {
        match *self {
            QuestionFlow::Showing(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, QuestionFlow::Showing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_from_inactive() {
        let mut flow = QuestionFlow::Inactive;
        flow.activate(5);
        assert_eq!(flow, QuestionFlow::Showing(0));
        assert!(flow.is_active());
    }

    #[test]
    fn test_activate_is_single_shot() {
        let mut flow = QuestionFlow::Showing(2);
        flow.activate(5);
        assert_eq!(flow, QuestionFlow::Showing(2), "active flow must not restart");

        let mut done = QuestionFlow::Exhausted;
        done.activate(5);
        assert_eq!(done, QuestionFlow::Exhausted, "finished flow must not restart");
    }

    #[test]
    fn test_activate_with_no_questions() {
        let mut flow = QuestionFlow::Inactive;
        flow.activate(0);
        assert_eq!(flow, QuestionFlow::Inactive);
    }

    #[test]
    fn test_advance_walks_one_at_a_time() {
        let len = 5;
        let mut flow = QuestionFlow::Inactive;
        flow.activate(len);
        for expected in 1..len {
            flow.advance(len);
            assert_eq!(flow, QuestionFlow::Showing(expected));
        }
        flow.advance(len);
        assert_eq!(flow, QuestionFlow::Exhausted);
    }

    #[test]
    fn test_advance_outside_showing_is_noop() {
        let mut idle = QuestionFlow::Inactive;
        idle.advance(5);
        assert_eq!(idle, QuestionFlow::Inactive);

        let mut done = QuestionFlow::Exhausted;
        done.advance(5);
        assert_eq!(done, QuestionFlow::Exhausted);
    }

    #[test]
    fn test_single_question_flow() {
        let mut flow = QuestionFlow::Inactive;
        flow.activate(1);
        assert_eq!(flow.current(), Some(0));
        flow.advance(1);
        assert_eq!(flow, QuestionFlow::Exhausted);
        assert_eq!(flow.current(), None);
    }
}
