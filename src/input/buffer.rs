use crate::game::{Action, Direction, InputPolicy};

/// Turn requests collected between two ticks.
///
/// Presses are checked against the heading the snake will have when the next
/// tick starts, so two quick presses can never fold the snake back onto its
/// neck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    policy: InputPolicy,
    pending: Option<Direction>,
}

impl InputBuffer {
    pub fn new(policy: InputPolicy) -> Self {
        Self {
            policy,
            pending: None,
        }
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Record a press. Returns whether it was kept.
    pub fn push(&mut self, direction: Direction, heading: Direction) -> bool {
        if heading.is_opposite(direction) {
            return false;
        }

        match self.policy {
            InputPolicy::LastWins => {
                self.pending = Some(direction);
                true
            }
            InputPolicy::FirstWins if self.pending.is_none() => {
                self.pending = Some(direction);
                true
            }
            InputPolicy::FirstWins => false,
        }
    }

    /// The action for the coming tick; empties the buffer
    pub fn take(&mut self) -> Action {
        Action::from(self.pending.take())
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new(InputPolicy::default())
    }
}
