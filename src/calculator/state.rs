use serde::{Deserialize, Serialize};

use crate::calculator::action::Operator;

/// The complete state of the calculator between two actions.
///
/// A `State` is a plain value: the reducer takes one and hands back a new one,
/// and nothing is mutated in place. `None` means "nothing entered for this
/// slot", which is not the same as `Some("")` (an evaluation that produced no
/// result).
///
/// # Example
/// ```
/// use abacus::calculator::state::State;
///
/// let state = State::default();
/// assert!(state.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct State {
    /// The operand being typed, shown on the primary line.
    pub current_operand:  Option<String>,
    /// The committed left-hand operand of the pending operation.
    pub previous_operand: Option<String>,
    /// The pending operation, if any.
    pub operation:        Option<Operator>,
    /// Set right after an evaluation: the next digit replaces the result
    /// instead of being appended to it.
    pub overwrite:        bool,
}

impl State {
    /// Builds a state from its textual parts without an overwrite pending.
    ///
    /// Mostly useful for tests and for callers restoring a display.
    #[must_use]
    pub fn new(previous_operand: Option<&str>,
               operation: Option<Operator>,
               current_operand: Option<&str>)
               -> Self {
        Self { current_operand: current_operand.map(str::to_string),
               previous_operand: previous_operand.map(str::to_string),
               operation,
               overwrite: false }
    }

    /// Whether this is the initial state, all slots empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a left operand, an operator and a right operand are all present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.operation.is_some() && self.current_operand.is_some()
        && self.previous_operand.is_some()
    }
}
