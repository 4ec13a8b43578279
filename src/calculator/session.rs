use tracing::{debug, trace};

use crate::{
    calculator::{action::Action, reducer::reduce, state::State},
    display::{FormatOptions, Screen},
};

/// A calculator session: one state value, updated one action at a time.
///
/// This is the single caller the reducer is designed for. Actions are applied
/// strictly in the order they are dispatched, each one to completion.
///
/// ## Usage
///
/// ```
/// use abacus::{
///     calculator::{
///         action::{Action, Digit, Operator},
///         session::Calculator,
///     },
///     display::FormatOptions,
/// };
///
/// let mut calc = Calculator::with_options(FormatOptions::default());
/// calc.run("1234".chars().filter_map(Digit::new).map(Action::from));
/// calc.dispatch(Action::from(Operator::Multiply));
///
/// assert_eq!(calc.screen().secondary, "1,234 ×");
/// assert_eq!(calc.screen().primary, "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state:   State,
    options: FormatOptions,
}

impl Calculator {
    /// Creates a session in the empty state with en-US display formatting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session in the empty state with the given display format.
    #[must_use]
    pub fn with_options(options: FormatOptions) -> Self {
        Self { state: State::default(),
               options }
    }

    /// Applies `action` and returns the resulting state.
    pub fn dispatch(&mut self, action: Action) -> &State {
        let before = std::mem::take(&mut self.state);
        let after = reduce(before.clone(), action);

        if after == before {
            trace!(?action, "action ignored");
        } else {
            debug!(?action,
                   current = after.current_operand.as_deref(),
                   previous = after.previous_operand.as_deref(),
                   operation = after.operation.map(|op| op.symbol()),
                   overwrite = after.overwrite,
                   "state updated");
        }

        self.state = after;
        &self.state
    }

    /// Dispatches every action in order.
    pub fn run<I>(&mut self, actions: I)
        where I: IntoIterator<Item = Action>
    {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Returns to the empty state, the same as dispatching [`Action::Clear`].
    pub fn reset(&mut self) {
        self.dispatch(Action::Clear);
    }

    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub const fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// The two display lines for the current state.
    #[must_use]
    pub fn screen(&self) -> Screen {
        Screen::new(&self.state, &self.options)
    }
}
