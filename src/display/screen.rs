use std::fmt;

use serde::Serialize;

use crate::{
    calculator::state::State,
    display::format::{FormatOptions, format_operand},
};

/// What the calculator shows for a given state.
///
/// # Example
/// ```
/// use abacus::{
///     calculator::{action::Operator, state::State},
///     display::{FormatOptions, Screen},
/// };
///
/// let state = State::new(Some("12000"), Some(Operator::Subtract), Some("3.5"));
/// let screen = Screen::new(&state, &FormatOptions::default());
///
/// assert_eq!(screen.secondary, "12,000 −");
/// assert_eq!(screen.primary, "3.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// The committed operand followed by a space and the pending operator.
    pub secondary: String,
    /// The operand being typed or the last result.
    pub primary:   String,
}

impl Screen {
    #[must_use]
    pub fn new(state: &State, options: &FormatOptions) -> Self {
        let previous = format_operand(state.previous_operand.as_deref(), options);
        let symbol = state.operation.map_or("", |op| op.symbol());

        Self { secondary: format!("{previous} {symbol}"),
               primary:   format_operand(state.current_operand.as_deref(), options), }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.secondary)?;
        write!(f, "{}", self.primary)
    }
}
