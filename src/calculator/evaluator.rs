use crate::{
    calculator::state::State,
    util::num::{format_number, parse_operand},
};

/// Computes the pending operation held in `state` and returns it as text.
///
/// Only `previous_operand`, `operation` and `current_operand` are read. If
/// either operand is absent or does not parse as a number, or no operation is
/// pending, the result is the empty string: there is nothing to show, and no
/// error is raised. Non-finite results are ordinary values and come back as
/// `Infinity`, `-Infinity` or `NaN`.
///
/// # Example
/// ```
/// use abacus::calculator::{action::Operator, evaluator::evaluate, state::State};
///
/// let state = State::new(Some("2"), Some(Operator::Add), Some("2"));
/// assert_eq!(evaluate(&state), "4");
///
/// let state = State::new(Some("5"), Some(Operator::Divide), Some("0"));
/// assert_eq!(evaluate(&state), "Infinity");
///
/// let state = State::new(Some("."), Some(Operator::Add), Some("1"));
/// assert_eq!(evaluate(&state), "");
/// ```
#[must_use]
pub fn evaluate(state: &State) -> String {
    let previous = parse_operand(state.previous_operand.as_deref());
    let current = parse_operand(state.current_operand.as_deref());

    if previous.is_nan() || current.is_nan() {
        return String::new();
    }

    state.operation
         .map(|op| format_number(op.apply(previous, current)))
         .unwrap_or_default()
}
