use crate::calculator::{
    action::{Action, Digit, Operator},
    evaluator::evaluate,
    state::State,
};

/// Produces the state that follows `state` once `action` is applied.
///
/// The previous state is consumed and a new value is returned; when an action
/// does not apply (a second decimal point, `=` with nothing pending, and so
/// on) the same state comes back unchanged. No input makes this fail.
///
/// # Example
/// ```
/// use abacus::calculator::{
///     action::{Action, Digit, Operator},
///     reducer::reduce,
///     state::State,
/// };
///
/// let digit = |key| Action::AddDigit { digit: Digit::new(key).unwrap() };
/// let plus = Action::ChooseOperation { operator: Operator::Add };
///
/// let state = [digit('2'), plus, digit('2'), plus].into_iter()
///                                                 .fold(State::default(), reduce);
///
/// assert_eq!(state.previous_operand.as_deref(), Some("4"));
/// assert_eq!(state.operation, Some(Operator::Add));
/// assert_eq!(state.current_operand, None);
/// ```
#[must_use]
pub fn reduce(state: State, action: Action) -> State {
    match action {
        Action::AddDigit { digit } => add_digit(state, digit),
        Action::ChooseOperation { operator } => choose_operation(state, operator),
        Action::Clear => State::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: State, digit: Digit) -> State {
    if state.overwrite {
        return State { current_operand: Some(digit.to_string()),
                       overwrite: false,
                       ..state };
    }

    let current = state.current_operand.as_deref();
    if digit.is_zero() && current == Some("0") {
        return state;
    }
    if digit.is_point() && current.is_some_and(|operand| operand.contains('.')) {
        return state;
    }

    let mut operand = state.current_operand.unwrap_or_default();
    operand.push(digit.as_char());
    State { current_operand: Some(operand),
            ..state }
}

fn choose_operation(state: State, operator: Operator) -> State {
    match (state.current_operand.is_some(), state.previous_operand.is_some()) {
        (false, false) => state,
        // Operator pressed again before any right operand: swap the symbol.
        (false, true) => State { operation: Some(operator),
                                 ..state },
        (true, false) => State { operation:        Some(operator),
                                 previous_operand: state.current_operand,
                                 current_operand:  None,
                                 ..state },
        // Chained calculation, `2 + 2 +` leaves `4 +` pending.
        (true, true) => {
            let total = evaluate(&state);
            State { previous_operand: Some(total),
                    operation: Some(operator),
                    current_operand: None,
                    ..state }
        },
    }
}

fn delete_digit(state: State) -> State {
    if state.overwrite {
        return State { overwrite: false,
                       current_operand: None,
                       ..state };
    }

    let Some(mut operand) = state.current_operand else {
        return state;
    };
    if operand.chars().count() == 1 {
        return State { current_operand: None,
                       ..state };
    }

    operand.pop();
    State { current_operand: Some(operand),
            ..state }
}

fn evaluate_pending(state: State) -> State {
    if !state.is_complete() {
        return state;
    }

    let result = evaluate(&state);
    State { overwrite: true,
            operation: None,
            previous_operand: None,
            current_operand: Some(result),
            ..state }
}
