/// Action and operand key types.
///
/// Declares `Action`, the closed set of things a user can do, together with
/// the validated `Digit` and `Operator` payloads it carries.
pub mod action;
/// The pure evaluator.
///
/// Resolves a pending binary operation into its textual result, turning
/// unusable operands into an empty result and non-finite arithmetic into
/// ordinary `Infinity`/`NaN` values.
pub mod evaluator;
/// The state reducer.
///
/// Maps a state and an action to the next state. This is where every
/// transition rule lives: appending digits, committing and chaining
/// operations, backspacing, clearing and evaluating.
///
/// # Responsibilities
/// - Keeps operands within the digit/single-point grammar.
/// - Ignores actions that do not apply instead of failing.
/// - Arms overwrite mode after an evaluation.
pub mod reducer;
/// A stateful session around the reducer.
///
/// Owns the current state, applies actions in arrival order and logs each
/// transition.
pub mod session;
/// The calculator state value.
pub mod state;
