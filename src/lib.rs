//! # abacus
//!
//! abacus is the input state machine of a four-function calculator. It turns a
//! stream of key presses (digits, operators, clear, backspace and equals) into
//! a running calculation and the two lines a calculator display shows.
//!
//! The core is pure: [`calculator::reducer::reduce`] takes a state and an
//! action and returns the next state, and never fails. Arithmetic follows IEEE
//! 754, so dividing by zero shows `Infinity` rather than raising an error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

use crate::{
    calculator::session::Calculator,
    display::{FormatOptions, Screen},
    error::ParseError,
    input::parse_keys,
};

/// The calculator proper.
///
/// This module holds the action and state types, the evaluator that resolves
/// a pending operation, the reducer that implements every state transition,
/// and a session type that drives the reducer one action at a time.
///
/// # Responsibilities
/// - Defines the closed set of actions and the state they act on.
/// - Implements the transition rules without any failure path.
/// - Applies actions strictly in order from a single caller.
pub mod calculator;
/// Turns calculator state into display text.
///
/// The display layer is read-only: it formats operands with thousands
/// separators for a chosen locale and assembles the primary and secondary
/// display lines. Nothing here feeds back into the state machine.
pub mod display;
/// Provides the error type for calculator input.
///
/// Only reading input can fail. The errors here describe unknown keys,
/// malformed JSON actions, invalid payloads and unknown locales, with line
/// numbers where a line is known.
pub mod error;
/// Reads actions from outside the process.
///
/// Two formats are supported: key scripts, lexed one key press per token, and
/// JSON actions tagged by `kind`.
pub mod input;
/// Numeric text helpers shared by the evaluator and the tests.
pub mod util;

/// Runs a key script through a fresh calculator and returns the final screen.
///
/// # Errors
/// Returns an error if the script contains a character that is not a key.
///
/// # Examples
/// ```
/// use abacus::{display::FormatOptions, replay};
///
/// // Chained operations collapse into a running total.
/// let screen = replay("2 + 2 + 5 =", FormatOptions::default()).unwrap();
/// assert_eq!(screen.primary, "9");
///
/// // Results are grouped for display.
/// let screen = replay("1000 x 1000 =", FormatOptions::default()).unwrap();
/// assert_eq!(screen.primary, "1,000,000");
///
/// // Unknown keys are rejected before anything runs.
/// assert!(replay("2 ^ 8 =", FormatOptions::default()).is_err());
/// ```
pub fn replay(source: &str, options: FormatOptions) -> Result<Screen, ParseError> {
    let actions = parse_keys(source)?;

    let mut calculator = Calculator::with_options(options);
    calculator.run(actions);

    Ok(calculator.screen())
}
