/// Numeric text helpers.
///
/// This module converts between the operand strings held in the calculator
/// state and `f64` values. Parsing never fails: anything that is not a valid
/// decimal becomes NaN. Printing produces the canonical form used for every
/// evaluation result, including the non-finite values.
pub mod num;
