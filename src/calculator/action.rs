use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A single key that extends the operand being typed.
///
/// Only the decimal digits `0` to `9` and the decimal point `.` can be held,
/// so every operand built from `Digit`s stays within the operand grammar:
/// digits with at most one point.
///
/// # Example
/// ```
/// use abacus::calculator::action::Digit;
///
/// assert_eq!(Digit::new('7').map(Digit::as_char), Some('7'));
/// assert!(Digit::new('.').is_some_and(Digit::is_point));
/// assert!(Digit::new('a').is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digit(char);

impl Digit {
    /// The decimal point key.
    pub const POINT: Self = Self('.');
    /// The zero key.
    pub const ZERO: Self = Self('0');

    /// Returns the digit for `key`, or `None` if `key` is not `0`-`9` or `.`.
    #[must_use]
    pub const fn new(key: char) -> Option<Self> {
        match key {
            '0'..='9' | '.' => Some(Self(key)),
            _ => None,
        }
    }

    /// The character this digit appends to an operand.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    #[must_use]
    pub const fn is_point(self) -> bool {
        self.0 == '.'
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == '0'
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = ParseError;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        Self::new(key).ok_or_else(|| ParseError::InvalidDigit { digit: key.to_string() })
    }
}

impl FromStr for Digit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::try_from(key),
            _ => Err(ParseError::InvalidDigit { digit: s.to_string() }),
        }
    }
}

impl TryFrom<String> for Digit {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Digit> for String {
    fn from(digit: Digit) -> Self {
        digit.0.to_string()
    }
}

/// The four arithmetic operations a pending calculation can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    /// `+`
    Add,
    /// `−`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The symbol shown next to the left operand on the display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
        }
    }

    /// Applies the operator with IEEE 754 semantics.
    ///
    /// Division by zero is not an error: it yields an infinity, or NaN for
    /// `0 ÷ 0`.
    ///
    /// # Example
    /// ```
    /// use abacus::calculator::action::Operator;
    ///
    /// assert_eq!(Operator::Multiply.apply(1.5, 2.0), 3.0);
    /// assert_eq!(Operator::Divide.apply(5.0, 0.0), f64::INFINITY);
    /// assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    /// Accepts the display symbols, their ASCII stand-ins, and the `–`/`✕`
    /// glyphs used by older keypads.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "\u{2212}" | "\u{2013}" => Ok(Self::Subtract),
            "*" | "x" | "\u{d7}" | "\u{2715}" => Ok(Self::Multiply),
            "/" | "\u{f7}" => Ok(Self::Divide),
            _ => Err(ParseError::InvalidOperator { symbol: s.to_string() }),
        }
    }
}

impl TryFrom<String> for Operator {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.symbol().to_string()
    }
}

/// A user action fed to the reducer.
///
/// The set of kinds is closed: every consumer matches exhaustively, so a new
/// kind cannot be added without the compiler pointing at each place that must
/// handle it. Serialized actions are tagged by `kind`.
///
/// # Example
/// ```
/// use abacus::calculator::action::{Action, Operator};
///
/// let action: Action = serde_json::from_str(r#"{"kind":"choose-operation","operator":"÷"}"#).unwrap();
/// assert_eq!(action, Action::ChooseOperation { operator: Operator::Divide });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Action {
    /// Appends a digit or decimal point to the current operand.
    AddDigit {
        /// The key pressed.
        digit: Digit,
    },
    /// Selects the pending operation, committing or collapsing operands.
    ChooseOperation {
        /// The operator pressed.
        #[serde(alias = "operation")]
        operator: Operator,
    },
    /// Resets to the empty state.
    Clear,
    /// Removes the last character of the current operand.
    #[serde(alias = "del-digit")]
    DeleteDigit,
    /// Resolves the pending operation into the current operand.
    Evaluate,
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Self::AddDigit { digit }
    }
}

impl From<Operator> for Action {
    fn from(operator: Operator) -> Self {
        Self::ChooseOperation { operator }
    }
}
