/// Operand formatting.
///
/// Groups the integer part of an operand with a locale's thousands separator
/// and passes the fractional part through untouched, so a half-typed `12.`
/// still shows its trailing point.
pub mod format;
/// The two display lines.
///
/// Builds the secondary line (left operand and pending operator) and the
/// primary line (operand being typed) from a calculator state.
pub mod screen;

pub use format::{FormatOptions, Locale, format_operand};
pub use screen::Screen;
