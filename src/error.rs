/// Input errors.
///
/// Defines the errors raised while turning outside input into actions: key
/// scripts with unknown keys, JSON actions that are malformed or carry an
/// invalid payload, and unknown display locales. The calculator itself never
/// fails; these errors only occur at the input boundary.
pub mod parse_error;

pub use parse_error::ParseError;
