/// Parses an operand the way a calculator keypad reads its display.
///
/// Absent operands and strings that are not valid decimals (including a bare
/// `.`, a lone `-` or the empty string) yield NaN. A leading or trailing point
/// is accepted, and `Infinity`/`-Infinity` read back to the infinities that
/// [`format_number`] produces.
///
/// ## Example
/// ```
/// use abacus::util::num::parse_operand;
///
/// assert_eq!(parse_operand(Some("1.")), 1.0);
/// assert_eq!(parse_operand(Some(".5")), 0.5);
/// assert_eq!(parse_operand(Some("Infinity")), f64::INFINITY);
/// assert!(parse_operand(Some(".")).is_nan());
/// assert!(parse_operand(None).is_nan());
/// ```
#[must_use]
pub fn parse_operand(operand: Option<&str>) -> f64 {
    operand.and_then(|text| text.parse().ok()).unwrap_or(f64::NAN)
}

/// Renders a result in its canonical textual form.
///
/// Finite values use the shortest decimal that reads back to the same `f64`,
/// never exponent notation. Negative zero prints as `0`. The non-finite values
/// print as `Infinity`, `-Infinity` and `NaN`.
///
/// ## Example
/// ```
/// use abacus::util::num::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value.is_sign_positive() { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
