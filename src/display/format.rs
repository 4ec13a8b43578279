use std::str::FromStr;

use crate::error::ParseError;

/// How operands are laid out for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Inserted between groups of three integer digits. `None` disables
    /// grouping.
    pub group_separator: Option<char>,
    /// Shown in place of the operand's `.`.
    pub decimal_mark:    char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Locale::EnUs.options()
    }
}

/// Display presets for common number conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// `1,234.5`
    #[default]
    EnUs,
    /// `1.234,5`
    DeDe,
    /// `1 234,5` with a narrow no-break space.
    FrFr,
    /// `1234.5`
    Plain,
}

impl Locale {
    #[must_use]
    pub const fn options(self) -> FormatOptions {
        let (group_separator, decimal_mark) = match self {
            Self::EnUs => (Some(','), '.'),
            Self::DeDe => (Some('.'), ','),
            Self::FrFr => (Some('\u{202f}'), ','),
            Self::Plain => (None, '.'),
        };
        FormatOptions { group_separator,
                        decimal_mark }
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Ok(Self::EnUs),
            "de-de" | "de" => Ok(Self::DeDe),
            "fr-fr" | "fr" => Ok(Self::FrFr),
            "plain" | "c" => Ok(Self::Plain),
            _ => Err(ParseError::UnknownLocale { name: s.to_string() }),
        }
    }
}

impl From<Locale> for FormatOptions {
    fn from(locale: Locale) -> Self {
        locale.options()
    }
}

/// Formats an operand for display.
///
/// The integer part gets thousands separators and loses redundant leading
/// zeros; an empty integer part shows as `0`. Everything after the decimal
/// point is kept verbatim, including a trailing point with no digits after
/// it. Integer parts that are not digits, such as `Infinity` or `NaN`, are
/// shown as they are. An absent operand formats to the empty string, while a
/// present but empty one shows `0`.
///
/// # Example
/// ```
/// use abacus::display::{FormatOptions, Locale, format_operand};
///
/// let en = FormatOptions::default();
/// assert_eq!(format_operand(Some("1234.5"), &en), "1,234.5");
/// assert_eq!(format_operand(Some("1234567."), &en), "1,234,567.");
/// assert_eq!(format_operand(Some(".25"), &en), "0.25");
/// assert_eq!(format_operand(None, &en), "");
/// assert_eq!(format_operand(Some(""), &en), "0");
///
/// let de = Locale::DeDe.options();
/// assert_eq!(format_operand(Some("-9876543.21"), &de), "-9.876.543,21");
/// ```
#[must_use]
pub fn format_operand(operand: Option<&str>, options: &FormatOptions) -> String {
    let Some(operand) = operand else {
        return String::new();
    };
    match operand.split_once('.') {
        Some((integer, fraction)) => {
            format!("{}{}{fraction}", group_integer(integer, options), options.decimal_mark)
        },
        None => group_integer(operand, options),
    }
}

fn group_integer(integer: &str, options: &FormatOptions) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if digits.is_empty() {
        let shown = if sign.is_empty() { "0" } else { integer };
        return shown.to_string();
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }

    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let Some(separator) = options.group_separator else {
        return format!("{sign}{digits}");
    };

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3 * 4);
    grouped.push_str(sign);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
