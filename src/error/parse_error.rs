use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur while reading calculator input.
pub enum ParseError {
    /// A key script contained a character that is not a calculator key.
    #[error("Error on line {line}: Unexpected key: {key}.")]
    UnexpectedKey {
        /// The text that could not be read as a key.
        key:  String,
        /// The script line where the error occurred.
        line: usize,
    },
    /// A digit payload was not one of `0`-`9` or `.`.
    #[error("Invalid digit '{digit}': expected a single character 0-9 or '.'.")]
    InvalidDigit {
        /// The rejected payload.
        digit: String,
    },
    /// An operator payload was not one of the four arithmetic operators.
    #[error("Invalid operator '{symbol}': expected one of + − × ÷.")]
    InvalidOperator {
        /// The rejected payload.
        symbol: String,
    },
    /// A JSON action could not be decoded, including unknown action kinds.
    #[error("Error on line {line}: Malformed action: {source}")]
    MalformedAction {
        /// The input line where the error occurred.
        line:   usize,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// A display locale name was not recognised.
    #[error("Unknown locale '{name}': expected one of en-us, de-de, fr-fr, plain.")]
    UnknownLocale {
        /// The rejected name.
        name: String,
    },
}
