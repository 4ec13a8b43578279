use tracing::debug;

use crate::{calculator::action::Action, error::ParseError};

/// Decodes JSON actions.
///
/// Input that starts with `[` is read as one array of actions; anything else is
/// read as JSON Lines, one action object per non-blank line.
///
/// # Errors
/// Returns [`ParseError::MalformedAction`] with the offending line for invalid
/// JSON, unknown `kind` tags and invalid digit or operator payloads.
///
/// # Example
/// ```
/// use abacus::{calculator::action::Action, input::parse_actions};
///
/// let lines = r#"
/// {"kind":"add-digit","digit":"4"}
/// {"kind":"del-digit"}
/// {"kind":"clear"}
/// "#;
/// let actions = parse_actions(lines).unwrap();
/// assert_eq!(actions[1], Action::DeleteDigit);
///
/// assert!(parse_actions(r#"{"kind":"square-root"}"#).is_err());
/// ```
pub fn parse_actions(source: &str) -> Result<Vec<Action>, ParseError> {
    let actions: Vec<Action> = if source.trim_start().starts_with('[') {
        serde_json::from_str(source).map_err(|e| ParseError::MalformedAction { line:   e.line(),
                                                                               source: e, })?
    } else {
        source.lines()
              .enumerate()
              .filter(|(_, line)| !line.trim().is_empty())
              .map(|(index, line)| {
                  serde_json::from_str(line).map_err(|e| ParseError::MalformedAction { line:   index + 1,
                                                                                       source: e, })
              })
              .collect::<Result<Vec<Action>, _>>()?
    };

    debug!(actions = actions.len(), "read JSON actions");
    Ok(actions)
}
