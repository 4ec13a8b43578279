use logos::Logos;
use tracing::debug;

use crate::{
    calculator::action::{Action, Digit, Operator},
    error::ParseError,
};

/// A single key press in a key script.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum Key {
    /// `0`-`9` or `.`.
    #[regex(r"[0-9.]", parse_digit)]
    Digit(Digit),
    /// `+`, `-`, `*`, `/` and the display glyphs `−`, `×`, `÷`. Also `x`, `–`
    /// and `✕`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Subtract)]
    #[token("\u{2212}", |_| Operator::Subtract)]
    #[token("\u{2013}", |_| Operator::Subtract)]
    #[token("*", |_| Operator::Multiply)]
    #[token("x", |_| Operator::Multiply)]
    #[token("\u{d7}", |_| Operator::Multiply)]
    #[token("\u{2715}", |_| Operator::Multiply)]
    #[token("/", |_| Operator::Divide)]
    #[token("\u{f7}", |_| Operator::Divide)]
    Operator(Operator),
    /// `=`
    #[token("=")]
    Evaluate,
    /// `AC` or `C`, either case.
    #[token("AC")]
    #[token("ac")]
    #[token("C")]
    #[token("c")]
    Clear,
    /// `DEL`, `<` or `⌫`.
    #[token("DEL")]
    #[token("del")]
    #[token("<")]
    #[token("\u{232b}")]
    Delete,
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, feeds, carriage returns and commas.
    #[regex(r"[ \t\f\r,]+", logos::skip)]
    Ignored,
}

impl Key {
    /// The action this key dispatches, or `None` for layout-only tokens.
    #[must_use]
    pub const fn action(self) -> Option<Action> {
        match self {
            Self::Digit(digit) => Some(Action::AddDigit { digit }),
            Self::Operator(operator) => Some(Action::ChooseOperation { operator }),
            Self::Evaluate => Some(Action::Evaluate),
            Self::Clear => Some(Action::Clear),
            Self::Delete => Some(Action::DeleteDigit),
            Self::Comment | Self::NewLine | Self::Ignored => None,
        }
    }
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the script being read.
    pub line: usize,
}

fn parse_digit(lex: &logos::Lexer<Key>) -> Option<Digit> {
    lex.slice().chars().next().and_then(Digit::new)
}

/// Reads a key script into the actions it dispatches.
///
/// # Errors
/// Returns [`ParseError::UnexpectedKey`] for the first character that is not a
/// calculator key, with the line it appeared on.
///
/// # Example
/// ```
/// use abacus::{
///     calculator::action::{Action, Operator},
///     input::parse_keys,
/// };
///
/// let actions = parse_keys("9 ÷ 3 =  # three").unwrap();
/// assert_eq!(actions.len(), 4);
/// assert_eq!(actions[1], Action::ChooseOperation { operator: Operator::Divide });
/// assert_eq!(actions[3], Action::Evaluate);
///
/// assert!(parse_keys("1 + y").is_err());
/// ```
pub fn parse_keys(source: &str) -> Result<Vec<Action>, ParseError> {
    let mut lexer = Key::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut actions = Vec::new();

    while let Some(token) = lexer.next() {
        let Ok(key) = token else {
            return Err(ParseError::UnexpectedKey { key:  lexer.slice().to_string(),
                                                   line: lexer.extras.line, });
        };
        actions.extend(key.action());
    }

    debug!(actions = actions.len(), lines = lexer.extras.line, "read key script");
    Ok(actions)
}
