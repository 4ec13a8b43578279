/// The key-script lexer.
///
/// Reads a text script of key presses, such as `12 + 7 =`, and produces the
/// actions those keys would dispatch. This is the batch counterpart of a
/// button grid: one token per key press.
///
/// # Responsibilities
/// - Maps digits, operator glyphs and their ASCII stand-ins, `=`, clear and
///   delete keys to actions.
/// - Skips whitespace, commas and `#` comments, tracking lines for errors.
/// - Reports any other character as an unexpected key.
pub mod keys;
/// JSON action ingestion.
///
/// Decodes actions tagged by `kind`, either as a single JSON array or as one
/// object per line. Unknown kinds and invalid payloads are rejected here, so
/// the reducer only ever sees well-formed actions.
pub mod script;

pub use keys::parse_keys;
pub use script::parse_actions;
