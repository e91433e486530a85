use thiserror::Error;

/// Errors raised while building symbols or grammars.
///
/// All of these are construction-time failures: a parser is never created
/// from malformed inputs, and a successfully constructed parser never
/// raises while parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("nonterminal symbols require a non-empty name")]
    EmptyName,

    #[error("last codepoint of a range (U+{last:04X}) must not precede the first (U+{first:04X})")]
    InvalidRange { first: u32, last: u32 },

    #[error("U+{0:04X} is not a valid Unicode codepoint")]
    InvalidCodepoint(u32),

    #[error("malformed Unicode character class `{0}`")]
    MalformedClass(String),
}
