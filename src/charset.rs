//! Sub-ranges of character-set terminals.
//!
//! A character-set terminal is a union of sub-ranges; each sub-range is a
//! literal list of characters, a contiguous codepoint interval, or a
//! Unicode general-category class. Sub-ranges validate at construction and
//! are pure predicates afterwards.

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::GrammarError;

#[cfg(test)]
#[path = "tests/charset.rs"]
mod tests_for_charset;

/// One sub-range of a character-set terminal.
#[derive(Clone, Debug)]
pub struct CharSet {
    pub(crate) kind: CharSetKind,
}

#[derive(Clone, Debug)]
pub(crate) enum CharSetKind {
    /// Matches each codepoint occurring in the text it was built from.
    Literal {
        text: String,
        codepoints: BTreeSet<u32>,
    },
    /// Matches every codepoint in an inclusive interval.
    Range { first: u32, last: u32 },
    /// Matches a Unicode general category such as "L" or "Nd".
    UnicodeClass { class: String, pattern: Regex },
}

impl CharSet {
    /// A set containing each of the characters in `text`.
    pub fn literal(text: impl Into<String>) -> CharSet {
        let text = text.into();
        let codepoints = text.chars().map(|c| c as u32).collect();
        CharSet {
            kind: CharSetKind::Literal { text, codepoints },
        }
    }

    /// The inclusive interval from `first` to `last`.
    pub fn range(first: char, last: char) -> Result<CharSet, GrammarError> {
        CharSet::codepoint_range(first as u32, last as u32)
    }

    /// The inclusive interval between two raw codepoints. Endpoints beyond
    /// the Unicode range and reversed intervals are construction errors.
    pub fn codepoint_range(first: u32, last: u32) -> Result<CharSet, GrammarError> {
        for cp in [first, last] {
            if cp > char::MAX as u32 {
                return Err(GrammarError::InvalidCodepoint(cp));
            }
        }
        if last < first {
            return Err(GrammarError::InvalidRange { first, last });
        }
        Ok(CharSet {
            kind: CharSetKind::Range { first, last },
        })
    }

    /// A Unicode general-category class, named by its one- or
    /// two-character abbreviation ("L", "Lu", "Nd", ...).
    pub fn unicode_class(class: impl Into<String>) -> Result<CharSet, GrammarError> {
        let class = class.into();
        let len = class.chars().count();
        if len < 1 || len > 2 {
            return Err(GrammarError::MalformedClass(class));
        }
        let pattern = Regex::new(&format!(r"\A\p{{{}}}\z", class))
            .map_err(|_| GrammarError::MalformedClass(class.clone()))?;
        Ok(CharSet {
            kind: CharSetKind::UnicodeClass { class, pattern },
        })
    }

    /// Tests one codepoint for membership.
    pub fn matches(&self, cp: char) -> bool {
        match &self.kind {
            CharSetKind::Literal { codepoints, .. } => codepoints.contains(&(cp as u32)),
            CharSetKind::Range { first, last } => *first <= cp as u32 && cp as u32 <= *last,
            CharSetKind::UnicodeClass { pattern, .. } => {
                let mut buf = [0u8; 4];
                pattern.is_match(cp.encode_utf8(&mut buf))
            }
        }
    }
}

/// Sub-ranges are equal only when they identify the same characters
/// expressed the same way: a literal over "0123456789" is not equal to the
/// range '0'-'9'. Literal equality ignores character order.
impl PartialEq for CharSet {
    fn eq(&self, other: &CharSet) -> bool {
        match (&self.kind, &other.kind) {
            (
                CharSetKind::Literal { codepoints: a, .. },
                CharSetKind::Literal { codepoints: b, .. },
            ) => a == b,
            (
                CharSetKind::Range { first: a, last: b },
                CharSetKind::Range { first: c, last: d },
            ) => a == c && b == d,
            (
                CharSetKind::UnicodeClass { class: a, .. },
                CharSetKind::UnicodeClass { class: b, .. },
            ) => a == b,
            _ => false,
        }
    }
}

impl Eq for CharSet {}
