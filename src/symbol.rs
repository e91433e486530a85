//! The grammar vocabulary.
//!
//! A symbol is either opaque (a nonterminal, matched only through its
//! productions) or a terminal carrying one of several matching strategies:
//! literal token equality, finite token-set membership, or
//! character-level matching against a union of sub-ranges. Every symbol
//! may additionally be marked *repeatable*, which lets it match zero or
//! more consecutive occurrences at its grammar position without a
//! separate Kleene-star production.
//!
//! Symbols are built once, immutable afterwards, and compared by value:
//! equality (not identity) is what deduplicates chart edges and indexes
//! productions.

use crate::charset::CharSet;
use crate::error::GrammarError;

#[cfg(test)]
#[path = "tests/symbol.rs"]
mod tests_for_symbol;

/// A grammar vocabulary element.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub(crate) name: String,
    pub(crate) repeatable: bool,
    pub(crate) kind: SymbolKind,
}

#[derive(Clone, Debug)]
pub(crate) enum SymbolKind {
    /// The distinguished start sentinel.
    Start,
    /// Matched only via productions.
    Nonterminal,
    /// Matches exactly its own name as a token.
    Literal,
    /// Matches membership (or, negated, non-membership) in a token list.
    TokenSet { tokens: Vec<String>, negated: bool },
    /// Matches a single-codepoint token against a union of sub-ranges.
    CharacterSet { ranges: Vec<CharSet>, inclusion: bool },
}

impl Symbol {
    /// The start sentinel. It is never equal to any other symbol, so no
    /// grammar symbol can collide with it.
    pub fn start() -> Symbol {
        Symbol {
            name: "<start>".to_string(),
            repeatable: false,
            kind: SymbolKind::Start,
        }
    }

    /// A nonterminal. The name must be non-empty.
    pub fn nonterminal(name: impl Into<String>) -> Result<Symbol, GrammarError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GrammarError::EmptyName);
        }
        Ok(Symbol {
            name,
            repeatable: false,
            kind: SymbolKind::Nonterminal,
        })
    }

    /// A terminal matching exactly its own name as a token.
    pub fn terminal(name: impl Into<String>) -> Symbol {
        Symbol {
            name: name.into(),
            repeatable: false,
            kind: SymbolKind::Literal,
        }
    }

    /// A terminal matching any one of a set of tokens.
    pub fn token_inclusion(
        name: impl Into<String>,
        tokens: impl IntoIterator<Item = impl Into<String>>,
    ) -> Symbol {
        Symbol::token_set(name, tokens, false)
    }

    /// A terminal matching any token *except* the ones in the set.
    pub fn token_exclusion(
        name: impl Into<String>,
        tokens: impl IntoIterator<Item = impl Into<String>>,
    ) -> Symbol {
        Symbol::token_set(name, tokens, true)
    }

    fn token_set(
        name: impl Into<String>,
        tokens: impl IntoIterator<Item = impl Into<String>>,
        negated: bool,
    ) -> Symbol {
        Symbol {
            name: name.into(),
            repeatable: false,
            kind: SymbolKind::TokenSet {
                tokens: tokens.into_iter().map(Into::into).collect(),
                negated,
            },
        }
    }

    /// A terminal matching any single-codepoint token that falls in at
    /// least one of the sub-ranges.
    pub fn char_inclusion(name: impl Into<String>, ranges: Vec<CharSet>) -> Symbol {
        Symbol {
            name: name.into(),
            repeatable: false,
            kind: SymbolKind::CharacterSet {
                ranges,
                inclusion: true,
            },
        }
    }

    /// A terminal matching any single-codepoint token that falls in none
    /// of the sub-ranges.
    pub fn char_exclusion(name: impl Into<String>, ranges: Vec<CharSet>) -> Symbol {
        Symbol {
            name: name.into(),
            repeatable: false,
            kind: SymbolKind::CharacterSet {
                ranges,
                inclusion: false,
            },
        }
    }

    /// Marks the symbol as matching zero or more consecutive occurrences
    /// at its grammar position. The flag is honored per instance: the same
    /// name may be repeatable at one call site and fixed at another.
    pub fn repeatable(mut self) -> Symbol {
        self.repeatable = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            SymbolKind::Literal | SymbolKind::TokenSet { .. } | SymbolKind::CharacterSet { .. }
        )
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn is_start(&self) -> bool {
        matches!(self.kind, SymbolKind::Start)
    }

    /// Pure predicate: does `token` match this symbol? Nonterminals and
    /// the start sentinel never match a token directly.
    pub fn matches(&self, token: &str, ignore_case: bool) -> bool {
        match &self.kind {
            SymbolKind::Start | SymbolKind::Nonterminal => false,
            SymbolKind::Literal => token_eq(&self.name, token, ignore_case),
            SymbolKind::TokenSet { tokens, negated } => {
                let found = tokens.iter().any(|t| token_eq(t, token, ignore_case));
                found != *negated
            }
            SymbolKind::CharacterSet { ranges, inclusion } => {
                // tokens of anything but exactly one codepoint never match
                let mut chars = token.chars();
                let cp = match (chars.next(), chars.next()) {
                    (Some(cp), None) => cp,
                    _ => return false,
                };
                let found = ranges.iter().any(|r| range_matches(r, cp, ignore_case));
                found == *inclusion
            }
        }
    }
}

fn token_eq(a: &str, b: &str, ignore_case: bool) -> bool {
    if ignore_case {
        a == b || a.to_lowercase() == b.to_lowercase()
    } else {
        a == b
    }
}

fn range_matches(range: &CharSet, cp: char, ignore_case: bool) -> bool {
    if ignore_case {
        let upper = cp.to_uppercase().next().unwrap_or(cp);
        let lower = cp.to_lowercase().next().unwrap_or(cp);
        range.matches(upper) || range.matches(lower)
    } else {
        range.matches(cp)
    }
}

/// Two symbols are equal iff they have the same terminal flag, the same
/// name, and (for the set kinds) the same underlying collections,
/// regardless of order. The repeatable flag does not participate, and the
/// start sentinel equals only itself.
impl PartialEq for Symbol {
    fn eq(&self, other: &Symbol) -> bool {
        match (&self.kind, &other.kind) {
            (SymbolKind::Start, SymbolKind::Start) => true,
            (SymbolKind::Start, _) | (_, SymbolKind::Start) => false,
            (SymbolKind::Nonterminal, SymbolKind::Nonterminal)
            | (SymbolKind::Literal, SymbolKind::Literal) => self.name == other.name,
            (
                SymbolKind::TokenSet {
                    tokens: a,
                    negated: na,
                },
                SymbolKind::TokenSet {
                    tokens: b,
                    negated: nb,
                },
            ) => {
                self.name == other.name
                    && na == nb
                    && a.iter().all(|t| b.contains(t))
                    && b.iter().all(|t| a.contains(t))
            }
            (
                SymbolKind::CharacterSet {
                    ranges: a,
                    inclusion: ia,
                },
                SymbolKind::CharacterSet {
                    ranges: b,
                    inclusion: ib,
                },
            ) => {
                self.name == other.name
                    && ia == ib
                    && a.iter().all(|r| b.contains(r))
                    && b.iter().all(|r| a.contains(r))
            }
            _ => false,
        }
    }
}

impl Eq for Symbol {}
