//! Productions and the grammar that indexes them.

use std::sync::Arc;

use linear_map::LinearMap;

use crate::symbol::Symbol;

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;

/// A rewrite rule: a left-hand symbol and its ordered right-hand side.
/// An empty right-hand side derives the empty sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Production {
    lhs: Symbol,
    rhs: Vec<Symbol>,
}

impl Production {
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Production {
        Production { lhs, rhs }
    }

    pub fn lhs(&self) -> &Symbol {
        &self.lhs
    }

    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }
}

/// A named set of productions, indexed by left-hand symbol for constant
/// lookup of "what expands S". Built once before parsing; read-only while
/// parsing, so one grammar may back any number of concurrent parses.
#[derive(Debug)]
pub struct Grammar {
    name: String,
    productions: Vec<Arc<Production>>,
    by_lhs: LinearMap<Symbol, Vec<Arc<Production>>>,
}

impl Grammar {
    pub fn new(name: impl Into<String>) -> Grammar {
        Grammar {
            name: name.into(),
            productions: Vec::new(),
            by_lhs: LinearMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a production. Structural duplicates collapse, so a
    /// production registered twice behaves as if registered once.
    /// Right-hand symbols are not checked against the index; a symbol
    /// nothing expands simply never completes.
    pub fn add_production(&mut self, production: Production) {
        if let Some(known) = self.by_lhs.get(&production.lhs) {
            if known.iter().any(|p| **p == production) {
                return;
            }
        }
        let production = Arc::new(production);
        self.productions.push(Arc::clone(&production));
        if let Some(list) = self.by_lhs.get_mut(&production.lhs) {
            list.push(production);
        } else {
            self.by_lhs
                .insert(production.lhs.clone(), vec![production]);
        }
    }

    /// Every production expanding `symbol`; empty for unknown symbols.
    pub fn productions_for(&self, symbol: &Symbol) -> &[Arc<Production>] {
        self.by_lhs.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All productions, in registration order.
    pub fn productions(&self) -> impl Iterator<Item = &Arc<Production>> {
        self.productions.iter()
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}
