//! Derivation trees, read back out of a finished chart.
//!
//! The chart records *that* spans derive from symbols; the walk here
//! reconstructs *how*, by a depth-first case split on each right-hand
//! symbol: terminal occurrences consume one matching token, nonterminal
//! occurrences follow passive edges, and repeatable symbols contribute
//! zero or more occurrences. Ambiguous grammars yield several trees.

use std::sync::Arc;

use crate::earley::{Edge, Parse};
use crate::symbol::Symbol;

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests_for_tree;

/// One derivation: a token leaf, or a symbol node whose children derive
/// the right-hand side of one of the symbol's productions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseTree {
    Token(String),
    Node {
        symbol: Symbol,
        children: Vec<ParseTree>,
    },
}

impl ParseTree {
    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            ParseTree::Token(_) => None,
            ParseTree::Node { symbol, .. } => Some(symbol),
        }
    }

    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Token(_) => &[],
            ParseTree::Node { children, .. } => children,
        }
    }
}

impl Parse {
    /// Every derivation of the whole input from the start symbol. A
    /// rejected parse yields no trees; an ambiguous grammar may yield
    /// several distinct ones.
    pub fn trees(&self) -> Vec<ParseTree> {
        let final_cell = self.chart().len() - 1;
        let mut builder = TreeBuilder {
            parse: self,
            in_progress: Vec::new(),
        };
        let mut out: Vec<ParseTree> = Vec::new();
        let roots: Vec<Edge> = self
            .chart()
            .completions(final_cell, self.start_symbol())
            .filter(|e| e.start() == 0)
            .cloned()
            .collect();
        for root in roots {
            for children in builder.expand_edge(&root) {
                let tree = ParseTree::Node {
                    symbol: self.start_symbol().clone(),
                    children,
                };
                if !out.contains(&tree) {
                    out.push(tree);
                }
            }
        }
        out
    }
}

struct TreeBuilder<'p> {
    parse: &'p Parse,
    /// (production address, start, end) triples currently being expanded.
    /// Re-entry means a same-span cycle, which contributes no finite tree.
    in_progress: Vec<(usize, usize, usize)>,
}

impl<'p> TreeBuilder<'p> {
    /// Every child list deriving `edge`'s production over its span.
    fn expand_edge(&mut self, edge: &Edge) -> Vec<Vec<ParseTree>> {
        let key = (
            Arc::as_ptr(edge.production()) as usize,
            edge.start(),
            edge.end(),
        );
        if self.in_progress.contains(&key) {
            return Vec::new();
        }
        self.in_progress.push(key);
        let result = self.expand_sequence(edge.production().rhs(), edge.start(), edge.end());
        self.in_progress.pop();
        result
    }

    fn expand_sequence(
        &mut self,
        symbols: &[Symbol],
        from: usize,
        to: usize,
    ) -> Vec<Vec<ParseTree>> {
        let (head, rest) = match symbols.split_first() {
            Some(split) => split,
            None => {
                return if from == to {
                    vec![Vec::new()]
                } else {
                    Vec::new()
                }
            }
        };
        let mut out: Vec<Vec<ParseTree>> = Vec::new();
        if head.is_repeatable() {
            // zero occurrences
            out.extend(self.expand_sequence(rest, from, to));
        }
        for (mid, tree) in self.occurrences(head, from, to) {
            if head.is_repeatable() {
                for (after, repeats) in self.repeats(head, mid, to) {
                    for tail in self.expand_sequence(rest, after, to) {
                        let mut children = Vec::with_capacity(1 + repeats.len() + tail.len());
                        children.push(tree.clone());
                        children.extend(repeats.iter().cloned());
                        children.extend(tail);
                        out.push(children);
                    }
                }
            } else {
                for tail in self.expand_sequence(rest, mid, to) {
                    let mut children = Vec::with_capacity(1 + tail.len());
                    children.push(tree.clone());
                    children.extend(tail);
                    out.push(children);
                }
            }
        }
        out
    }

    /// Single occurrences of `symbol` starting at `from`, paired with the
    /// position each one ends at.
    fn occurrences(&mut self, symbol: &Symbol, from: usize, to: usize) -> Vec<(usize, ParseTree)> {
        let mut out: Vec<(usize, ParseTree)> = Vec::new();
        if symbol.is_terminal() {
            if from < to {
                if let Some(token) = self.parse.tokens().get(from) {
                    if symbol.matches(token, self.parse.ignore_case()) {
                        out.push((from + 1, ParseTree::Token(token.clone())));
                    }
                }
            }
        } else {
            let spans: Vec<Edge> = (from..=to)
                .flat_map(|end| {
                    self.parse
                        .chart()
                        .completions(end, symbol)
                        .filter(|e| e.start() == from)
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .collect();
            for edge in spans {
                for children in self.expand_edge(&edge) {
                    let entry = (
                        edge.end(),
                        ParseTree::Node {
                            symbol: symbol.clone(),
                            children,
                        },
                    );
                    if !out.contains(&entry) {
                        out.push(entry);
                    }
                }
            }
        }
        out
    }

    /// Zero or more occurrences after the first; each repeat must consume
    /// input, which keeps zero-width repetition from looping.
    fn repeats(&mut self, symbol: &Symbol, from: usize, to: usize) -> Vec<(usize, Vec<ParseTree>)> {
        let mut out = vec![(from, Vec::new())];
        for (mid, tree) in self.occurrences(symbol, from, to) {
            if mid == from {
                continue;
            }
            for (after, more) in self.repeats(symbol, mid, to) {
                let mut seq = Vec::with_capacity(1 + more.len());
                seq.push(tree.clone());
                seq.extend(more);
                out.push((after, seq));
            }
        }
        out
    }
}
