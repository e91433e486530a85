use crate::charset::{CharSet, CharSetKind};
use crate::earley::Edge;
use crate::grammar::Production;
use crate::symbol::{Symbol, SymbolKind};
use crate::tree::ParseTree;

impl std::fmt::Display for CharSet {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.kind {
            CharSetKind::Literal { text, .. } => write!(w, "\"{}\"", text.replace('"', "\"\"")),
            CharSetKind::Range { first, last } => {
                write_codepoint(w, *first)?;
                if first != last {
                    write!(w, "-")?;
                    write_codepoint(w, *last)?;
                }
                Ok(())
            }
            CharSetKind::UnicodeClass { class, .. } => write!(w, "{}", class),
        }
    }
}

fn write_codepoint(w: &mut std::fmt::Formatter, cp: u32) -> std::fmt::Result {
    match char::from_u32(cp) {
        Some(c) => write!(w, "{}", c),
        None => write!(w, "???"),
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.kind {
            SymbolKind::Start | SymbolKind::Nonterminal | SymbolKind::Literal => {
                write!(w, "{}", self.name)
            }
            SymbolKind::TokenSet { tokens, negated } => {
                if *negated {
                    write!(w, "!")?;
                }
                write!(w, "{{")?;
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        write!(w, ",")?;
                    }
                    write!(w, "{}", token)?;
                }
                write!(w, "}}")
            }
            SymbolKind::CharacterSet { ranges, inclusion } => {
                if !inclusion {
                    write!(w, "~")?;
                }
                write!(w, "[")?;
                for (i, range) in ranges.iter().enumerate() {
                    if i > 0 {
                        write!(w, ";")?;
                    }
                    write!(w, "{}", range)?;
                }
                write!(w, "]")
            }
        }
    }
}

impl std::fmt::Display for Production {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{} ->", self.lhs())?;
        if self.rhs().is_empty() {
            return write!(w, " ε");
        }
        for symbol in self.rhs() {
            write!(w, " {}", symbol)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "[{} ->", self.production().lhs())?;
        for (i, symbol) in self.production().rhs().iter().enumerate() {
            if i == self.dot() {
                write!(w, " •")?;
            }
            write!(w, " {}", symbol)?;
        }
        if self.dot() == self.production().rhs().len() {
            write!(w, " •")?;
        }
        write!(w, ", ({}, {})]", self.start(), self.end())
    }
}

impl std::fmt::Display for ParseTree {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParseTree::Token(token) => write!(w, "{}", token),
            ParseTree::Node { symbol, children } => {
                write!(w, "{}[", symbol.name())?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(w, " ")?;
                    }
                    write!(w, "{}", child)?;
                }
                write!(w, "]")
            }
        }
    }
}
