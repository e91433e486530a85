//! A general-purpose Earley chart parser.
//!
//! Grammars are ordinary context-free grammars whose terminal symbols may
//! match more than literal tokens: finite token sets (as inclusions or
//! exclusions), character ranges, literal character lists, and Unicode
//! general-category classes are all terminals here. On top of that, any
//! symbol — terminal or nonterminal — may be marked *repeatable*, letting
//! it match zero or more consecutive occurrences at its grammar position
//! without a separate Kleene-star production.
//!
//! A parse takes a token sequence and a start [`Symbol`], and always
//! yields a definite [`Status`] (`ACCEPT`/`REJECT`) plus the finished
//! [`Chart`], from which every derivation can be read back as
//! [`ParseTree`]s. Edge insertions can be observed live through a
//! [`ChartListener`].
//!
//! ```
//! use chartwell::{EarleyParser, Grammar, Production, Status, Symbol};
//!
//! let greeting = Symbol::nonterminal("Greeting")?;
//! let hello = Symbol::terminal("hello");
//! let name = Symbol::token_inclusion("Name", ["world", "earley"]);
//!
//! let mut grammar = Grammar::new("hello");
//! grammar.add_production(Production::new(greeting.clone(), vec![hello, name]));
//!
//! let parse = EarleyParser::new(&grammar).parse(["hello", "world"], &greeting);
//! assert_eq!(parse.status(), Status::Accept);
//! # Ok::<(), chartwell::GrammarError>(())
//! ```

mod charset;
mod display;
mod earley;
mod error;
mod grammar;
mod symbol;
mod tree;

pub use charset::CharSet;
pub use earley::{Chart, ChartListener, EarleyParser, Edge, Parse, Status};
pub use error::GrammarError;
pub use grammar::{Grammar, Production};
pub use symbol::Symbol;
pub use tree::ParseTree;
