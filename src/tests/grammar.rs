// This is actually defined at `crate::grammar::tests_for_grammar`

use crate::grammar::{Grammar, Production};
use crate::symbol::Symbol;
use crate::tests::nt;

use expect_test::expect;

#[test]
fn lookup_by_left_hand_symbol() {
    let s = nt("S");
    let t = nt("T");
    let mut grammar = Grammar::new("g");
    grammar.add_production(Production::new(s.clone(), vec![t.clone()]));
    grammar.add_production(Production::new(s.clone(), vec![Symbol::terminal("s")]));
    grammar.add_production(Production::new(t.clone(), vec![Symbol::terminal("t")]));
    assert_eq!(grammar.name(), "g");
    assert_eq!(grammar.len(), 3);
    assert_eq!(grammar.productions_for(&s).len(), 2);
    assert_eq!(grammar.productions_for(&t).len(), 1);
    assert!(grammar.productions_for(&nt("U")).is_empty());
}

#[test]
fn duplicates_collapse() {
    let s = nt("S");
    let mut grammar = Grammar::new("g");
    grammar.add_production(Production::new(s.clone(), vec![Symbol::terminal("s")]));
    grammar.add_production(Production::new(s.clone(), vec![Symbol::terminal("s")]));
    assert_eq!(grammar.len(), 1);
    assert_eq!(grammar.productions_for(&s).len(), 1);
}

#[test]
fn structurally_equal_symbols_share_an_index_entry() {
    // two distinct but equal instances must not split the index
    let s1 = nt("S");
    let s2 = nt("S");
    let mut grammar = Grammar::new("g");
    grammar.add_production(Production::new(s1, vec![Symbol::terminal("a")]));
    grammar.add_production(Production::new(s2.clone(), vec![Symbol::terminal("b")]));
    assert_eq!(grammar.productions_for(&s2).len(), 2);
}

#[test]
fn empty_bodies_are_allowed() {
    let s = nt("S");
    let mut grammar = Grammar::new("g");
    grammar.add_production(Production::new(s.clone(), vec![]));
    assert_eq!(grammar.productions_for(&s).len(), 1);
    assert!(grammar.productions_for(&s)[0].rhs().is_empty());
}

#[test]
fn display_forms() {
    let s = nt("S");
    expect![["S -> a {A,B}"]].assert_eq(
        &Production::new(
            s.clone(),
            vec![
                Symbol::terminal("a"),
                Symbol::token_inclusion("AB", ["A", "B"]),
            ],
        )
        .to_string(),
    );
    expect![["S -> ε"]].assert_eq(&Production::new(s, vec![]).to_string());
}
