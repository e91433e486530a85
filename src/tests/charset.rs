// This is actually defined at `crate::charset::tests_for_charset`

use crate::charset::CharSet;
use crate::error::GrammarError;

use expect_test::expect;

#[test]
fn alpha_range() {
    let alpha = CharSet::range('A', 'Z').unwrap();
    assert!(alpha.matches('A'));
    assert!(alpha.matches('Z'));
    assert!(!alpha.matches('0'));
}

#[test]
fn single_char_literal() {
    let alpha = CharSet::literal("A");
    assert!(alpha.matches('A'));
    assert!(!alpha.matches('Z'));
    assert!(!alpha.matches('0'));
}

#[test]
fn literal() {
    let alpha = CharSet::literal("ABC");
    assert!(alpha.matches('A'));
    assert!(alpha.matches('B'));
    assert!(alpha.matches('C'));
    assert!(!alpha.matches('Z'));
    assert!(!alpha.matches('0'));
}

#[test]
fn higher_range() {
    let boxes = CharSet::codepoint_range(0x2610, 0x2611).unwrap();
    assert!(boxes.matches('☐'));
    assert!(boxes.matches('☑'));
    assert!(!boxes.matches('A'));
    assert!(!boxes.matches('0'));
}

#[test]
fn reversed_range() {
    assert_eq!(
        CharSet::range('9', '0').unwrap_err(),
        GrammarError::InvalidRange {
            first: '9' as u32,
            last: '0' as u32,
        }
    );
}

#[test]
fn range_past_unicode() {
    assert_eq!(
        CharSet::codepoint_range(0x0, 0x110000).unwrap_err(),
        GrammarError::InvalidCodepoint(0x110000)
    );
}

#[test]
fn letter_class() {
    let letters = CharSet::unicode_class("L").unwrap();
    assert!(!letters.matches('☐'));
    assert!(!letters.matches('☑'));
    assert!(letters.matches('A'));
    assert!(letters.matches('n'));
    assert!(!letters.matches('0'));
    assert!(letters.matches('é'));
    assert!(letters.matches('π'));
}

#[test]
fn lowercase_letter_class() {
    let lowercase = CharSet::unicode_class("Ll").unwrap();
    assert!(!lowercase.matches('A'));
    assert!(lowercase.matches('n'));
    assert!(!lowercase.matches('0'));
    assert!(!lowercase.matches('Ǵ'));
    assert!(lowercase.matches('π'));
}

#[test]
fn malformed_classes() {
    assert_eq!(
        CharSet::unicode_class("").unwrap_err(),
        GrammarError::MalformedClass(String::new())
    );
    assert_eq!(
        CharSet::unicode_class("Basic").unwrap_err(),
        GrammarError::MalformedClass("Basic".to_string())
    );
    assert_eq!(
        CharSet::unicode_class("Zz").unwrap_err(),
        GrammarError::MalformedClass("Zz".to_string())
    );
}

#[test]
fn equality_distinguishes_expression() {
    // same characters, different expression: not equal
    assert_ne!(
        CharSet::literal("0123456789"),
        CharSet::range('0', '9').unwrap()
    );
    assert_eq!(
        CharSet::range('0', '9').unwrap(),
        CharSet::range('0', '9').unwrap()
    );
    assert_eq!(CharSet::literal("AB"), CharSet::literal("BA"));
    assert_ne!(CharSet::literal("AB"), CharSet::literal("ABC"));
    assert_ne!(
        CharSet::unicode_class("L").unwrap(),
        CharSet::unicode_class("Lu").unwrap()
    );
}

#[test]
fn display_forms() {
    expect![[r#""ABC""#]].assert_eq(&CharSet::literal("ABC").to_string());
    expect![["A-Z"]].assert_eq(&CharSet::range('A', 'Z').unwrap().to_string());
    expect![["A"]].assert_eq(&CharSet::range('A', 'A').unwrap().to_string());
    expect![["Nd"]].assert_eq(&CharSet::unicode_class("Nd").unwrap().to_string());
}
