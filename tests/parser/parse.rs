//! Integration tests for order parsing

use edict_foundation::{ErrorKind, Keyword, Locale, Skill};
use edict_parser::{parse, parse_order};
use edict_storage::{Payload, PayloadStore};

#[test]
fn keyword_and_text() {
    let store = PayloadStore::new();
    let order = parse_order("give zz 10 silver", &Locale::english(), &store).unwrap();
    assert_eq!(order.keyword(), Some(Keyword::Give));
    assert_eq!(order.text(), Some("zz 10 silver"));
}

#[test]
fn abbreviated_keyword() {
    let store = PayloadStore::new();
    let order = parse_order("ENTERT 200", &Locale::english(), &store).unwrap();
    assert_eq!(order.keyword(), Some(Keyword::Entertain));
}

#[test]
fn german_orders() {
    let de = Locale::german();
    let store = PayloadStore::new();
    let order = parse_order("LERNE Armbrustschießen", &de, &store).unwrap();
    assert_eq!(order.payload(), &Payload::InlineSkill(Skill::Crossbow));

    let order = parse_order("MACHE TEMP 5", &de, &store).unwrap();
    assert_eq!(order.keyword(), Some(Keyword::MakeTemp));
    assert_eq!(order.text(), Some("5"));
}

#[test]
fn make_without_temp() {
    let store = PayloadStore::new();
    let order = parse_order("make 5 sword", &Locale::english(), &store).unwrap();
    assert_eq!(order.keyword(), Some(Keyword::Make));
    assert_eq!(order.text(), Some("5 sword"));
}

#[test]
fn magic_study_keeps_text() {
    let store = PayloadStore::new();
    let order = parse_order("study magic draig", &Locale::english(), &store).unwrap();
    assert_eq!(order.text(), Some("magic draig"));
    let order = parse_order("study magic", &Locale::english(), &store).unwrap();
    assert_eq!(order.text(), Some("magic"));
}

#[test]
fn multi_word_skill_goes_inline() {
    let store = PayloadStore::new();
    let order = parse_order("study unarmed combat", &Locale::english(), &store).unwrap();
    assert_eq!(order.payload(), &Payload::InlineSkill(Skill::Unarmed));
    assert!(store.is_empty());
}

#[test]
fn failures_are_distinguishable() {
    let store = PayloadStore::new();
    let en = Locale::english().with_disabled(Keyword::Sabotage);
    let kind = |line: &str| parse_order(line, &en, &store).unwrap_err().kind;

    assert!(matches!(kind(""), ErrorKind::EmptyOrder));
    assert!(matches!(kind("   "), ErrorKind::EmptyOrder));
    assert!(matches!(kind("@!"), ErrorKind::UnknownKeyword(_)));
    assert!(matches!(kind("frobnicate 3"), ErrorKind::UnknownKeyword(_)));
    assert!(matches!(kind("sabotage ship"), ErrorKind::DisabledKeyword(Keyword::Sabotage)));

    assert!(parse("sabotage ship", &en, &store).is_none());
    assert!(store.is_empty());
}

#[test]
fn comment_alias() {
    let store = PayloadStore::new();
    let order = parse_order("// remember the ford", &Locale::english(), &store).unwrap();
    assert_eq!(order.keyword(), Some(Keyword::Comment));
    assert_eq!(order.text(), Some("remember the ford"));
}
