//! Property tests for parsing and rendering

use edict_foundation::{ELLIPSIS, Keyword, Lexicon, Locale, Skill};
use edict_parser::{format_order, parse, parse_order};
use edict_storage::PayloadStore;
use proptest::prelude::*;

const WIDE: usize = 512;

fn typable_keyword() -> impl Strategy<Value = Keyword> {
    prop::sample::select(
        Keyword::ALL
            .into_iter()
            .filter(|k| k.is_typable())
            .collect::<Vec<_>>(),
    )
}

/// Canonical parameter text: single-spaced words that start with a digit,
/// so they never name a skill or the temp parameter.
fn parameter_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[0-9][a-z0-9]{0,6}", 1..5).prop_map(|words| words.join(" "))
}

fn prefix(quiet: bool, persist: bool) -> String {
    let mut prefix = String::new();
    if quiet {
        prefix.push('!');
    }
    if persist {
        prefix.push('@');
    }
    prefix
}

proptest! {
    #[test]
    fn rendering_round_trips(
        keyword in typable_keyword(),
        text in parameter_text(),
        quiet in any::<bool>(),
        persist in any::<bool>(),
        german in any::<bool>(),
    ) {
        let locale = if german { Locale::german() } else { Locale::english() };
        let store = PayloadStore::new();
        let line = format!("{}{} {text}", prefix(quiet, persist), locale.keyword_text(keyword));

        let order = parse_order(&line, &locale, &store).unwrap();
        prop_assert_eq!(order.keyword(), Some(keyword));
        prop_assert_eq!(order.is_quiet(), quiet);
        prop_assert_eq!(order.has_persist_flag(), persist);
        prop_assert_eq!(format_order(Some(&order), &locale, WIDE), line);
    }

    #[test]
    fn repeated_flags_collapse(quiet in 1usize..4, persist in 1usize..4) {
        let en = Locale::english();
        let store = PayloadStore::new();
        let line = format!("{}{}guard", "!".repeat(quiet), "@".repeat(persist));
        let noisy = parse_order(&line, &en, &store).unwrap();
        let plain = parse_order("!@guard", &en, &store).unwrap();
        prop_assert_eq!(noisy, plain);
    }

    #[test]
    fn truncation_keeps_text_valid(
        body in "[a-z][a-z ]{43,47}",
        tail in prop::sample::select(vec!['é', 'ß', '€', '🗡']),
        capacity in 8usize..24,
    ) {
        let en = Locale::english();
        let store = PayloadStore::new();
        let line = format!("message {body}{tail}");
        let order = parse_order(&line, &en, &store).unwrap();
        let out = format_order(Some(&order), &en, capacity);

        prop_assert!(out.len() < capacity);
        prop_assert!(out.ends_with(ELLIPSIS));
        prop_assert!(std::str::from_utf8(out.as_bytes()).is_ok());
    }
}

#[test]
fn interning_dedups_identical_lines() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let first = parse_order("tax 500", &en, &store).unwrap();
    let second = parse_order("tax 500", &en, &store).unwrap();

    let a = first.payload().interned().unwrap().handle();
    let b = second.payload().interned().unwrap().handle();
    assert_eq!(a, b);
    assert_eq!(store.refcount(a), 2);

    drop(first);
    assert_eq!(store.refcount(a), 1);
}

#[test]
fn study_of_known_skill_allocates_nothing() {
    for (locale, line) in [
        (Locale::english(), "study tactics"),
        (Locale::german(), "LERNE Taktik"),
    ] {
        let store = PayloadStore::new();
        let order = parse_order(line, &locale, &store).unwrap();
        assert_eq!(order.payload().skill(), Some(Skill::Tactics));
        assert!(store.is_empty());
        assert_eq!(format_order(Some(&order), &locale, WIDE), line);
    }
}

#[test]
fn capacity_eight_with_multibyte_tail() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let payload = format!("{}é", "x".repeat(48));
    assert_eq!(payload.len(), 50);
    let order = parse_order(&format!("message {payload}"), &en, &store).unwrap();

    let out = format_order(Some(&order), &en, 8);
    assert_eq!(out, format!("me{ELLIPSIS}"));
}

#[test]
fn disabled_keyword_adds_no_record() {
    let en = Locale::english().with_disabled(Keyword::Steal);
    let store = PayloadStore::new();
    let _kept = parse_order("guard", &en, &store).unwrap();
    let before = store.stats();
    assert!(parse("steal 1x2", &en, &store).is_none());
    assert_eq!(store.stats(), before);
}
