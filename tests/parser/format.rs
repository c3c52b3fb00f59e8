//! Integration tests for order rendering

use edict_foundation::{BoundedWriter, ELLIPSIS, Keyword, Locale, LocaleId};
use edict_parser::{format_order, parse_order, write_order};
use edict_storage::{Order, OrderFlags, PayloadStore};

#[test]
fn full_keyword_and_flags() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let order = parse_order("!@ent 200", &en, &store);
    // "ent" is ambiguous
    assert!(order.is_err());

    let order = parse_order("@!entert 200", &en, &store).unwrap();
    assert_eq!(format_order(Some(&order), &en, 64), "!@entertain 200");
}

#[test]
fn renders_in_any_locale() {
    let store = PayloadStore::new();
    let order = parse_order("move north east", &Locale::english(), &store).unwrap();
    assert_eq!(format_order(Some(&order), &Locale::german(), 64), "NACH north east");
}

#[test]
fn no_order_writes_nothing() {
    let mut out = BoundedWriter::new(16);
    write_order(None, &Locale::english(), &mut out);
    assert!(out.is_empty());
    assert!(!out.is_truncated());
}

#[test]
fn free_text_is_verbatim() {
    let store = PayloadStore::new();
    let order = Order::free_text(&store, "PARTEI zz \"Geheim\"", LocaleId::new(1));
    assert_eq!(format_order(Some(&order), &Locale::english(), 64), "PARTEI zz \"Geheim\"");
}

#[test]
fn quiet_parameterless() {
    let store = PayloadStore::new();
    let order = Order::with_text(Keyword::Guard, OrderFlags::QUIET, &store, None, LocaleId::new(0));
    assert_eq!(format_order(Some(&order), &Locale::english(), 64), "!guard");
}

#[test]
fn truncated_output_carries_marker() {
    let store = PayloadStore::new();
    let en = Locale::english();
    let order = parse_order("message unit zz \"a very long message\"", &en, &store).unwrap();
    let mut out = BoundedWriter::new(16);
    write_order(Some(&order), &en, &mut out);
    assert!(out.is_truncated());
    assert!(out.as_str().ends_with(ELLIPSIS));
    assert_eq!(out.len(), 15);
}
