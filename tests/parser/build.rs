//! Integration tests for programmatic order construction

use edict_foundation::{Keyword, Locale, OrderConfig, Skill};
use edict_parser::{FormatArg, build_order, format_order, parse_order};
use edict_storage::{Payload, PayloadStore};

#[test]
fn built_and_typed_orders_agree() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let built = build_order(
        Keyword::Give,
        &en,
        &store,
        &OrderConfig::default(),
        "%i %d %s",
        &[FormatArg::Int(46_656), FormatArg::Int(5), FormatArg::Str("horse")],
    );
    let typed = parse_order("give 1000 5 horse", &en, &store).unwrap();
    assert_eq!(built, typed);
    assert_eq!(store.len(), 1);
}

#[test]
fn built_study_is_inline() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let order = build_order(Keyword::Study, &en, &store, &OrderConfig::default(), "%s", &["riding".into()]);
    assert_eq!(order.payload(), &Payload::InlineSkill(Skill::Riding));
    assert_eq!(format_order(Some(&order), &en, 64), "study riding");
}

#[test]
fn small_build_buffer_truncates() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let config = OrderConfig::default().with_build_size(6);
    let order = build_order(Keyword::Name, &en, &store, &config, "unit %s", &["Riders".into()]);
    assert_eq!(order.text(), Some("unit"));
}

#[test]
#[should_panic(expected = "missing argument")]
fn missing_argument_panics() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let _ = build_order(Keyword::Give, &en, &store, &OrderConfig::default(), "%i %d", &[FormatArg::Int(1)]);
}
