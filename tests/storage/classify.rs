//! Integration tests for order classification

use edict_foundation::{Keyword, LocaleId, Skill};
use edict_storage::{
    Order, OrderClass, OrderFlags, PayloadStore, classify, is_exclusive_keyword, is_long_keyword,
    is_persistent, is_repeated_keyword,
};

const EN: LocaleId = LocaleId::new(0);

#[test]
fn inclusion_holds_for_every_keyword() {
    for keyword in Keyword::ALL {
        if is_exclusive_keyword(keyword) {
            assert!(is_long_keyword(keyword), "{keyword:?} exclusive but not long");
        }
        if is_repeated_keyword(keyword) {
            assert!(is_long_keyword(keyword), "{keyword:?} repeated but not long");
        }
    }
}

#[test]
fn move_is_long_but_never_persists() {
    let store = PayloadStore::new();
    for flags in [OrderFlags::NONE, OrderFlags::PERSIST] {
        let order = Order::with_text(Keyword::Move, flags, &store, Some("north"), EN);
        let class = classify(&order);
        assert!(class.long && class.exclusive);
        assert!(!class.repeated);
        assert!(!is_persistent(&order));
    }
}

#[test]
fn comments_always_persist() {
    let store = PayloadStore::new();
    for flags in [OrderFlags::NONE, OrderFlags::QUIET, OrderFlags::PERSIST] {
        let order = Order::with_text(Keyword::Comment, flags, &store, Some("note"), EN);
        assert!(is_persistent(&order));
        assert!(!classify(&order).long);
    }
}

#[test]
fn trading_and_casting_are_not_exclusive() {
    for keyword in [Keyword::Buy, Keyword::Sell, Keyword::Cast] {
        assert!(is_long_keyword(keyword));
        assert!(!is_exclusive_keyword(keyword), "{keyword:?}");
    }
    assert!(is_exclusive_keyword(Keyword::Work));
}

#[test]
fn persist_flag_makes_short_orders_persistent() {
    let store = PayloadStore::new();
    let plain = Order::with_text(Keyword::Guard, OrderFlags::NONE, &store, None, EN);
    let flagged = Order::with_text(Keyword::Guard, OrderFlags::PERSIST, &store, None, EN);
    assert!(!is_persistent(&plain));
    assert!(is_persistent(&flagged));
}

#[test]
fn free_text_is_unclassified() {
    let store = PayloadStore::new();
    let free = Order::free_text(&store, "whatever", EN);
    let class = classify(&free);
    assert_eq!(class, OrderClass::default());
    assert_eq!(class.to_string(), "-");
}

#[test]
fn display_lists_set_tags() {
    let study = Order::study(Skill::Bow, OrderFlags::QUIET);
    assert_eq!(classify(&study).to_string(), "long exclusive repeated persistent silent");
}
