//! Token stream and parameter cursors over parsed orders

use edict::foundation::{Keyword, Locale, OrderConfig};
use edict::parser::{TokenStream, parse_order};
use edict::storage::PayloadStore;

#[test]
fn give_parameters_read_in_sequence() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let mut stream = TokenStream::new(store.clone(), &OrderConfig::default());
    let order = parse_order("give 1x2 10 silver", &en, &store).unwrap();

    assert_eq!(stream.bind(Some(&order), &en), Some(Keyword::Give));
    let cursor = stream.cursor().unwrap();
    assert_eq!(cursor.next_id(), Some(2_486));
    assert_eq!(cursor.next_int(), Some(10));
    assert_eq!(cursor.peek_token().as_deref(), Some("silver"));
    assert_eq!(cursor.rest(), "silver");
    assert_eq!(cursor.next_token().as_deref(), Some("silver"));
    assert!(cursor.is_exhausted());
    assert!(cursor.next_token().is_none());
}

#[test]
fn binding_keeps_payload_alive() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let mut stream = TokenStream::new(store.clone(), &OrderConfig::default());
    let order = parse_order("name unit \"Iron Wolves\"", &en, &store).unwrap();
    let handle = order.payload().interned().unwrap().handle();

    stream.bind(Some(&order), &en);
    drop(order);
    assert_eq!(store.refcount(handle), 1);
    {
        let cursor = stream.cursor().unwrap();
        assert_eq!(cursor.next_token().as_deref(), Some("unit"));
        assert_eq!(cursor.next_token().as_deref(), Some("Iron Wolves"));
    }

    assert!(stream.unbind());
    assert!(!store.contains(handle));
    assert!(!stream.unbind());
}

#[test]
fn scoped_cursor_leaves_binding_alone() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let mut stream = TokenStream::new(store.clone(), &OrderConfig::default());
    let give = parse_order("give zz 1 horse", &en, &store).unwrap();
    let study = parse_order("study crossbow", &en, &store).unwrap();

    stream.bind(Some(&give), &en);
    let skill = stream.with_order(&study, &en, |cursor| cursor.next_token().map(|t| t.into_owned()));
    assert_eq!(skill.as_deref(), Some("crossbow"));
    assert!(stream.is_bound());
    assert_eq!(stream.cursor().unwrap().keyword(), Some(Keyword::Give));
}

#[test]
fn closing_tears_down_once() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let mut stream = TokenStream::new(store.clone(), &OrderConfig::default());
    let order = parse_order("tax 100", &en, &store).unwrap();
    stream.bind(Some(&order), &en);

    // The order still holds its payload, so the teardown is unbalanced.
    let report = stream.close().unwrap();
    assert_eq!(report.outstanding, 1);
    assert!(store.is_empty());
    assert!(stream.is_closed());
    assert!(stream.close().is_none());

    drop(order);
    assert!(store.is_empty());
}

#[test]
fn persistent_config_keeps_store() {
    let en = Locale::english();
    let store = PayloadStore::new();
    let mut stream = TokenStream::new(store.clone(), &OrderConfig::persistent());
    let _order = parse_order("tax 100", &en, &store).unwrap();
    assert!(stream.close().is_none());
    assert_eq!(store.len(), 1);
    assert_eq!(store.epoch(), 0);
}
