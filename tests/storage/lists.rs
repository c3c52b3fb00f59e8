//! Integration tests for order lists

use edict_foundation::{Keyword, LocaleId};
use edict_storage::{CMD_PERSIST, CMD_QUIET, KEYWORD_MASK, Order, OrderFlags, OrderList, PayloadStore, keyword};

const EN: LocaleId = LocaleId::new(0);

fn order(store: &PayloadStore, keyword: Keyword, text: Option<&str>) -> Order {
    Order::with_text(keyword, OrderFlags::NONE, store, text, EN)
}

#[test]
fn push_keeps_sequence() {
    let store = PayloadStore::new();
    let mut list = OrderList::new();
    list.push(order(&store, Keyword::Move, Some("north")));
    list.push(order(&store, Keyword::Work, None));
    list.push(order(&store, Keyword::Guard, None));
    let keywords: Vec<_> = list.iter().map(Order::keyword).collect();
    assert_eq!(keywords, [Some(Keyword::Move), Some(Keyword::Work), Some(Keyword::Guard)]);
}

#[test]
fn replace_releases_overwritten_payloads() {
    let store = PayloadStore::new();
    let tax = order(&store, Keyword::Tax, Some("100"));
    let mut list: OrderList = vec![tax.clone(), tax.clone()].into_iter().collect();
    let tax_handle = tax.payload().interned().unwrap().handle();
    drop(tax);
    assert_eq!(store.refcount(tax_handle), 2);

    let entertain = order(&store, Keyword::Entertain, Some("200"));
    let original = order(&store, Keyword::Tax, Some("100"));
    assert_eq!(list.replace(&original, &entertain), 2);
    drop(original);
    assert!(!store.contains(tax_handle));
    assert!(list.iter().all(|o| o.keyword() == Some(Keyword::Entertain)));
}

#[test]
fn replace_keeps_text_shared_across_keywords() {
    let store = PayloadStore::new();
    let tax = order(&store, Keyword::Tax, Some("100"));
    let entertain = order(&store, Keyword::Entertain, Some("100"));
    let handle = tax.payload().interned().unwrap().handle();
    assert_eq!(entertain.payload().interned().unwrap().handle(), handle);

    let mut list: OrderList = vec![tax.clone(), tax.clone()].into_iter().collect();
    drop(tax);
    assert_eq!(store.refcount(handle), 3);

    assert_eq!(list.replace(&entertain, &entertain), 0);
    let original = list.get(0).unwrap().clone();
    assert_eq!(list.replace(&original, &entertain), 2);
    drop(original);
    // Two list entries plus `entertain`, all on the one record.
    assert_eq!(store.refcount(handle), 3);
    assert_eq!(store.len(), 1);
}

#[test]
fn retain_and_clear() {
    let store = PayloadStore::new();
    let mut list: OrderList = [Keyword::Work, Keyword::Move, Keyword::Tax]
        .into_iter()
        .map(|kw| order(&store, kw, Some("x")))
        .collect();
    list.retain(|o| o.keyword() != Some(Keyword::Move));
    assert_eq!(list.len(), 2);

    list.clear();
    assert!(list.is_empty());
    assert!(store.is_empty());
}

#[test]
fn keyword_of_missing_order() {
    let store = PayloadStore::new();
    let work = order(&store, Keyword::Work, None);
    assert_eq!(keyword(Some(&work)), Some(Keyword::Work));
    assert_eq!(keyword(None), None);
}

#[test]
fn packed_command_word() {
    let store = PayloadStore::new();
    let flags = OrderFlags::QUIET | OrderFlags::PERSIST;
    let guard = Order::with_text(Keyword::Guard, flags, &store, None, EN);
    assert_eq!(guard.command() & KEYWORD_MASK, u32::from(Keyword::Guard.index()));
    assert_ne!(guard.command() & CMD_QUIET, 0);
    assert_ne!(guard.command() & CMD_PERSIST, 0);

    let free = Order::free_text(&store, "hello", EN);
    assert_eq!(free.command(), KEYWORD_MASK);
}
