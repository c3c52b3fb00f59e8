//! Order sheets across phase boundaries

use edict::foundation::{ErrorKind, Keyword, Locale, OrderConfig};
use edict::runtime::Session;

#[test]
fn sheet_rolls_over_to_template() {
    let mut session = Session::default();
    for line in [
        "move north",
        "@give zz 1 horse",
        "work",
        "!study tactics",
        "// stay put",
        "guard",
    ] {
        session.submit(line).unwrap();
    }

    let report = session.end_phase();
    assert_eq!(report.orders, 6);
    assert_eq!(report.carried, 4);
    assert!(report.teardown.unwrap().is_clean());

    let carried: Vec<String> = session.orders().iter().map(|o| session.render(o)).collect();
    assert_eq!(carried, ["@give zz 1 horse", "work", "!study tactics", "comment stay put"]);

    // A second rollover carries the same sheet again.
    let report = session.end_phase();
    assert_eq!(report.carried, 4);
    assert_eq!(session.store().epoch(), 2);
}

#[test]
fn repeated_phases_do_not_grow_the_store() {
    let mut session = Session::default();
    session.submit("entertain 100").unwrap();
    session.submit("entertain 100").unwrap();
    for _ in 0..5 {
        session.end_phase();
    }
    let stats = session.stats();
    assert_eq!(stats.orders, 2);
    assert_eq!(stats.store.records, 1);
    assert_eq!(stats.store.references, 2);
}

#[test]
fn rejected_lines_leave_sheet_untouched() {
    let locale = Locale::german().with_disabled(Keyword::Spy);
    let mut session = Session::new(locale, OrderConfig::default());
    let err = session.submit_from("SPIONIERE 1x2", "befehle.txt", 3).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DisabledKeyword(Keyword::Spy)));
    assert_eq!(err.context.unwrap().line, Some(3));

    assert!(session.submit("ARBEITE").is_ok());
    let stats = session.stats();
    assert_eq!(stats.orders, 1);
    assert_eq!(stats.rejected, 1);
}

#[test]
fn persistent_config_keeps_orders_store() {
    let mut session = Session::new(Locale::english(), OrderConfig::persistent());
    session.submit("work").unwrap();
    let report = session.end_phase();
    assert!(report.teardown.is_none());
    assert_eq!(session.store().epoch(), 0);
    assert_eq!(session.orders().len(), 1);
}
