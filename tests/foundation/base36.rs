//! Integration tests for base-36 ids

use edict_foundation::{from_base36, to_base36};
use proptest::prelude::*;

#[test]
fn known_values() {
    assert_eq!(to_base36(0), "0");
    assert_eq!(to_base36(35), "z");
    assert_eq!(to_base36(36), "10");
    assert_eq!(to_base36(1_295), "zz");
    assert_eq!(to_base36(-71), "-1z");
}

#[test]
fn parsing_is_case_insensitive() {
    assert_eq!(from_base36("ZZ"), Some(1_295));
    assert_eq!(from_base36("1x2"), from_base36("1X2"));
}

#[test]
fn rejects_garbage() {
    assert_eq!(from_base36(""), None);
    assert_eq!(from_base36("-"), None);
    assert_eq!(from_base36("12!"), None);
    assert_eq!(from_base36("zzzzzzzzzzzz"), None);
}

#[test]
fn extremes() {
    assert_eq!(from_base36(&to_base36(i32::MAX)), Some(i32::MAX));
    assert_eq!(from_base36(&to_base36(i32::MIN)), Some(i32::MIN));
}

proptest! {
    #[test]
    fn every_id_reads_back(value in any::<i32>()) {
        prop_assert_eq!(from_base36(&to_base36(value)), Some(value));
    }
}
