//! Order storage for edict.
//!
//! This crate provides:
//! - [`PayloadStore`] - Interned, reference-counted parameter text
//! - [`Order`] - One parsed command with flags and payload
//! - [`OrderList`] - A unit's orders in sequence
//! - [`classify`] - Long, exclusive, repeated, persistent and silent tests

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod list;
pub mod order;
pub mod payload;

pub use classify::{
    OrderClass, classify, is_exclusive, is_exclusive_keyword, is_long, is_long_keyword,
    is_persistent, is_repeated, is_repeated_keyword, is_silent,
};
pub use list::OrderList;
pub use order::{CMD_PERSIST, CMD_QUIET, KEYWORD_MASK, Order, OrderFlags, Payload, keyword};
pub use payload::{
    PayloadHandle, PayloadRecord, PayloadRef, PayloadStore, StoreStats, TeardownReport,
};
