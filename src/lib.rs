//! Edict - Order parsing and bookkeeping for turn-based play-by-mail games
//!
//! This crate re-exports all layers of the edict workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: edict_runtime    - Order console, batch checker, logging setup
//! Layer 2: edict_parser     - Tokenizer, parser, builder, formatter, token stream
//! Layer 1: edict_storage    - Payload store, orders, order lists, classification
//! Layer 0: edict_foundation - Core types (Keyword, Skill, Locale, Error)
//! ```

pub use edict_foundation as foundation;
pub use edict_parser as parser;
pub use edict_runtime as runtime;
pub use edict_storage as storage;
