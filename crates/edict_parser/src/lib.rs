//! Order parsing and rendering for edict.
//!
//! This crate turns lines of player input into [`Order`](edict_storage::Order)
//! records and back.
//!
//! # Architecture
//!
//! ```text
//! "@entert 200"
//!       │
//!       ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["@entert", "200"]
//! └─────────────────┘
//!       │
//!       ▼
//! ┌─────────────────┐
//! │   PARSER        │  → flags {PERSIST}, keyword Entertain
//! └─────────────────┘
//!       │
//!       ▼
//! ┌─────────────────┐
//! │   PAYLOAD       │  → interned "200" (or an inline study skill)
//! │   STORE         │
//! └─────────────────┘
//!       │
//!       ├──────────────► FORMATTER  → "@entertain 200"
//!       │
//!       └──────────────► TOKEN STREAM → next_int() == 200
//! ```
//!
//! Programmatic orders enter through [`build_order`] and share the same
//! storage path as typed ones.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bridge;
pub mod build;
pub mod format;
pub mod parser;
pub mod tokenizer;

pub use bridge::{OrderCursor, TokenStream};
pub use build::{FormatArg, build_order};
pub use format::{format_order, write_order};
pub use parser::{parse, parse_order};
pub use tokenizer::TokenCursor;
