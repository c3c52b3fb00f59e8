//! Core types for edict.
//!
//! This crate provides:
//! - [`Keyword`] and [`Skill`] - Closed enumerations of command verbs and skills
//! - [`Lexicon`] and [`Locale`] - Locale word tables with abbreviation lookup
//! - [`BoundedWriter`] - Capacity-limited, UTF-8 safe text output
//! - [`Error`] - Rich error types with context
//! - [`OrderConfig`] - Buffer sizes and teardown policy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod base36;
pub mod config;
pub mod error;
pub mod keyword;
pub mod locale;
pub mod skill;
pub mod text;

pub use base36::{from_base36, to_base36};
pub use config::{DISPLAY_SIZE, OrderConfig};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use keyword::Keyword;
pub use locale::{Lexicon, Locale, LocaleId, Param};
pub use skill::Skill;
pub use text::{BoundedWriter, ELLIPSIS, floor_char_boundary, truncate_str};
