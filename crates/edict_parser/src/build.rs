//! Programmatic order construction.
//!
//! Orders issued by code (monsters, automatic defaults) are assembled from
//! a small format language and then stored exactly as if a player had typed
//! the resulting text:
//!
//! | Directive | Argument | Output |
//! |-----------|----------|--------|
//! | `%s` | non-empty string | the string |
//! | `%d` | integer | decimal |
//! | `%i` | integer | base 36 (unit and building ids) |
//!
//! Everything else is copied literally.

use std::fmt;

use edict_foundation::{BoundedWriter, Keyword, Lexicon, OrderConfig, to_base36};
use edict_storage::{Order, OrderFlags, PayloadStore};
use tracing::warn;

use crate::parser::assemble;

/// An argument for [`build_order`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FormatArg<'a> {
    /// Text for `%s`.
    Str(&'a str),
    /// A number for `%d` or `%i`.
    Int(i32),
}

impl fmt::Debug for FormatArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(s: &'a String) -> Self {
        Self::Str(s)
    }
}

impl From<i32> for FormatArg<'_> {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

/// Assembles an order from a format string.
///
/// The text is rendered into a buffer of `config.build_size` bytes (cut
/// short with a warning if it does not fit) and then stored the same way
/// [`parse_order`](crate::parse_order) stores a typed line. Both flags are
/// off. Disabled keywords are not checked: code issuing orders is trusted.
///
/// # Panics
///
/// Format strings are constants written by programmers, so mistakes in
/// them panic:
/// - an unknown `%` directive, or a `%` at the end of the string
/// - an argument of the wrong kind, or an empty `%s` argument
/// - too few or too many arguments
///
/// # Example
///
/// ```
/// use edict_foundation::{Keyword, Locale, OrderConfig};
/// use edict_parser::{FormatArg, build_order, format_order};
/// use edict_storage::PayloadStore;
///
/// let en = Locale::english();
/// let store = PayloadStore::new();
/// let order = build_order(
///     Keyword::Give,
///     &en,
///     &store,
///     &OrderConfig::default(),
///     "%i %d %s",
///     &[FormatArg::Int(1_295), FormatArg::Int(10), FormatArg::Str("silver")],
/// );
/// assert_eq!(format_order(Some(&order), &en, 100), "give zz 10 silver");
/// ```
#[must_use]
pub fn build_order<L: Lexicon + ?Sized>(
    keyword: Keyword,
    lexicon: &L,
    store: &PayloadStore,
    config: &OrderConfig,
    format: &str,
    args: &[FormatArg<'_>],
) -> Order {
    let mut out = BoundedWriter::new(config.build_size);
    let mut args = args.iter();
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let directive = chars.next();
        match (directive, args.next()) {
            (Some('s'), Some(FormatArg::Str(s))) => {
                assert!(!s.is_empty(), "empty %s argument in order format {format:?}");
                out.push_str(s);
            }
            (Some('d'), Some(FormatArg::Int(i))) => {
                out.push_str(&i.to_string());
            }
            (Some('i'), Some(FormatArg::Int(i))) => {
                out.push_str(&to_base36(*i));
            }
            (Some(d @ ('s' | 'd' | 'i')), Some(arg)) => {
                panic!("%{d} cannot take {arg:?} in order format {format:?}");
            }
            (Some(d @ ('s' | 'd' | 'i')), None) => {
                panic!("missing argument for %{d} in order format {format:?}");
            }
            (Some(d), _) => panic!("unknown directive %{d} in order format {format:?}"),
            (None, _) => panic!("dangling % in order format {format:?}"),
        }
    }
    let unused = args.len();
    assert!(unused == 0, "{unused} unused argument(s) for order format {format:?}");

    if out.is_truncated() {
        warn!(
            %keyword,
            capacity = out.capacity(),
            "constructed order text truncated"
        );
    }

    assemble(keyword, OrderFlags::NONE, out.as_str(), lexicon, store)
}
