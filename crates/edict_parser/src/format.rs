//! Rendering orders back to text.
//!
//! The output re-parses to the same order: flag prefixes first, then the
//! full localized keyword (never an abbreviation), then the parameter text.

use std::borrow::Cow;

use edict_foundation::{BoundedWriter, ELLIPSIS, Lexicon};
use edict_storage::{Order, Payload};
use tracing::warn;

/// Writes `order` into `out`.
///
/// `None` writes nothing. Free text is written as is. If the parameter
/// text does not fit, its tail is overwritten with [`ELLIPSIS`] and the
/// writer is left marked truncated; the output is always valid UTF-8.
pub fn write_order<L: Lexicon + ?Sized>(order: Option<&Order>, lexicon: &L, out: &mut BoundedWriter) {
    let Some(order) = order else {
        return;
    };

    let text: Option<Cow<'_, str>> = match order.payload() {
        Payload::InlineSkill(skill) => Some(lexicon.skill_name(*skill)),
        Payload::Interned(payload) => payload.text().map(Cow::Borrowed),
        Payload::None => None,
    };

    if let Some(keyword) = order.keyword() {
        if order.is_quiet() {
            out.push('!');
        }
        if order.has_persist_flag() {
            out.push('@');
        }
        out.push_str(&lexicon.keyword_text(keyword));
        if text.is_some() {
            out.push(' ');
        }
    }

    if let Some(text) = &text {
        if !out.push_str(text) {
            out.mark_truncated(ELLIPSIS);
        }
    }

    if out.is_truncated() {
        warn!(
            keyword = ?order.keyword(),
            capacity = out.capacity(),
            "order text truncated"
        );
    }
}

/// Renders `order` into a new string of at most `capacity - 1` bytes.
#[must_use]
pub fn format_order<L: Lexicon + ?Sized>(order: Option<&Order>, lexicon: &L, capacity: usize) -> String {
    let mut out = BoundedWriter::new(capacity);
    write_order(order, lexicon, &mut out);
    out.into_string()
}
