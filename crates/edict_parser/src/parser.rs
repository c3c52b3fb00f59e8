//! Order line parsing.
//!
//! Turns one line of player input into an [`Order`]:
//!
//! 1. Read the first token and strip its `!` (quiet) and `@` (persist)
//!    prefixes.
//! 2. Resolve the rest of the token as a keyword of the active locale.
//! 3. Turn "make temp" into the make-temporary-unit keyword.
//! 4. Reject disabled keywords.
//! 5. Store the remaining text as the payload, or the skill inline for a
//!    study order naming exactly one non-magic skill.

use edict_foundation::{Error, Keyword, Lexicon, Param, Result, Skill};
use edict_storage::{Order, OrderFlags, PayloadStore};
use tracing::{debug, warn};

use crate::tokenizer::TokenCursor;

/// Parses one order line.
///
/// # Errors
///
/// - [`EmptyOrder`](edict_foundation::ErrorKind::EmptyOrder) for a blank line
/// - [`UnknownKeyword`](edict_foundation::ErrorKind::UnknownKeyword) if the
///   first word is not a keyword of `lexicon`
/// - [`DisabledKeyword`](edict_foundation::ErrorKind::DisabledKeyword) if it
///   is one, but switched off
///
/// A failed parse never touches the store.
pub fn parse_order<L: Lexicon + ?Sized>(
    line: &str,
    lexicon: &L,
    store: &PayloadStore,
) -> Result<Order> {
    let mut tokens = TokenCursor::new(line);
    let Some(first) = tokens.next_token() else {
        return Err(Error::empty_order());
    };

    let word = first.trim_start_matches(['!', '@']);
    let prefix = &first[..first.len() - word.len()];
    let flags = OrderFlags::from_bools(prefix.contains('@'), prefix.contains('!'));

    let resolved = if word.is_empty() {
        None
    } else {
        lexicon.lookup_keyword(word)
    };
    let Some(mut keyword) = resolved else {
        debug!(word, locale = ?lexicon.id(), "unknown keyword");
        return Err(Error::unknown_keyword(word));
    };

    if keyword == Keyword::Make {
        let is_temp = tokens
            .peek_token()
            .is_some_and(|next| lexicon.is_param(&next, Param::Temp));
        if is_temp {
            tokens.next_token();
            keyword = Keyword::MakeTemp;
        }
    }

    if lexicon.is_disabled(keyword) {
        warn!(%keyword, locale = ?lexicon.id(), "order uses a disabled keyword");
        return Err(Error::disabled_keyword(keyword));
    }

    Ok(assemble(keyword, flags, tokens.rest(), lexicon, store))
}

/// Parses one order line, collapsing every failure to `None`.
///
/// The reason is logged by [`parse_order`].
#[must_use]
pub fn parse<L: Lexicon + ?Sized>(line: &str, lexicon: &L, store: &PayloadStore) -> Option<Order> {
    parse_order(line, lexicon, store).ok()
}

/// Builds the order for a resolved keyword and its parameter text.
///
/// Shared by the parser and programmatic construction so both produce
/// identical records for identical text.
pub(crate) fn assemble<L: Lexicon + ?Sized>(
    keyword: Keyword,
    flags: OrderFlags,
    text: &str,
    lexicon: &L,
    store: &PayloadStore,
) -> Order {
    let text = text.trim();
    if text.is_empty() {
        return Order::with_text(keyword, flags, store, None, lexicon.id());
    }
    if keyword == Keyword::Study {
        if let Some(skill) = inline_skill(text, lexicon) {
            return Order::study(skill, flags);
        }
    }
    Order::with_text(keyword, flags, store, Some(text), lexicon.id())
}

/// Resolves study text to a skill that can be stored inline.
///
/// The whole text must name the skill: either a single token, or a skill
/// whose name itself contains spaces.
fn inline_skill<L: Lexicon + ?Sized>(text: &str, lexicon: &L) -> Option<Skill> {
    let mut tokens = TokenCursor::new(text);
    let first = tokens.next_token()?;
    let skill = if tokens.is_empty() {
        lexicon.lookup_skill(&first)
    } else {
        lexicon.lookup_skill(text)
    }?;
    (!skill.is_magic()).then_some(skill)
}
