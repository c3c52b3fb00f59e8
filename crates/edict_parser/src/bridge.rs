//! Parameter access for bound orders.
//!
//! Once an order's keyword is known, the code that executes it reads the
//! parameters token by token. An [`OrderCursor`] holds a reference to the
//! order's payload for as long as it lives, so the text cannot be freed
//! underneath it and is released on every exit path.
//!
//! A [`TokenStream`] is the per-phase binding point: it keeps at most one
//! order bound at a time and, when the phase is closed, tears down the
//! payload store.

use std::borrow::Cow;
use std::rc::Rc;

use edict_foundation::{Keyword, Lexicon, OrderConfig, from_base36};
use edict_storage::{Order, Payload, PayloadRef, PayloadStore, TeardownReport};
use tracing::{debug, warn};

use crate::tokenizer::TokenCursor;

/// A token cursor over one order's parameter text.
#[derive(Debug)]
pub struct OrderCursor {
    keyword: Option<Keyword>,
    text: Option<Rc<str>>,
    pos: usize,
    // Keeps the payload record alive while bound.
    _hold: Option<PayloadRef>,
}

impl OrderCursor {
    /// Binds a cursor to `order`, taking a reference to its payload.
    ///
    /// Inline study skills are exposed as their localized name.
    #[must_use]
    pub fn new<L: Lexicon + ?Sized>(order: &Order, lexicon: &L) -> Self {
        let (text, hold) = match order.payload() {
            Payload::Interned(payload) => (payload.shared_text(), Some(payload.clone())),
            Payload::InlineSkill(skill) => (Some(Rc::from(lexicon.skill_name(*skill).as_ref())), None),
            Payload::None => (None, None),
        };
        Self {
            keyword: order.keyword(),
            text,
            pos: 0,
            _hold: hold,
        }
    }

    /// Returns the bound order's keyword.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        self.keyword
    }

    /// Returns the whole parameter text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Option<Cow<'_, str>> {
        let text = self.text.as_deref()?;
        let mut tokens = TokenCursor::resume(text, self.pos);
        let token = tokens.next_token()?;
        self.pos = tokens.position();
        Some(token)
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek_token(&self) -> Option<Cow<'_, str>> {
        TokenCursor::resume(self.text.as_deref()?, self.pos).peek_token()
    }

    /// Consumes the next token as a decimal integer.
    ///
    /// The token is consumed even if it is not a number.
    pub fn next_int(&mut self) -> Option<i32> {
        self.next_token()?.parse().ok()
    }

    /// Consumes the next token as a base-36 id.
    ///
    /// The token is consumed even if it is not an id.
    pub fn next_id(&mut self) -> Option<i32> {
        from_base36(&self.next_token()?)
    }

    /// Returns the unconsumed text with leading whitespace removed.
    #[must_use]
    pub fn rest(&self) -> &str {
        self.text
            .as_deref()
            .map_or("", |text| text[self.pos..].trim_start())
    }

    /// Returns true if no tokens remain.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.rest().is_empty()
    }

    /// Rewinds to the first parameter token.
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}

/// The per-phase binding point for parameter parsing.
#[derive(Debug)]
pub struct TokenStream {
    store: PayloadStore,
    current: Option<OrderCursor>,
    clear_on_close: bool,
    closed: bool,
}

impl TokenStream {
    /// Creates an unbound stream over `store`.
    #[must_use]
    pub fn new(store: PayloadStore, config: &OrderConfig) -> Self {
        Self {
            store,
            current: None,
            clear_on_close: config.clear_store_on_close,
            closed: false,
        }
    }

    /// Binds `order` for parameter parsing and returns its keyword.
    ///
    /// Any previous binding is released first. Replacing a binding that
    /// was never unbound is logged. `None` only releases.
    pub fn bind<L: Lexicon + ?Sized>(&mut self, order: Option<&Order>, lexicon: &L) -> Option<Keyword> {
        let Some(order) = order else {
            self.current = None;
            return None;
        };
        if let Some(previous) = self.current.take() {
            warn!(
                previous = ?previous.keyword(),
                next = ?order.keyword(),
                "rebinding token stream without unbinding"
            );
        }
        self.closed = false;
        let cursor = OrderCursor::new(order, lexicon);
        let keyword = cursor.keyword();
        self.current = Some(cursor);
        keyword
    }

    /// Returns true if an order is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the bound cursor.
    pub fn cursor(&mut self) -> Option<&mut OrderCursor> {
        self.current.as_mut()
    }

    /// Releases the bound order, if any. Returns whether one was bound.
    pub fn unbind(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Runs `f` with a cursor over `order`, released when `f` returns.
    ///
    /// The stream's own binding is left untouched.
    pub fn with_order<L, R>(&self, order: &Order, lexicon: &L, f: impl FnOnce(&mut OrderCursor) -> R) -> R
    where
        L: Lexicon + ?Sized,
    {
        let mut cursor = OrderCursor::new(order, lexicon);
        f(&mut cursor)
    }

    /// Ends the phase: releases the binding and, if configured, clears the
    /// payload store.
    ///
    /// Calling it again before anything new is bound does nothing.
    pub fn close(&mut self) -> Option<TeardownReport> {
        if self.closed {
            return None;
        }
        self.closed = true;
        self.current = None;
        if self.clear_on_close {
            Some(self.store.clear_all())
        } else {
            debug!("token stream closed; store kept");
            None
        }
    }

    /// Starts the next phase on the same store without binding anything.
    pub fn reopen(&mut self) {
        self.closed = false;
    }

    /// Returns true if the phase has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the store this stream tears down.
    #[must_use]
    pub fn store(&self) -> &PayloadStore {
        &self.store
    }
}
