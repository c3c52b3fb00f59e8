//! Session state for the order console.
//!
//! A session is one unit's order sheet for one phase: the active locale,
//! the payload store, the orders given so far, and the token stream that
//! reads their parameters. Ending the phase carries the template (the
//! persistent orders) over into a fresh store, the way a turn rolls over.

use edict_foundation::{BoundedWriter, ErrorContext, Keyword, Lexicon, Locale, OrderConfig, Result};
use edict_parser::{TokenStream, format_order, parse_order, write_order};
use edict_storage::{
    Order, OrderClass, OrderList, PayloadStore, StoreStats, TeardownReport, classify,
    is_exclusive, is_long, is_persistent,
};
use tracing::{debug, info, warn};

/// Counters describing a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStats {
    /// Orders on the sheet.
    pub orders: usize,
    /// Long orders among them.
    pub long: usize,
    /// Lines that did not parse.
    pub rejected: usize,
    /// Payload store counters.
    pub store: StoreStats,
}

/// Outcome of ending a phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseReport {
    /// Orders on the sheet when the phase ended.
    pub orders: usize,
    /// Orders carried into the next phase.
    pub carried: usize,
    /// Store teardown summary, if the store was cleared.
    pub teardown: Option<TeardownReport>,
}

/// Session state for the console and the batch checker.
pub struct Session {
    locale: Locale,
    store: PayloadStore,
    tokens: TokenStream,
    orders: OrderList,
    config: OrderConfig,
    rejected: usize,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new(locale: Locale, config: OrderConfig) -> Self {
        let store = PayloadStore::new();
        let tokens = TokenStream::new(store.clone(), &config);
        Self {
            locale,
            store,
            tokens,
            orders: OrderList::new(),
            config,
            rejected: 0,
        }
    }

    /// Returns the active locale.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Switches the locale used for new lines and for rendering.
    pub fn set_locale(&mut self, locale: Locale) {
        info!(locale = locale.name(), "locale switched");
        self.locale = locale;
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &OrderConfig {
        &self.config
    }

    /// Returns the payload store.
    #[must_use]
    pub fn store(&self) -> &PayloadStore {
        &self.store
    }

    /// Returns the orders given so far.
    #[must_use]
    pub fn orders(&self) -> &OrderList {
        &self.orders
    }

    /// Parses `line` and appends the order.
    ///
    /// # Errors
    ///
    /// Returns the parse error; the sheet is left unchanged.
    pub fn submit(&mut self, line: &str) -> Result<&Order> {
        match parse_order(line, &self.locale, &self.store) {
            Ok(order) => Ok(self.orders.push(order)),
            Err(err) => {
                self.rejected += 1;
                Err(err)
            }
        }
    }

    /// Parses one line of an order file, attaching its position to errors.
    ///
    /// # Errors
    ///
    /// Returns the parse error with `source` and `line` as context.
    pub fn submit_from(&mut self, line: &str, source: &str, line_number: usize) -> Result<&Order> {
        let column = line.len() - line.trim_start().len() + 1;
        self.submit(line).map_err(|err| {
            err.with_context(
                ErrorContext::new()
                    .with_source(source)
                    .with_position(line_number, column),
            )
        })
    }

    /// Renders an order in the active locale.
    #[must_use]
    pub fn render(&self, order: &Order) -> String {
        format_order(Some(order), &self.locale, self.config.display_size)
    }

    /// Renders an order followed by its class tags.
    #[must_use]
    pub fn describe(&self, order: &Order) -> String {
        format!("{}  [{}]", self.render(order), classify(order))
    }

    /// Returns the class of every order, in sequence.
    #[must_use]
    pub fn classes(&self) -> Vec<OrderClass> {
        self.orders.iter().map(classify).collect()
    }

    /// Iterates over the orders that would carry into the next phase.
    pub fn template(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|order| is_persistent(order))
    }

    /// Returns true if an exclusive long order shares the sheet with
    /// another long order.
    #[must_use]
    pub fn has_long_conflict(&self) -> bool {
        let long = self.orders.iter().filter(|order| is_long(order)).count();
        long > 1 && self.orders.iter().any(is_exclusive)
    }

    /// Binds order `index` and reads all of its parameter tokens.
    ///
    /// Returns the keyword and the tokens, or `None` for a bad index.
    pub fn tokens(&mut self, index: usize) -> Option<(Option<Keyword>, Vec<String>)> {
        let order = self.orders.get(index)?;
        let keyword = self.tokens.bind(Some(order), &self.locale);
        let mut words = Vec::new();
        if let Some(cursor) = self.tokens.cursor() {
            while let Some(token) = cursor.next_token() {
                words.push(token.into_owned());
            }
        }
        self.tokens.unbind();
        Some((keyword, words))
    }

    /// Removes order `index` from the sheet.
    pub fn drop_order(&mut self, index: usize) -> Option<Order> {
        self.orders.remove(index)
    }

    /// Returns session counters.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            orders: self.orders.len(),
            long: self.orders.iter().filter(|order| is_long(order)).count(),
            rejected: self.rejected,
            store: self.store.stats(),
        }
    }

    /// Ends the phase.
    ///
    /// The template is rendered, every order is dropped, the token stream
    /// is closed (clearing the store if configured) and reopened, and the
    /// template is parsed back into the new phase. Orders that do not fit
    /// in `display_size` are not carried over.
    pub fn end_phase(&mut self) -> PhaseReport {
        let mut template = Vec::new();
        for order in self.template() {
            let mut out = BoundedWriter::new(self.config.display_size);
            write_order(Some(order), &self.locale, &mut out);
            if out.is_truncated() {
                warn!(keyword = ?order.keyword(), "template order too long to carry over");
            } else {
                template.push(out.into_string());
            }
        }
        let orders = self.orders.len();
        self.orders.clear();
        let teardown = self.tokens.close();
        self.tokens.reopen();

        for line in &template {
            match parse_order(line, &self.locale, &self.store) {
                Ok(order) => {
                    self.orders.push(order);
                }
                Err(err) => debug!(%err, line, "template order did not carry over"),
            }
        }

        let report = PhaseReport {
            orders,
            carried: self.orders.len(),
            teardown,
        };
        info!(
            orders = report.orders,
            carried = report.carried,
            clean = report.teardown.is_none_or(|t| t.is_clean()),
            "phase ended"
        );
        report
    }

    /// Returns the words to offer for completion in the active locale.
    #[must_use]
    pub fn completion_words(&self) -> Vec<String> {
        let mut words: Vec<String> = Keyword::ALL
            .iter()
            .filter(|keyword| keyword.is_typable() && !self.locale.is_disabled(**keyword))
            .map(|keyword| self.locale.keyword_text(*keyword).into_owned())
            .collect();
        words.sort();
        words.dedup();
        words
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Locale::english(), OrderConfig::default())
    }
}
