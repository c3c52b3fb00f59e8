//! Turn-processing categories of orders.
//!
//! A unit may hold at most one *long* order per turn; *exclusive* orders
//! forbid any second long order; *repeated* orders carry into the next
//! turn's template automatically; *persistent* orders are the ones that
//! actually get carried.

use std::fmt;

use edict_foundation::Keyword;

use crate::order::Order;

/// Returns true for keywords whose orders repeat into the next turn.
#[must_use]
pub const fn is_repeated_keyword(keyword: Keyword) -> bool {
    matches!(
        keyword,
        Keyword::Cast
            | Keyword::Buy
            | Keyword::Sell
            | Keyword::Route
            | Keyword::Drive
            | Keyword::Work
            | Keyword::Besiege
            | Keyword::Entertain
            | Keyword::Tax
            | Keyword::Research
            | Keyword::Spy
            | Keyword::Steal
            | Keyword::Sabotage
            | Keyword::Study
            | Keyword::Teach
            | Keyword::Grow
            | Keyword::Plant
            | Keyword::Piracy
            | Keyword::Make
            | Keyword::Loot
            | Keyword::Destroy
    )
}

/// Returns true for keywords that occupy the unit's long action.
#[must_use]
pub const fn is_long_keyword(keyword: Keyword) -> bool {
    matches!(keyword, Keyword::Move) || is_repeated_keyword(keyword)
}

/// Returns true for long keywords that forbid any other long order.
///
/// Casting and trading combine with other activity, so they are excluded.
#[must_use]
pub const fn is_exclusive_keyword(keyword: Keyword) -> bool {
    is_long_keyword(keyword) && !matches!(keyword, Keyword::Cast | Keyword::Buy | Keyword::Sell)
}

/// Returns true if the order repeats into the next turn.
#[must_use]
pub fn is_repeated(order: &Order) -> bool {
    order.keyword().is_some_and(is_repeated_keyword)
}

/// Returns true if the order is a long order.
#[must_use]
pub fn is_long(order: &Order) -> bool {
    order.keyword().is_some_and(is_long_keyword)
}

/// Returns true if the order is an exclusive long order.
#[must_use]
pub fn is_exclusive(order: &Order) -> bool {
    order.keyword().is_some_and(is_exclusive_keyword)
}

/// Returns true if the order is carried into the next turn's template.
///
/// Moves never persist and comments always do; free text does not.
/// Everything else persists when flagged or when it repeats.
#[must_use]
pub fn is_persistent(order: &Order) -> bool {
    match order.keyword() {
        None | Some(Keyword::Move) => false,
        Some(Keyword::Comment) => true,
        Some(keyword) => order.has_persist_flag() || is_repeated_keyword(keyword),
    }
}

/// Returns true if the order is suppressed in reports.
#[must_use]
pub fn is_silent(order: &Order) -> bool {
    order.is_quiet()
}

/// All classification results for one order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderClass {
    /// Occupies the long action.
    pub long: bool,
    /// Forbids other long orders.
    pub exclusive: bool,
    /// Repeats automatically.
    pub repeated: bool,
    /// Carried into the template.
    pub persistent: bool,
    /// Suppressed in reports.
    pub silent: bool,
}

/// Classifies an order in every category at once.
#[must_use]
pub fn classify(order: &Order) -> OrderClass {
    OrderClass {
        long: is_long(order),
        exclusive: is_exclusive(order),
        repeated: is_repeated(order),
        persistent: is_persistent(order),
        silent: is_silent(order),
    }
}

impl fmt::Display for OrderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = [
            (self.long, "long"),
            (self.exclusive, "exclusive"),
            (self.repeated, "repeated"),
            (self.persistent, "persistent"),
            (self.silent, "silent"),
        ];
        let mut first = true;
        for (set, tag) in tags {
            if set {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(tag)?;
                first = false;
            }
        }
        if first {
            f.write_str("-")?;
        }
        Ok(())
    }
}
