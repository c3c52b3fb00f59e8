//! The order record.
//!
//! An [`Order`] is one parsed command line: a keyword (or none, for free
//! text), two flags, and a payload. The payload is usually an interned
//! reference into the [`PayloadStore`]; study orders naming a single skill
//! carry the skill inline instead and never touch the store.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use edict_foundation::{Error, Keyword, LocaleId, Result, Skill};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::payload::{PayloadRef, PayloadStore};

/// Low bits of [`Order::command`] holding the keyword index.
pub const KEYWORD_MASK: u32 = 0xFFFF;

/// Bit of [`Order::command`] set for quiet orders.
pub const CMD_QUIET: u32 = 0x1_0000;

/// Bit of [`Order::command`] set for persistent orders.
pub const CMD_PERSIST: u32 = 0x2_0000;

/// Order modifier flags.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderFlags(u8);

impl OrderFlags {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Suppress the order's echo in reports (`!` prefix).
    pub const QUIET: Self = Self(1);
    /// Carry the order into the next turn's template (`@` prefix).
    pub const PERSIST: Self = Self(2);

    /// Builds flags from two booleans.
    #[must_use]
    pub const fn from_bools(persist: bool, quiet: bool) -> Self {
        let mut bits = 0;
        if quiet {
            bits |= Self::QUIET.0;
        }
        if persist {
            bits |= Self::PERSIST.0;
        }
        Self(bits)
    }

    /// Returns true if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the quiet flag is set.
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        self.contains(Self::QUIET)
    }

    /// Returns true if the persist flag is set.
    #[must_use]
    pub const fn is_persist(self) -> bool {
        self.contains(Self::PERSIST)
    }
}

impl BitOr for OrderFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for OrderFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for OrderFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_quiet(), self.is_persist()) {
            (false, false) => write!(f, "OrderFlags(NONE)"),
            (true, false) => write!(f, "OrderFlags(QUIET)"),
            (false, true) => write!(f, "OrderFlags(PERSIST)"),
            (true, true) => write!(f, "OrderFlags(QUIET | PERSIST)"),
        }
    }
}

/// What an order carries after its keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// Nothing at all; only free-text orders with no text end up here.
    None,
    /// Interned parameter text (which may itself be absent).
    Interned(PayloadRef),
    /// A study order naming one skill, stored without an interned record.
    InlineSkill(Skill),
}

impl Payload {
    /// Returns the interned text, if this payload has any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Interned(payload) => payload.text(),
            Self::None | Self::InlineSkill(_) => None,
        }
    }

    /// Returns the interned reference, if any.
    #[must_use]
    pub fn interned(&self) -> Option<&PayloadRef> {
        match self {
            Self::Interned(payload) => Some(payload),
            Self::None | Self::InlineSkill(_) => None,
        }
    }

    /// Returns the inline skill, if any.
    #[must_use]
    pub fn skill(&self) -> Option<Skill> {
        match self {
            Self::InlineSkill(skill) => Some(*skill),
            Self::None | Self::Interned(_) => None,
        }
    }
}

/// One parsed order.
///
/// Cloning an order yields an independent record that holds its own
/// reference to the shared payload. Two orders compare equal when keyword,
/// flags and payload handle all match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    keyword: Option<Keyword>,
    flags: OrderFlags,
    payload: Payload,
}

impl Order {
    /// Assembles an order from its parts.
    ///
    /// # Errors
    ///
    /// Returns an inline skill mismatch if `payload` is an inline skill and
    /// `keyword` is not [`Keyword::Study`].
    pub fn new(keyword: Option<Keyword>, flags: OrderFlags, payload: Payload) -> Result<Self> {
        if matches!(payload, Payload::InlineSkill(_)) && keyword != Some(Keyword::Study) {
            return Err(Error::inline_skill_mismatch(keyword));
        }
        Ok(Self {
            keyword,
            flags,
            payload,
        })
    }

    /// Creates a study order with an inline skill.
    #[must_use]
    pub fn study(skill: Skill, flags: OrderFlags) -> Self {
        Self {
            keyword: Some(Keyword::Study),
            flags,
            payload: Payload::InlineSkill(skill),
        }
    }

    /// Creates a keyword order whose parameter text is interned in `store`.
    #[must_use]
    pub fn with_text(
        keyword: Keyword,
        flags: OrderFlags,
        store: &PayloadStore,
        text: Option<&str>,
        locale: LocaleId,
    ) -> Self {
        Self {
            keyword: Some(keyword),
            flags,
            payload: Payload::Interned(store.intern(text, locale)),
        }
    }

    /// Creates a free-text order with no keyword.
    ///
    /// Blank text yields an order with no payload.
    #[must_use]
    pub fn free_text(store: &PayloadStore, text: &str, locale: LocaleId) -> Self {
        let payload = if text.trim().is_empty() {
            Payload::None
        } else {
            Payload::Interned(store.intern(Some(text), locale))
        };
        Self {
            keyword: None,
            flags: OrderFlags::NONE,
            payload,
        }
    }

    /// Returns the keyword, or `None` for free text.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        self.keyword
    }

    /// Returns the flags.
    #[must_use]
    pub fn flags(&self) -> OrderFlags {
        self.flags
    }

    /// Returns true if the order is quiet.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.flags.is_quiet()
    }

    /// Returns true if the persist flag is set.
    #[must_use]
    pub fn has_persist_flag(&self) -> bool {
        self.flags.is_persist()
    }

    /// Returns the payload.
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the interned parameter text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.payload.text()
    }

    /// Packs keyword and flags into one integer.
    ///
    /// The keyword index sits in the low 16 bits ([`KEYWORD_MASK`] for
    /// free text), with [`CMD_QUIET`] and [`CMD_PERSIST`] above it.
    #[must_use]
    pub fn command(&self) -> u32 {
        let mut command = self.keyword.map_or(KEYWORD_MASK, |kw| u32::from(kw.index()));
        if self.flags.is_quiet() {
            command |= CMD_QUIET;
        }
        if self.flags.is_persist() {
            command |= CMD_PERSIST;
        }
        command
    }

    /// Consumes the order and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

/// Returns the keyword of an optional order; `None` for no order.
#[must_use]
pub fn keyword(order: Option<&Order>) -> Option<Keyword> {
    order.and_then(Order::keyword)
}
