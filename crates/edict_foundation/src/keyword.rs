//! Command keywords.
//!
//! A [`Keyword`] is the abstract verb of an order. The words players type
//! for it depend on the locale; see [`crate::locale`]. The absence of a
//! keyword (free text, comments kept verbatim) is modelled as
//! `Option<Keyword>::None` throughout the workspace.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Abstract command verb.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[allow(missing_docs)]
pub enum Keyword {
    Comment,
    Banner,
    Work,
    Attack,
    Steal,
    Besiege,
    Name,
    Use,
    Display,
    Enter,
    Guard,
    Mail,
    End,
    Drive,
    Number,
    Follow,
    Research,
    Give,
    Ally,
    Status,
    CombatSpell,
    Buy,
    Contact,
    Teach,
    Study,
    Make,
    /// "make temp": creates a temporary unit. Never typed as a single word.
    MakeTemp,
    Move,
    Password,
    Recruit,
    Reserve,
    Route,
    Sabotage,
    Send,
    Spy,
    Quit,
    SetStealth,
    Transport,
    Tax,
    Entertain,
    Sell,
    Leave,
    Forget,
    Cast,
    Show,
    Destroy,
    Grow,
    Plant,
    Default,
    Origin,
    Email,
    Piracy,
    Group,
    Sort,
    Prefix,
    Alliance,
    Claim,
    Promotion,
    Pay,
    Loot,
}

impl Keyword {
    /// Every keyword, in index order.
    pub const ALL: [Keyword; 60] = [
        Self::Comment,
        Self::Banner,
        Self::Work,
        Self::Attack,
        Self::Steal,
        Self::Besiege,
        Self::Name,
        Self::Use,
        Self::Display,
        Self::Enter,
        Self::Guard,
        Self::Mail,
        Self::End,
        Self::Drive,
        Self::Number,
        Self::Follow,
        Self::Research,
        Self::Give,
        Self::Ally,
        Self::Status,
        Self::CombatSpell,
        Self::Buy,
        Self::Contact,
        Self::Teach,
        Self::Study,
        Self::Make,
        Self::MakeTemp,
        Self::Move,
        Self::Password,
        Self::Recruit,
        Self::Reserve,
        Self::Route,
        Self::Sabotage,
        Self::Send,
        Self::Spy,
        Self::Quit,
        Self::SetStealth,
        Self::Transport,
        Self::Tax,
        Self::Entertain,
        Self::Sell,
        Self::Leave,
        Self::Forget,
        Self::Cast,
        Self::Show,
        Self::Destroy,
        Self::Grow,
        Self::Plant,
        Self::Default,
        Self::Origin,
        Self::Email,
        Self::Piracy,
        Self::Group,
        Self::Sort,
        Self::Prefix,
        Self::Alliance,
        Self::Claim,
        Self::Promotion,
        Self::Pay,
        Self::Loot,
    ];

    /// Returns the stable numeric index of this keyword.
    #[must_use]
    pub const fn index(self) -> u16 {
        self as u16
    }

    /// Looks a keyword up by its stable index.
    #[must_use]
    pub fn from_index(index: u16) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Returns the canonical, locale-independent name (e.g. `"combat-spell"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Banner => "banner",
            Self::Work => "work",
            Self::Attack => "attack",
            Self::Steal => "steal",
            Self::Besiege => "besiege",
            Self::Name => "name",
            Self::Use => "use",
            Self::Display => "describe",
            Self::Enter => "enter",
            Self::Guard => "guard",
            Self::Mail => "message",
            Self::End => "end",
            Self::Drive => "ride",
            Self::Number => "number",
            Self::Follow => "follow",
            Self::Research => "research",
            Self::Give => "give",
            Self::Ally => "help",
            Self::Status => "combat",
            Self::CombatSpell => "combat-spell",
            Self::Buy => "buy",
            Self::Contact => "contact",
            Self::Teach => "teach",
            Self::Study => "study",
            Self::Make => "make",
            Self::MakeTemp => "make-temp",
            Self::Move => "move",
            Self::Password => "password",
            Self::Recruit => "recruit",
            Self::Reserve => "reserve",
            Self::Route => "route",
            Self::Sabotage => "sabotage",
            Self::Send => "option",
            Self::Spy => "spy",
            Self::Quit => "quit",
            Self::SetStealth => "hide",
            Self::Transport => "carry",
            Self::Tax => "tax",
            Self::Entertain => "entertain",
            Self::Sell => "sell",
            Self::Leave => "leave",
            Self::Forget => "forget",
            Self::Cast => "cast",
            Self::Show => "show",
            Self::Destroy => "destroy",
            Self::Grow => "grow",
            Self::Plant => "plant",
            Self::Default => "default",
            Self::Origin => "origin",
            Self::Email => "email",
            Self::Piracy => "piracy",
            Self::Group => "group",
            Self::Sort => "sort",
            Self::Prefix => "prefix",
            Self::Alliance => "alliance",
            Self::Claim => "claim",
            Self::Promotion => "promote",
            Self::Pay => "pay",
            Self::Loot => "loot",
        }
    }

    /// Looks a keyword up by its canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kw| kw.name() == name)
    }

    /// Returns true if players can type this keyword as a single word.
    ///
    /// [`Keyword::MakeTemp`] is only reachable as "make" followed by the
    /// temp parameter, so locales never register a lookup word for it.
    #[must_use]
    pub const fn is_typable(self) -> bool {
        !matches!(self, Self::MakeTemp)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
