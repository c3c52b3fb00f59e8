//! Locale word tables.
//!
//! The order core never hard-codes command words. It asks a [`Lexicon`]
//! which keyword, skill or parameter a word names, and how to spell a
//! keyword or skill back out. [`Locale`] is the table-driven implementation
//! shipped with the crate, with built-in English and German tables.
//!
//! Lookup is case-insensitive. An exact match wins; otherwise a word
//! resolves if it is a prefix of known words that all name the same thing,
//! so players may abbreviate (`gu` for `guard`). Ambiguous prefixes
//! resolve to nothing.

use std::borrow::Cow;
use std::fmt;

use im::{OrdMap, OrdSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::keyword::Keyword;
use crate::skill::Skill;

/// Identifies a locale.
///
/// Payload records keep a `LocaleId` rather than a reference so that
/// interned text never keeps a locale alive.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocaleId(u16);

impl LocaleId {
    /// Creates a locale id from its raw value.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocaleId({})", self.0)
    }
}

/// Reserved parameter words recognised by the order parser itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Param {
    /// Marks a temporary unit, as in "make temp 1".
    Temp,
}

/// Word tables consumed by the order parser and formatter.
pub trait Lexicon {
    /// The id recorded on payloads interned under this lexicon.
    fn id(&self) -> LocaleId;

    /// Resolves a typed word to a keyword.
    fn lookup_keyword(&self, word: &str) -> Option<Keyword>;

    /// Spells a keyword out in full.
    fn keyword_text(&self, keyword: Keyword) -> Cow<'_, str>;

    /// Returns true if orders with this keyword are switched off.
    fn is_disabled(&self, keyword: Keyword) -> bool;

    /// Resolves a typed word to a skill.
    fn lookup_skill(&self, word: &str) -> Option<Skill>;

    /// Spells a skill out in full.
    fn skill_name(&self, skill: Skill) -> Cow<'_, str>;

    /// Returns true if `word` names the given reserved parameter.
    fn is_param(&self, word: &str, param: Param) -> bool;
}

/// A table-driven [`Lexicon`].
///
/// Tables are persistent maps, so cloning a locale to derive a variant
/// (extra aliases, disabled keywords) shares structure with its base.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Locale {
    id: LocaleId,
    name: String,
    /// Lowercased lookup word -> keyword.
    keyword_words: OrdMap<String, Keyword>,
    /// Output spelling per keyword.
    keyword_names: OrdMap<Keyword, String>,
    skill_words: OrdMap<String, Skill>,
    skill_names: OrdMap<Skill, String>,
    param_words: OrdMap<String, Param>,
    param_names: OrdMap<Param, String>,
    disabled: OrdSet<Keyword>,
}

impl Locale {
    /// Creates an empty locale.
    #[must_use]
    pub fn new(id: LocaleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            keyword_words: OrdMap::new(),
            keyword_names: OrdMap::new(),
            skill_words: OrdMap::new(),
            skill_names: OrdMap::new(),
            param_words: OrdMap::new(),
            param_names: OrdMap::new(),
            disabled: OrdSet::new(),
        }
    }

    /// Returns the locale's short name (e.g. `"en"`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers `word` for `keyword`.
    ///
    /// The first word registered for a keyword becomes its output spelling.
    /// Untypable keywords only receive an output spelling.
    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword, word: &str) -> Self {
        if !self.keyword_names.contains_key(&keyword) {
            self.keyword_names.insert(keyword, word.to_string());
        }
        if keyword.is_typable() {
            self.keyword_words.insert(word.to_lowercase(), keyword);
        }
        self
    }

    /// Registers `word` for `skill`. The first word becomes its output spelling.
    #[must_use]
    pub fn with_skill(mut self, skill: Skill, word: &str) -> Self {
        if !self.skill_names.contains_key(&skill) {
            self.skill_names.insert(skill, word.to_string());
        }
        self.skill_words.insert(word.to_lowercase(), skill);
        self
    }

    /// Registers `word` for a reserved parameter.
    #[must_use]
    pub fn with_param(mut self, param: Param, word: &str) -> Self {
        if !self.param_names.contains_key(&param) {
            self.param_names.insert(param, word.to_string());
        }
        self.param_words.insert(word.to_lowercase(), param);
        self
    }

    /// Switches a keyword off; parsing it yields no order.
    #[must_use]
    pub fn with_disabled(mut self, keyword: Keyword) -> Self {
        self.disabled.insert(keyword);
        self
    }

    /// Returns every keyword lookup word, for completion lists.
    #[must_use]
    pub fn keyword_words(&self) -> Vec<String> {
        self.keyword_words.keys().cloned().collect()
    }

    /// The built-in English tables.
    #[must_use]
    pub fn english() -> Self {
        let mut locale = Self::new(LocaleId::new(0), "en");
        for kw in Keyword::ALL {
            if kw.is_typable() {
                locale = locale.with_keyword(kw, &kw.name().replace('-', ""));
            }
        }
        for sk in Skill::ALL {
            locale = locale.with_skill(sk, sk.name());
        }
        locale
            .with_keyword(Keyword::Comment, "//")
            .with_param(Param::Temp, "temp")
    }

    /// The built-in German tables.
    #[must_use]
    pub fn german() -> Self {
        const KEYWORDS: [(Keyword, &str); 59] = [
            (Keyword::Comment, "KOMMENTAR"),
            (Keyword::Banner, "BANNER"),
            (Keyword::Work, "ARBEITE"),
            (Keyword::Attack, "ATTACKIERE"),
            (Keyword::Steal, "BEKLAUE"),
            (Keyword::Besiege, "BELAGERE"),
            (Keyword::Name, "BENENNE"),
            (Keyword::Use, "BENUTZE"),
            (Keyword::Display, "BESCHREIBE"),
            (Keyword::Enter, "BETRETE"),
            (Keyword::Guard, "BEWACHE"),
            (Keyword::Mail, "BOTSCHAFT"),
            (Keyword::End, "ENDE"),
            (Keyword::Drive, "FAHRE"),
            (Keyword::Number, "NUMMER"),
            (Keyword::Follow, "FOLGE"),
            (Keyword::Research, "FORSCHE"),
            (Keyword::Give, "GIB"),
            (Keyword::Ally, "HELFE"),
            (Keyword::Status, "KÄMPFE"),
            (Keyword::CombatSpell, "KAMPFZAUBER"),
            (Keyword::Buy, "KAUFE"),
            (Keyword::Contact, "KONTAKTIERE"),
            (Keyword::Teach, "LEHRE"),
            (Keyword::Study, "LERNE"),
            (Keyword::Make, "MACHE"),
            (Keyword::Move, "NACH"),
            (Keyword::Password, "PASSWORT"),
            (Keyword::Recruit, "REKRUTIERE"),
            (Keyword::Reserve, "RESERVIERE"),
            (Keyword::Route, "ROUTE"),
            (Keyword::Sabotage, "SABOTIERE"),
            (Keyword::Send, "OPTION"),
            (Keyword::Spy, "SPIONIERE"),
            (Keyword::Quit, "STIRB"),
            (Keyword::SetStealth, "TARNE"),
            (Keyword::Transport, "TRANSPORTIERE"),
            (Keyword::Tax, "TREIBE"),
            (Keyword::Entertain, "UNTERHALTE"),
            (Keyword::Sell, "VERKAUFE"),
            (Keyword::Leave, "VERLASSE"),
            (Keyword::Forget, "VERGISS"),
            (Keyword::Cast, "ZAUBERE"),
            (Keyword::Show, "ZEIGE"),
            (Keyword::Destroy, "ZERSTÖRE"),
            (Keyword::Grow, "ZÜCHTE"),
            (Keyword::Plant, "PFLANZE"),
            (Keyword::Default, "DEFAULT"),
            (Keyword::Origin, "URSPRUNG"),
            (Keyword::Email, "EMAIL"),
            (Keyword::Piracy, "PIRATERIE"),
            (Keyword::Group, "GRUPPE"),
            (Keyword::Sort, "SORTIERE"),
            (Keyword::Prefix, "PRÄFIX"),
            (Keyword::Alliance, "ALLIANZ"),
            (Keyword::Claim, "BEANSPRUCHE"),
            (Keyword::Promotion, "BEFÖRDERE"),
            (Keyword::Pay, "BEZAHLE"),
            (Keyword::Loot, "PLÜNDERE"),
        ];
        const SKILLS: [(Skill, &str); Skill::COUNT] = [
            (Skill::Alchemy, "Alchemie"),
            (Skill::Crossbow, "Armbrustschießen"),
            (Skill::Mining, "Bergbau"),
            (Skill::Bow, "Bogenschießen"),
            (Skill::Building, "Burgenbau"),
            (Skill::Trade, "Handeln"),
            (Skill::Forestry, "Holzfällen"),
            (Skill::Catapult, "Katapultbedienung"),
            (Skill::Herbalism, "Kräuterkunde"),
            (Skill::Magic, "Magie"),
            (Skill::Riding, "Reiten"),
            (Skill::Armorer, "Rüstungsbau"),
            (Skill::Shipcraft, "Schiffbau"),
            (Skill::Melee, "Hiebwaffen"),
            (Skill::Sailing, "Segeln"),
            (Skill::Polearm, "Stangenwaffen"),
            (Skill::Espionage, "Spionage"),
            (Skill::Quarrying, "Steinbau"),
            (Skill::Roadwork, "Straßenbau"),
            (Skill::Tactics, "Taktik"),
            (Skill::Stealth, "Tarnung"),
            (Skill::Entertainment, "Unterhaltung"),
            (Skill::Weaponsmithing, "Waffenbau"),
            (Skill::Cartmaking, "Wagenbau"),
            (Skill::Perception, "Wahrnehmung"),
            (Skill::Taxation, "Steuereintreiben"),
            (Skill::Stamina, "Ausdauer"),
            (Skill::Unarmed, "Waffenloser Kampf"),
        ];

        let mut locale = Self::new(LocaleId::new(1), "de");
        for (kw, word) in KEYWORDS {
            locale = locale.with_keyword(kw, word);
        }
        for (sk, word) in SKILLS {
            locale = locale.with_skill(sk, word);
        }
        locale
            .with_keyword(Keyword::Comment, "//")
            .with_param(Param::Temp, "TEMP")
    }
}

/// Resolves `word` against a lowercased word table, allowing unique prefixes.
fn resolve<V: Copy + PartialEq>(table: &OrdMap<String, V>, word: &str) -> Option<V> {
    let key = word.to_lowercase();
    if key.is_empty() {
        return None;
    }
    if let Some(value) = table.get(&key) {
        return Some(*value);
    }

    let mut found = None;
    for (candidate, value) in table.range(key.clone()..) {
        if !candidate.starts_with(&key) {
            break;
        }
        match found {
            None => found = Some(*value),
            Some(previous) if previous == *value => {}
            Some(_) => return None,
        }
    }
    found
}

impl Lexicon for Locale {
    fn id(&self) -> LocaleId {
        self.id
    }

    fn lookup_keyword(&self, word: &str) -> Option<Keyword> {
        resolve(&self.keyword_words, word)
    }

    fn keyword_text(&self, keyword: Keyword) -> Cow<'_, str> {
        if let Some(name) = self.keyword_names.get(&keyword) {
            return Cow::Borrowed(name.as_str());
        }
        if keyword == Keyword::MakeTemp {
            let make = self.keyword_text(Keyword::Make);
            let temp = self
                .param_names
                .get(&Param::Temp)
                .map_or("temp", String::as_str);
            return Cow::Owned(format!("{make} {temp}"));
        }
        Cow::Borrowed(keyword.name())
    }

    fn is_disabled(&self, keyword: Keyword) -> bool {
        self.disabled.contains(&keyword)
    }

    fn lookup_skill(&self, word: &str) -> Option<Skill> {
        resolve(&self.skill_words, word)
    }

    fn skill_name(&self, skill: Skill) -> Cow<'_, str> {
        self.skill_names
            .get(&skill)
            .map_or(Cow::Borrowed(skill.name()), |name| Cow::Borrowed(name.as_str()))
    }

    fn is_param(&self, word: &str, param: Param) -> bool {
        resolve(&self.param_words, word) == Some(param)
    }
}
