//! Per-game rules data.
//!
//! Every game is described by one static [`GameRules`] record instead of its
//! own deck/card/question types. Decks carry a [`GameKind`] and look their
//! rules up here; the catalogue appends `extra_questions` to the generic pool.

use crate::drill_engine::{
    error::{DrillError, Result},
    models::{GameKind, QuestionKind},
};

pub const DEFAULT_OPENING_HAND: u32 = 7;

/// Deck-construction limits for one format of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRules {
    pub name: &'static str,
    pub min_size: u32,
    pub max_size: Option<u32>,
    /// Overrides the game's `max_copies` (e.g. singleton formats).
    pub max_copies: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
pub struct GameRules {
    pub kind: GameKind,
    pub name: &'static str,
    pub short_name: &'static str,
    /// Legal copies of a single non-exempt card.
    pub max_copies: Option<u32>,
    /// Basic lands / basic energy.
    pub basics: &'static [&'static str],
    pub max_copies_exempt: &'static [&'static str],
    /// Card names unique enough to tell a decklist belongs to this game.
    pub fingerprint: &'static [&'static str],
    pub opening_hand: u32,
    pub formats: &'static [FormatRules],
    pub extra_questions: &'static [QuestionKind],
    canonical: Option<fn(&str) -> String>,
}

impl GameRules {
    pub fn is_basic(&self, name: &str) -> bool {
        contains_ignore_case(self.basics, name)
    }

    pub fn is_exempt(&self, name: &str) -> bool {
        contains_ignore_case(self.max_copies_exempt, name)
    }

    /// The name the game itself uses for a card, folding variants that count
    /// as the same card (double-faced cards, EX suffixes, ...).
    pub fn canonical_name(&self, name: &str) -> Result<String> {
        match self.canonical {
            Some(canonical) => Ok(canonical(name)),
            None => Err(DrillError::NotImplemented(format!(
                "canonical card names for {}",
                self.name
            ))),
        }
    }

    pub fn format(&self, name: &str) -> Option<&'static FormatRules> {
        self.formats.iter().find(|f| f.name.eq_ignore_ascii_case(name.trim()))
    }
}

fn contains_ignore_case(list: &[&str], name: &str) -> bool {
    let name = name.trim();
    list.iter().any(|n| n.eq_ignore_ascii_case(name))
}

/// Front face of a double-faced card: "Delver of Secrets // Insectile
/// Aberration" is "Delver of Secrets".
fn magic_canonical(name: &str) -> String {
    name.split("//").next().unwrap_or(name).trim().to_string()
}

fn pokemon_canonical(name: &str) -> String {
    let name = name.trim();
    [" EX", " ex", "-EX"]
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
        .trim()
        .to_string()
}

// ---------------------------------------------------------------------------
// Rules tables
// ---------------------------------------------------------------------------

const MAGIC_BASICS: &[&str] = &[
    "Plains", "Island", "Swamp", "Mountain", "Forest",
    "Snow-covered Plains", "Snow-covered Island", "Snow-covered Swamp",
    "Snow-covered Mountain", "Snow-covered Forest",
];

const MAGIC_UNLIMITED: &[&str] = &[
    "Plains", "Island", "Swamp", "Mountain", "Forest",
    "Snow-covered Plains", "Snow-covered Island", "Snow-covered Swamp",
    "Snow-covered Mountain", "Snow-covered Forest", "Relentless Rats",
];

const POKEMON_BASICS: &[&str] = &[
    "Darkness Energy", "Fighting Energy", "Fire Energy", "Grass Energy",
    "Lightning Energy", "Metal Energy", "Psychic Energy", "Water Energy",
];

const POKEMON_UNLIMITED: &[&str] = &[
    "Darkness Energy", "Fighting Energy", "Fire Energy", "Grass Energy",
    "Lightning Energy", "Metal Energy", "Psychic Energy", "Water Energy",
    "Arceus",
];

const L5R_FINGERPRINT: &[&str] = &[
    "Gifts and Favors", "A Favor Returned", "Copper Mine", "Iron Mine",
    "Gold Mine", "Obsidian Mine", "Kobune Port", "Geisha House",
    "Marketplace", "Silver Mine", "Silk Works", "Stables", "Treasure Hoard",
];

const fn constructed(name: &'static str, min_size: u32) -> FormatRules {
    FormatRules { name, min_size, max_size: None, max_copies: None }
}

const MAGIC_FORMATS: &[FormatRules] = &[
    constructed("standard", 60),
    constructed("modern", 60),
    constructed("legacy", 60),
    constructed("vintage", 60),
    constructed("extended", 60),
    constructed("block", 60),
    FormatRules { name: "commander", min_size: 100, max_size: Some(100), max_copies: Some(1) },
    constructed("unglued", 40),
];

const POKEMON_FORMATS: &[FormatRules] = &[
    FormatRules { name: "standard", min_size: 60, max_size: Some(60), max_copies: None },
    FormatRules { name: "unlimited", min_size: 60, max_size: Some(60), max_copies: None },
];

const L5R_FORMATS: &[FormatRules] = &[constructed("open", 40)];

static GENERIC: GameRules = GameRules {
    kind: GameKind::Generic,
    name: "Unknown Game",
    short_name: "generic",
    max_copies: None,
    basics: &[],
    max_copies_exempt: &[],
    fingerprint: &[],
    opening_hand: DEFAULT_OPENING_HAND,
    formats: &[],
    extra_questions: &[],
    canonical: None,
};

static MAGIC: GameRules = GameRules {
    kind: GameKind::Magic,
    name: "Magic: the Gathering",
    short_name: "magicthegathering",
    max_copies: Some(4),
    basics: MAGIC_BASICS,
    max_copies_exempt: MAGIC_UNLIMITED,
    fingerprint: MAGIC_UNLIMITED,
    opening_hand: 7,
    formats: MAGIC_FORMATS,
    extra_questions: &[QuestionKind::BasicLandsInDeck],
    canonical: Some(magic_canonical),
};

static POKEMON: GameRules = GameRules {
    kind: GameKind::Pokemon,
    name: "Pok\u{e9}mon",
    short_name: "pokemon",
    max_copies: Some(4),
    basics: POKEMON_BASICS,
    max_copies_exempt: POKEMON_UNLIMITED,
    fingerprint: POKEMON_UNLIMITED,
    opening_hand: 7,
    formats: POKEMON_FORMATS,
    extra_questions: &[QuestionKind::BasicEnergyInOpeningHand],
    canonical: Some(pokemon_canonical),
};

static L5R: GameRules = GameRules {
    kind: GameKind::L5r,
    name: "Legend of the Five Rings",
    short_name: "l5r",
    max_copies: Some(3),
    basics: &[],
    max_copies_exempt: &[],
    fingerprint: L5R_FINGERPRINT,
    opening_hand: 7,
    formats: L5R_FORMATS,
    extra_questions: &[],
    canonical: None,
};

// Fixed-list games: decks come out of the box, so there is nothing to
// validate and no fingerprint to register.
static CITOW: GameRules = GameRules {
    kind: GameKind::ChaosInTheOldWorld,
    name: "Chaos in the Old World",
    short_name: "citow",
    max_copies: None,
    basics: &[],
    max_copies_exempt: &[],
    fingerprint: &[],
    opening_hand: 5,
    formats: &[],
    extra_questions: &[],
    canonical: None,
};

static RFTG: GameRules = GameRules {
    kind: GameKind::RaceForTheGalaxy,
    name: "Race for the Galaxy",
    short_name: "rftg",
    max_copies: None,
    basics: &[],
    max_copies_exempt: &[],
    fingerprint: &[],
    opening_hand: 6,
    formats: &[],
    extra_questions: &[],
    canonical: None,
};

impl GameKind {
    pub fn rules(self) -> &'static GameRules {
        match self {
            GameKind::Generic            => &GENERIC,
            GameKind::Magic              => &MAGIC,
            GameKind::Pokemon            => &POKEMON,
            GameKind::L5r                => &L5R,
            GameKind::ChaosInTheOldWorld => &CITOW,
            GameKind::RaceForTheGalaxy   => &RFTG,
        }
    }
}
