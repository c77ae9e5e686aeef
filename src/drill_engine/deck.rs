use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    error::{DrillError, Result},
    games::GameRules,
    models::GameKind,
    registry::GameRegistry,
};

/// One distinct card in a deck and how many copies of it the deck holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub count: u32,
}

impl Card {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Card { name: name.into(), count }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} copies of a card named {}", self.count, self.name)
    }
}

/// An ordered decklist for one game.
///
/// Deserializing goes through [`Deck::for_game`], so a stored deck is
/// checked the same way as a freshly built one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckData")]
pub struct Deck {
    cards: Vec<Card>,
    game: GameKind,
}

/// Unchecked wire form of a [`Deck`].
#[derive(Deserialize)]
struct DeckData {
    cards: Vec<Card>,
    #[serde(default)]
    game: GameKind,
}

impl TryFrom<DeckData> for Deck {
    type Error = DrillError;

    fn try_from(data: DeckData) -> Result<Self> {
        Deck::for_game(data.cards, data.game)
    }
}

impl Deck {
    /// A deck for an unidentified game.
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        Self::for_game(cards, GameKind::Generic)
    }

    /// Every count must be positive, every name unique, and the total must
    /// fit in a `u32`.
    pub fn for_game(cards: Vec<Card>, game: GameKind) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut total: u32 = 0;
        for card in &cards {
            if card.count == 0 {
                return Err(DrillError::InvalidDeck(format!("{} has zero copies", card.name)));
            }
            if !seen.insert(card.name.as_str()) {
                return Err(DrillError::InvalidDeck(format!("{} is listed twice", card.name)));
            }
            total = total.checked_add(card.count).ok_or_else(|| {
                DrillError::InvalidDeck(format!("too many cards once {} is counted", card.name))
            })?;
        }
        Ok(Deck { cards, game })
    }

    /// Build a deck for whichever game `registry` recognises in `cards`.
    pub fn identify(cards: Vec<Card>, registry: &GameRegistry) -> Result<Self> {
        let game = {
            let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
            registry.identify(&names)
        };
        Self::for_game(cards, game)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.name == name)
    }

    pub fn game(&self) -> GameKind {
        self.game
    }

    pub fn rules(&self) -> &'static GameRules {
        self.game.rules()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total number of cards, counting every copy. Construction keeps this
    /// within `u32`.
    pub fn size(&self) -> u32 {
        self.cards.iter().map(|c| c.count).sum()
    }

    /// Smallest copy count that occurs most often across distinct cards.
    pub fn mode_copies(&self) -> Result<u32> {
        let mut freq: HashMap<u32, usize> = HashMap::new();
        for card in &self.cards {
            *freq.entry(card.count).or_default() += 1;
        }
        freq.into_iter()
            .max_by(|(count_a, n_a), (count_b, n_b)| n_a.cmp(n_b).then(count_b.cmp(count_a)))
            .map(|(count, _)| count)
            .ok_or_else(|| DrillError::InvalidParameters("mode of an empty deck".into()))
    }

    /// Median of the per-card copy counts (one value per distinct card).
    pub fn median_copies(&self) -> Result<f64> {
        let mut counts: Vec<u32> = self.cards.iter().map(|c| c.count).collect();
        if counts.is_empty() {
            return Err(DrillError::InvalidParameters("median of an empty deck".into()));
        }
        counts.sort_unstable();
        let mid = counts.len() / 2;
        let median = if counts.len() % 2 == 0 {
            (f64::from(counts[mid - 1]) + f64::from(counts[mid])) / 2.0
        } else {
            f64::from(counts[mid])
        };
        Ok(median)
    }

    /// Distinct cards after folding the game's name variants together.
    pub fn unique_cards(&self) -> Result<usize> {
        let rules = self.rules();
        let mut names = HashSet::new();
        for card in &self.cards {
            names.insert(rules.canonical_name(&card.name)?.to_lowercase());
        }
        Ok(names.len())
    }

    /// Size and copy-limit check for `format`. Card-pool legality (allowed
    /// sets, banned lists) is not checked.
    pub fn is_legal(&self, format: &str) -> Result<bool> {
        let rules = self.rules();
        if rules.formats.is_empty() {
            return Err(DrillError::NotImplemented(format!("deck legality for {}", rules.name)));
        }
        let fmt_rules = rules.format(format).ok_or_else(|| {
            DrillError::InvalidParameters(format!("{} has no format named {format}", rules.name))
        })?;

        let size = self.size();
        if size < fmt_rules.min_size || fmt_rules.max_size.is_some_and(|max| size > max) {
            return Ok(false);
        }
        let Some(limit) = fmt_rules.max_copies.or(rules.max_copies) else {
            return Ok(true);
        };
        Ok(self
            .cards
            .iter()
            .all(|c| c.count <= limit || rules.is_exempt(&c.name)))
    }

    /// Take one copy of `name` out of the deck. Cards are never dropped from
    /// the list, so a card can reach zero copies here.
    pub(crate) fn remove_copy(&mut self, name: &str) -> Result<()> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.name == name && c.count > 0)
            .ok_or_else(|| DrillError::InvalidParameters(format!("no copy of {name} left to remove")))?;
        card.count -= 1;
        Ok(())
    }
}
