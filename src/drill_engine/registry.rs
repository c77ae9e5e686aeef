//! Game identification from a decklist's card names.
//!
//! A [`GameRegistry`] is an ordered list of predicates. [`GameRegistry::identify`]
//! walks it in registration order and the first predicate that accepts the
//! names decides the game. There is no scoring: a deck that shares
//! fingerprint cards with two games goes to whichever was registered first.

use log::debug;

use crate::drill_engine::models::GameKind;

pub type Predicate = Box<dyn Fn(&[&str]) -> bool + Send + Sync>;

struct Entry {
    label: String,
    predicate: Predicate,
    game: GameKind,
}

#[derive(Default)]
pub struct GameRegistry {
    entries: Vec<Entry>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pokémon, Magic and L5R fingerprints, in that order.
    pub fn with_builtin_games() -> Self {
        let mut registry = Self::new();
        for game in [GameKind::Pokemon, GameKind::Magic, GameKind::L5r] {
            let rules = game.rules();
            registry.register(rules.short_name, fingerprint(rules.fingerprint.iter().copied()), game);
        }
        registry
    }

    pub fn register(&mut self, label: impl Into<String>, predicate: Predicate, game: GameKind) {
        self.entries.push(Entry { label: label.into(), predicate, game });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// First registered match, or `GameKind::Generic`.
    pub fn identify(&self, card_names: &[&str]) -> GameKind {
        match self.entries.iter().find(|e| (e.predicate)(card_names)) {
            Some(entry) => {
                debug!("Identified deck as {} via {}", entry.game, entry.label);
                entry.game
            }
            None => {
                debug!("No fingerprint matched {} cards", card_names.len());
                GameKind::Generic
            }
        }
    }
}

/// A predicate that accepts any decklist containing one of `names`,
/// ignoring case.
pub fn fingerprint<I, S>(names: I) -> Predicate
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    Box::new(move |cards: &[&str]| {
        cards
            .iter()
            .any(|card| names.iter().any(|n| n.eq_ignore_ascii_case(card.trim())))
    })
}
