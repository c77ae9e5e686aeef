use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::drill_engine::deck::Card;
use crate::drill_engine::error::DrillError;

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// Which game a deck belongs to. `Generic` is the fallback for decks the
/// registry cannot place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    #[default]
    Generic,
    Magic,
    Pokemon,
    L5r,
    ChaosInTheOldWorld,
    RaceForTheGalaxy,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rules().name)
    }
}

// ---------------------------------------------------------------------------
// Question kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    CopiesInFullDeck,
    CopiesInOpeningHand,
    CopiesInTopFive,
    MostLikelyTopCard,
    /// Never part of a catalogue; generating it reports `NotImplemented`.
    AverageDrawsUntilCopy,
    BasicLandsInDeck,
    BasicEnergyInOpeningHand,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 7] = [
        QuestionKind::CopiesInFullDeck,
        QuestionKind::CopiesInOpeningHand,
        QuestionKind::CopiesInTopFive,
        QuestionKind::MostLikelyTopCard,
        QuestionKind::AverageDrawsUntilCopy,
        QuestionKind::BasicLandsInDeck,
        QuestionKind::BasicEnergyInOpeningHand,
    ];

    /// Stable machine id, e.g. for storing the last question in a session.
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::CopiesInFullDeck         => "copies_in_full_deck",
            QuestionKind::CopiesInOpeningHand      => "copies_in_opening_hand",
            QuestionKind::CopiesInTopFive          => "copies_in_top_five",
            QuestionKind::MostLikelyTopCard        => "most_likely_top_card",
            QuestionKind::AverageDrawsUntilCopy    => "average_draws_until_copy",
            QuestionKind::BasicLandsInDeck         => "basic_lands_in_deck",
            QuestionKind::BasicEnergyInOpeningHand => "basic_energy_in_opening_hand",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionKind::CopiesInFullDeck         => "Copies in Full Deck",
            QuestionKind::CopiesInOpeningHand      => "Copies in Opening Hand",
            QuestionKind::CopiesInTopFive          => "Copies in Top Five",
            QuestionKind::MostLikelyTopCard        => "Most Likely Top Card",
            QuestionKind::AverageDrawsUntilCopy    => "Average Draws Until Copy",
            QuestionKind::BasicLandsInDeck         => "Basic Lands in Deck",
            QuestionKind::BasicEnergyInOpeningHand => "Basic Energy in Opening Hand",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for QuestionKind {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DrillError::InvalidParameters(format!("unknown question kind: {s}")))
    }
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    Count(u32),
    /// A percentage already formatted with exactly two decimals.
    Percent(String),
    Name(String),
}

impl Answer {
    pub fn percent(value: f64) -> Self {
        Answer::Percent(format!("{value:.2}"))
    }

    /// Compare a submitted answer against this one.
    ///
    /// Numbers compare by value (`"4"` matches `Count(4)`, `"95.170"` and
    /// `"95.17%"` match `Percent("95.17")`); names ignore case and
    /// surrounding whitespace.
    pub fn matches(&self, given: &str) -> bool {
        let given = given.trim();
        match self {
            Answer::Count(n) => given
                .parse::<f64>()
                .map(|v| v == f64::from(*n))
                .unwrap_or(false),
            Answer::Percent(s) => given
                .trim_end_matches('%')
                .trim()
                .parse::<f64>()
                .map(|v| format!("{v:.2}") == *s)
                .unwrap_or(false),
            Answer::Name(name) => name.trim().to_lowercase() == given.to_lowercase(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Count(n)   => write!(f, "{n}"),
            Answer::Percent(s) => write!(f, "{s}"),
            Answer::Name(s)    => write!(f, "{s}"),
        }
    }
}

/// What a question is about: one card, or a description such as
/// "basic lands".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject {
    Card(Card),
    Description(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Card(card)     => write!(f, "{}", card.name),
            Subject::Description(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// How `copies_in_full_deck` builds its wrong answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountSpread {
    /// `0..5` for small counts, otherwise `count-2..count+3`.
    #[default]
    Window,
    /// Count-flavor distractors anchored on the deck's mode and median.
    Distractors,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionParams {
    /// Opening hand size; `None` uses the game's default.
    pub hand_size: Option<u32>,
    pub spread: CountSpread,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillRequest {
    /// `None` picks from the deck's catalogue.
    pub question: Option<QuestionKind>,
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub params: QuestionParams,
}

impl DrillRequest {
    /// Random question, entropy seed, default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_question(mut self, kind: QuestionKind) -> Self {
        self.question = Some(kind);
        self
    }

    pub fn with_hand_size(mut self, hand_size: u32) -> Self {
        self.params.hand_size = Some(hand_size);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub kind: QuestionKind,
    pub question: String,
    /// Keep this server-side; it must not be sent with the question.
    pub correct: Answer,
    /// Shown to the player. Contains `correct` exactly once.
    pub candidates: Vec<Answer>,
    /// Appended to every candidate when displayed, e.g. "percent".
    pub suffix: String,
    pub subject: Subject,
}

impl QuestionResult {
    pub fn is_correct(&self, given: &str) -> bool {
        self.correct.matches(given)
    }
}
