//! Which questions can be asked about a deck, and dispatch to their
//! generators.

use rand::{seq::SliceRandom, Rng};

use crate::drill_engine::{
    deck::Deck,
    error::{DrillError, Result},
    models::{GameKind, QuestionKind, QuestionParams, QuestionResult},
    questions,
};

/// Asked about every deck, whatever the game.
pub const GENERIC_QUESTIONS: &[QuestionKind] = &[
    QuestionKind::CopiesInFullDeck,
    QuestionKind::CopiesInOpeningHand,
    QuestionKind::CopiesInTopFive,
    QuestionKind::MostLikelyTopCard,
];

/// The generic questions followed by the game's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    game: GameKind,
    questions: Vec<QuestionKind>,
}

impl Catalogue {
    pub fn for_game(game: GameKind) -> Self {
        let mut questions = GENERIC_QUESTIONS.to_vec();
        questions.extend_from_slice(game.rules().extra_questions);
        Catalogue { game, questions }
    }

    pub fn game(&self) -> GameKind {
        self.game
    }

    pub fn questions(&self) -> &[QuestionKind] {
        &self.questions
    }

    pub fn contains(&self, kind: QuestionKind) -> bool {
        self.questions.contains(&kind)
    }

    /// Uniform pick. A catalogue always holds the generic questions, so it
    /// is never empty.
    pub fn choose_question<R: Rng>(&self, rng: &mut R) -> QuestionKind {
        self.questions
            .choose(rng)
            .copied()
            .unwrap_or(QuestionKind::CopiesInFullDeck)
    }
}

impl QuestionKind {
    /// Run this kind's generator.
    pub fn generate<R: Rng>(
        self,
        deck: &Deck,
        params: &QuestionParams,
        rng: &mut R,
    ) -> Result<QuestionResult> {
        match self {
            QuestionKind::CopiesInFullDeck =>
                questions::copies::copies_in_full_deck(deck, params, rng),

            QuestionKind::CopiesInOpeningHand =>
                questions::copies::copies_in_opening_hand(deck, params, rng),

            QuestionKind::CopiesInTopFive =>
                questions::copies::copies_in_top_five(deck, params, rng),

            QuestionKind::MostLikelyTopCard =>
                questions::top_card::most_likely_top_card(deck, params, rng),

            QuestionKind::AverageDrawsUntilCopy =>
                Err(DrillError::NotImplemented("average draws until a copy".into())),

            QuestionKind::BasicLandsInDeck =>
                questions::magic::basic_lands_in_deck(deck, params, rng),

            QuestionKind::BasicEnergyInOpeningHand =>
                questions::pokemon::basic_energy_in_opening_hand(deck, params, rng),
        }
    }
}
