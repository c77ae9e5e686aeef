use log::debug;
use rand::Rng;

use crate::drill_engine::{
    deck::Deck,
    error::{DrillError, Result},
    helpers::{hand_size, percent_question},
    models::{GameKind, QuestionKind, QuestionParams, QuestionResult, Subject},
    probability::probability_at_least_one,
};

/// Chance that the opening hand holds at least one basic Energy card.
pub fn basic_energy_in_opening_hand<R: Rng>(
    deck: &Deck,
    params: &QuestionParams,
    rng: &mut R,
) -> Result<QuestionResult> {
    if deck.game() != GameKind::Pokemon {
        return Err(DrillError::NotImplemented(format!(
            "basic Energy question for a {} deck",
            deck.game()
        )));
    }

    let rules = deck.rules();
    let energy: u32 = deck
        .cards()
        .iter()
        .filter(|c| rules.is_basic(&c.name))
        .map(|c| c.count)
        .sum();
    if energy == 0 {
        return Err(DrillError::InsufficientDeckDiversity("the deck has no basic Energy".into()));
    }

    let chance = probability_at_least_one(deck.size(), energy, hand_size(deck, params))?;
    debug!("Chance of basic Energy in opening hand: {:.2}", chance * 100.0);

    percent_question(
        rng,
        QuestionKind::BasicEnergyInOpeningHand,
        "How likely is it that your opening hand contains at least one basic Energy card?".into(),
        chance,
        Subject::Description("basic Energy".into()),
    )
}
