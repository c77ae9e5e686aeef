use log::debug;
use rand::Rng;

use crate::drill_engine::{
    deck::{Card, Deck},
    distractors::{generate_distractors, DistractorOptions, Flavor},
    error::{DrillError, Result},
    helpers::{all_cards, hand_size, percent_question, pick_card, with_correct, DISTRACTOR_COUNT},
    models::{Answer, CountSpread, QuestionKind, QuestionParams, QuestionResult, Subject},
    probability::probability_at_least_one,
};

/// Cards looked at after the opening hand in `copies_in_top_five`.
pub const LOOK_AHEAD: u32 = 5;

// ---------------------------------------------------------------------------
// How many copies are in the deck?
// ---------------------------------------------------------------------------

pub fn copies_in_full_deck<R: Rng>(
    deck: &Deck,
    params: &QuestionParams,
    rng: &mut R,
) -> Result<QuestionResult> {
    let card = pick_card(rng, &all_cards(deck))?;
    full_deck_for_card(deck, card, params, rng)
}

pub(crate) fn full_deck_for_card<R: Rng>(
    deck: &Deck,
    card: &Card,
    params: &QuestionParams,
    rng: &mut R,
) -> Result<QuestionResult> {
    let correct = Answer::Count(card.count);
    let candidates = match (params.spread, deck.mode_copies(), deck.median_copies()) {
        (CountSpread::Distractors, Ok(mode), Ok(median)) => {
            let options = DistractorOptions::default().with_anchors(mode, median);
            let wrongs = generate_distractors(
                rng, f64::from(card.count), Flavor::Count, DISTRACTOR_COUNT, &options,
            )?;
            with_correct(rng, wrongs, &correct)
        }
        _ => count_window(card.count),
    };
    debug!("Copies of {} in the deck: {}", card.name, card.count);

    Ok(QuestionResult {
        kind: QuestionKind::CopiesInFullDeck,
        question: format!("How many copies of {} are in your deck?", card.name),
        correct,
        candidates,
        suffix: "copies".into(),
        subject: Subject::Card(card.clone()),
    })
}

/// `0..5` for small counts, otherwise two either side of the count.
fn count_window(count: u32) -> Vec<Answer> {
    let range = if count < 5 { 0..5 } else { count - 2..count + 3 };
    range.map(Answer::Count).collect()
}

// ---------------------------------------------------------------------------
// Chance of a copy in the opening hand
// ---------------------------------------------------------------------------

pub fn copies_in_opening_hand<R: Rng>(
    deck: &Deck,
    params: &QuestionParams,
    rng: &mut R,
) -> Result<QuestionResult> {
    let card = pick_card(rng, &all_cards(deck))?;
    opening_hand_for_card(deck, card, hand_size(deck, params), rng)
}

pub(crate) fn opening_hand_for_card<R: Rng>(
    deck: &Deck,
    card: &Card,
    hand: u32,
    rng: &mut R,
) -> Result<QuestionResult> {
    let chance = probability_at_least_one(deck.size(), card.count, hand)?;
    debug!("Chance of a copy of {} in opening hand: {:.2}", card.name, chance * 100.0);

    percent_question(
        rng,
        QuestionKind::CopiesInOpeningHand,
        format!(
            "How likely is it that at least one copy of {} will be in your opening hand?",
            card.name
        ),
        chance,
        Subject::Card(card.clone()),
    )
}

// ---------------------------------------------------------------------------
// Chance of another copy in the next five cards
// ---------------------------------------------------------------------------

/// Assumes one copy of the card is already in the opening hand, so only
/// cards with at least two copies can be asked about.
pub fn copies_in_top_five<R: Rng>(
    deck: &Deck,
    params: &QuestionParams,
    rng: &mut R,
) -> Result<QuestionResult> {
    let duplicated: Vec<&Card> = deck.cards().iter().filter(|c| c.count > 1).collect();
    if duplicated.is_empty() {
        return Err(DrillError::InsufficientDeckDiversity(
            "no card has more than one copy".into(),
        ));
    }
    let card = pick_card(rng, &duplicated)?;
    top_five_for_card(deck, card, hand_size(deck, params), rng)
}

pub(crate) fn top_five_for_card<R: Rng>(
    deck: &Deck,
    card: &Card,
    hand: u32,
    rng: &mut R,
) -> Result<QuestionResult> {
    let remaining_deck = deck.size().checked_sub(hand).ok_or_else(|| {
        DrillError::InvalidParameters(format!(
            "a {}-card deck cannot deal a {hand}-card opening hand",
            deck.size()
        ))
    })?;
    let chance = probability_at_least_one(remaining_deck, card.count - 1, LOOK_AHEAD)?;
    debug!("Chance of a copy of {} in the next five cards: {:.2}", card.name, chance * 100.0);

    percent_question(
        rng,
        QuestionKind::CopiesInTopFive,
        format!(
            "After drawing your opening hand with one copy of {card}, how likely is it that \
             another copy of {card} is in the top five cards of your deck?",
            card = card.name
        ),
        chance,
        Subject::Card(card.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn deck(cards: &[(&str, u32)]) -> Deck {
        Deck::new(cards.iter().map(|&(n, c)| Card::new(n, c)).collect()).unwrap()
    }

    fn assert_one_correct(result: &QuestionResult) {
        let hits = result.candidates.iter().filter(|a| **a == result.correct).count();
        assert_eq!(hits, 1, "correct answer must appear once in {:?}", result.candidates);
    }

    #[test]
    fn full_deck_window() {
        let d = deck(&[("Island", 20), ("Bolt", 3)]);
        let mut rng = StdRng::seed_from_u64(1);
        let params = QuestionParams::default();

        let bolt = full_deck_for_card(&d, d.card("Bolt").unwrap(), &params, &mut rng).unwrap();
        assert_eq!(bolt.correct, Answer::Count(3));
        assert_eq!(bolt.candidates, (0..5).map(Answer::Count).collect::<Vec<_>>());
        assert_eq!(bolt.question, "How many copies of Bolt are in your deck?");
        assert_eq!(bolt.suffix, "copies");

        let island = full_deck_for_card(&d, d.card("Island").unwrap(), &params, &mut rng).unwrap();
        assert_eq!(island.candidates, (18..23).map(Answer::Count).collect::<Vec<_>>());
        assert_one_correct(&island);
    }

    #[test]
    fn full_deck_distractors() {
        let d = deck(&[("Island", 20), ("Bolt", 4), ("Shock", 4), ("Opt", 2)]);
        let params = QuestionParams { spread: CountSpread::Distractors, ..QuestionParams::default() };
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = full_deck_for_card(&d, d.card("Island").unwrap(), &params, &mut rng).unwrap();
            assert_eq!(result.candidates.len(), DISTRACTOR_COUNT + 1);
            assert_one_correct(&result);
        }
    }

    #[test]
    fn opening_hand_matches_hypergeometric() {
        let d = deck(&[("Island", 20), ("Bolt", 40)]);
        let mut rng = StdRng::seed_from_u64(5);
        let result = opening_hand_for_card(&d, d.card("Island").unwrap(), 7, &mut rng).unwrap();
        let miss: f64 = (0..7).map(|i| (40.0 - i as f64) / (60.0 - i as f64)).product();
        assert_eq!(result.correct, Answer::percent((1.0 - miss) * 100.0));
        assert_eq!(result.correct, Answer::Percent("95.17".into()));
        assert_eq!(result.suffix, "percent");
        assert_eq!(result.candidates.len(), 5);
        assert_one_correct(&result);
    }

    #[test]
    fn opening_hand_larger_than_deck_fails() {
        let d = deck(&[("A", 2), ("B", 3)]);
        let mut rng = StdRng::seed_from_u64(5);
        let err = copies_in_opening_hand(&d, &QuestionParams::default(), &mut rng).unwrap_err();
        assert!(matches!(err, DrillError::InvalidParameters(_)));
    }

    #[test]
    fn top_five_needs_a_duplicated_card() {
        let d = deck(&[("A", 1), ("B", 1)]);
        let mut rng = StdRng::seed_from_u64(5);
        let err = copies_in_top_five(&d, &QuestionParams::default(), &mut rng).unwrap_err();
        assert!(matches!(err, DrillError::InsufficientDeckDiversity(_)));
    }

    #[test]
    fn top_five_only_asks_about_duplicates() {
        let d = deck(&[("Single", 1), ("Playset", 4), ("Island", 55)]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = copies_in_top_five(&d, &QuestionParams::default(), &mut rng).unwrap();
            assert_ne!(result.subject, Subject::Card(Card::new("Single", 1)));
            assert_one_correct(&result);
        }
    }

    #[test]
    fn top_five_probability() {
        let d = deck(&[("Playset", 4), ("Island", 56)]);
        let mut rng = StdRng::seed_from_u64(8);
        let result = top_five_for_card(&d, d.card("Playset").unwrap(), 7, &mut rng).unwrap();
        // Three copies left among 53 cards, five looked at.
        let expected = probability_at_least_one(53, 3, 5).unwrap();
        assert_eq!(result.correct, Answer::percent(expected * 100.0));
        assert!(result.question.contains("top five cards"));
    }
}
