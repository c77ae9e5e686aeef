//! "Which card is most likely on top?" after part of the deck is gone.
//!
//! A copy of the deck loses a random 10 to 20 cards, one copy at a time and
//! only from cards that still have a spare copy. Four cards with four
//! different remaining counts are then offered; the answer is the one with
//! the most copies left relative to the reduced deck.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::drill_engine::{
    deck::{Card, Deck},
    error::{DrillError, Result},
    helpers::{copies_phrase, english_list},
    models::{Answer, QuestionKind, QuestionParams, QuestionResult, Subject},
};

/// How many cards are taken out before the question is asked.
pub const REMOVAL_RANGE: RangeInclusive<u32> = 10..=20;
/// Cards offered as answers.
pub const TOP_CARD_CHOICES: usize = 4;

pub fn most_likely_top_card<R: Rng>(
    deck: &Deck,
    _params: &QuestionParams,
    rng: &mut R,
) -> Result<QuestionResult> {
    let mut reduced = deck.clone();
    let target = rng.gen_range(REMOVAL_RANGE);
    let removed = remove_cards(rng, &mut reduced, target)?;

    let chosen = choose_distinct_counts(rng, &reduced, TOP_CARD_CHOICES)?;
    let best = rank_top_card(&chosen, reduced.size())
        .ok_or_else(|| DrillError::InsufficientDeckDiversity("no card to rank".into()))?;
    debug!(
        "Removed {target} cards, most likely top card: {} ({} of {})",
        best.name,
        best.count,
        reduced.size()
    );

    Ok(QuestionResult {
        kind: QuestionKind::MostLikelyTopCard,
        question: format!(
            "If {} from your deck, which of the following cards is most likely to be the \
             top card of your deck?",
            removal_clause(&removed)
        ),
        correct: Answer::Name(best.name.clone()),
        candidates: chosen.iter().map(|c| Answer::Name(c.name.clone())).collect(),
        suffix: "is most likely to be the top card.".into(),
        subject: Subject::Description("the top card of your deck".into()),
    })
}

/// Take `target` copies out of `deck`, each from a random card that still
/// has more than one copy. Returns `(name, copies removed)` in the order the
/// names were first hit.
pub(crate) fn remove_cards<R: Rng>(
    rng: &mut R,
    deck: &mut Deck,
    target: u32,
) -> Result<Vec<(String, u32)>> {
    let mut removed: Vec<(String, u32)> = Vec::new();
    for step in 0..target {
        let spare: Vec<&Card> = deck.cards().iter().filter(|c| c.count > 1).collect();
        let name = spare
            .choose(rng)
            .map(|c| c.name.clone())
            .ok_or_else(|| {
                DrillError::InsufficientDeckDiversity(format!(
                    "no card has a spare copy after removing {step} of {target} cards"
                ))
            })?;
        deck.remove_copy(&name)?;
        debug!("Removed a copy of {name}");

        match removed.iter_mut().find(|(n, _)| *n == name) {
            Some((_, copies)) => *copies += 1,
            None => removed.push((name, 1)),
        }
    }
    Ok(removed)
}

/// "1 copy of X has been removed", "2 copies of X and 1 copy of Y have
/// been removed".
fn removal_clause(removed: &[(String, u32)]) -> String {
    let phrases: Vec<String> = removed
        .iter()
        .map(|(name, copies)| copies_phrase(*copies, name))
        .collect();
    let total: u32 = removed.iter().map(|(_, copies)| copies).sum();
    let verb = if total == 1 { "has" } else { "have" };
    format!("{} {verb} been removed", english_list(&phrases))
}

/// `how_many` cards in random order, no two with the same count.
pub(crate) fn choose_distinct_counts<'a, R: Rng>(
    rng: &mut R,
    deck: &'a Deck,
    how_many: usize,
) -> Result<Vec<&'a Card>> {
    let mut pool: Vec<&Card> = deck.cards().iter().filter(|c| c.count > 0).collect();
    pool.shuffle(rng);

    let mut chosen: Vec<&Card> = Vec::with_capacity(how_many);
    for card in pool {
        if chosen.iter().all(|c| c.count != card.count) {
            chosen.push(card);
            if chosen.len() == how_many {
                return Ok(chosen);
            }
        }
    }
    Err(DrillError::InsufficientDeckDiversity(format!(
        "only {} distinct copy counts, need {how_many}",
        chosen.len()
    )))
}

/// The card with the highest share of `deck_size`. Ties go to the
/// lexically greatest name.
pub(crate) fn rank_top_card<'a>(chosen: &[&'a Card], deck_size: u32) -> Option<&'a Card> {
    let ratio = |c: &Card| f64::from(c.count) / f64::from(deck_size.max(1));
    chosen.iter().copied().max_by(|a, b| match ratio(a).total_cmp(&ratio(b)) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn deck(cards: &[(&str, u32)]) -> Deck {
        Deck::new(cards.iter().map(|&(n, c)| Card::new(n, c)).collect()).unwrap()
    }

    #[test]
    fn removal_only_touches_spare_copies() {
        let mut d = deck(&[("Single", 1), ("Pair", 2), ("Island", 30)]);
        let mut rng = StdRng::seed_from_u64(4);
        let removed = remove_cards(&mut rng, &mut d, 15).unwrap();

        assert_eq!(removed.iter().map(|(_, n)| n).sum::<u32>(), 15);
        assert!(removed.iter().all(|(name, _)| name != "Single"));
        assert_eq!(d.size(), 33 - 15);
        assert!(d.cards().iter().all(|c| c.count >= 1));
    }

    #[test]
    fn removal_fails_without_spare_copies() {
        let mut d = deck(&[("A", 1), ("B", 2)]);
        let mut rng = StdRng::seed_from_u64(4);
        let err = remove_cards(&mut rng, &mut d, 3).unwrap_err();
        assert!(matches!(err, DrillError::InsufficientDeckDiversity(_)));
    }

    #[test]
    fn all_singletons_cannot_be_asked() {
        let d = deck(&[("A1", 1), ("B1", 1)]);
        let mut rng = StdRng::seed_from_u64(0);
        let err = most_likely_top_card(&d, &QuestionParams::default(), &mut rng).unwrap_err();
        assert!(matches!(err, DrillError::InsufficientDeckDiversity(_)));
    }

    #[test]
    fn distinct_counts_required() {
        let d = deck(&[("A", 4), ("B", 4), ("C", 3), ("D", 3), ("E", 2)]);
        let mut rng = StdRng::seed_from_u64(2);
        let err = choose_distinct_counts(&mut rng, &d, 4).unwrap_err();
        assert!(matches!(err, DrillError::InsufficientDeckDiversity(_)));

        let chosen = choose_distinct_counts(&mut rng, &d, 3).unwrap();
        let mut counts: Vec<u32> = chosen.iter().map(|c| c.count).collect();
        counts.sort();
        assert_eq!(counts, vec![2, 3, 4]);
    }

    #[test]
    fn removal_clause_agrees_with_the_count() {
        assert_eq!(removal_clause(&[("Opt".to_string(), 1)]), "1 copy of Opt has been removed");
        assert_eq!(removal_clause(&[("Opt".to_string(), 3)]), "3 copies of Opt have been removed");
        assert_eq!(
            removal_clause(&[("Opt".to_string(), 1), ("Island".to_string(), 1)]),
            "1 copy of Opt and 1 copy of Island have been removed"
        );
    }

    #[test]
    fn ranking_picks_highest_ratio() {
        let cards = [Card::new("A", 3), Card::new("B", 9), Card::new("C", 1), Card::new("D", 5)];
        let chosen: Vec<&Card> = cards.iter().collect();
        assert_eq!(rank_top_card(&chosen, 40).unwrap().name, "B");

        let tied = [Card::new("Alpha", 4), Card::new("Beta", 4)];
        let chosen: Vec<&Card> = tied.iter().collect();
        assert_eq!(rank_top_card(&chosen, 40).unwrap().name, "Beta");
        assert!(rank_top_card(&[], 40).is_none());
    }

    #[test]
    fn full_question() {
        // Gaps of 25 survive any removal of up to 20 cards.
        let d = deck(&[("Quarter", 25), ("Half", 50), ("Most", 75), ("All", 100)]);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = most_likely_top_card(&d, &QuestionParams::default(), &mut rng).unwrap();
            assert_eq!(result.correct, Answer::Name("All".into()));
            assert_eq!(result.candidates.len(), TOP_CARD_CHOICES);
            assert_eq!(result.candidates.iter().filter(|a| **a == result.correct).count(), 1);
            assert!(result.question.starts_with("If "));
            assert!(result.question.contains(" have been removed from your deck"));
            assert_eq!(result.suffix, "is most likely to be the top card.");
            assert_eq!(result.subject, Subject::Description("the top card of your deck".into()));
        }
    }
}
