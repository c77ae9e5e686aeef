use log::debug;
use rand::Rng;

use crate::drill_engine::{
    deck::Deck,
    distractors::{generate_distractors, DistractorOptions, Flavor},
    error::{DrillError, Result},
    helpers::{with_correct, DISTRACTOR_COUNT},
    models::{Answer, GameKind, QuestionKind, QuestionParams, QuestionResult, Subject},
};

/// Total copies of basic lands. Wrong answers never exceed the deck size.
pub fn basic_lands_in_deck<R: Rng>(
    deck: &Deck,
    _params: &QuestionParams,
    rng: &mut R,
) -> Result<QuestionResult> {
    if deck.game() != GameKind::Magic {
        return Err(DrillError::NotImplemented(format!(
            "basic lands question for a {} deck",
            deck.game()
        )));
    }
    if deck.is_empty() {
        return Err(DrillError::InsufficientDeckDiversity("the deck is empty".into()));
    }

    let rules = deck.rules();
    let basics: u32 = deck
        .cards()
        .iter()
        .filter(|c| rules.is_basic(&c.name))
        .map(|c| c.count)
        .sum();
    debug!("Basic lands in the deck: {basics}");

    let correct = Answer::Count(basics);
    let options = DistractorOptions::default().with_ceiling(deck.size());
    let wrongs = generate_distractors(rng, f64::from(basics), Flavor::Count, DISTRACTOR_COUNT, &options)?;

    Ok(QuestionResult {
        kind: QuestionKind::BasicLandsInDeck,
        question: "How many basic lands are in your deck?".into(),
        candidates: with_correct(rng, wrongs, &correct),
        correct,
        suffix: "basic lands".into(),
        subject: Subject::Description("basic lands".into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::deck::Card;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn magic(cards: &[(&str, u32)]) -> Deck {
        Deck::for_game(cards.iter().map(|&(n, c)| Card::new(n, c)).collect(), GameKind::Magic).unwrap()
    }

    #[test]
    fn counts_every_basic() {
        let d = magic(&[("Island", 20), ("snow-covered forest", 4), ("Lightning Bolt", 36)]);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = basic_lands_in_deck(&d, &QuestionParams::default(), &mut rng).unwrap();
            assert_eq!(result.correct, Answer::Count(24));
            assert_eq!(result.candidates.len(), DISTRACTOR_COUNT + 1);
            assert_eq!(result.candidates.iter().filter(|a| **a == result.correct).count(), 1);
            for answer in &result.candidates {
                let Answer::Count(n) = answer else { panic!("expected a count, got {answer:?}") };
                assert!(*n <= 60);
            }
            assert_eq!(result.suffix, "basic lands");
        }
    }

    #[test]
    fn other_games_are_rejected() {
        let d = Deck::new(vec![Card::new("Island", 20), Card::new("Bolt", 40)]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let err = basic_lands_in_deck(&d, &QuestionParams::default(), &mut rng).unwrap_err();
        assert!(matches!(err, DrillError::NotImplemented(_)));
    }
}
