use log::{debug, warn};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::drill_engine::{
    catalogue::Catalogue,
    deck::Deck,
    error::{DrillError, Result},
    models::{DrillRequest, QuestionParams, QuestionResult},
};

/// Single entry point: build one question about `deck`.
///
/// A requested kind is generated as is and its error returned. Otherwise a
/// kind is picked from the deck's catalogue; if it fails the remaining kinds
/// are tried in random order, and the last error is returned when none works.
pub fn generate_question(deck: &Deck, request: &DrillRequest) -> Result<QuestionResult> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    match request.question {
        Some(kind) => {
            debug!("Generating requested question {}", kind.as_str());
            kind.generate(deck, &request.params, &mut rng)
        }
        None => generate_any(deck, &request.params, &mut rng),
    }
}

fn generate_any<R: Rng>(deck: &Deck, params: &QuestionParams, rng: &mut R) -> Result<QuestionResult> {
    let catalogue = Catalogue::for_game(deck.game());
    let first = catalogue.choose_question(rng);
    let mut rest: Vec<_> = catalogue.questions().iter().copied().filter(|k| *k != first).collect();
    rest.shuffle(rng);

    let mut last_error = DrillError::InsufficientDeckDiversity("no question fits this deck".into());
    for kind in std::iter::once(first).chain(rest) {
        debug!("Trying question {} for a {} deck", kind.as_str(), deck.game());
        match kind.generate(deck, params, rng) {
            Ok(result) => return Ok(result),
            Err(err) => {
                warn!("Skipping question {}: {err}", kind.as_str());
                last_error = err;
            }
        }
    }
    Err(last_error)
}
