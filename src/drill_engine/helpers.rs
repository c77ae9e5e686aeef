//! Shared builder functions used by the question generators.
//!
//! Every generator does the same few things: pick a card, work out the hand
//! size, build a percentage answer with its distractors, and assemble the
//! final [`QuestionResult`]. These helpers keep the question modules focused
//! on the question itself.

use rand::{seq::SliceRandom, Rng};

use crate::drill_engine::{
    deck::{Card, Deck},
    distractors::{generate_distractors, DistractorOptions, Flavor},
    error::{DrillError, Result},
    models::{Answer, QuestionKind, QuestionParams, QuestionResult, Subject},
};

/// Wrong answers offered next to the right one.
pub const DISTRACTOR_COUNT: usize = 4;

/// Pick one card uniformly from `cards`.
pub fn pick_card<'a, R: Rng>(rng: &mut R, cards: &[&'a Card]) -> Result<&'a Card> {
    cards
        .choose(rng)
        .copied()
        .ok_or_else(|| DrillError::InsufficientDeckDiversity("no card to ask about".into()))
}

/// Every card of the deck as a pick list.
pub fn all_cards(deck: &Deck) -> Vec<&Card> {
    deck.cards().iter().collect()
}

/// Opening hand size: the request's override, else the game's default.
pub fn hand_size(deck: &Deck, params: &QuestionParams) -> u32 {
    params.hand_size.unwrap_or(deck.rules().opening_hand)
}

/// Add the correct answer to its distractors and shuffle them together.
pub fn with_correct<R: Rng>(rng: &mut R, mut wrongs: Vec<Answer>, correct: &Answer) -> Vec<Answer> {
    wrongs.push(correct.clone());
    wrongs.shuffle(rng);
    wrongs
}

/// A probability question: `chance` in `[0, 1]` becomes a two-decimal
/// percentage surrounded by percentage distractors.
pub fn percent_question<R: Rng>(
    rng: &mut R,
    kind: QuestionKind,
    question: String,
    chance: f64,
    subject: Subject,
) -> Result<QuestionResult> {
    let percent = chance * 100.0;
    let correct = Answer::percent(percent);
    let wrongs = generate_distractors(
        rng, percent, Flavor::Percentage, DISTRACTOR_COUNT, &DistractorOptions::default(),
    )?;
    let candidates = with_correct(rng, wrongs, &correct);
    Ok(QuestionResult {
        kind,
        question,
        correct,
        candidates,
        suffix: "percent".into(),
        subject,
    })
}

/// "1 copy of Forest", "3 copies of Forest".
pub fn copies_phrase(copies: u32, name: &str) -> String {
    let noun = if copies == 1 { "copy" } else { "copies" };
    format!("{copies} {noun} of {name}")
}

/// "a", "a and b", "a, b, and c".
pub fn english_list(items: &[String]) -> String {
    match items {
        []          => String::new(),
        [one]       => one.clone(),
        [a, b]      => format!("{a} and {b}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}
