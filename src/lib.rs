//! # deck_drill_gen
//!
//! An offline, deterministic quiz generator for trading card game decks.
//!
//! Give it a decklist and it asks multiple-choice questions about that deck:
//! how many copies of a card it runs, how likely a card is to show up in the
//! opening hand or the next five draws, which card is most likely on top
//! after part of the deck is gone. Probabilities are exact hypergeometric
//! values, and the wrong answers are sampled close enough to be plausible
//! but never so close that they read as the same number.
//!
//! ## How it works
//!
//! 1. Build a [`Deck`], either for a known [`GameKind`] or by letting a
//!    [`GameRegistry`] recognise the game from its card names.
//! 2. Call [`generate_question`] with a [`DrillRequest`]. The engine picks a
//!    question from the game's catalogue (or the one you asked for), computes
//!    the answer and samples the wrong ones.
//! 3. The returned [`QuestionResult`] holds the question, the shuffled
//!    candidates and the correct answer. Send
//!    [`web_adapter::to_client_json`] to the player and check the reply with
//!    [`QuestionResult::is_correct`].
//!
//! Pass a seed with [`DrillRequest::with_seed`] to get the same question
//! every time.
//!
//! ## Quick start
//!
//! ```rust
//! use deck_drill_gen::{
//!     generate_question, Card, Deck, DrillRequest, GameKind, GameRegistry, QuestionKind,
//! };
//!
//! let registry = GameRegistry::with_builtin_games();
//! let deck = Deck::identify(
//!     vec![Card::new("Island", 20), Card::new("Lightning Bolt", 40)],
//!     &registry,
//! )
//! .unwrap();
//! assert_eq!(deck.game(), GameKind::Magic);
//!
//! let request = DrillRequest::new()
//!     .with_seed(42)
//!     .with_question(QuestionKind::CopiesInOpeningHand);
//! let result = generate_question(&deck, &request).unwrap();
//!
//! println!("Q: {}", result.question);
//! for answer in &result.candidates {
//!     println!("  {answer} {}", result.suffix);
//! }
//! assert!(result.is_correct(&result.correct.to_string()));
//! ```

pub mod drill_engine;
pub mod web_adapter;

// Convenience re-exports so callers can use `deck_drill_gen::generate_question`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    generate_question, Answer, Card, Catalogue, CountSpread, Deck, DrillError, DrillRequest,
    GameKind, GameRegistry, QuestionKind, QuestionParams, QuestionResult, Subject,
};
pub use web_adapter::{check_submission, to_client_json};
