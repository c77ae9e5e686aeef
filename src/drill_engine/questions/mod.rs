//! Question generators.
//!
//! Every public function has the same shape, whatever the game:
//!
//! ```ignore
//! pub fn <name><R: Rng>(
//!     deck: &Deck,
//!     params: &QuestionParams,
//!     rng: &mut R,
//! ) -> Result<QuestionResult>
//! ```
//!
//! The catalogue dispatches to these through `QuestionKind::generate`.

/// Copies in the full deck, in the opening hand, in the top five.
pub mod copies;
/// Which card is most likely on top after some cards are gone.
pub mod top_card;
/// Magic only: basic lands.
pub mod magic;
/// Pokémon only: basic Energy.
pub mod pokemon;
