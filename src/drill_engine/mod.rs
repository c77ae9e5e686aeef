//! Deck quiz engine: card counts, draw probabilities, and multiple-choice
//! questions with plausible wrong answers.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `error`       | `DrillError` and the crate `Result` alias |
//! | `models`      | Shared types: game and question kinds, answers, request/result structs |
//! | `games`       | Static per-game rules: copy limits, basics, formats, opening hand |
//! | `deck`        | `Card` and `Deck` with statistics, legality and unique-card counts |
//! | `registry`    | Ordered fingerprint predicates that tell which game a deck is for |
//! | `probability` | Exact hypergeometric draw probabilities |
//! | `distractors` | Bounded wrong-answer sampling and validation |
//! | `helpers`     | Shared builder functions for the question generators |
//! | `questions`   | One generator per question kind |
//! | `catalogue`   | Per-game question lists and dispatch |
//! | `generator`   | Single entry point `generate_question()` |

pub mod catalogue;
pub mod deck;
pub mod distractors;
pub mod error;
pub mod games;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod probability;
pub mod questions;
pub mod registry;

pub use catalogue::{Catalogue, GENERIC_QUESTIONS};
pub use deck::{Card, Deck};
pub use distractors::{generate_distractors, DistractorOptions, Flavor};
pub use error::{DrillError, Result};
pub use games::{FormatRules, GameRules};
pub use generator::generate_question;
pub use models::{
    Answer, CountSpread, DrillRequest, GameKind, QuestionKind, QuestionParams,
    QuestionResult, Subject,
};
pub use probability::{probability_at_least_one, Hypergeometric};
pub use registry::{fingerprint, GameRegistry, Predicate};
