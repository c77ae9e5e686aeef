//! End-to-end demo: identify a deck's game, ask questions, check answers.
//!
//! Run with: `cargo run --example demo`
//!
//! Set `RUST_LOG=debug` to see the computed answers and the fallback
//! decisions logged by the engine.

use deck_drill_gen::{
    check_submission, generate_question, to_client_json, Card, Catalogue, Deck, DrillRequest,
    GameRegistry, QuestionKind, QuestionResult,
};

fn print_question(result: &QuestionResult) {
    println!("── {} ──", result.kind);
    println!("Q: {}", result.question);
    for (i, answer) in result.candidates.iter().enumerate() {
        let mark = if *answer == result.correct { "✓" } else { " " };
        println!("  [{mark}] {}. {answer} {}", i + 1, result.suffix);
    }
    println!();
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let registry = GameRegistry::with_builtin_games();
    let decklist = vec![
        Card::new("Island", 18),
        Card::new("Snow-covered Island", 4),
        Card::new("Delver of Secrets // Insectile Aberration", 4),
        Card::new("Brainstorm", 4),
        Card::new("Ponder", 3),
        Card::new("Counterspell", 4),
        Card::new("Force of Will", 4),
        Card::new("Snapcaster Mage", 2),
        Card::new("Jace, the Mind Sculptor", 1),
        Card::new("Cryptic Command", 3),
        Card::new("Opt", 4),
        Card::new("Daze", 4),
        Card::new("Mana Leak", 4),
        Card::new("Vendilion Clique", 1),
    ];

    let deck = match Deck::identify(decklist, &registry) {
        Ok(deck) => deck,
        Err(err) => {
            log::error!("Bad decklist: {err}");
            return;
        }
    };

    println!("Game: {}", deck.game());
    println!("Cards: {}", deck.size());
    match deck.is_legal("modern") {
        Ok(legal) => println!("Modern legal (size and copies): {legal}"),
        Err(err) => println!("Modern legality: {err}"),
    }
    match deck.unique_cards() {
        Ok(n) => println!("Unique cards: {n}"),
        Err(err) => println!("Unique cards: {err}"),
    }
    let catalogue = Catalogue::for_game(deck.game());
    let kinds: Vec<&str> = catalogue.questions().iter().map(|k| k.as_str()).collect();
    println!("Questions: {}", kinds.join(", "));
    println!();

    // One question of each kind, fixed seeds.
    for (seed, &kind) in (100u64..).zip(catalogue.questions()) {
        let request = DrillRequest::new().with_seed(seed).with_question(kind);
        match generate_question(&deck, &request) {
            Ok(result) => print_question(&result),
            Err(err) => println!("── {kind} ── skipped: {err}\n"),
        }
    }

    // What the client sees, and how a submitted answer is checked.
    let request = DrillRequest::new()
        .with_seed(7)
        .with_question(QuestionKind::CopiesInOpeningHand);
    if let Ok(result) = generate_question(&deck, &request) {
        println!("Client view:\n{}", to_client_json(&result));
        let guess = result.candidates[0].to_string();
        println!("Submitting {guess}: {}", check_submission(&result, &guess));
    }

    // Random questions, as a quiz session would ask them.
    for seed in [1u64, 2, 3] {
        match generate_question(&deck, &DrillRequest::new().with_seed(seed)) {
            Ok(result) => print_question(&result),
            Err(err) => log::warn!("No question for seed {seed}: {err}"),
        }
    }
}
