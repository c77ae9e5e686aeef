use serde_json::{json, Value};

use crate::drill_engine::models::{Answer, QuestionResult};

/// Candidate ids as shown to the client: "A", "B", ...
fn answer_id(index: usize) -> String {
    char::from(b'A' + (index % 26) as u8).to_string()
}

/// Raw value the client submits back.
fn answer_value(answer: &Answer) -> Value {
    match answer {
        Answer::Count(n)   => json!(n),
        Answer::Percent(s) => json!(s),
        Answer::Name(s)    => json!(s),
    }
}

/// Map a `QuestionResult` to the JSON object sent to the client.
///
/// The correct answer stays server-side: candidates carry no flag, and the
/// subject is sent by name only.
pub fn to_client_json(result: &QuestionResult) -> Value {
    let answers: Vec<Value> = result
        .candidates
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            json!({
                "id": answer_id(i),
                "value": answer_value(answer),
                "label": format!("{answer} {}", result.suffix),
            })
        })
        .collect();

    json!({
        "kind": result.kind.as_str(),
        "title": result.kind.to_string(),
        "question": result.question,
        "answers": answers,
        "subject": result.subject.to_string(),
    })
}

/// The reply to a submitted answer.
pub fn check_submission(result: &QuestionResult, given: &str) -> Value {
    json!({
        "is_correct": result.is_correct(given),
        "correct": result.correct.to_string(),
        "suffix": result.suffix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::{deck::Card, models::{QuestionKind, Subject}};

    fn sample() -> QuestionResult {
        QuestionResult {
            kind: QuestionKind::CopiesInFullDeck,
            question: "How many copies of Bolt are in your deck?".into(),
            correct: Answer::Count(3),
            candidates: (0..5).map(Answer::Count).collect(),
            suffix: "copies".into(),
            subject: Subject::Card(Card::new("Bolt", 3)),
        }
    }

    #[test]
    fn client_view_hides_the_answer() {
        let view = to_client_json(&sample());
        assert_eq!(view["kind"], "copies_in_full_deck");
        assert_eq!(view["subject"], "Bolt");
        let answers = view["answers"].as_array().unwrap();
        assert_eq!(answers.len(), 5);
        assert_eq!(answers[0]["id"], "A");
        assert_eq!(answers[4]["label"], "4 copies");
        assert!(answers.iter().all(|a| a.get("is_correct").is_none()));
        assert!(view.get("correct").is_none());
        assert!(!view.to_string().contains("count"));
    }

    #[test]
    fn submission_check() {
        let result = sample();
        assert_eq!(check_submission(&result, "3")["is_correct"], true);
        let wrong = check_submission(&result, "4");
        assert_eq!(wrong["is_correct"], false);
        assert_eq!(wrong["correct"], "3");
    }
}
