//! Wrong-but-plausible answers.
//!
//! Candidates are sampled around the correct answer and kept only if their
//! flavor's validator accepts them. Sampling is a bounded loop: after
//! `max_attempts` draws the generator gives up with
//! [`DrillError::GenerationExhausted`].
//!
//! Percentages are compared in hundredths, i.e. exactly as they are shown,
//! so a candidate that only differs from the correct answer before
//! formatting still counts as a collision.

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    error::{DrillError, Result},
    models::Answer,
};

pub const PERCENT_VARIANCE: f64 = 3.0;
pub const COUNT_VARIANCE: f64 = 2.0;
pub const MAX_ATTEMPTS: usize = 10_000;

/// Smallest gap between a wrong percentage and the right one, in hundredths.
const MIN_PERCENT_GAP: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flavor {
    Count,
    Percentage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistractorOptions {
    /// Spread of the sampling range; `None` uses the flavor's default.
    pub variance: Option<f64>,
    /// Hard upper bound for count answers.
    pub answer_ceiling: Option<u32>,
    /// Typical copy counts in the deck; count answers are also drawn from
    /// around these.
    pub mode: Option<u32>,
    pub median: Option<f64>,
    pub max_attempts: usize,
}

impl Default for DistractorOptions {
    fn default() -> Self {
        DistractorOptions {
            variance: None,
            answer_ceiling: None,
            mode: None,
            median: None,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl DistractorOptions {
    pub fn with_ceiling(mut self, ceiling: u32) -> Self {
        self.answer_ceiling = Some(ceiling);
        self
    }

    pub fn with_anchors(mut self, mode: u32, median: f64) -> Self {
        self.mode = Some(mode);
        self.median = Some(median);
        self
    }
}

/// `how_many` distinct wrong answers for `correct`.
pub fn generate_distractors<R: Rng>(
    rng: &mut R,
    correct: f64,
    flavor: Flavor,
    how_many: usize,
    options: &DistractorOptions,
) -> Result<Vec<Answer>> {
    if !correct.is_finite() || correct < 0.0 {
        return Err(DrillError::InvalidParameters(format!("cannot build distractors for {correct}")));
    }
    let variance = options.variance.unwrap_or(match flavor {
        Flavor::Count      => COUNT_VARIANCE,
        Flavor::Percentage => PERCENT_VARIANCE,
    });
    if variance.is_nan() || variance < 1.0 {
        return Err(DrillError::InvalidParameters(format!("variance {variance} is below 1.0")));
    }
    if how_many == 0 {
        return Ok(Vec::new());
    }

    match flavor {
        Flavor::Percentage => percent_distractors(rng, correct, variance, how_many, options),
        Flavor::Count      => count_distractors(rng, correct, variance, how_many, options),
    }
}

fn percent_distractors<R: Rng>(
    rng: &mut R,
    correct: f64,
    variance: f64,
    how_many: usize,
    options: &DistractorOptions,
) -> Result<Vec<Answer>> {
    let lo = (correct / variance).max(1.0);
    let hi = (correct * variance).max(10.0);

    let mut wrongs = Vec::with_capacity(how_many);
    for _ in 0..options.max_attempts {
        let candidate = rng.gen_range(lo..=hi);
        let Some(accepted) = validate_percent(candidate, correct) else {
            trace!("Rejected {candidate:.4} as a wrong answer for {correct:.4}");
            continue;
        };
        let answer = Answer::percent(accepted);
        if !wrongs.contains(&answer) {
            wrongs.push(answer);
            if wrongs.len() == how_many {
                return Ok(wrongs);
            }
        }
    }
    Err(DrillError::GenerationExhausted { wanted: how_many, attempts: options.max_attempts })
}

fn count_distractors<R: Rng>(
    rng: &mut R,
    correct: f64,
    variance: f64,
    how_many: usize,
    options: &DistractorOptions,
) -> Result<Vec<Answer>> {
    let target = correct.round() as u32;
    let mut lo = ((correct / variance).floor() as u32).max(1);
    let mut top = (correct * variance).ceil() as u32;
    if let Some(ceiling) = options.answer_ceiling {
        top = top.max(ceiling);
    }
    let anchors = options.mode.into_iter().chain(options.median.map(|m| m.round() as u32));
    for anchor in anchors {
        lo = lo.min(anchor.max(1));
        top = top.max(anchor);
    }
    top = top.max(lo);

    // Fail fast when the range cannot hold enough wrong answers.
    let upper = options.answer_ceiling.map_or(top, |c| top.min(c));
    let available = if upper >= lo {
        (upper - lo + 1) as usize - usize::from((lo..=upper).contains(&target))
    } else {
        0
    };
    if available < how_many {
        return Err(DrillError::GenerationExhausted { wanted: how_many, attempts: 0 });
    }

    let mut wrongs = Vec::with_capacity(how_many);
    for _ in 0..options.max_attempts {
        let candidate = rng.gen_range(lo..=top);
        let Some(accepted) = validate_count(candidate, target, options.answer_ceiling) else {
            trace!("Rejected {candidate} as a wrong answer for {target}");
            continue;
        };
        let answer = Answer::Count(accepted);
        if !wrongs.contains(&answer) {
            wrongs.push(answer);
            if wrongs.len() == how_many {
                return Ok(wrongs);
            }
        }
    }
    Err(DrillError::GenerationExhausted { wanted: how_many, attempts: options.max_attempts })
}

/// A value as it is displayed, in hundredths: 45.678 -> 4568.
fn hundredths(value: f64) -> i64 {
    format!("{value:.2}")
        .replace('.', "")
        .parse()
        .unwrap_or_else(|_| (value * 100.0).round() as i64)
}

/// `Some(candidate)` if it is a usable wrong percentage for `correct`.
pub fn validate_percent(candidate: f64, correct: f64) -> Option<f64> {
    let shown = hundredths(candidate);
    if shown > 10_000 || shown < 1 {
        return None;
    }
    if (shown - hundredths(correct)).abs() < MIN_PERCENT_GAP {
        return None;
    }
    Some(candidate)
}

/// `Some(candidate)` if it is a usable wrong count for `correct`.
pub fn validate_count(candidate: u32, correct: u32, ceiling: Option<u32>) -> Option<u32> {
    if candidate == correct || ceiling.is_some_and(|c| candidate > c) {
        return None;
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn percent_validation() {
        assert_eq!(validate_percent(50.0, 50.0), None);
        assert_eq!(validate_percent(49.1, 50.0), None);
        assert_eq!(validate_percent(50.9, 50.0), None);
        assert_eq!(validate_percent(100.01, 50.0), None);
        assert_eq!(validate_percent(0.004, 50.0), None);
        assert_eq!(validate_percent(45.0, 50.0), Some(45.0));
        assert_eq!(validate_percent(51.0, 50.0), Some(51.0));
    }

    #[test]
    fn percent_validation_uses_display_rounding() {
        // 48.996 shows as "49.00" and 50.004 as "50.00": a full point apart.
        assert_eq!(validate_percent(48.996, 50.004), Some(48.996));
        // 49.004 shows as "49.00", only 0.99 below "49.99".
        assert_eq!(validate_percent(49.004, 49.994), None);
    }

    #[test]
    fn count_validation() {
        assert_eq!(validate_count(4, 4, None), None);
        assert_eq!(validate_count(12, 4, Some(5)), None);
        assert_eq!(validate_count(5, 4, Some(5)), Some(5));
        assert_eq!(validate_count(3, 4, None), Some(3));
    }

    #[test]
    fn percent_distractors_are_distinct_and_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        let correct = 39.95;
        let wrongs = generate_distractors(&mut rng, correct, Flavor::Percentage, 4, &DistractorOptions::default())
            .unwrap();
        assert_eq!(wrongs.len(), 4);
        for (i, w) in wrongs.iter().enumerate() {
            let Answer::Percent(s) = w else { panic!("expected a percentage, got {w:?}") };
            let v: f64 = s.parse().unwrap();
            assert!((0.01..=100.0).contains(&v));
            assert!((v - correct).abs() >= 0.99, "{v} too close to {correct}");
            assert!(!wrongs[i + 1..].contains(w));
        }
    }

    #[test]
    fn count_distractors_scenario() {
        let options = DistractorOptions::default().with_anchors(3, 3.0);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let wrongs = generate_distractors(&mut rng, 50.0, Flavor::Count, 4, &options).unwrap();
            assert_eq!(wrongs.len(), 4);
            assert!(!wrongs.contains(&Answer::Count(50)));
            for (i, w) in wrongs.iter().enumerate() {
                assert!(!wrongs[i + 1..].contains(w));
            }
        }
    }

    #[test]
    fn count_distractors_respect_ceiling() {
        let options = DistractorOptions::default().with_ceiling(6);
        let mut rng = StdRng::seed_from_u64(9);
        let wrongs = generate_distractors(&mut rng, 4.0, Flavor::Count, 4, &options).unwrap();
        for w in &wrongs {
            let Answer::Count(n) = w else { panic!("expected a count, got {w:?}") };
            assert!((1..=6).contains(n) && *n != 4);
        }
    }

    #[test]
    fn narrow_count_range_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        // Correct answer 1 with variance 2: only "2" is a valid wrong answer.
        let err = generate_distractors(&mut rng, 1.0, Flavor::Count, 4, &DistractorOptions::default())
            .unwrap_err();
        assert!(matches!(err, DrillError::GenerationExhausted { wanted: 4, .. }));
    }

    #[test]
    fn attempt_cap_stops_sampling() {
        let mut rng = StdRng::seed_from_u64(3);
        let options = DistractorOptions { max_attempts: 5, ..DistractorOptions::default() };
        // Far more distinct percentages than five draws can produce.
        let err = generate_distractors(&mut rng, 50.0, Flavor::Percentage, 50, &options).unwrap_err();
        assert_eq!(err, DrillError::GenerationExhausted { wanted: 50, attempts: 5 });
    }

    #[test]
    fn bad_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        let low_variance = DistractorOptions { variance: Some(0.5), ..DistractorOptions::default() };
        assert!(matches!(
            generate_distractors(&mut rng, 50.0, Flavor::Percentage, 4, &low_variance),
            Err(DrillError::InvalidParameters(_))
        ));
        assert!(matches!(
            generate_distractors(&mut rng, f64::NAN, Flavor::Count, 4, &DistractorOptions::default()),
            Err(DrillError::InvalidParameters(_))
        ));
        assert_eq!(
            generate_distractors(&mut rng, 50.0, Flavor::Count, 0, &DistractorOptions::default()),
            Ok(Vec::new())
        );
    }
}
