//! Exact draw probabilities without replacement.

use crate::drill_engine::error::{DrillError, Result};

/// X ~ Hypergeometric(population, successes, draws): the number of
/// successes among `draws` cards taken from a deck of `population` cards,
/// `successes` of which are the card we care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hypergeometric {
    population: u32,
    successes: u32,
    draws: u32,
}

impl Hypergeometric {
    pub fn new(population: u32, successes: u32, draws: u32) -> Result<Self> {
        if successes > population {
            return Err(DrillError::InvalidParameters(format!(
                "{successes} successes in a population of {population}"
            )));
        }
        if draws > population {
            return Err(DrillError::InvalidParameters(format!(
                "drawing {draws} from a population of {population}"
            )));
        }
        Ok(Hypergeometric { population, successes, draws })
    }

    fn support(&self) -> (u32, u32) {
        let failures = self.population - self.successes;
        (self.draws.saturating_sub(failures), self.successes.min(self.draws))
    }

    /// P(X = k).
    pub fn pmf(&self, k: u32) -> f64 {
        let (lo, hi) = self.support();
        if k < lo || k > hi {
            return 0.0;
        }
        let failures = self.population - self.successes;
        let ln_p = ln_choose(self.successes, k) + ln_choose(failures, self.draws - k)
            - ln_choose(self.population, self.draws);
        ln_p.exp().clamp(0.0, 1.0)
    }

    /// Survival function P(X >= k).
    pub fn at_least(&self, k: u32) -> f64 {
        let (lo, hi) = self.support();
        if k <= lo {
            return 1.0;
        }
        if k > hi {
            return 0.0;
        }
        if k == 1 {
            return 1.0 - self.none();
        }
        let below: f64 = (lo..k).map(|j| self.pmf(j)).sum();
        (1.0 - below).clamp(0.0, 1.0)
    }

    /// P(X = 0) as a running product, which stays exact at the edges: a
    /// factor of zero appears as soon as the draw cannot miss.
    fn none(&self) -> f64 {
        let failures = self.population - self.successes;
        (0..self.draws)
            .map(|i| f64::from(failures.saturating_sub(i)) / f64::from(self.population - i))
            .product()
    }

    pub fn mean(&self) -> f64 {
        if self.population == 0 {
            return 0.0;
        }
        f64::from(self.draws) * f64::from(self.successes) / f64::from(self.population)
    }
}

/// ln C(n, k) as a sum of logs.
fn ln_choose(n: u32, k: u32) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    (1..=k)
        .map(|i| (f64::from(n - k + i) / f64::from(i)).ln())
        .sum()
}

/// Chance that at least one of `success_count` copies shows up when drawing
/// `draw_size` cards from `population`.
pub fn probability_at_least_one(population: u32, success_count: u32, draw_size: u32) -> Result<f64> {
    let dist = Hypergeometric::new(population, success_count, draw_size)?;
    if success_count == 0 {
        return Ok(0.0);
    }
    if draw_size >= population {
        return Ok(1.0);
    }
    Ok(dist.at_least(1))
}
