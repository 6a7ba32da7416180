//! # Prompt Source
//!
//! Where the Agility arrows come from. `update()` only sees the
//! `PromptSource` trait, so tests can feed a scripted sequence while the
//! binary draws from the OS CSPRNG or a seeded PRNG.
//!
//! Every draw must be uniform over the four directions. A source that fails
//! reports `PromptError`; callers propagate it instead of picking a fallback.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::RngSource;
use crate::core::state::Direction;

#[derive(Debug)]
pub enum PromptError {
    /// The underlying random generator could not produce bytes.
    Source(String),
    /// A scripted source ran out of directions.
    Exhausted,
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Source(msg) => write!(f, "random source failed: {msg}"),
            PromptError::Exhausted => write!(f, "prompt source exhausted"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<PromptError> for std::io::Error {
    fn from(err: PromptError) -> Self {
        std::io::Error::other(err)
    }
}

pub trait PromptSource {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Draw the next direction, each of the four equally likely.
    fn next_prompt(&mut self) -> Result<Direction, PromptError>;
}

/// Prompt source backed by any `rand` generator.
pub struct RngPrompts<R> {
    name: &'static str,
    rng: R,
}

impl RngPrompts<OsRng> {
    pub fn secure() -> Self {
        Self { name: "os", rng: OsRng }
    }
}

impl RngPrompts<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            name: "seeded",
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> PromptSource for RngPrompts<R> {
    fn name(&self) -> &str {
        self.name
    }

    fn next_prompt(&mut self) -> Result<Direction, PromptError> {
        // 256 is a multiple of 4, so the low two bits of a byte are uniform.
        let mut byte = [0u8; 1];
        self.rng
            .try_fill_bytes(&mut byte)
            .map_err(|e| PromptError::Source(e.to_string()))?;
        Ok(Direction::ALL[usize::from(byte[0] & 0b11)])
    }
}

/// Seed derived from the wall clock, used when no explicit seed is configured.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Build the prompt source selected by configuration.
pub fn build_prompt_source(source: &RngSource, seed: Option<u64>) -> Box<dyn PromptSource> {
    match source {
        RngSource::Os => {
            info!("Prompt source: OS random generator");
            Box::new(RngPrompts::secure())
        }
        RngSource::Seeded => {
            let seed = seed.unwrap_or_else(time_seed);
            info!("Prompt source: seeded generator (seed={})", seed);
            Box::new(RngPrompts::seeded(seed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn counts(source: &mut dyn PromptSource, draws: usize) -> HashMap<Direction, usize> {
        let mut counts = HashMap::new();
        for _ in 0..draws {
            *counts.entry(source.next_prompt().unwrap()).or_insert(0) += 1;
        }
        counts
    }

    fn chi_square(counts: &HashMap<Direction, usize>, draws: usize) -> f64 {
        let expected = draws as f64 / 4.0;
        Direction::ALL
            .iter()
            .map(|d| {
                let observed = *counts.get(d).unwrap_or(&0) as f64;
                (observed - expected).powi(2) / expected
            })
            .sum()
    }

    #[test]
    fn test_seeded_draws_are_uniform() {
        let draws = 4000;
        let mut source = RngPrompts::seeded(0x5eed);
        let counts = counts(&mut source, draws);

        assert_eq!(counts.len(), 4, "every direction should appear");
        // df = 3, p = 0.001
        assert!(chi_square(&counts, draws) < 16.27);
        for d in Direction::ALL {
            let share = counts[&d] as f64 / draws as f64;
            assert!((share - 0.25).abs() < 0.05, "{d:?} share was {share}");
        }
    }

    #[test]
    fn test_secure_draws_cover_all_directions() {
        let mut source = RngPrompts::secure();
        let counts = counts(&mut source, 2000);
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RngPrompts::seeded(42);
        let mut b = RngPrompts::seeded(42);
        for _ in 0..50 {
            assert_eq!(a.next_prompt().unwrap(), b.next_prompt().unwrap());
        }
    }

    #[test]
    fn test_repeats_are_not_suppressed() {
        let mut source = RngPrompts::seeded(7);
        let draws: Vec<_> = (0..500).map(|_| source.next_prompt().unwrap()).collect();
        assert!(draws.windows(2).any(|w| w[0] == w[1]));
    }

    #[test]
    fn test_build_prompt_source_names() {
        assert_eq!(build_prompt_source(&RngSource::Os, None).name(), "os");
        assert_eq!(build_prompt_source(&RngSource::Seeded, Some(1)).name(), "seeded");
    }

    #[test]
    fn test_prompt_error_display() {
        let err = PromptError::Source("entropy unavailable".to_string());
        assert_eq!(err.to_string(), "random source failed: entropy unavailable");
        assert_eq!(PromptError::Exhausted.to_string(), "prompt source exhausted");
    }
}
