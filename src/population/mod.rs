//! Countdown-driven population growth over discrete days.
//!
//! Each individual carries a days-remaining countdown in `0..=8`. An
//! individual at zero resets to 6 and spawns a newcomer at 8. The population
//! is stored as a fixed 9-bucket [`Histogram`] indexed by countdown value, so
//! advancing one day costs O(1) regardless of population size; a naive
//! per-individual list would cost O(population) per day and the population
//! grows exponentially.

mod error;

#[cfg(test)]
mod tests;

pub use error::PopulationError;

/// Largest valid countdown value.
pub const MAX_TIMER: u8 = 8;

const BUCKETS: usize = MAX_TIMER as usize + 1;

/// Count of individuals per countdown value.
///
/// Invariant: every countdown value `0..=8` has a bucket, and the bucket sum
/// equals the population at that instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    buckets: [u64; BUCKETS],
}

impl Histogram {
    /// Builds a histogram from one countdown value per individual.
    ///
    /// # Errors
    ///
    /// Fails with [`PopulationError::InvalidTimer`] when a value is past
    /// [`MAX_TIMER`].
    pub fn from_timers(timers: &[u8]) -> Result<Self, PopulationError> {
        let mut buckets = [0u64; BUCKETS];
        for &timer in timers {
            if timer > MAX_TIMER {
                return Err(PopulationError::InvalidTimer {
                    value: i64::from(timer),
                });
            }
            buckets[timer as usize] += 1;
        }
        Ok(Self { buckets })
    }

    /// Count of individuals at the given countdown value; zero when the
    /// value is out of range.
    pub fn count(&self, countdown: u8) -> u64 {
        self.buckets
            .get(countdown as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Total population.
    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }

    /// Advances one day, returning the next histogram.
    ///
    /// Buckets shift down one place; everyone at zero reproduces, rejoining
    /// at 6 while their offspring enter at 8.
    pub fn step(&self) -> Histogram {
        let spawning = self.buckets[0];
        let mut next = [0u64; BUCKETS];
        for countdown in 0..MAX_TIMER as usize {
            next[countdown] = self.buckets[countdown + 1];
        }
        next[6] += spawning;
        next[8] = spawning;
        Histogram { buckets: next }
    }

    /// Unbounded day-by-day sequence of histograms; the caller truncates
    /// with `take`.
    pub fn simulate(self) -> Simulation {
        Simulation { current: self }
    }
}

/// Pull-based infinite iterator over daily histograms.
///
/// The first item is the state after one elapsed day.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Histogram,
}

impl Iterator for Simulation {
    type Item = Histogram;

    fn next(&mut self) -> Option<Histogram> {
        self.current = self.current.step();
        Some(self.current)
    }
}

/// Parses a comma-separated list of countdown values.
///
/// # Errors
///
/// Fails on an empty input, a token that is not an integer, or a value
/// outside `0..=8`.
pub fn parse_timers(input: &str) -> Result<Vec<u8>, PopulationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PopulationError::EmptyInput);
    }
    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            let value: i64 = token.parse().map_err(|_| PopulationError::UnparsableTimer {
                token: token.to_string(),
            })?;
            if !(0..=i64::from(MAX_TIMER)).contains(&value) {
                return Err(PopulationError::InvalidTimer { value });
            }
            Ok(value as u8)
        })
        .collect()
}
