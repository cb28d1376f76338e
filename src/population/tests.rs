//! Test suite for the population simulation: step semantics, known puzzle
//! answers, parsing, and a cross-check against a per-individual oracle.

use rand::Rng;

use super::*;

/// Per-individual oracle: one list entry per individual. O(population) per
/// day, only usable for small populations and day counts.
fn naive_step(timers: &[u8]) -> Vec<u8> {
    let spawned = timers.iter().filter(|&&t| t == 0).count();
    let mut next: Vec<u8> = timers
        .iter()
        .map(|&t| if t == 0 { 6 } else { t - 1 })
        .collect();
    next.extend(std::iter::repeat(8).take(spawned));
    next
}

/// The puzzle's worked initial state.
fn sample() -> Histogram {
    Histogram::from_timers(&[3, 4, 3, 1, 2]).unwrap()
}

mod stepping {
    use super::*;

    #[test]
    fn buckets_shift_down_one_place() {
        let histogram = sample().step();
        assert_eq!(histogram.count(0), 1);
        assert_eq!(histogram.count(2), 2);
        assert_eq!(histogram.count(3), 1);
        assert_eq!(histogram.total(), 5);
    }

    #[test]
    fn zeroes_reset_to_six_and_spawn_at_eight() {
        let histogram = Histogram::from_timers(&[0, 0, 6]).unwrap().step();
        assert_eq!(histogram.count(6), 2);
        assert_eq!(histogram.count(8), 2);
        assert_eq!(histogram.count(5), 1);
        assert_eq!(histogram.total(), 5);
    }

    #[test]
    fn step_does_not_mutate_its_input() {
        let before = sample();
        let _ = before.step();
        assert_eq!(before, sample());
    }
}

mod simulation {
    use super::*;

    #[test]
    fn reaches_the_known_puzzle_totals() {
        let totals: Vec<u64> = sample().simulate().take(80).map(|h| h.total()).collect();
        assert_eq!(totals[17], 26);
        assert_eq!(totals[79], 5934);
    }

    #[test]
    fn survives_exponential_growth() {
        let after_256 = sample().simulate().take(256).last().unwrap();
        assert_eq!(after_256.total(), 26984457539);
    }

    #[test]
    fn zero_days_yields_no_output() {
        assert_eq!(sample().simulate().take(0).count(), 0);
    }

    #[test]
    fn matches_the_per_individual_oracle() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let len = rng.gen_range(1..=12);
            let timers: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=MAX_TIMER)).collect();
            let days = rng.gen_range(0..=24);

            let mut naive = timers.clone();
            let mut histogram = Histogram::from_timers(&timers).unwrap();
            for _ in 0..days {
                naive = naive_step(&naive);
                histogram = histogram.step();
            }
            assert_eq!(histogram.total(), naive.len() as u64);
        }
    }
}

mod parsing {
    use super::*;

    #[test]
    fn parses_the_sample_line() {
        assert_eq!(parse_timers("3,4,3,1,2\n"), Ok(vec![3, 4, 3, 1, 2]));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            parse_timers("3,9,1"),
            Err(PopulationError::InvalidTimer { value: 9 })
        );
        assert_eq!(
            parse_timers("-1,2"),
            Err(PopulationError::InvalidTimer { value: -1 })
        );
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(
            parse_timers("3,four,1"),
            Err(PopulationError::UnparsableTimer {
                token: "four".to_string()
            })
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_timers("  \n"), Err(PopulationError::EmptyInput));
    }

    #[test]
    fn from_timers_rejects_out_of_range_values() {
        assert_eq!(
            Histogram::from_timers(&[1, 9]),
            Err(PopulationError::InvalidTimer { value: 9 })
        );
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn histogram_round_trips_through_json() {
        let histogram = sample();
        let json = serde_json::to_string(&histogram).unwrap();
        assert_eq!(serde_json::from_str::<Histogram>(&json).unwrap(), histogram);
    }
}
