//! Timed benchmark phases, generic over the container strategy.
//!
//! Each phase brackets its whole loop with monotonic-clock readings, from
//! immediately before the first draw to immediately after the last
//! mutation. Quadratic total cost is intentional: the phases measure
//! arbitrary-position access, not appends.

use std::time::{Duration, Instant};

use crate::sequence::Sequence;
use crate::workload::WorkloadRng;

/// Populate an initially empty sequence with `n` sorted-position
/// insertions of values drawn uniformly from `[0, n)`.
pub fn insertion<S: Sequence>(seq: &mut S, n: usize, rng: &mut WorkloadRng) -> Duration {
    let start = Instant::now();
    for _ in 0..n {
        let value = rng.below(n as u64);
        seq.insert_sorted(value);
    }
    start.elapsed()
}

/// Drain a populated sequence by removing one uniformly random position
/// at a time until it is empty.
pub fn deletion<S: Sequence>(seq: &mut S, rng: &mut WorkloadRng) -> Duration {
    let start = Instant::now();
    while !seq.is_empty() {
        let index = rng.position(seq.len());
        seq.remove_at(index);
    }
    start.elapsed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{LinkedSequence, VecSequence};

    fn is_sorted(values: &[u64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_insertion_fills_vec_sorted() {
        let mut rng = WorkloadRng::seeded(11);
        let mut seq = VecSequence::new();
        insertion(&mut seq, 200, &mut rng);
        assert_eq!(seq.len(), 200);
        assert!(is_sorted(seq.as_slice()));
        assert!(seq.as_slice().iter().all(|&v| v < 200));
    }

    #[test]
    fn test_insertion_fills_list_sorted() {
        let mut rng = WorkloadRng::seeded(11);
        let mut seq = LinkedSequence::new();
        insertion(&mut seq, 200, &mut rng);
        assert_eq!(seq.len(), 200);
        let values: Vec<u64> = seq.iter().copied().collect();
        assert!(is_sorted(&values));
        assert!(values.iter().all(|&v| v < 200));
    }

    #[test]
    fn test_deletion_drains_any_size() {
        for size in [0usize, 1, 2, 57] {
            let mut rng = WorkloadRng::seeded(13);
            let mut seq = VecSequence::new();
            insertion(&mut seq, size, &mut rng);
            deletion(&mut seq, &mut rng);
            assert!(seq.is_empty(), "vec not drained at size {}", size);

            let mut seq = LinkedSequence::new();
            insertion(&mut seq, size, &mut rng);
            deletion(&mut seq, &mut rng);
            assert!(seq.is_empty(), "list not drained at size {}", size);
        }
    }

    #[test]
    fn test_round_trip_both_strategies() {
        // Identical functional outcome under both strategies: back to
        // empty, regardless of which random draws each one consumed.
        let mut rng = WorkloadRng::seeded(17);

        let mut vec_seq = VecSequence::new();
        insertion(&mut vec_seq, 100, &mut rng);
        let mut list_seq = LinkedSequence::new();
        insertion(&mut list_seq, 100, &mut rng);

        deletion(&mut vec_seq, &mut rng);
        deletion(&mut list_seq, &mut rng);

        assert!(vec_seq.is_empty());
        assert!(list_seq.is_empty());
    }

    #[test]
    fn test_zero_workload_is_a_no_op() {
        let mut rng = WorkloadRng::seeded(19);
        let mut seq = VecSequence::new();
        insertion(&mut seq, 0, &mut rng);
        assert!(seq.is_empty());
        deletion(&mut seq, &mut rng);
        assert!(seq.is_empty());
    }
}
