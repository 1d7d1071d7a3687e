//! Unbiased random shuffling and bounded sampling.
//!
//! The random source is injected by the caller, so sampling stays
//! deterministic under test (seed a `StdRng`) while production callers pass
//! `rand::thread_rng()`.

use rand::Rng;

/// Return a uniformly random permutation of `items` (input unmodified).
///
/// Fisher-Yates: walk `i` from `len-1` down to `1`, draw a uniform
/// `j in [0, i]`, swap positions `i` and `j`. Each of the `n!` orderings is
/// equally likely given a uniform source.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// The first `count` elements of a fresh shuffle of `items`.
///
/// `count >= items.len()` returns a full shuffled copy; `count == 0` returns
/// the empty sequence.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut shuffled = shuffle(items, rng);
    shuffled.truncate(count);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_leaves_input_unmodified() {
        let items: Vec<u32> = (0..10).collect();
        let before = items.clone();
        let mut rng = StdRng::seed_from_u64(7);
        let _ = shuffle(&items, &mut rng);
        assert_eq!(items, before);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let items: Vec<u32> = (0..50).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut shuffled = shuffle(&items, &mut rng);
        assert_eq!(shuffled.len(), items.len());
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn shuffle_is_deterministic_for_a_fixed_seed() {
        let items: Vec<u32> = (0..20).collect();
        let a = shuffle(&items, &mut StdRng::seed_from_u64(42));
        let b = shuffle(&items, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn sample_zero_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample(&items, 0, &mut rng).is_empty());
    }

    #[test]
    fn sample_beyond_length_returns_all_elements() {
        let items: Vec<u32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut sampled = sample(&items, 100, &mut rng);
        sampled.sort_unstable();
        assert_eq!(sampled, items);
    }

    #[test]
    fn sample_of_empty_input_is_empty() {
        let items: Vec<u32> = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample(&items, 12, &mut rng).is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a shuffle is a permutation (same multiset, same
            /// length) whatever the seed.
            #[test]
            fn shuffle_preserves_multiset(
                items in proptest::collection::vec(any::<u32>(), 0..100),
                seed in any::<u64>(),
            ) {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut shuffled = shuffle(&items, &mut rng);
                prop_assert_eq!(shuffled.len(), items.len());
                let mut sorted_input = items.clone();
                sorted_input.sort_unstable();
                shuffled.sort_unstable();
                prop_assert_eq!(shuffled, sorted_input);
            }

            /// Property: a sample never exceeds the requested count and is
            /// drawn from the input multiset.
            #[test]
            fn sample_is_bounded_subset(
                items in proptest::collection::vec(any::<u32>(), 0..100),
                count in 0usize..120,
                seed in any::<u64>(),
            ) {
                let mut rng = StdRng::seed_from_u64(seed);
                let sampled = sample(&items, count, &mut rng);
                prop_assert_eq!(sampled.len(), count.min(items.len()));
                let mut pool = items.clone();
                for element in &sampled {
                    let pos = pool.iter().position(|candidate| candidate == element);
                    prop_assert!(pos.is_some());
                    pool.swap_remove(pos.unwrap());
                }
            }
        }
    }
}
