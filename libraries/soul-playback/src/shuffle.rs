//! Shuffle engine for playback order
//!
//! Fisher-Yates over a private copy of the caller's tracks. The random source
//! is injected so callers (and tests) decide where randomness comes from.

use rand::{thread_rng, Rng};

/// Return a uniformly shuffled copy of `items` using the thread-local RNG
///
/// The input is never modified. Every one of the `n!` orderings is equally
/// likely.
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled_with(items, &mut thread_rng())
}

/// Return a uniformly shuffled copy of `items` drawing from `rng`
pub fn shuffled_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}

/// Fisher-Yates swap loop
///
/// For `i` from `n` down to 1, swaps position `i - 1` with a uniform pick
/// from `[0, i)`. Slices of length 0 or 1 are left untouched.
pub fn shuffle_in_place<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..=items.len()).rev() {
        let j = rng.gen_range(0..i);
        items.swap(i - 1, j);
    }
}
