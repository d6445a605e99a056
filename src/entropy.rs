//! Randomness sources for password generation.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform random selection used by both generators.
///
/// Implementations must return a value in `[0, n)`. Callers never pass `n == 0`.
pub trait RandomSource {
    fn index(&mut self, n: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    #[inline]
    fn index(&mut self, n: usize) -> usize {
        (**self).index(n)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    #[inline]
    fn index(&mut self, n: usize) -> usize {
        (**self).index(n)
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local generator seeded from the operating system.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn index(&mut self, n: usize) -> usize {
        self.0.random_range(0..n)
    }
}

/// Deterministic source that replays a fixed cycle of values.
///
/// Each value is reduced modulo the requested bound, so `Sequence::new([0])`
/// always selects the first element of every pool. Meant for tests and
/// pinned examples, never for real passwords.
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Vec<usize>,
    pos: usize,
}

impl Sequence {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0);
        }
        Self { values, pos: 0 }
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl RandomSource for Sequence {
    fn index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "index bound must be positive");
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_cycles_and_reduces() {
        let mut seq = Sequence::new([3, 7, 12]);
        assert_eq!(seq.index(10), 3);
        assert_eq!(seq.index(5), 2);
        assert_eq!(seq.index(10), 2);
        assert_eq!(seq.index(100), 3);
        assert_eq!(seq.drawn(), 4);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut seq = Sequence::new(Vec::new());
        assert_eq!(seq.index(26), 0);
        assert_eq!(seq.index(1), 0);
    }

    #[test]
    fn rng_source_stays_in_bounds() {
        let mut rng = RngSource::thread();
        for n in 1..200 {
            assert!(rng.index(n) < n);
        }
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        let xs: Vec<usize> = (0..32).map(|_| a.index(1000)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.index(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn boxed_source_delegates() {
        let mut boxed: Box<dyn RandomSource> = Box::new(Sequence::new([4]));
        assert_eq!(boxed.index(3), 1);
    }
}
