//! Randomness capability used for shuffling.

use rand::Rng;

/// A source of uniformly distributed indices.
///
/// Shuffling only ever asks for an index in `[0, bound)`, so anything that can
/// answer that question can drive a deal. Every [`rand::Rng`] is a
/// `RandomSource`, which makes seeded generators such as
/// [`StdRng`](rand::rngs::StdRng) the usual way to get reproducible games.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `[0, bound)`.
    ///
    /// `bound` is always at least 1.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn index_below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
