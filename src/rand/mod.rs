//! Random index sources for password sampling.
//!
//! The generator needs exactly one capability: a uniformly distributed index
//! below a bound. Modelling it as a trait keeps the cryptographic source
//! swappable for a deterministic one in tests.

mod os;

pub use os::OsRandom;

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `[0, bound)`.
    ///
    /// `bound` must be at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}
