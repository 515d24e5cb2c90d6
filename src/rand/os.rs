//! OS-backed entropy source.

use ::rand::Rng;
use ::rand::rngs::OsRng;

use super::RandomSource;

/// Cryptographically strong source backed by the operating system generator
/// (`getrandom`, falling back to `/dev/urandom`). Every draw pulls from
/// kernel entropy, so there is no seed to manage and no state to protect
/// across callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandom {
    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        OsRng.gen_range(0..bound)
    }
}
