//! Password generation.

use log::debug;

use super::charset::{self, Categories};
use crate::error::Error;
use crate::rand::{OsRandom, RandomSource};

/// Password generator over a pluggable random source.
pub struct Generator<R: RandomSource> {
    source: R,
}

impl Generator<OsRandom> {
    /// Generator backed by the OS cryptographic source.
    pub fn new() -> Self {
        Self::with_source(OsRandom::new())
    }
}

impl Default for Generator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Generator<R> {
    /// Generator over an explicit source. Tests use this to inject a
    /// deterministic one.
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Generate a password of exactly `length` characters, each drawn
    /// uniformly and with replacement from the union of the selected
    /// categories.
    ///
    /// Fails with [`Error::InvalidArgument`] when `length` is zero or no
    /// category is selected. Validation happens before any allocation.
    pub fn generate(&mut self, length: usize, categories: &Categories) -> Result<String, Error> {
        if length == 0 {
            return Err(Error::InvalidArgument("password length must be > 0"));
        }
        if !categories.any() {
            return Err(Error::InvalidArgument(
                "at least one character category must be selected",
            ));
        }

        debug!(
            "generating password length={} uppercase={} lowercase={} number={} special={}",
            length, categories.uppercase, categories.lowercase, categories.number, categories.special
        );

        let pool = charset::build(categories);

        let bytes: Vec<u8> = (0..length)
            .map(|_| pool[self.source.next_index(pool.len())])
            .collect();

        // Safety: the pool contains only ASCII bytes from the charset
        Ok(unsafe { String::from_utf8_unchecked(bytes) })
    }
}

/// Flat convenience wrapper over [`Generator::new`] taking the four category
/// flags directly.
pub fn generate_password(
    length: usize,
    uppercase: bool,
    lowercase: bool,
    number: bool,
    special: bool,
) -> Result<String, Error> {
    Generator::new().generate(
        length,
        &Categories {
            uppercase,
            lowercase,
            number,
            special,
        },
    )
}
