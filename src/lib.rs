//! Secure password generation with selectable character categories.
//!
//! `pass` builds and samples character pools, `rand` abstracts the entropy
//! source so a deterministic one can be substituted in tests.

pub mod error;
pub mod pass;
pub mod rand;

pub use error::Error;
pub use pass::{Categories, Generator, generate_password};
pub use rand::{OsRandom, RandomSource};
