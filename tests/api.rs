//! Public API surface tests.

use passgen::pass::charset;
use passgen::{Categories, Error, Generator, RandomSource, generate_password};

/// Deterministic source counting up from zero, reduced by the bound the
/// generator actually passes in.
struct Counter(usize);

impl RandomSource for Counter {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.0 % bound;
        self.0 += 1;
        value
    }
}

#[test]
fn flat_wrapper_matches_requested_length() {
    let password = generate_password(24, true, true, true, true).unwrap();
    assert_eq!(24, password.len());
}

#[test]
fn flat_wrapper_rejects_bad_inputs() {
    assert!(matches!(
        generate_password(0, true, true, true, true),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        generate_password(10, false, false, false, false),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn injected_source_walks_the_pool_in_order() {
    let mut generator = Generator::with_source(Counter(0));
    let pool = charset::build(&Categories::all());

    let password = generator.generate(pool.len(), &Categories::all()).unwrap();
    assert_eq!(pool, password.as_bytes());
}

#[test]
fn characters_come_only_from_selected_categories() {
    let lower_and_number = Categories {
        lowercase: true,
        number: true,
        ..Default::default()
    };
    let password = Generator::new().generate(64, &lower_and_number).unwrap();
    assert!(
        password
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    );
}
