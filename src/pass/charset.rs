//! Character categories and pool assembly.

/// Uppercase letters A-Z.
pub const UPPER: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letters a-z.
pub const LOWER: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Digits 0-9.
pub const NUMERIC: &[u8; 10] = b"0123456789";

/// The fixed special symbol set.
pub const SPECIAL: &[u8; 7] = b"!$%&*@^";

/// Which character categories a password may draw from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Categories {
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl Categories {
    /// All four categories enabled.
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            number: true,
            special: true,
        }
    }

    /// True when at least one category is enabled.
    pub fn any(&self) -> bool {
        self.uppercase || self.lowercase || self.number || self.special
    }
}

/// Build the character pool for the selected categories, concatenated in the
/// fixed order upper, lower, digit, special.
pub fn build(categories: &Categories) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(categories));

    if categories.uppercase {
        chars.extend_from_slice(UPPER);
    }
    if categories.lowercase {
        chars.extend_from_slice(LOWER);
    }
    if categories.number {
        chars.extend_from_slice(NUMERIC);
    }
    if categories.special {
        chars.extend_from_slice(SPECIAL);
    }

    chars
}

/// Pool size for the selected categories.
pub fn size(categories: &Categories) -> usize {
    let mut size = 0;
    if categories.uppercase {
        size += UPPER.len();
    }
    if categories.lowercase {
        size += LOWER.len();
    }
    if categories.number {
        size += NUMERIC.len();
    }
    if categories.special {
        size += SPECIAL.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_sizes() {
        assert_eq!(26, UPPER.len());
        assert_eq!(26, LOWER.len());
        assert_eq!(10, NUMERIC.len());
        assert_eq!(7, SPECIAL.len());
    }

    #[test]
    fn letters_and_digits_are_sequential_ascii() {
        for pair in UPPER.windows(2) {
            assert_eq!(pair[0] + 1, pair[1]);
        }
        for pair in LOWER.windows(2) {
            assert_eq!(pair[0] + 1, pair[1]);
        }
        for pair in NUMERIC.windows(2) {
            assert_eq!(pair[0] + 1, pair[1]);
        }

        assert!(UPPER.iter().all(u8::is_ascii_uppercase));
        assert!(LOWER.iter().all(u8::is_ascii_lowercase));
        assert!(NUMERIC.iter().all(u8::is_ascii_digit));
    }

    #[test]
    fn special_set_is_exact() {
        assert_eq!(SPECIAL, b"!$%&*@^");
    }

    #[test]
    fn categories_are_disjoint() {
        let sets: [&[u8]; 4] = [UPPER, LOWER, NUMERIC, SPECIAL];
        for (i, a) in sets.iter().enumerate() {
            for b in &sets[i + 1..] {
                for c in *a {
                    assert!(!b.contains(c), "{} appears in two categories", *c as char);
                }
            }
        }
    }

    #[test]
    fn build_concatenates_in_fixed_order() {
        let all = Categories::all();
        let pool = build(&all);

        let mut expected = Vec::new();
        expected.extend_from_slice(UPPER);
        expected.extend_from_slice(LOWER);
        expected.extend_from_slice(NUMERIC);
        expected.extend_from_slice(SPECIAL);

        assert_eq!(expected, pool);
        assert_eq!(size(&all), pool.len());
    }

    #[test]
    fn build_skips_disabled_categories() {
        let number_only = Categories {
            number: true,
            ..Default::default()
        };
        assert_eq!(NUMERIC.to_vec(), build(&number_only));
        assert_eq!(10, size(&number_only));

        let none = Categories::default();
        assert!(build(&none).is_empty());
        assert_eq!(0, size(&none));
    }
}
