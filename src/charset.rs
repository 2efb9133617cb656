//! Character-class definitions shared by the scorer and the entropy
//! estimator.
//!
//! Both consumers must agree on what counts as a "special" character and on
//! the per-class alphabet sizes, so the definitions live here and nowhere
//! else.

/// The fixed set of recognized special characters (32 symbols).
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_-+=[{]};:'\",<.>/?\\|`~";

/// Alphabet size contributed by lowercase ASCII letters.
pub const LOWERCASE_SPACE: usize = 26;

/// Alphabet size contributed by uppercase ASCII letters.
pub const UPPERCASE_SPACE: usize = 26;

/// Alphabet size contributed by decimal digits.
pub const DIGIT_SPACE: usize = 10;

/// Returns `true` if `c` belongs to the default special-character set.
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_set_has_32_symbols() {
        assert_eq!(SPECIAL_CHARS.chars().count(), 32);
    }

    #[test]
    fn test_is_special_members() {
        for c in ['!', '@', '\\', '"', '\'', '`', '~', '['] {
            assert!(is_special(c), "expected '{}' to be special", c);
        }
    }

    #[test]
    fn test_is_special_non_members() {
        for c in ['a', 'Z', '0', ' ', 'é', '€'] {
            assert!(!is_special(c), "expected '{}' not to be special", c);
        }
    }
}
