//! Scoring policy - configurable thresholds and character set.
//!
//! The default policy matches the documented contract (minimum length 8,
//! the fixed 32-symbol special set). A custom policy can be built directly
//! or loaded from environment variables.

use std::borrow::Cow;
use thiserror::Error;

use crate::charset::SPECIAL_CHARS;

/// Environment variable overriding the minimum length.
pub const MIN_LENGTH_ENV: &str = "PWD_MIN_LENGTH";

/// Environment variable overriding the special-character set.
pub const SPECIAL_CHARS_ENV: &str = "PWD_SPECIAL_CHARS";

const DEFAULT_MIN_LENGTH: usize = 8;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("minimum length must be at least 1")]
    ZeroMinLength,
    #[error("special character set must not be empty")]
    EmptySpecialSet,
    #[error("invalid PWD_MIN_LENGTH value {value:?}: {source}")]
    InvalidMinLength {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Thresholds and character set used by both the scorer and the entropy
/// estimator. Sharing one policy keeps their character-class definitions
/// identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    min_length: usize,
    special_chars: Cow<'static, str>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            special_chars: Cow::Borrowed(SPECIAL_CHARS),
        }
    }
}

impl Policy {
    /// Builds a custom policy.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `min_length` is zero
    /// - `special_chars` is empty
    pub fn new(min_length: usize, special_chars: impl Into<String>) -> Result<Self, PolicyError> {
        if min_length == 0 {
            return Err(PolicyError::ZeroMinLength);
        }
        let special_chars: String = special_chars.into();
        if special_chars.is_empty() {
            return Err(PolicyError::EmptySpecialSet);
        }
        Ok(Self {
            min_length,
            special_chars: Cow::Owned(special_chars),
        })
    }

    /// Loads the policy from the environment, falling back to the defaults
    /// for any unset variable.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_MIN_LENGTH`: minimum character count (nonzero integer)
    /// - `PWD_SPECIAL_CHARS`: replacement special-character set (non-empty)
    ///
    /// # Errors
    ///
    /// Returns error if a set variable fails the same validation as
    /// [`Policy::new`].
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Ok(value) = std::env::var(MIN_LENGTH_ENV) {
            let min_length: usize =
                value
                    .trim()
                    .parse()
                    .map_err(|source| PolicyError::InvalidMinLength {
                        value: value.clone(),
                        source,
                    })?;
            if min_length == 0 {
                return Err(PolicyError::ZeroMinLength);
            }
            policy.min_length = min_length;
        }

        if let Ok(value) = std::env::var(SPECIAL_CHARS_ENV) {
            if value.is_empty() {
                return Err(PolicyError::EmptySpecialSet);
            }
            policy.special_chars = Cow::Owned(value);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "policy loaded: min_length={}, special set of {} symbols",
            policy.min_length,
            policy.special_space()
        );

        Ok(policy)
    }

    /// Minimum number of characters required by the length check.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns `true` if `c` counts as a special character under this policy.
    pub fn is_special(&self, c: char) -> bool {
        self.special_chars.contains(c)
    }

    /// Alphabet size contributed by the special class when present.
    pub fn special_space(&self) -> usize {
        self.special_chars.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value) };
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key) };
    }

    fn clear_policy_env() {
        remove_env(MIN_LENGTH_ENV);
        remove_env(SPECIAL_CHARS_ENV);
    }

    #[test]
    fn test_default_policy() {
        let policy = Policy::default();
        assert_eq!(policy.min_length(), 8);
        assert_eq!(policy.special_space(), 32);
        assert!(policy.is_special('!'));
        assert!(!policy.is_special('a'));
    }

    #[test]
    fn test_new_rejects_zero_min_length() {
        let result = Policy::new(0, "!@#");
        assert!(matches!(result, Err(PolicyError::ZeroMinLength)));
    }

    #[test]
    fn test_new_rejects_empty_special_set() {
        let result = Policy::new(8, "");
        assert!(matches!(result, Err(PolicyError::EmptySpecialSet)));
    }

    #[test]
    fn test_new_custom_policy() {
        let policy = Policy::new(12, "!?").expect("valid policy");
        assert_eq!(policy.min_length(), 12);
        assert_eq!(policy.special_space(), 2);
        assert!(policy.is_special('?'));
        assert!(!policy.is_special('@'));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_policy_env();
        let policy = Policy::from_env().expect("defaults are valid");
        assert_eq!(policy, Policy::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_policy_env();
        set_env(MIN_LENGTH_ENV, "10");
        set_env(SPECIAL_CHARS_ENV, "!?*");

        let policy = Policy::from_env().expect("overrides are valid");
        assert_eq!(policy.min_length(), 10);
        assert_eq!(policy.special_space(), 3);

        clear_policy_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_min_length() {
        clear_policy_env();
        set_env(MIN_LENGTH_ENV, "ten");

        let result = Policy::from_env();
        assert!(matches!(
            result,
            Err(PolicyError::InvalidMinLength { .. })
        ));

        clear_policy_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_min_length() {
        clear_policy_env();
        set_env(MIN_LENGTH_ENV, "0");

        let result = Policy::from_env();
        assert!(matches!(result, Err(PolicyError::ZeroMinLength)));

        clear_policy_env();
    }
}
