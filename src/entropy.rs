//! Entropy estimation - alphabet-size heuristic.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{DIGIT_SPACE, LOWERCASE_SPACE, UPPERCASE_SPACE};
use crate::policy::Policy;
use crate::types::CriteriaMatch;

/// Estimates password entropy in bits under the default policy.
///
/// The estimate assumes every position was drawn uniformly from the union of
/// the character classes present anywhere in the password, so it is an upper
/// bound: `"aaaaaaaa"` is charged the full 26-letter alphabet. Consumers are
/// documented as receiving an estimate, not a measurement.
pub fn estimate_entropy(password: &SecretString) -> f64 {
    estimate_entropy_with_policy(password, &Policy::default())
}

/// Estimates password entropy in bits under a custom policy.
///
/// Each class present contributes its alphabet size once (lowercase 26,
/// uppercase 26, digits 10, specials the size of the policy's set). With no
/// recognized class, including the empty password, the result is exactly
/// `0.0`; otherwise `chars * log2(alphabet)`.
pub fn estimate_entropy_with_policy(password: &SecretString, policy: &Policy) -> f64 {
    let pwd = password.expose_secret();
    let criteria = CriteriaMatch::classify(pwd, policy);

    let mut alphabet: usize = 0;
    if criteria.lower {
        alphabet += LOWERCASE_SPACE;
    }
    if criteria.upper {
        alphabet += UPPERCASE_SPACE;
    }
    if criteria.digit {
        alphabet += DIGIT_SPACE;
    }
    if criteria.special {
        alphabet += policy.special_space();
    }

    // Guard the log domain: no recognized class means zero bits, not NaN.
    if alphabet == 0 {
        return 0.0;
    }

    pwd.chars().count() as f64 * (alphabet as f64).log2()
}
