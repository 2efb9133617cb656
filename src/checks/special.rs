//! Special-character check - requires a symbol from the policy's set.

use super::CheckOutcome;
use crate::policy::Policy;
use crate::types::CriteriaMatch;

/// Checks if the password contains a special character.
///
/// # Returns
/// - `Some(suggestion)` if no special character is present
/// - `None` if one is present
pub fn special_check(criteria: &CriteriaMatch, _policy: &Policy) -> CheckOutcome {
    if !criteria.special {
        return Some("Include a special character (e.g. !@#$%^&*).".to_string());
    }
    None
}
