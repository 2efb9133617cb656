//! Digit check - requires at least one decimal digit.

use super::CheckOutcome;
use crate::policy::Policy;
use crate::types::CriteriaMatch;

/// Checks if the password contains at least one decimal digit.
///
/// # Returns
/// - `Some(suggestion)` if no digit is present
/// - `None` if a digit is present
pub fn digit_check(criteria: &CriteriaMatch, _policy: &Policy) -> CheckOutcome {
    if !criteria.digit {
        return Some("Add at least one number.".to_string());
    }
    None
}
