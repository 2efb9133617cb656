//! Length check - minimum character count.

use super::CheckOutcome;
use crate::policy::Policy;
use crate::types::CriteriaMatch;

/// Checks if the password meets the policy's minimum length.
///
/// # Returns
/// - `Some(suggestion)` if the password is too short
/// - `None` if the password has sufficient length
pub fn length_check(criteria: &CriteriaMatch, policy: &Policy) -> CheckOutcome {
    if !criteria.length {
        return Some(format!("Use at least {} characters.", policy.min_length()));
    }
    None
}
