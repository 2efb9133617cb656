//! Case-mixture check - requires both uppercase and lowercase letters.

use super::CheckOutcome;
use crate::policy::Policy;
use crate::types::CriteriaMatch;

/// Checks if the password mixes letter cases.
///
/// This is a single composite check: the `upper` and `lower` criteria are
/// reported separately, but only their conjunction earns the point.
///
/// # Returns
/// - `Some(suggestion)` if either case is missing
/// - `None` if both cases are present
pub fn case_mixture_check(criteria: &CriteriaMatch, _policy: &Policy) -> CheckOutcome {
    if !(criteria.upper && criteria.lower) {
        return Some("Use both uppercase and lowercase letters.".to_string());
    }
    None
}
