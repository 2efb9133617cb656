//! Composite scoring checks
//!
//! Each check examines one aspect of the password. A passing check is worth
//! one point; a failing check yields a suggestion instead.

mod case;
mod digit;
mod length;
mod special;

pub use case::case_mixture_check;
pub use digit::digit_check;
pub use length::length_check;
pub use special::special_check;

/// Result type for check functions.
/// - `Some(suggestion)` - Check failed with an improvement suggestion
/// - `None` - Check passed
pub type CheckOutcome = Option<String>;
