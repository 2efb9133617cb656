//! Password strength scoring and entropy estimation library
//!
//! This library scores a password against four heuristic checks (length,
//! case mixture, digits, special characters) and estimates its entropy in
//! bits from the character classes it uses. Both core functions are pure
//! and cheap enough to call on every keystroke.
//!
//! # Features
//!
//! - `async` (default): Enables a debounced, cancellable channel-sending
//!   evaluation for reactive callers
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_MIN_LENGTH`: Custom minimum length for [`Policy::from_env`]
//!   (default: 8)
//! - `PWD_SPECIAL_CHARS`: Custom special-character set for
//!   [`Policy::from_env`] (default: the fixed 32-symbol set)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{estimate_entropy, score_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let report = score_password(&password);
//! println!("Score: {}/4 ({})", report.score, report.strength());
//! for suggestion in &report.suggestions {
//!     println!("- {}", suggestion);
//! }
//!
//! let bits = estimate_entropy(&password);
//! println!("Entropy: {:.2} bits", bits);
//! ```

// Internal modules
mod charset;
mod checks;
mod entropy;
mod policy;
mod scorer;
mod types;

// Public API
pub use charset::{DIGIT_SPACE, LOWERCASE_SPACE, SPECIAL_CHARS, UPPERCASE_SPACE};
pub use entropy::{estimate_entropy, estimate_entropy_with_policy};
pub use policy::{Policy, PolicyError, MIN_LENGTH_ENV, SPECIAL_CHARS_ENV};
pub use scorer::{
    evaluate_password, evaluate_password_with_policy, score_password, score_password_with_policy,
};
pub use types::{CriteriaMatch, PasswordEvaluation, Strength, StrengthReport, MAX_SCORE};

#[cfg(feature = "async")]
pub use scorer::evaluate_password_tx;
