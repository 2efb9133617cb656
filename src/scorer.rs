//! Password scorer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{
    CheckOutcome, case_mixture_check, digit_check, length_check, special_check,
};
use crate::entropy::estimate_entropy_with_policy;
use crate::policy::Policy;
use crate::types::{CriteriaMatch, PasswordEvaluation, StrengthReport};

/// Delay before a queued async evaluation runs, so per-keystroke callers can
/// cancel superseded requests cheaply.
#[cfg(feature = "async")]
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Scores a password under the default policy.
///
/// Total over all inputs: the empty string scores 0 with all four
/// suggestions present.
pub fn score_password(password: &SecretString) -> StrengthReport {
    score_password_with_policy(password, &Policy::default())
}

/// Scores a password under a custom policy.
///
/// # Returns
/// A `StrengthReport` with the score in `[0, 4]`, one suggestion per failed
/// check in fixed check order (length, case, digit, special), and the five
/// per-criterion booleans.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn score_password_with_policy(password: &SecretString, policy: &Policy) -> StrengthReport {
    let criteria = CriteriaMatch::classify(password.expose_secret(), policy);

    // Orchestrator: execute checks in fixed order
    let checks: [(&str, fn(&CriteriaMatch, &Policy) -> CheckOutcome); 4] = [
        ("length", length_check),
        ("case", case_mixture_check),
        ("digit", digit_check),
        ("special", special_check),
    ];

    let mut score: u8 = 0;
    let mut suggestions = Vec::new();

    for (check_name, check_fn) in checks {
        match check_fn(&criteria, policy) {
            Some(suggestion) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("check failed: {}", check_name);
                suggestions.push(suggestion);
            }
            None => score += 1,
        }
    }

    StrengthReport {
        score,
        suggestions,
        criteria,
    }
}

/// Runs the scorer and the entropy estimator together under the default
/// policy.
pub fn evaluate_password(password: &SecretString) -> PasswordEvaluation {
    evaluate_password_with_policy(password, &Policy::default())
}

/// Runs the scorer and the entropy estimator together under a custom policy.
pub fn evaluate_password_with_policy(
    password: &SecretString,
    policy: &Policy,
) -> PasswordEvaluation {
    PasswordEvaluation {
        report: score_password_with_policy(password, policy),
        entropy_bits: estimate_entropy_with_policy(password, policy),
    }
}

/// Async version that sends the evaluation result via channel.
///
/// Waits out a short debounce window first; cancelling the token during the
/// wait (or before the send) drops the request without delivering a result.
/// The evaluation itself is the same pure computation as
/// [`evaluate_password`].
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled during debounce");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password(password);

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before send");
        return;
    }

    if tx.send(evaluation).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result");
    }
}
