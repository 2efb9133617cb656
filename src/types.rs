//! Result types returned by the scorer and the entropy estimator.

use std::fmt;

use crate::policy::Policy;

/// Maximum achievable score (four composite checks, one point each).
pub const MAX_SCORE: u8 = 4;

/// The five per-criterion booleans, each computed independently from the
/// password.
///
/// `upper` and `lower` are reported separately here even though the scorer
/// merges them into a single case-mixture check; consumers may inspect the
/// criteria independently of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CriteriaMatch {
    pub length: bool,
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
}

impl CriteriaMatch {
    /// Classifies `password` under `policy`.
    ///
    /// This is the single classification routine shared by the scorer and
    /// the entropy estimator, so the two can never disagree on what counts
    /// as a given character class. Length is measured in characters, not
    /// bytes; letter and digit classes are ASCII-only.
    pub fn classify(password: &str, policy: &Policy) -> Self {
        Self {
            length: password.chars().count() >= policy.min_length(),
            upper: password.chars().any(|c| c.is_ascii_uppercase()),
            lower: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| policy.is_special(c)),
        }
    }

    /// The criteria as `(name, matched)` pairs in fixed display order:
    /// `length`, `upper`, `lower`, `digit`, `special`.
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("length", self.length),
            ("upper", self.upper),
            ("lower", self.lower),
            ("digit", self.digit),
            ("special", self.special),
        ]
    }
}

/// Labeled strength tier derived from the score.
///
/// Scores 3 and 4 collapse into a single `Strong` tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Strength::VeryWeak,
            1 => Strength::Weak,
            2 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of scoring a single password.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    /// Number of satisfied composite checks, in `[0, 4]`.
    pub score: u8,
    /// One suggestion per failed check, in fixed check order
    /// (length, case, digit, special).
    pub suggestions: Vec<String>,
    /// The five per-criterion booleans.
    pub criteria: CriteriaMatch,
}

impl StrengthReport {
    /// Labeled tier for this score.
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }

    /// Fraction of the maximum score, for progress indicators.
    pub fn progress(&self) -> f32 {
        f32::from(self.score) / f32::from(MAX_SCORE)
    }
}

/// Combined scorer and entropy outcome, the full answer a presentation
/// surface renders per input event.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEvaluation {
    pub report: StrengthReport,
    /// Heuristic upper-bound estimate of randomness, in bits. An estimate
    /// from alphabet size and length, not measured randomness.
    pub entropy_bits: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_tiers() {
        assert_eq!(Strength::from_score(0), Strength::VeryWeak);
        assert_eq!(Strength::from_score(1), Strength::Weak);
        assert_eq!(Strength::from_score(2), Strength::Moderate);
        assert_eq!(Strength::from_score(3), Strength::Strong);
        assert_eq!(Strength::from_score(4), Strength::Strong);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(Strength::VeryWeak.to_string(), "Very Weak");
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Moderate.to_string(), "Moderate");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_classify_all_classes() {
        let criteria = CriteriaMatch::classify("Password1!", &Policy::default());
        assert!(criteria.length);
        assert!(criteria.upper);
        assert!(criteria.lower);
        assert!(criteria.digit);
        assert!(criteria.special);
    }

    #[test]
    fn test_classify_empty() {
        let criteria = CriteriaMatch::classify("", &Policy::default());
        assert_eq!(criteria, CriteriaMatch::default());
    }

    #[test]
    fn test_classify_non_ascii_matches_nothing() {
        let criteria = CriteriaMatch::classify("ÜßÉÇ", &Policy::default());
        assert!(!criteria.upper);
        assert!(!criteria.lower);
        assert!(!criteria.digit);
        assert!(!criteria.special);
    }

    #[test]
    fn test_classify_counts_characters_not_bytes() {
        // Eight two-byte characters satisfy the default length requirement.
        let criteria = CriteriaMatch::classify("éééééééé", &Policy::default());
        assert!(criteria.length);
    }

    #[test]
    fn test_entries_fixed_order() {
        let criteria = CriteriaMatch::classify("abc1", &Policy::default());
        let names: Vec<&str> = criteria.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["length", "upper", "lower", "digit", "special"]);
    }

    #[test]
    fn test_progress_fraction() {
        let report = StrengthReport {
            score: 3,
            suggestions: vec![],
            criteria: CriteriaMatch::default(),
        };
        assert_eq!(report.progress(), 0.75);
    }
}
