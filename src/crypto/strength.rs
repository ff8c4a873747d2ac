//! Advisory passphrase strength scoring
//!
//! The score never gates any operation; the only hard rule is the
//! minimum-length check applied when a new passphrase is chosen.

use crate::error::{BinderError, BinderResult, MIN_PASSPHRASE_LEN};

/// Result of scoring a candidate passphrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// 0-7: up to three points for length (8/12/16 chars), one point per
    /// character class (lowercase, uppercase, digit, symbol)
    pub score: u8,
    /// Improvement hints, empty at the maximum score
    pub hints: Vec<&'static str>,
}

impl StrengthReport {
    /// Coarse label for display
    pub fn label(&self) -> &'static str {
        match self.score {
            0..=2 => "weak",
            3..=4 => "fair",
            5..=6 => "good",
            _ => "strong",
        }
    }
}

/// Score a candidate passphrase. Purely advisory.
pub fn score_passphrase(candidate: &str) -> StrengthReport {
    let mut score = 0u8;
    let mut hints = Vec::new();

    let len = candidate.chars().count();
    if len >= 8 {
        score += 1;
    }
    if len >= 12 {
        score += 1;
    } else {
        hints.push("use at least 12 characters");
    }
    if len >= 16 {
        score += 1;
    }

    if candidate.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    } else {
        hints.push("add a lowercase letter");
    }
    if candidate.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    } else {
        hints.push("add an uppercase letter");
    }
    if candidate.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        hints.push("add a digit");
    }
    if candidate
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
    {
        score += 1;
    } else {
        hints.push("add a symbol");
    }

    StrengthReport { score, hints }
}

/// The one hard rule for new passphrases: the minimum length.
pub fn validate_passphrase(candidate: &str) -> BinderResult<()> {
    if candidate.trim().is_empty() || candidate.chars().count() < MIN_PASSPHRASE_LEN {
        return Err(BinderError::WeakPassphrase);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores_zero() {
        let report = score_passphrase("");
        assert_eq!(report.score, 0);
        assert!(!report.hints.is_empty());
    }

    #[test]
    fn test_maximum_score() {
        let report = score_passphrase("Correct Horse 9 Staples!");
        assert_eq!(report.score, 7);
        assert!(report.hints.is_empty());
        assert_eq!(report.label(), "strong");
    }

    #[test]
    fn test_length_tiers() {
        assert_eq!(score_passphrase("aaaaaaaa").score, 2); // 8 chars + lowercase
        assert_eq!(score_passphrase("aaaaaaaaaaaa").score, 3); // 12 chars
        assert_eq!(score_passphrase("aaaaaaaaaaaaaaaa").score, 4); // 16 chars
    }

    #[test]
    fn test_hints_name_missing_classes() {
        let report = score_passphrase("lowercaseonly");
        assert!(report.hints.contains(&"add an uppercase letter"));
        assert!(report.hints.contains(&"add a digit"));
        assert!(report.hints.contains(&"add a symbol"));
        assert!(!report.hints.contains(&"add a lowercase letter"));
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(validate_passphrase("12345678").is_ok());
        assert!(matches!(
            validate_passphrase("1234567"),
            Err(BinderError::WeakPassphrase)
        ));
        assert!(matches!(
            validate_passphrase("        "),
            Err(BinderError::WeakPassphrase)
        ));
    }
}
