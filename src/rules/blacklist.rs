//! Weak-pattern rule - sweeps the blacklist over the candidate.

use super::RuleReport;
use crate::blacklist::{WEAK_PATTERN_MESSAGE, WEAK_PATTERNS};
use crate::evaluator::PasswordPolicy;

/// Matches the candidate against the built-in weak patterns and the
/// policy's extra banned words.
///
/// Each match appends [`WEAK_PATTERN_MESSAGE`] and subtracts one from the
/// score, so the credit here is never positive. Banned words match as
/// ASCII case-insensitive substrings, like the built-in word patterns.
pub fn weak_pattern_rule(candidate: &str, policy: &PasswordPolicy) -> RuleReport {
    let mut matches = 0usize;

    for pattern in WEAK_PATTERNS {
        if pattern.matches(candidate) {
            matches += 1;
        }
    }

    if !policy.banned_words().is_empty() {
        let lowered = candidate.to_ascii_lowercase();
        for word in policy.banned_words() {
            if lowered.contains(word.as_str()) {
                matches += 1;
            }
        }
    }

    RuleReport {
        credit: -(matches as i32),
        violations: vec![WEAK_PATTERN_MESSAGE.to_string(); matches],
    }
}
