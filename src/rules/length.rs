//! Length rule - checks the candidate against the policy's length window.

use super::RuleReport;
use crate::evaluator::PasswordPolicy;

/// Checks that the candidate length falls within the policy window.
///
/// Produces exactly one length violation (too short or too long), or a
/// single credit when the length is in range.
pub fn length_rule(candidate: &str, policy: &PasswordPolicy) -> RuleReport {
    let len = candidate.chars().count();
    if len < policy.min_length() {
        return RuleReport::violation(format!(
            "Password must be at least {} characters",
            policy.min_length()
        ));
    }
    if len > policy.max_length() {
        return RuleReport::violation(format!(
            "Password must be at most {} characters",
            policy.max_length()
        ));
    }
    RuleReport::pass()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rule_too_short() {
        let policy = PasswordPolicy::default();
        let report = length_rule("Short1!", &policy);
        assert_eq!(report.credit, 0);
        assert_eq!(
            report.violations,
            vec!["Password must be at least 8 characters".to_string()]
        );
    }

    #[test]
    fn test_length_rule_too_long() {
        let policy = PasswordPolicy::default();
        let report = length_rule("WayTooLongPassword1!", &policy);
        assert_eq!(report.credit, 0);
        assert_eq!(
            report.violations,
            vec!["Password must be at most 12 characters".to_string()]
        );
    }

    #[test]
    fn test_length_rule_exactly_minimum() {
        let policy = PasswordPolicy::default();
        let report = length_rule("12345678", &policy);
        assert_eq!(report, RuleReport::pass());
    }

    #[test]
    fn test_length_rule_exactly_maximum() {
        let policy = PasswordPolicy::default();
        let report = length_rule("123456789012", &policy);
        assert_eq!(report, RuleReport::pass());
    }

    #[test]
    fn test_length_rule_counts_characters_not_bytes() {
        let policy = PasswordPolicy::default();
        // 8 characters, more than 8 bytes
        let report = length_rule("pässwört", &policy);
        assert_eq!(report, RuleReport::pass());
    }

    #[test]
    fn test_length_rule_custom_window() {
        let policy = PasswordPolicy::new().with_min_length(4).with_max_length(6);
        assert_eq!(length_rule("abcd", &policy), RuleReport::pass());
        assert_eq!(
            length_rule("abc", &policy).violations,
            vec!["Password must be at least 4 characters".to_string()]
        );
        assert_eq!(
            length_rule("abcdefg", &policy).violations,
            vec!["Password must be at most 6 characters".to_string()]
        );
    }
}
