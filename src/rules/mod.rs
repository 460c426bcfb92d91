//! Password policy rules
//!
//! Each rule inspects one aspect of the candidate and reports a score
//! credit or violation messages. Rules are independent; the evaluator
//! runs all of them.

mod blacklist;
mod length;
mod variety;

pub use blacklist::weak_pattern_rule;
pub use length::length_rule;
pub use variety::{SPECIAL_SYMBOLS, digit_rule, lowercase_rule, symbol_rule, uppercase_rule};

/// Outcome of a single rule check.
///
/// `credit` is added to the running score; weak-pattern penalties make it
/// negative. `violations` may repeat a message across rules; the evaluator
/// deduplicates after all rules have run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    pub credit: i32,
    pub violations: Vec<String>,
}

impl RuleReport {
    /// Rule satisfied: +1 credit, no message.
    pub fn pass() -> Self {
        Self {
            credit: 1,
            violations: Vec::new(),
        }
    }

    /// Rule failed: no credit, one message.
    pub fn violation(message: impl Into<String>) -> Self {
        Self {
            credit: 0,
            violations: vec![message.into()],
        }
    }
}
