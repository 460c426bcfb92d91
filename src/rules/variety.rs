//! Character variety rules - one check per required character class.

use super::RuleReport;

/// Special symbols accepted by [`symbol_rule`].
pub const SPECIAL_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Checks for at least one lowercase letter (`a`-`z`).
pub fn lowercase_rule(candidate: &str) -> RuleReport {
    if candidate.chars().any(|c| c.is_ascii_lowercase()) {
        RuleReport::pass()
    } else {
        RuleReport::violation("Password must contain at least one lowercase letter")
    }
}

/// Checks for at least one uppercase letter (`A`-`Z`).
pub fn uppercase_rule(candidate: &str) -> RuleReport {
    if candidate.chars().any(|c| c.is_ascii_uppercase()) {
        RuleReport::pass()
    } else {
        RuleReport::violation("Password must contain at least one uppercase letter")
    }
}

/// Checks for at least one digit (`0`-`9`).
pub fn digit_rule(candidate: &str) -> RuleReport {
    if candidate.chars().any(|c| c.is_ascii_digit()) {
        RuleReport::pass()
    } else {
        RuleReport::violation("Password must contain at least one number")
    }
}

/// Checks for at least one symbol from [`SPECIAL_SYMBOLS`].
pub fn symbol_rule(candidate: &str) -> RuleReport {
    if candidate.chars().any(|c| SPECIAL_SYMBOLS.contains(c)) {
        RuleReport::pass()
    } else {
        RuleReport::violation("Password must contain at least one special character")
    }
}
