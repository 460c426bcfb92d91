//! Result types returned by the evaluator.

/// Score at or above which a password is classified [`Strength::Strong`].
pub const STRONG_THRESHOLD: u32 = 5;

/// Score at or above which a password is classified [`Strength::Medium`].
pub const MEDIUM_THRESHOLD: u32 = 3;

/// Coarse three-level strength classification.
///
/// Ordering is derived, so `Weak < Medium < Strong` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Classifies a clamped (non-negative) score.
    pub fn from_score(score: u32) -> Self {
        if score >= STRONG_THRESHOLD {
            Strength::Strong
        } else if score >= MEDIUM_THRESHOLD {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }

    /// Symbolic color token for text styling.
    ///
    /// The UI layer maps these onto its own color system.
    pub fn color_token(self) -> &'static str {
        match self {
            Strength::Weak => "red",
            Strength::Medium => "yellow",
            Strength::Strong => "green",
        }
    }

    /// Symbolic color token for the filled strength bar.
    ///
    /// Same mapping as [`color_token`](Self::color_token), kept separate
    /// because the bar and the label are styled independently.
    pub fn fill_token(self) -> &'static str {
        match self {
            Strength::Weak => "red",
            Strength::Medium => "yellow",
            Strength::Strong => "green",
        }
    }

    /// Fill percentage for the strength bar.
    pub fn percent(self) -> u8 {
        match self {
            Strength::Weak => 33,
            Strength::Medium => 66,
            Strength::Strong => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one candidate password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Distinct violation messages, in first-occurrence order.
    pub violations: Vec<String>,
    /// Clamped score, never negative.
    pub score: u32,
    /// Classification of [`score`](Self::score).
    pub strength: Strength,
}

impl ValidationResult {
    /// Builds a result from deduplicated violations and the raw score.
    ///
    /// The raw score may be negative after weak-pattern penalties; it is
    /// clamped here and the strength is classified from the clamped value.
    pub(crate) fn from_parts(violations: Vec<String>, raw_score: i32) -> Self {
        let score = raw_score.max(0) as u32;
        Self {
            violations,
            score,
            strength: Strength::from_score(score),
        }
    }

    /// Short-circuit result for an empty candidate.
    pub(crate) fn required() -> Self {
        Self {
            violations: vec!["Password is required".to_string()],
            score: 0,
            strength: Strength::Weak,
        }
    }

    /// `true` iff no rule produced a violation.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}
