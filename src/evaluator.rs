//! Password policy evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::{BannedWordsError, load_banned_words};
use crate::rules::{
    RuleReport, digit_rule, length_rule, lowercase_rule, symbol_rule, uppercase_rule,
    weak_pattern_rule,
};
use crate::types::ValidationResult;

type RuleFn = fn(&str, &PasswordPolicy) -> RuleReport;

/// Password policy configuration.
///
/// The default policy is the registration policy: length window of 8 to 12
/// characters, all four character classes required, built-in weak patterns
/// only. Extra banned words participate in the weak-pattern rule with the
/// same penalty semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
    banned_words: Vec<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 12,
            banned_words: Vec::new(),
        }
    }
}

impl PasswordPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Adds extra banned words, normalized like the file loader: trimmed,
    /// lowercased, empties and duplicates dropped.
    #[must_use]
    pub fn with_banned_words(mut self, words: Vec<String>) -> Self {
        for word in words {
            let word = word.trim().to_lowercase();
            if !word.is_empty() && !self.banned_words.contains(&word) {
                self.banned_words.push(word);
            }
        }
        self
    }

    /// Adds extra banned words loaded from a file.
    ///
    /// See [`load_banned_words`] for the file format and error cases.
    pub fn with_banned_words_file<P: AsRef<std::path::Path>>(
        self,
        path: P,
    ) -> Result<Self, BannedWordsError> {
        Ok(self.with_banned_words(load_banned_words(path)?))
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn banned_words(&self) -> &[String] {
        &self.banned_words
    }

    /// Evaluates a candidate password against this policy.
    ///
    /// An empty candidate short-circuits to the required-password result
    /// without running any rule. Otherwise every rule runs; violations are
    /// deduplicated preserving first occurrence, the score is clamped at
    /// zero, and the strength classifies the clamped score.
    pub fn evaluate(&self, password: &SecretString) -> ValidationResult {
        let candidate = password.expose_secret();

        if candidate.is_empty() {
            return ValidationResult::required();
        }

        // Orchestrator: run every rule, none short-circuits
        let rules: Vec<RuleFn> = vec![
            length_rule,
            |pwd, _| lowercase_rule(pwd),
            |pwd, _| uppercase_rule(pwd),
            |pwd, _| digit_rule(pwd),
            |pwd, _| symbol_rule(pwd),
            weak_pattern_rule,
        ];

        let mut score = 0i32;
        let mut violations: Vec<String> = Vec::new();
        for rule in rules {
            let report = rule(candidate, self);
            score += report.credit;
            violations.extend(report.violations);
        }

        let mut deduped: Vec<String> = Vec::new();
        for message in violations {
            if !deduped.contains(&message) {
                deduped.push(message);
            }
        }

        ValidationResult::from_parts(deduped, score)
    }
}

/// Evaluates a candidate password against the default policy.
pub fn evaluate_password(password: &SecretString) -> ValidationResult {
    PasswordPolicy::default().evaluate(password)
}

/// Debounce window applied before each async evaluation.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Async version that sends the result via channel.
///
/// Waits out the debounce window first; a token cancelled during the wait
/// (the keystroke was superseded) sends nothing.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    policy: &PasswordPolicy,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationResult>,
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

    let result = policy.evaluate(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}
