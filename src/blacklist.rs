//! Weak-pattern blacklist
//!
//! Holds the built-in table of weak password patterns and the optional
//! banned-words file loader.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Violation message appended once per matching weak pattern.
///
/// The evaluator deduplicates, so the caller sees it at most once.
pub const WEAK_PATTERN_MESSAGE: &str = "Password contains a common weak pattern";

/// How a [`WeakPattern`] inspects the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Literal substring match.
    Substring(&'static str),
    /// Substring match ignoring ASCII case; the needle is stored lowercase.
    SubstringIgnoreCase(&'static str),
    /// A run of at least this many identical consecutive characters.
    RepeatedRun(usize),
}

/// One entry in the built-in blacklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeakPattern {
    pub name: &'static str,
    pub kind: PatternKind,
}

/// Built-in weak patterns, evaluated independently and in order.
///
/// Every matching entry counts as its own penalty even though they all
/// share [`WEAK_PATTERN_MESSAGE`].
pub const WEAK_PATTERNS: &[WeakPattern] = &[
    WeakPattern {
        name: "sequential digits",
        kind: PatternKind::Substring("123456"),
    },
    WeakPattern {
        name: "password",
        kind: PatternKind::SubstringIgnoreCase("password"),
    },
    WeakPattern {
        name: "qwerty",
        kind: PatternKind::SubstringIgnoreCase("qwerty"),
    },
    WeakPattern {
        name: "abc123",
        kind: PatternKind::SubstringIgnoreCase("abc123"),
    },
    WeakPattern {
        name: "repeated characters",
        kind: PatternKind::RepeatedRun(3),
    },
];

impl WeakPattern {
    /// Checks whether the candidate matches this pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        match self.kind {
            PatternKind::Substring(needle) => candidate.contains(needle),
            PatternKind::SubstringIgnoreCase(needle) => {
                candidate.to_ascii_lowercase().contains(needle)
            }
            PatternKind::RepeatedRun(min_run) => has_repeated_run(candidate, min_run),
        }
    }
}

/// Detects a run of `min_run` or more identical consecutive characters.
pub(crate) fn has_repeated_run(candidate: &str, min_run: usize) -> bool {
    let mut run = 0usize;
    let mut prev: Option<char> = None;
    for c in candidate.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        if run >= min_run {
            return true;
        }
    }
    false
}

#[derive(Error, Debug)]
pub enum BannedWordsError {
    #[error("Banned words file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read banned words file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Banned words file is empty")]
    EmptyFile,
}

/// Returns the banned-words file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_BANNED_WORDS`
/// 2. Default path `./assets/banned-words.txt`
pub fn banned_words_path() -> PathBuf {
    std::env::var("PWD_POLICY_BANNED_WORDS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/banned-words.txt"))
}

/// Loads extra banned words from a file, one word per line.
///
/// Lines are trimmed and lowercased; empty lines and duplicates are
/// skipped, preserving first-occurrence order. The returned list is meant
/// for [`PasswordPolicy::with_banned_words`](crate::PasswordPolicy::with_banned_words).
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn load_banned_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, BannedWordsError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Banned words load FAILED: file not found {:?}", path);
        return Err(BannedWordsError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Banned words load FAILED: empty file {:?}", path);
        return Err(BannedWordsError::EmptyFile);
    }

    let mut words = Vec::new();
    for line in content.lines() {
        let word = line.trim().to_lowercase();
        if !word.is_empty() && !words.contains(&word) {
            words.push(word);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Banned words loaded: {} words from {:?}", words.len(), path);

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn setup_with_tempfile(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in words {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_substring_pattern_matches() {
        let pattern = &WEAK_PATTERNS[0];
        assert!(pattern.matches("xx123456xx"));
        assert!(!pattern.matches("x12345x"));
    }

    #[test]
    fn test_ignore_case_patterns_match() {
        let password = WEAK_PATTERNS
            .iter()
            .find(|p| p.name == "password")
            .unwrap();
        assert!(password.matches("MyPassWord1"));
        assert!(password.matches("PASSWORD"));
        assert!(!password.matches("passw0rd"));

        let qwerty = WEAK_PATTERNS.iter().find(|p| p.name == "qwerty").unwrap();
        assert!(qwerty.matches("QwErTy!!"));

        let abc123 = WEAK_PATTERNS.iter().find(|p| p.name == "abc123").unwrap();
        assert!(abc123.matches("xxABC123xx"));
        assert!(!abc123.matches("abc12"));
    }

    #[test]
    fn test_repeated_run_detection() {
        assert!(!has_repeated_run("", 3));
        assert!(!has_repeated_run("aa", 3));
        assert!(has_repeated_run("aaa", 3));
        assert!(has_repeated_run("xxaaaxx", 3));
        assert!(!has_repeated_run("ababab", 3));
        assert!(has_repeated_run("ab111cd", 3));
    }

    #[test]
    #[serial]
    fn test_banned_words_path_default() {
        remove_env("PWD_POLICY_BANNED_WORDS");

        let path = banned_words_path();
        assert_eq!(path, PathBuf::from("./assets/banned-words.txt"));
    }

    #[test]
    #[serial]
    fn test_banned_words_path_from_env() {
        let custom_path = "/custom/path/banned-words.txt";
        set_env("PWD_POLICY_BANNED_WORDS", custom_path);

        let path = banned_words_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_POLICY_BANNED_WORDS");
    }

    #[test]
    fn test_load_banned_words_file_not_found() {
        let result = load_banned_words("/nonexistent/path/banned-words.txt");
        assert!(matches!(result, Err(BannedWordsError::FileNotFound(_))));
    }

    #[test]
    fn test_load_banned_words_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let result = load_banned_words(temp_file.path());
        assert!(matches!(result, Err(BannedWordsError::EmptyFile)));
    }

    #[test]
    fn test_load_banned_words_success() {
        let temp_file = setup_with_tempfile(&["letmein", "  Welcome1  ", "", "letmein"]);

        let words = load_banned_words(temp_file.path()).expect("Should load");
        assert_eq!(words, vec!["letmein".to_string(), "welcome1".to_string()]);
    }
}
