//! Password policy validation library
//!
//! This library evaluates candidate passwords against a registration
//! policy: a length window, four required character classes, and a
//! weak-pattern blacklist. The result carries the violation messages,
//! a clamped numeric score, and a three-level strength classification
//! with presentation tokens for the UI layer.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_BANNED_WORDS`: Custom path to an extra banned-words file
//!   (default: `./assets/banned-words.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::evaluate_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd1".to_string().into());
//! let result = evaluate_password(&password);
//!
//! assert!(result.is_valid());
//! println!("Score: {}", result.score);
//! println!("Strength: {}", result.strength);
//! println!("Bar: {}% {}", result.strength.percent(), result.strength.fill_token());
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod rules;
mod types;

// Public API
pub use blacklist::{
    BannedWordsError, PatternKind, WEAK_PATTERN_MESSAGE, WEAK_PATTERNS, WeakPattern,
    banned_words_path, load_banned_words,
};
pub use evaluator::{PasswordPolicy, evaluate_password};
pub use rules::SPECIAL_SYMBOLS;
pub use types::{MEDIUM_THRESHOLD, STRONG_THRESHOLD, Strength, ValidationResult};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_tx};
