//! Quiz configuration: operand ranges, question count and RNG seed.

use std::{fs, path::Path};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::ConfigError;

/// Largest accepted `max_add`. Keeps `a + b` and the distractor window inside `u32`.
pub const MAX_ADD_CEILING: u32 = 1_000_000;

/// Largest accepted `max_factor_large`. Keeps `a * b` inside `u32`.
pub const MAX_FACTOR_CEILING: u32 = 10_000;

/// Operand ranges and session size.
///
/// Missing keys in JSON take the default values, so `{}` is a valid config.
///
/// ```
/// use math_quiz_gen::QuizConfig;
///
/// let config = QuizConfig::from_json_str(r#"{ "max_add": 20, "question_count": 5 }"#).unwrap();
/// assert_eq!(config.max_add, 20);
/// assert_eq!(config.min_minuend, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Upper bound for both addends and for the minuend (default: 100)
    pub max_add: u32,
    /// Lower bound for the minuend (default: 10)
    pub min_minuend: u32,
    /// Upper bound for the larger factor (default: 20)
    pub max_factor_large: u32,
    /// Upper bound for the smaller factor (default: 10)
    pub max_factor_small: u32,
    /// Questions per session (default: 10)
    pub question_count: usize,
    /// Fixed seed for reproducible sessions; `None` draws from OS entropy
    pub rng_seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_add: 100,
            min_minuend: 10,
            max_factor_large: 20,
            max_factor_small: 10,
            question_count: 10,
            rng_seed: None,
        }
    }
}

impl QuizConfig {
    /// Same as [`QuizConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of questions per session.
    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count;
        self
    }

    /// Fix the RNG seed for reproducible sessions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Check that every operand range can satisfy the generator's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_add < 1 {
            return Err(ConfigError::MaxAddTooSmall(self.max_add));
        }
        if self.max_add > MAX_ADD_CEILING {
            return Err(ConfigError::MaxAddTooLarge {
                value: self.max_add,
                ceiling: MAX_ADD_CEILING,
            });
        }
        // a > b >= 1 needs a minuend of at least 2.
        if self.min_minuend < 2 {
            return Err(ConfigError::MinuendTooSmall(self.min_minuend));
        }
        if self.min_minuend > self.max_add {
            return Err(ConfigError::MinuendAboveMaxAdd {
                min_minuend: self.min_minuend,
                max_add: self.max_add,
            });
        }
        if self.max_factor_small < 1 {
            return Err(ConfigError::SmallFactorTooSmall(self.max_factor_small));
        }
        if self.max_factor_small > self.max_factor_large {
            return Err(ConfigError::FactorsOutOfOrder {
                small: self.max_factor_small,
                large: self.max_factor_large,
            });
        }
        if self.max_factor_large > MAX_FACTOR_CEILING {
            return Err(ConfigError::LargeFactorTooLarge {
                value: self.max_factor_large,
                ceiling: MAX_FACTOR_CEILING,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = QuizConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_add, 100);
        assert_eq!(config.min_minuend, 10);
        assert_eq!(config.max_factor_large, 20);
        assert_eq!(config.max_factor_small, 10);
        assert_eq!(config.question_count, 10);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn empty_json_takes_defaults() {
        let config = QuizConfig::from_json_str("{}").unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn json_overrides_selected_fields() {
        let config =
            QuizConfig::from_json_str(r#"{ "max_factor_large": 12, "rng_seed": 7 }"#).unwrap();
        assert_eq!(config.max_factor_large, 12);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.max_add, 100);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = QuizConfig::from_json_str("{ max_add: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = QuizConfig::from_json_file("/nonexistent/quiz-config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got {err:?}");
    }

    #[test]
    fn impossible_ranges_are_rejected() {
        let cases = [
            (QuizConfig { max_add: 0, min_minuend: 0, ..QuizConfig::default() }, "max_add"),
            (QuizConfig { min_minuend: 1, ..QuizConfig::default() }, "min_minuend"),
            (QuizConfig { min_minuend: 101, ..QuizConfig::default() }, "minuend above"),
            (QuizConfig { max_factor_small: 0, ..QuizConfig::default() }, "small factor"),
            (QuizConfig { max_factor_small: 21, ..QuizConfig::default() }, "factor order"),
            (QuizConfig { max_add: MAX_ADD_CEILING + 1, ..QuizConfig::default() }, "add ceiling"),
            (
                QuizConfig { max_factor_large: MAX_FACTOR_CEILING + 1, ..QuizConfig::default() },
                "factor ceiling",
            ),
        ];
        for (config, label) in cases {
            assert!(config.validate().is_err(), "{label} should be rejected: {config:?}");
        }
    }

    #[test]
    fn builder_setters() {
        let config = QuizConfig::new().with_question_count(3).with_seed(42);
        assert_eq!(config.question_count, 3);
        assert_eq!(config.rng_seed, Some(42));
    }
}
