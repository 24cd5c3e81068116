use thiserror::Error;

use crate::quiz_engine::models::Operator;

/// Rejected quiz configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse quiz config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read quiz config: {0}")]
    Io(#[from] std::io::Error),

    #[error("max_add must be at least 1 (got {0})")]
    MaxAddTooSmall(u32),

    #[error("max_add {value} exceeds the ceiling of {ceiling}")]
    MaxAddTooLarge { value: u32, ceiling: u32 },

    #[error("min_minuend must be at least 2 (got {0})")]
    MinuendTooSmall(u32),

    #[error("min_minuend ({min_minuend}) is greater than max_add ({max_add})")]
    MinuendAboveMaxAdd { min_minuend: u32, max_add: u32 },

    #[error("max_factor_small must be at least 1 (got {0})")]
    SmallFactorTooSmall(u32),

    #[error("max_factor_small ({small}) is greater than max_factor_large ({large})")]
    FactorsOutOfOrder { small: u32, large: u32 },

    #[error("max_factor_large {value} exceeds the ceiling of {ceiling}")]
    LargeFactorTooLarge { value: u32, ceiling: u32 },
}

/// A question whose operands or option set break the question invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("operands must be at least 1 (got {a} and {b})")]
    ZeroOperand { a: u32, b: u32 },

    #[error("{a} - {b} is not positive")]
    NonPositiveDifference { a: u32, b: u32 },

    #[error("{a} {operator} {b} overflows")]
    Overflow { a: u32, b: u32, operator: Operator },

    #[error("option set contains zero")]
    ZeroOption,

    #[error("option {0} appears more than once")]
    DuplicateOption(u32),

    #[error("correct answer {answer} is not among the options")]
    MissingAnswer { answer: u32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("game is over: all {answered} questions have been answered")]
    GameOver { answered: usize },
}
