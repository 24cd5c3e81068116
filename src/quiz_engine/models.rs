use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuestionError;

/// Number of answer options shown for every question.
pub const OPTION_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    /// All operators, in the order the generator indexes them.
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    /// Visible symbol used in the question text.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add      => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// One arithmetic problem with four shuffled answer options.
///
/// Built only through [`Question::from_options`], which checks the operands
/// and that the options are positive, distinct and contain the correct answer. Fields are
/// read through accessors so a question cannot change once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    a: u32,
    b: u32,
    operator: Operator,
    correct_answer: u32,
    options: [u32; OPTION_COUNT],
    correct_option_index: usize,
    display_text: String,
}

impl Question {
    /// Exact answer for caller-supplied operands.
    ///
    /// Operands must be positive, a difference must be at least 1, and the
    /// result must fit in `u32`.
    fn exact_answer(a: u32, b: u32, operator: Operator) -> Result<u32, QuestionError> {
        if a == 0 || b == 0 {
            return Err(QuestionError::ZeroOperand { a, b });
        }
        let overflow = QuestionError::Overflow { a, b, operator };
        match operator {
            Operator::Add      => a.checked_add(b).ok_or(overflow),
            Operator::Multiply => a.checked_mul(b).ok_or(overflow),
            Operator::Subtract if a <= b => Err(QuestionError::NonPositiveDifference { a, b }),
            Operator::Subtract => Ok(a - b),
        }
    }

    /// Build a question from its operands and an already-ordered option set.
    pub fn from_options(
        a: u32,
        b: u32,
        operator: Operator,
        options: [u32; OPTION_COUNT],
    ) -> Result<Self, QuestionError> {
        let correct_answer = Self::exact_answer(a, b, operator)?;

        if options.contains(&0) {
            return Err(QuestionError::ZeroOption);
        }
        for (i, opt) in options.iter().enumerate() {
            if options[i + 1..].contains(opt) {
                return Err(QuestionError::DuplicateOption(*opt));
            }
        }
        let correct_option_index = options
            .iter()
            .position(|&o| o == correct_answer)
            .ok_or(QuestionError::MissingAnswer { answer: correct_answer })?;

        Ok(Question {
            a,
            b,
            operator,
            correct_answer,
            options,
            correct_option_index,
            display_text: format!("{a} {operator} {b} = ?"),
        })
    }

    /// Operands in display order.
    pub fn operands(&self) -> (u32, u32) {
        (self.a, self.b)
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn correct_answer(&self) -> u32 {
        self.correct_answer
    }

    pub fn options(&self) -> &[u32; OPTION_COUNT] {
        &self.options
    }

    pub fn correct_option_index(&self) -> usize {
        self.correct_option_index
    }

    /// e.g. `"7 × 3 = ?"`
    pub fn display_text(&self) -> &str {
        &self.display_text
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text)
    }
}

// ---------------------------------------------------------------------------
// Answer history
// ---------------------------------------------------------------------------

/// One submitted answer. Never modified after the session records it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_text: String,
    pub selected_value: i64,
    pub correct_value: u32,
    pub is_correct: bool,
}
