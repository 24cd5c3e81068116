//! Counting hints for each operator.
//!
//! A hint is plain data: a title, an optional explanation, groups of dots to
//! draw, and a closing sentence. Layout and colours belong to the caller.

use serde::{Deserialize, Serialize};
use crate::quiz_engine::models::{Operator, Question};

/// Dots drawn per row.
pub const DOTS_PER_ROW: u32 = 10;

/// A labelled group of dots. The last `removed` dots are drawn as taken away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotGroup {
    pub label: String,
    pub count: u32,
    pub removed: u32,
}

impl DotGroup {
    fn plain(label: impl Into<String>, count: u32) -> Self {
        DotGroup { label: label.into(), count, removed: 0 }
    }

    /// Row lengths: full rows of ten, remainder last.
    pub fn rows(&self) -> Vec<u32> {
        let full = self.count / DOTS_PER_ROW;
        let rest = self.count % DOTS_PER_ROW;
        let mut rows = vec![DOTS_PER_ROW; full as usize];
        if rest > 0 {
            rows.push(rest);
        }
        rows
    }

    /// Dots still standing after the removed ones.
    pub fn remaining(&self) -> u32 {
        self.count.saturating_sub(self.removed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub operator: Operator,
    pub title: String,
    pub explanation: Option<String>,
    pub groups: Vec<DotGroup>,
    pub conclusion: String,
}

impl Hint {
    pub fn for_question(question: &Question) -> Self {
        let (a, b) = question.operands();
        let answer = question.correct_answer();
        match question.operator() {
            Operator::Add => Hint {
                operator: Operator::Add,
                title: format!("Let's add {a} and {b}!"),
                explanation: None,
                groups: vec![
                    DotGroup::plain(format!("{a} circles:"), a),
                    DotGroup::plain(format!("{b} circles:"), b),
                ],
                conclusion: format!("If we put them all together, we get {answer} circles in total!"),
            },
            Operator::Subtract => Hint {
                operator: Operator::Subtract,
                title: format!("Let's subtract {b} from {a}!"),
                explanation: Some(format!(
                    "Imagine you start with {a} things. When you take away {b}, the crossed-out ones are gone."
                )),
                groups: vec![DotGroup { label: format!("{a} things:"), count: a, removed: b }],
                conclusion: format!("You have {answer} left!"),
            },
            Operator::Multiply => Hint {
                operator: Operator::Multiply,
                title: format!("Let's multiply {a} by {b}!"),
                explanation: Some(format!(
                    "Multiplying is like adding {a} together {b} times, or making {b} groups of {a}."
                )),
                groups: (1..=b).map(|i| DotGroup::plain(format!("Group {i}:"), a)).collect(),
                conclusion: format!("So, {a} × {b} = {answer}!"),
            },
        }
    }

    /// Total dots left once removed ones are discounted. Equals the answer.
    pub fn total_remaining(&self) -> u32 {
        self.groups.iter().map(DotGroup::remaining).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::quiz_engine::{config::QuizConfig, generator::generate_questions};

    #[test]
    fn rows_split_into_tens() {
        assert_eq!(DotGroup::plain("", 23).rows(), vec![10, 10, 3]);
        assert_eq!(DotGroup::plain("", 20).rows(), vec![10, 10]);
        assert_eq!(DotGroup::plain("", 4).rows(), vec![4]);
        assert!(DotGroup::plain("", 0).rows().is_empty());
    }

    #[test]
    fn addition_hint() {
        let q = Question::from_options(4, 3, Operator::Add, [7, 5, 6, 9]).unwrap();
        let hint = Hint::for_question(&q);
        assert_eq!(hint.title, "Let's add 4 and 3!");
        assert_eq!(hint.groups.len(), 2);
        assert_eq!(hint.conclusion, "If we put them all together, we get 7 circles in total!");
    }

    #[test]
    fn subtraction_hint_marks_removed_dots() {
        let q = Question::from_options(12, 5, Operator::Subtract, [7, 3, 8, 11]).unwrap();
        let hint = Hint::for_question(&q);
        assert_eq!(hint.title, "Let's subtract 5 from 12!");
        assert_eq!(hint.groups[0].removed, 5);
        assert_eq!(hint.conclusion, "You have 7 left!");
    }

    #[test]
    fn multiplication_hint_has_one_group_per_multiplier() {
        let q = Question::from_options(3, 4, Operator::Multiply, [12, 10, 14, 9]).unwrap();
        let hint = Hint::for_question(&q);
        assert_eq!(hint.groups.len(), 4);
        assert_eq!(hint.groups[3].label, "Group 4:");
        assert_eq!(hint.conclusion, "So, 3 × 4 = 12!");
    }

    #[test]
    fn remaining_dots_equal_the_answer() {
        let mut rng = StdRng::seed_from_u64(12);
        for q in generate_questions(&mut rng, &QuizConfig::default(), 100) {
            assert_eq!(Hint::for_question(&q).total_remaining(), q.correct_answer(), "{q}");
        }
    }
}
