use std::fmt;
use serde::{Deserialize, Serialize};

/// Encouragement tier shown on the end-of-game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Excellent,
    Good,
    NiceEffort,
    TryAgain,
}

impl Feedback {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Feedback::Excellent
        } else if percentage >= 60 {
            Feedback::Good
        } else if percentage >= 40 {
            Feedback::NiceEffort
        } else {
            Feedback::TryAgain
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Feedback::Excellent  => "Excellent work!",
            Feedback::Good       => "Good job!",
            Feedback::NiceEffort => "Nice effort!",
            Feedback::TryAgain   => "Try again!",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Final (or running) score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub score: u32,
    pub total: usize,
    /// `score / total` as a whole percentage, rounded half up; 0 for an empty quiz.
    pub percentage: u32,
}

impl ScoreSummary {
    pub fn new(score: u32, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((score as f64 / total as f64) * 100.0).round() as u32
        };
        ScoreSummary { score, total, percentage }
    }

    pub fn feedback(&self) -> Feedback {
        Feedback::from_percentage(self.percentage)
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} ({}%) {}", self.score, self.total, self.percentage, self.feedback())
    }
}
