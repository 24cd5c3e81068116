//! # math_quiz_gen
//!
//! An arithmetic quiz engine for young learners.
//!
//! The crate generates addition, subtraction and multiplication problems with
//! age-appropriate operand ranges and four multiple-choice options, then runs
//! them through a small session state machine that tracks the score and every
//! submitted answer. Rendering, timing and input handling are left to the
//! caller.
//!
//! ## How it works
//!
//! 1. Build a [`QuizConfig`] (or load one from JSON) with operand ranges, a
//!    question count and an optional RNG seed.
//! 2. Create a [`QuizSession`]. It generates all questions up front: pick an
//!    operator, draw operands, compute the answer, draw three nearby
//!    distractors and shuffle the four options.
//! 3. Call [`QuizSession::submit_answer`] once per question. After the last
//!    one the session is over; [`QuizSession::restart_game`] starts a fresh
//!    round with new questions.
//!
//! ## Guarantees
//!
//! - Every answer and every option is a positive integer.
//! - Options are distinct and exactly one equals the answer.
//! - Subtraction never goes below 1; multiplication keeps one factor small.
//! - **Deterministic**: the same seed yields the same questions.
//!
//! ## Quick start
//!
//! ```rust
//! use math_quiz_gen::{QuizConfig, QuizSession};
//!
//! let mut session = QuizSession::new(QuizConfig::default().with_seed(7)).unwrap();
//!
//! while let Some(question) = session.current_question() {
//!     println!("{question}  {:?}", question.options());
//!     let pick = question.options()[0];
//!     session.submit_answer(i64::from(pick)).unwrap();
//! }
//!
//! println!("{}", session.summary());
//! session.restart_game();
//! assert_eq!(session.current_index(), 0);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `math_quiz_gen::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_question, generate_questions, rng_from_seed, to_view_state, AnswerRecord,
    ConfigError, DotGroup, Feedback, Hint, Operator, Question, QuestionError, QuizConfig,
    QuizSession, ScoreSummary, SessionError, SessionState, OPTION_COUNT,
};
