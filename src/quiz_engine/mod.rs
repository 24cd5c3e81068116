//! Core quiz engine: question generation and the session state machine.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: operators, questions, answer records |
//! | `config`      | Operand ranges, question count and seed; JSON loading |
//! | `error`       | Config, question and session errors |
//! | `operands`    | Operator choice, operand ranges, answer computation |
//! | `distractors` | Wrong options near the answer and Fisher-Yates shuffle |
//! | `generator`   | `generate_question()` / `generate_questions()` |
//! | `session`     | `QuizSession`: answers, score, game over, restart |
//! | `summary`     | End-of-game percentage and feedback |
//! | `hints`       | Per-operator counting hints |
//! | `view`        | JSON snapshot of a session for a client |

pub mod config;
pub mod distractors;
pub mod error;
pub mod generator;
pub mod hints;
pub mod models;
pub mod operands;
pub mod session;
pub mod summary;
pub mod view;

pub use config::QuizConfig;
pub use error::{ConfigError, QuestionError, SessionError};
pub use generator::{generate_question, generate_questions, rng_from_seed};
pub use hints::{DotGroup, Hint};
pub use models::{AnswerRecord, Operator, Question, OPTION_COUNT};
pub use session::{QuizSession, SessionState};
pub use summary::{Feedback, ScoreSummary};
pub use view::to_view_state;
