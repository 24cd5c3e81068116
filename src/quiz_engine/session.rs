//! Quiz session state machine.
//!
//! A session owns its questions, its RNG and the answer history. The only
//! mutations are [`QuizSession::submit_answer`] and [`QuizSession::restart_game`].
//!
//! ```text
//! InProgress --submit_answer (last question)--> GameOver
//!      ^                                           |
//!      +---------------- restart_game -------------+
//! ```

use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    config::QuizConfig,
    error::{ConfigError, SessionError},
    generator::{generate_questions, rng_from_seed},
    models::{AnswerRecord, Question},
    summary::ScoreSummary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress,
    GameOver,
}

/// One play-through of the quiz.
///
/// Invariants: `score` equals the number of correct records in `answers`, and
/// `answers.len() == current_index` at all times.
#[derive(Debug, Clone)]
pub struct QuizSession<R: Rng = StdRng> {
    config: QuizConfig,
    rng: R,
    question_count: usize,
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    answers: Vec<AnswerRecord>,
}

impl QuizSession<StdRng> {
    /// New session seeded from `config.rng_seed` (or entropy when unset).
    pub fn new(config: QuizConfig) -> Result<Self, ConfigError> {
        let rng = rng_from_seed(config.rng_seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> QuizSession<R> {
    /// New session drawing questions from the supplied RNG.
    pub fn with_rng(config: QuizConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let question_count = config.question_count;
        let questions = generate_questions(&mut rng, &config, question_count);
        tracing::debug!(question_count, "quiz session started");
        Ok(Self::assemble(config, rng, questions))
    }

    /// Session over a fixed question set. Restarting generates fresh questions
    /// of the same count from `config` and `rng`.
    pub fn from_questions(config: QuizConfig, rng: R, questions: Vec<Question>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, rng, questions))
    }

    fn assemble(config: QuizConfig, rng: R, questions: Vec<Question>) -> Self {
        QuizSession {
            config,
            rng,
            question_count: questions.len(),
            questions,
            current_index: 0,
            score: 0,
            answers: Vec::new(),
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn is_game_over(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    pub fn state(&self) -> SessionState {
        if self.is_game_over() {
            SessionState::GameOver
        } else {
            SessionState::InProgress
        }
    }

    /// The question awaiting an answer, or `None` once the game is over.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_game_over() {
            None
        } else {
            self.questions.get(self.current_index)
        }
    }

    /// Record `selected` against the current question and advance.
    ///
    /// Any integer is accepted; values not among the options are simply wrong.
    /// Once the game is over this returns [`SessionError::GameOver`] and leaves
    /// the session untouched.
    pub fn submit_answer(&mut self, selected: i64) -> Result<AnswerRecord, SessionError> {
        let Some(question) = self.current_question() else {
            return Err(SessionError::GameOver { answered: self.answers.len() });
        };

        let correct_value = question.options()[question.correct_option_index()];
        let record = AnswerRecord {
            question_text: question.display_text().to_string(),
            selected_value: selected,
            correct_value,
            is_correct: selected == i64::from(correct_value),
        };

        if record.is_correct {
            self.score += 1;
        }
        self.answers.push(record.clone());
        self.current_index += 1;

        tracing::debug!(
            question = %record.question_text,
            selected,
            correct = correct_value,
            is_correct = record.is_correct,
            score = self.score,
            "answer submitted"
        );
        if self.is_game_over() {
            tracing::info!(score = self.score, total = self.questions.len(), "quiz finished");
        }

        Ok(record)
    }

    /// Replace the whole play-through with freshly generated questions.
    pub fn restart_game(&mut self) {
        self.questions = generate_questions(&mut self.rng, &self.config, self.question_count);
        self.current_index = 0;
        self.score = 0;
        self.answers.clear();
        tracing::info!(question_count = self.question_count, "quiz restarted");
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.score, self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use crate::quiz_engine::models::Operator;

    fn seeded(count: usize, seed: u64) -> QuizSession {
        QuizSession::new(QuizConfig::default().with_question_count(count).with_seed(seed)).unwrap()
    }

    fn correct_of(session: &QuizSession) -> i64 {
        i64::from(session.current_question().unwrap().correct_answer())
    }

    #[test]
    fn new_session_starts_in_progress() {
        let s = seeded(10, 1);
        assert_eq!(s.questions().len(), 10);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert!(s.answers().is_empty());
        assert_eq!(s.state(), SessionState::InProgress);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = QuizConfig { min_minuend: 1, ..QuizConfig::default() };
        assert!(QuizSession::new(config).is_err());
    }

    #[test]
    fn wrong_answer_advances_without_scoring() {
        let mut s = seeded(3, 2);
        let wrong = correct_of(&s) + 1;
        let record = s.submit_answer(wrong).unwrap();
        assert!(!record.is_correct);
        assert_eq!(s.score(), 0);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn values_outside_the_options_are_just_wrong() {
        let mut s = seeded(2, 3);
        let record = s.submit_answer(-17).unwrap();
        assert_eq!(record.selected_value, -17);
        assert!(!record.is_correct);
        assert_eq!(s.answers().len(), 1);
    }

    #[test]
    fn submit_after_game_over_is_rejected_without_side_effects() {
        let mut s = seeded(1, 4);
        s.submit_answer(correct_of(&s)).unwrap();
        assert!(s.is_game_over());
        assert_eq!(s.current_question(), None);

        let err = s.submit_answer(5).unwrap_err();
        assert_eq!(err, SessionError::GameOver { answered: 1 });
        assert_eq!(s.score(), 1);
        assert_eq!(s.answers().len(), 1);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn empty_session_is_immediately_over() {
        let mut s = seeded(0, 5);
        assert!(s.is_game_over());
        assert!(s.submit_answer(1).is_err());
        s.restart_game();
        assert!(s.questions().is_empty());
    }

    #[test]
    fn restart_resets_everything_and_keeps_count() {
        let mut s = seeded(4, 6);
        let before = s.questions().to_vec();
        while !s.is_game_over() {
            let v = correct_of(&s);
            s.submit_answer(v).unwrap();
        }
        s.restart_game();
        assert_eq!(s.score(), 0);
        assert_eq!(s.current_index(), 0);
        assert!(s.answers().is_empty());
        assert_eq!(s.questions().len(), 4);
        assert_ne!(s.questions(), &before[..]);
        assert_eq!(s.state(), SessionState::InProgress);
    }

    #[test]
    fn restart_of_fixed_questions_keeps_their_count() {
        let q = Question::from_options(5, 3, Operator::Add, [7, 8, 9, 10]).unwrap();
        let rng = StdRng::seed_from_u64(8);
        let mut s = QuizSession::from_questions(QuizConfig::default(), rng, vec![q.clone(), q]).unwrap();
        s.restart_game();
        assert_eq!(s.question_count(), 2);
        assert_eq!(s.questions().len(), 2);
    }

    #[test]
    fn summary_follows_score() {
        let mut s = seeded(2, 9);
        s.submit_answer(correct_of(&s)).unwrap();
        s.submit_answer(0).unwrap();
        let summary = s.summary();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.percentage, 50);
    }
}
