use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    config::QuizConfig,
    distractors::{generate_distractors, shuffle_options},
    models::{Question, OPTION_COUNT},
    operands::{compute_answer, generate_operands, pick_operator},
};

/// Seeded RNG when `seed` is given, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Generate one validated question.
///
/// Operator, operands, distractors and option order all come from `rng`.
/// A candidate that fails the option checks in [`Question::from_options`] is
/// discarded and drawn again.
pub fn generate_question<R: Rng>(rng: &mut R, config: &QuizConfig) -> Question {
    loop {
        let operator = pick_operator(rng);
        let (a, b) = generate_operands(rng, operator, config);
        let correct = compute_answer(a, b, operator);
        let [d1, d2, d3] = generate_distractors(rng, correct);

        let mut options: [u32; OPTION_COUNT] = [correct, d1, d2, d3];
        shuffle_options(rng, &mut options);

        match Question::from_options(a, b, operator, options) {
            Ok(question) => {
                tracing::debug!(
                    text = question.display_text(),
                    options = ?question.options(),
                    correct_index = question.correct_option_index(),
                    "generated question"
                );
                return question;
            }
            Err(err) => {
                tracing::warn!(%err, a, b, %operator, "discarding invalid question, regenerating");
            }
        }
    }
}

/// Generate `count` independent questions, in display order.
pub fn generate_questions<R: Rng>(rng: &mut R, config: &QuizConfig, count: usize) -> Vec<Question> {
    (0..count).map(|_| generate_question(rng, config)).collect()
}
