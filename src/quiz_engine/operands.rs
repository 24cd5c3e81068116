use rand::Rng;
use crate::quiz_engine::{config::QuizConfig, models::Operator};

/// Pick one of the three operators uniformly.
pub fn pick_operator<R: Rng>(rng: &mut R) -> Operator {
    Operator::ALL[rng.gen_range(0..Operator::ALL.len())]
}

/// Draw operands for `operator` within the ranges of `config`.
///
/// - add: both from `1..=max_add`
/// - subtract: `a` from `min_minuend..=max_add`, `b` from `1..=a-1`, so `a - b >= 1`
/// - multiply: one factor from `1..=max_factor_large`, the other from
///   `1..=max_factor_small`, placed in either order
///
/// `config` must have passed [`QuizConfig::validate`].
pub fn generate_operands<R: Rng>(rng: &mut R, operator: Operator, config: &QuizConfig) -> (u32, u32) {
    match operator {
        Operator::Add => (
            rng.gen_range(1..=config.max_add),
            rng.gen_range(1..=config.max_add),
        ),
        Operator::Subtract => {
            let a = rng.gen_range(config.min_minuend..=config.max_add);
            let b = rng.gen_range(1..=config.max_add.min(a - 1));
            (a, b)
        }
        Operator::Multiply => {
            let large = rng.gen_range(1..=config.max_factor_large);
            let small = rng.gen_range(1..=config.max_factor_small);
            if rng.gen_bool(0.5) {
                (large, small)
            } else {
                (small, large)
            }
        }
    }
}

/// `a + b`, `a - b` or `a * b`, never below 1.
///
/// The validated operand ranges keep every result positive; a zero is coerced
/// to 1 and logged.
pub fn compute_answer(a: u32, b: u32, operator: Operator) -> u32 {
    let raw = match operator {
        Operator::Add      => a.saturating_add(b),
        Operator::Subtract => a.saturating_sub(b),
        Operator::Multiply => a.saturating_mul(b),
    };
    if raw == 0 {
        tracing::warn!(a, b, %operator, "computed answer was zero, coercing to 1");
        return 1;
    }
    raw
}
