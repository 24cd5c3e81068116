//! Print a seeded batch of questions as JSON.
//!
//! Run with: `cargo run --example batch -- [count] [seed]`
//!
//! The same seed always prints the same batch, so the output can be used as a
//! fixed worksheet or as test fixtures for a client.

use math_quiz_gen::{generate_questions, rng_from_seed, Hint, QuizConfig};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let count = args.next().map(|s| s.parse::<usize>()).transpose()?.unwrap_or(10);
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?;

    let config = QuizConfig::default();
    config.validate()?;
    let mut rng = rng_from_seed(seed);

    let batch: Vec<_> = generate_questions(&mut rng, &config, count)
        .iter()
        .map(|q| {
            json!({
                "text":                 q.display_text(),
                "operator":             q.operator(),
                "operands":             q.operands(),
                "options":              q.options(),
                "correct_option_index": q.correct_option_index(),
                "hint":                 Hint::for_question(q).title,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&json!({ "seed": seed, "questions": batch }))?);
    Ok(())
}
