//! Interactive terminal play-through.
//!
//! Run with: `cargo run --example quiz [config.json]`
//!
//! Shows how a presentation layer drives the engine:
//!
//! - reads state through `current_question()`, `score()` and `summary()`
//! - calls `submit_answer()` once per question
//! - owns the short pause between feedback and the next question; the engine
//!   itself never waits
//! - offers `restart_game()` once the round is over
//!
//! Set `RUST_LOG=math_quiz_gen=debug` to watch the engine's events.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use math_quiz_gen::{Hint, QuizConfig, QuizSession};
use tracing_subscriber::EnvFilter;

/// Pause after each answer before the next question appears.
const ANSWER_DELAY: Duration = Duration::from_secs(2);

fn prompt(line: &mut String) -> io::Result<Option<String>> {
    io::stdout().flush()?;
    line.clear();
    if io::stdin().lock().read_line(line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => QuizConfig::from_json_file(path)?,
        None => QuizConfig::default(),
    };
    let mut session = QuizSession::new(config)?;
    let mut line = String::new();

    loop {
        while let Some(question) = session.current_question() {
            println!();
            println!(
                "Question {} of {}   Score: {}",
                session.current_index() + 1,
                session.questions().len(),
                session.score()
            );
            println!("  {question}");
            for (i, opt) in question.options().iter().enumerate() {
                println!("  [{}] {opt}", i + 1);
            }
            print!("Pick 1-4 (or h for a hint): ");

            let Some(input) = prompt(&mut line)? else { return Ok(()) };
            if input.eq_ignore_ascii_case("h") {
                let hint = Hint::for_question(question);
                println!("  {}", hint.title);
                if let Some(explanation) = &hint.explanation {
                    println!("  {explanation}");
                }
                println!("  {}", hint.conclusion);
                continue;
            }

            // Anything that is not a valid slot is submitted as-is and scored wrong.
            let selected = match input.parse::<usize>() {
                Ok(n @ 1..=4) => i64::from(question.options()[n - 1]),
                _ => input.parse::<i64>().unwrap_or(-1),
            };

            let record = session.submit_answer(selected)?;
            if record.is_correct {
                println!("  Correct!");
            } else {
                println!("  Not quite, the answer was {}.", record.correct_value);
            }
            thread::sleep(ANSWER_DELAY);
        }

        let summary = session.summary();
        println!();
        println!("Game Over!");
        println!("Your score: {} / {} ({}%)", summary.score, summary.total, summary.percentage);
        println!("{}", summary.feedback());
        for answer in session.answers() {
            let mark = if answer.is_correct { "+" } else { "x" };
            println!("  [{mark}] {}  you: {}  answer: {}", answer.question_text, answer.selected_value, answer.correct_value);
        }

        print!("Play again? [y/N]: ");
        match prompt(&mut line)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => session.restart_game(),
            _ => return Ok(()),
        }
    }
}
