use rand::Rng;
use serde_json::{json, Value};

use crate::quiz_engine::{models::Question, session::QuizSession};

/// Question payload for the client. The correct index is withheld.
fn public_question(question: &Question) -> Value {
    json!({
        "text":    question.display_text(),
        "options": question.options(),
    })
}

fn progress(current: usize, total: usize) -> Value {
    json!({ "current": current, "total": total })
}

/// Snapshot of a session for a presentation layer.
///
/// While the game runs, `question` holds the current question without its
/// answer and `summary` is null. Once it is over, `question` is null and
/// `summary` carries the final score and feedback message.
pub fn to_view_state<R: Rng>(session: &QuizSession<R>) -> Value {
    let total = session.questions().len();
    let question = session.current_question().map(public_question).unwrap_or(Value::Null);

    let summary = if session.is_game_over() {
        let summary = session.summary();
        json!({
            "score":      summary.score,
            "total":      summary.total,
            "percentage": summary.percentage,
            "message":    summary.feedback().message(),
        })
    } else {
        Value::Null
    };

    // 1-based for display; clamps to total once finished.
    let shown = (session.current_index() + 1).min(total);

    json!({
        "progress":     progress(shown, total),
        "score":        session.score(),
        "is_game_over": session.is_game_over(),
        "question":     question,
        "answers":      session.answers(),
        "summary":      summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::config::QuizConfig;

    #[test]
    fn in_progress_view_hides_the_answer() {
        let session =
            QuizSession::new(QuizConfig::default().with_question_count(3).with_seed(21)).unwrap();
        let view = to_view_state(&session);
        assert_eq!(view["progress"]["current"], 1);
        assert_eq!(view["progress"]["total"], 3);
        assert_eq!(view["is_game_over"], false);
        assert_eq!(view["question"]["options"].as_array().unwrap().len(), 4);
        assert!(view["question"].get("correct_option_index").is_none());
        assert!(view["summary"].is_null());
    }

    #[test]
    fn finished_view_carries_summary() {
        let mut session =
            QuizSession::new(QuizConfig::default().with_question_count(1).with_seed(22)).unwrap();
        let correct = session.current_question().unwrap().correct_answer();
        session.submit_answer(i64::from(correct)).unwrap();

        let view = to_view_state(&session);
        assert!(view["question"].is_null());
        assert_eq!(view["progress"]["current"], 1);
        assert_eq!(view["summary"]["percentage"], 100);
        assert_eq!(view["summary"]["message"], "Excellent work!");
        assert_eq!(view["answers"][0]["is_correct"], true);
    }
}
