//! Wrong-answer options and option shuffling.
//!
//! Distractors are drawn from a window centred on the correct answer whose
//! half-width grows with the answer (`max(5, answer / 5)`), so they stay
//! plausible for `3 + 4` and for `18 × 9` alike. The window always holds at
//! least five positive values besides the answer, so the rejection loop ends.

use rand::Rng;

/// Smallest half-width of the distractor window.
pub const MIN_SPREAD: u32 = 5;

/// Number of wrong options per question.
pub const DISTRACTOR_COUNT: usize = 3;

/// Half-width of the window around `correct`: `max(5, floor(correct * 0.2))`.
pub fn spread(correct: u32) -> u32 {
    (correct / 5).max(MIN_SPREAD)
}

/// Three distinct positive values near `correct`, none equal to it.
pub fn generate_distractors<R: Rng>(rng: &mut R, correct: u32) -> [u32; DISTRACTOR_COUNT] {
    let correct = correct.max(1);
    let spread = spread(correct);
    let low = correct.saturating_sub(spread).max(1);
    let high = correct.saturating_add(spread);

    let mut picked: Vec<u32> = Vec::with_capacity(DISTRACTOR_COUNT);
    while picked.len() < DISTRACTOR_COUNT {
        let candidate = rng.gen_range(low..=high);
        if candidate != correct && candidate != 0 && !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }
    [picked[0], picked[1], picked[2]]
}

/// Fisher-Yates shuffle of an option set in place.
pub fn shuffle_options<R: Rng>(rng: &mut R, options: &mut [u32]) {
    for i in (1..options.len()).rev() {
        let j = rng.gen_range(0..=i);
        options.swap(i, j);
    }
}
