//! Procedural puzzle synthesis.
//!
//! Pure functions from `(template kind, difficulty, rng)` to a finished
//! [`Puzzle`]. Operand ranges are banded by difficulty tier, and alphabet
//! sampling ranges are pre-shrunk so a valid consequent always exists: the
//! generator never asks what comes after 'Z' and never retries.

use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::RangeInclusive;

use crate::difficulty::Difficulty;
use crate::library::{self, TemplateKind};
use crate::puzzle::Puzzle;
use crate::topic::Topic;

const LAST_LETTER: u8 = 25; // index of 'Z'

/// Generate a random puzzle for a topic at a difficulty tier.
///
/// Falls back to the hardcoded default puzzle for the topic if the template
/// pool for the cell is empty.
pub fn generate<R: Rng>(topic: Topic, difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let pool = library::templates(topic, difficulty);
    pool.choose(rng)
        .map_or_else(|| Puzzle::fallback(topic), |kind| instantiate(*kind, difficulty, rng))
}

/// Instantiate one template kind with operands drawn from the tier's ranges.
pub fn instantiate<R: Rng>(kind: TemplateKind, difficulty: Difficulty, rng: &mut R) -> Puzzle {
    match kind {
        TemplateKind::LetterAfter => letter_after(difficulty, rng),
        TemplateKind::LetterBefore => letter_before(difficulty, rng),
        TemplateKind::LetterMissing => letter_missing(difficulty, rng),
        TemplateKind::LetterSkip => letter_skip(difficulty, rng),
        TemplateKind::NumberAfter => number_after(difficulty, rng),
        TemplateKind::NumberBefore => number_before(difficulty, rng),
        TemplateKind::NumberMissing => number_missing(difficulty, rng),
        TemplateKind::NumberCountdown => number_countdown(difficulty, rng),
        TemplateKind::NumberMoreThan => number_more_than(difficulty, rng),
        TemplateKind::NumberLessThan => number_less_than(difficulty, rng),
        TemplateKind::AdditionSum => addition_sum(difficulty, rng),
    }
}

/// Topic a template kind belongs to.
#[must_use]
pub const fn topic_of(kind: TemplateKind) -> Topic {
    match kind {
        TemplateKind::LetterAfter
        | TemplateKind::LetterBefore
        | TemplateKind::LetterMissing
        | TemplateKind::LetterSkip => Topic::Alphabet,
        TemplateKind::NumberAfter
        | TemplateKind::NumberBefore
        | TemplateKind::NumberMissing
        | TemplateKind::NumberCountdown
        | TemplateKind::NumberMoreThan
        | TemplateKind::NumberLessThan => Topic::Numbers,
        TemplateKind::AdditionSum => Topic::Addition,
    }
}

// Tier bands. Alphabet tiers limit how deep into the alphabet novices go;
// number/addition tiers widen the operand ranges.

const fn letter_hi(difficulty: Difficulty) -> u8 {
    match difficulty {
        Difficulty::Novice => 5, // youngest players stay within A..F
        Difficulty::Scholar => 24,
        Difficulty::Master | Difficulty::Bonus => LAST_LETTER,
    }
}

const fn letter_offset_range(difficulty: Difficulty) -> RangeInclusive<u8> {
    match difficulty {
        Difficulty::Novice | Difficulty::Scholar => 1..=1,
        Difficulty::Master => 2..=4,
        Difficulty::Bonus => 3..=7,
    }
}

const fn skip_step_range(difficulty: Difficulty) -> RangeInclusive<u8> {
    match difficulty {
        Difficulty::Novice | Difficulty::Scholar | Difficulty::Master => 2..=4,
        Difficulty::Bonus => 3..=5,
    }
}

const fn number_hi(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Novice => 5,
        Difficulty::Scholar => 20,
        Difficulty::Master => 30,
        Difficulty::Bonus => 60,
    }
}

const fn number_offset_range(difficulty: Difficulty) -> RangeInclusive<u32> {
    match difficulty {
        Difficulty::Novice | Difficulty::Scholar => 1..=1,
        Difficulty::Master => 2..=3,
        Difficulty::Bonus => 3..=5,
    }
}

const fn seq_step_range(difficulty: Difficulty) -> RangeInclusive<u32> {
    match difficulty {
        Difficulty::Novice => 1..=1,
        Difficulty::Scholar => 1..=5,
        Difficulty::Master => 2..=5,
        Difficulty::Bonus => 3..=6,
    }
}

const fn addition_operand_range(difficulty: Difficulty) -> RangeInclusive<u32> {
    match difficulty {
        Difficulty::Novice => 1..=5,
        Difficulty::Scholar => 2..=12,
        Difficulty::Master => 10..=59,
        Difficulty::Bonus => 25..=99,
    }
}

const fn letter(idx: u8) -> char {
    (b'A' + idx) as char
}

fn letter_after<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let offset = rng.gen_range(letter_offset_range(difficulty));
    // Shrink the base range up front so base + offset stays inside A..=Z.
    let hi = letter_hi(difficulty).min(LAST_LETTER - offset);
    let base = rng.gen_range(0..=hi);
    let answer_idx = base + offset;
    let question = if offset == 1 {
        format!("What letter comes after {}?", letter(base))
    } else {
        format!("What letter comes {offset} letters after {}?", letter(base))
    };
    letter_puzzle(difficulty, question, answer_idx, rng)
}

fn letter_before<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let offset = rng.gen_range(letter_offset_range(difficulty));
    let hi = letter_hi(difficulty).max(offset);
    let shown = rng.gen_range(offset..=hi);
    let answer_idx = shown - offset;
    let question = if offset == 1 {
        format!("What letter comes before {}?", letter(shown))
    } else {
        format!("What letter comes {offset} letters before {}?", letter(shown))
    };
    letter_puzzle(difficulty, question, answer_idx, rng)
}

fn letter_missing<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    // Window shows two letters before the gap and one after, so the missing
    // letter must sit in 2..=24.
    let hi = letter_hi(difficulty).clamp(2, LAST_LETTER - 1);
    let missing = rng.gen_range(2..=hi);
    let question = format!(
        "What letter is missing? {}, {}, _, {}",
        letter(missing - 2),
        letter(missing - 1),
        letter(missing + 1)
    );
    letter_puzzle(difficulty, question, missing, rng)
}

fn letter_skip<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let step = rng.gen_range(skip_step_range(difficulty));
    let start = rng.gen_range(0..=LAST_LETTER - 3 * step);
    let answer_idx = start + 3 * step;
    let question = format!(
        "What letter is missing? {}, {}, {}, _",
        letter(start),
        letter(start + step),
        letter(start + 2 * step)
    );
    letter_puzzle(difficulty, question, answer_idx, rng)
}

fn number_after<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let offset = rng.gen_range(number_offset_range(difficulty));
    let base = rng.gen_range(1..=number_hi(difficulty));
    let answer = base + offset;
    let question = if offset == 1 {
        format!("What number comes after {base}?")
    } else {
        format!("What number comes {offset} numbers after {base}?")
    };
    number_puzzle(difficulty, question, answer, rng)
}

fn number_before<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let offset = rng.gen_range(number_offset_range(difficulty));
    let shown = rng.gen_range(offset + 1..=number_hi(difficulty).max(offset + 1));
    let answer = shown - offset;
    let question = if offset == 1 {
        format!("What number comes before {shown}?")
    } else {
        format!("What number comes {offset} numbers before {shown}?")
    };
    number_puzzle(difficulty, question, answer, rng)
}

fn number_missing<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let step = rng.gen_range(seq_step_range(difficulty));
    let start_hi = number_hi(difficulty).saturating_sub(3 * step).max(1);
    let start = rng.gen_range(1..=start_hi);
    let answer = start + 2 * step;
    let question = format!(
        "What number is missing? {}, {}, _, {}",
        start,
        start + step,
        start + 3 * step
    );
    number_puzzle(difficulty, question, answer, rng)
}

fn number_countdown<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let step = rng.gen_range(seq_step_range(difficulty));
    // Five descending terms with the fourth hidden; keep the tail at or above zero.
    let start = rng.gen_range(4 * step..=4 * step + 10);
    let answer = start - 3 * step;
    let question = format!(
        "What number is missing? {}, {}, {}, _, {}",
        start,
        start - step,
        start - 2 * step,
        start - 4 * step
    );
    number_puzzle(difficulty, question, answer, rng)
}

fn number_more_than<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let delta = rng.gen_range(3..=9);
    let base = rng.gen_range(5..=number_hi(difficulty).max(5));
    let question = format!("What number is {delta} more than {base}?");
    number_puzzle(difficulty, question, base + delta, rng)
}

fn number_less_than<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let delta = rng.gen_range(3..=9);
    let base = rng.gen_range(delta + 1..=number_hi(difficulty).max(delta + 1));
    let question = format!("What number is {delta} less than {base}?");
    number_puzzle(difficulty, question, base - delta, rng)
}

fn addition_sum<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let range = addition_operand_range(difficulty);
    let lhs = rng.gen_range(range.clone());
    let rhs = rng.gen_range(range);
    let question = format!("What is {lhs} + {rhs}?");
    Puzzle {
        topic: Topic::Addition,
        difficulty,
        question,
        answer: (lhs + rhs).to_string(),
        options: numeric_options(lhs + rhs, rng),
    }
}

fn letter_puzzle<R: Rng>(
    difficulty: Difficulty,
    question: String,
    answer_idx: u8,
    rng: &mut R,
) -> Puzzle {
    let [wrong_a, wrong_b] = letter_distractors(answer_idx, rng);
    let mut options = vec![
        letter(answer_idx).to_string(),
        letter(wrong_a).to_string(),
        letter(wrong_b).to_string(),
    ];
    options.shuffle(rng);
    Puzzle {
        topic: Topic::Alphabet,
        difficulty,
        question,
        answer: letter(answer_idx).to_string(),
        options,
    }
}

fn number_puzzle<R: Rng>(
    difficulty: Difficulty,
    question: String,
    answer: u32,
    rng: &mut R,
) -> Puzzle {
    Puzzle {
        topic: Topic::Numbers,
        difficulty,
        question,
        answer: answer.to_string(),
        options: numeric_options(answer, rng),
    }
}

/// Two wrong options within distance three of the answer, never negative,
/// never equal to the answer or each other. A non-negative answer always has
/// at least its three upward neighbors available, so two picks always exist.
fn numeric_distractors<R: Rng>(answer: u32, rng: &mut R) -> [u32; 2] {
    let mut candidates: Vec<u32> = (-3_i64..=3)
        .filter(|offset| *offset != 0)
        .filter_map(|offset| u32::try_from(i64::from(answer) + offset).ok())
        .collect();
    candidates.shuffle(rng);
    [candidates[0], candidates[1]]
}

/// Letter variant of [`numeric_distractors`], additionally clamped to A..=Z.
fn letter_distractors<R: Rng>(answer_idx: u8, rng: &mut R) -> [u8; 2] {
    let mut candidates: Vec<u8> = (-3_i16..=3)
        .filter(|offset| *offset != 0)
        .filter_map(|offset| u8::try_from(i16::from(answer_idx) + offset).ok())
        .filter(|idx| *idx <= LAST_LETTER)
        .collect();
    candidates.shuffle(rng);
    [candidates[0], candidates[1]]
}

fn numeric_options<R: Rng>(answer: u32, rng: &mut R) -> Vec<String> {
    let [wrong_a, wrong_b] = numeric_distractors(answer, rng);
    let mut options = vec![answer.to_string(), wrong_a.to_string(), wrong_b.to_string()];
    options.shuffle(rng);
    options
}
