//! Template tables: which question forms exist per (topic, difficulty).
//!
//! Each cell holds a small fixed pool (three to five template kinds). The
//! selector instantiates one candidate per kind and lets the repeat tracker
//! filter the resulting pool, so selection behaves like drawing from a small
//! authored question bank.

use crate::difficulty::Difficulty;
use crate::topic::Topic;

/// A question form the generator knows how to instantiate. Operand ranges
/// come from the difficulty tier, not from the kind itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// "What letter comes after P?" / "What letter comes 3 letters after D?"
    LetterAfter,
    /// "What letter comes before D?" / "What letter comes 2 letters before J?"
    LetterBefore,
    /// "What letter is missing? A, B, _, D"
    LetterMissing,
    /// "What letter is missing? D, H, L, _" (constant-step sequence)
    LetterSkip,
    /// "What number comes after 14?" / "What number comes 3 numbers after 7?"
    NumberAfter,
    /// "What number comes before 10?"
    NumberBefore,
    /// "What number is missing? 2, 4, _, 8" (ascending, constant step)
    NumberMissing,
    /// "What number is missing? 25, 20, 15, _, 5" (descending, constant step)
    NumberCountdown,
    /// "What number is 5 more than 12?"
    NumberMoreThan,
    /// "What number is 4 less than 20?"
    NumberLessThan,
    /// "What is 7 + 3?"
    AdditionSum,
}

/// The template pool for one (topic, difficulty) cell.
#[must_use]
pub const fn templates(topic: Topic, difficulty: Difficulty) -> &'static [TemplateKind] {
    use TemplateKind as T;
    match (topic, difficulty) {
        (Topic::Alphabet, Difficulty::Novice | Difficulty::Scholar) => {
            &[T::LetterAfter, T::LetterBefore, T::LetterMissing]
        }
        (Topic::Alphabet, Difficulty::Master) => {
            &[T::LetterAfter, T::LetterBefore, T::LetterMissing, T::LetterSkip]
        }
        (Topic::Alphabet, Difficulty::Bonus) => &[T::LetterAfter, T::LetterBefore, T::LetterSkip],
        (Topic::Numbers, Difficulty::Novice | Difficulty::Scholar) => {
            &[T::NumberAfter, T::NumberBefore, T::NumberMissing]
        }
        (Topic::Numbers, Difficulty::Master) => &[
            T::NumberAfter,
            T::NumberBefore,
            T::NumberMissing,
            T::NumberCountdown,
        ],
        (Topic::Numbers, Difficulty::Bonus) => &[
            T::NumberMoreThan,
            T::NumberLessThan,
            T::NumberMissing,
            T::NumberCountdown,
        ],
        (Topic::Addition, _) => &[T::AdditionSum],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_has_a_pool() {
        for topic in Topic::ALL {
            for difficulty in [
                Difficulty::Novice,
                Difficulty::Scholar,
                Difficulty::Master,
                Difficulty::Bonus,
            ] {
                assert!(
                    !templates(topic, difficulty).is_empty(),
                    "empty pool for {topic}/{difficulty}"
                );
            }
        }
    }

    #[test]
    fn letter_skip_is_reserved_for_upper_tiers() {
        for difficulty in [Difficulty::Novice, Difficulty::Scholar] {
            assert!(
                !templates(Topic::Alphabet, difficulty).contains(&TemplateKind::LetterSkip),
                "{difficulty} should not serve skip sequences"
            );
        }
    }
}
