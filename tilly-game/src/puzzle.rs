use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::topic::Topic;

/// Every puzzle carries exactly this many answer options.
pub const OPTION_COUNT: usize = 3;

/// A single multiple-choice question. Immutable once generated; the session
/// discards it after it has been answered correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub question: String,
    pub answer: String,
    /// Shuffled options: the answer plus two plausible distractors.
    pub options: Vec<String>,
}

impl Puzzle {
    /// Whether `selected` counts as the right answer. Anything that is not
    /// exactly the answer, including strings outside `options`, is wrong.
    #[must_use]
    pub fn accepts(&self, selected: &str) -> bool {
        selected.trim().eq_ignore_ascii_case(&self.answer)
    }

    /// Structural invariant: exactly three unique options, containing the
    /// answer exactly once.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == OPTION_COUNT
            && self
                .options
                .iter()
                .filter(|option| **option == self.answer)
                .count()
                == 1
            && self
                .options
                .iter()
                .all(|option| self.options.iter().filter(|o| *o == option).count() == 1)
    }

    /// Hardcoded default for a topic, served whenever a template pool turns
    /// out empty. Gameplay never halts on a content gap.
    #[must_use]
    pub fn fallback(topic: Topic) -> Self {
        let (question, answer, options) = match topic {
            Topic::Alphabet => ("What letter comes after A?", "B", ["B", "C", "D"]),
            Topic::Numbers => ("What number comes after 5?", "6", ["6", "7", "8"]),
            Topic::Addition => ("What is 2 + 3?", "5", ["4", "5", "6"]),
        };
        Self {
            topic,
            difficulty: Difficulty::default(),
            question: question.to_string(),
            answer: answer.to_string(),
            options: options.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks_are_well_formed() {
        for topic in Topic::ALL {
            let puzzle = Puzzle::fallback(topic);
            assert!(puzzle.is_well_formed(), "fallback for {topic} malformed");
            assert_eq!(puzzle.topic, topic);
        }
    }

    #[test]
    fn accepts_tolerates_whitespace_and_case() {
        let puzzle = Puzzle::fallback(Topic::Alphabet);
        assert!(puzzle.accepts("B"));
        assert!(puzzle.accepts(" b "));
        assert!(!puzzle.accepts("C"));
        assert!(!puzzle.accepts("Z"));
    }

    #[test]
    fn malformed_options_are_detected() {
        let mut puzzle = Puzzle::fallback(Topic::Numbers);
        puzzle.options = vec!["6".into(), "6".into(), "7".into()];
        assert!(!puzzle.is_well_formed());
        puzzle.options = vec!["7".into(), "8".into(), "9".into()];
        assert!(!puzzle.is_well_formed());
    }
}
