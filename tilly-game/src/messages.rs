//! Player-facing message strings.
//!
//! Kept in one place so the tone stays consistent and the session logic
//! stays free of copy. All strings are aimed at early readers.

use crate::topic::Topic;

/// Shown when an answer is wrong. The puzzle stays active for a retry.
pub const RETRY: &str = "That's not quite right. Try again!";

/// Shown when the post-win bonus puzzle is answered correctly.
pub const BONUS_SOLVED: &str = "Wow! You solved the bonus question! You're amazing! 🌟";

/// Shown when the bonus puzzle is missed. Still a win.
pub const BONUS_MISSED: &str = "Good try! You still found Tilly, and that's what counts! 🎉";

/// Shown when the fifth puzzle is solved and the bonus puzzle appears.
pub const BONUS_OFFER: &str = "You found Tilly! Here's a special bonus question for you!";

/// Tiered praise keyed by the current streak.
#[must_use]
pub const fn encouragement(streak: u32) -> &'static str {
    match streak {
        3 => "You're on a roll! 🔥",
        5 => "Amazing streak! 🌟",
        s if s > 5 => "Incredible! 🏆",
        _ => "That's correct! Great job!",
    }
}

/// Generic per-topic hint. Deliberately not tied to the specific question.
#[must_use]
pub const fn hint(topic: Topic) -> &'static str {
    match topic {
        Topic::Alphabet => "Think about the alphabet: A, B, C, D, E, F...",
        Topic::Numbers => "Count carefully: 1, 2, 3, 4, 5...",
        Topic::Addition => "Try counting on your fingers!",
    }
}

#[must_use]
pub fn welcome(player_name: &str) -> String {
    format!("Welcome, {player_name}! Tilly is hiding somewhere. Solve puzzles to find her!")
}

#[must_use]
pub fn moved_to(location_name: &str) -> String {
    format!("You go to the {location_name}.")
}

#[must_use]
pub fn look_around(location_name: &str, detail: &str) -> String {
    format!("You look carefully around the {location_name}. {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encouragement_tiers() {
        assert_eq!(encouragement(1), "That's correct! Great job!");
        assert_eq!(encouragement(3), "You're on a roll! 🔥");
        assert_eq!(encouragement(4), "That's correct! Great job!");
        assert_eq!(encouragement(5), "Amazing streak! 🌟");
        assert_eq!(encouragement(6), "Incredible! 🏆");
        assert_eq!(encouragement(12), "Incredible! 🏆");
    }

    #[test]
    fn every_topic_has_a_hint() {
        for topic in Topic::ALL {
            assert!(!hint(topic).is_empty());
        }
    }
}
