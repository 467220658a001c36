//! Cross-session player progress: per-topic solve counters, badge awards,
//! and leaderboard ordering.

use serde::{Deserialize, Serialize};

use crate::topic::Topic;

/// Lifetime solve counters for one player, kept by the persistence layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub total_puzzles_solved: u32,
    pub alphabet_puzzles_solved: u32,
    pub number_puzzles_solved: u32,
    pub addition_puzzles_solved: u32,
    pub hints_used: u32,
}

impl PlayerProgress {
    pub fn record_solved(&mut self, topic: Topic) {
        self.total_puzzles_solved += 1;
        match topic {
            Topic::Alphabet => self.alphabet_puzzles_solved += 1,
            Topic::Numbers => self.number_puzzles_solved += 1,
            Topic::Addition => self.addition_puzzles_solved += 1,
        }
    }

    pub fn record_hint(&mut self) {
        self.hints_used += 1;
    }

    #[must_use]
    pub const fn solved_for(&self, topic: Topic) -> u32 {
        match topic {
            Topic::Alphabet => self.alphabet_puzzles_solved,
            Topic::Numbers => self.number_puzzles_solved,
            Topic::Addition => self.addition_puzzles_solved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeLevel {
    Bronze,
    Silver,
    Gold,
}

impl BadgeLevel {
    /// Solves in one topic needed to earn the level.
    #[must_use]
    pub const fn threshold(self) -> u32 {
        match self {
            Self::Bronze => 5,
            Self::Silver => 10,
            Self::Gold => 20,
        }
    }

    pub const ALL: [Self; 3] = [Self::Bronze, Self::Silver, Self::Gold];

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Bronze => "🥉",
            Self::Silver => "🥈",
            Self::Gold => "🥇",
        }
    }
}

/// One earned award, displayed on the win screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub topic: Topic,
    pub level: BadgeLevel,
    pub title: String,
}

/// Every badge the progress counters have earned, lowest level first.
#[must_use]
pub fn earned_badges(progress: &PlayerProgress) -> Vec<Badge> {
    let mut badges = Vec::new();
    for topic in Topic::ALL {
        let solved = progress.solved_for(topic);
        for level in BadgeLevel::ALL {
            if solved >= level.threshold() {
                badges.push(Badge {
                    topic,
                    level,
                    title: format!("{} {} Star", level.icon(), topic.label()),
                });
            }
        }
    }
    badges
}

/// One row of the leaderboard, scored by total puzzles solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Sort entries for display: highest score first, names alphabetical on ties.
#[must_use]
pub fn ranked(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_track_per_topic_and_total() {
        let mut progress = PlayerProgress::default();
        progress.record_solved(Topic::Alphabet);
        progress.record_solved(Topic::Alphabet);
        progress.record_solved(Topic::Addition);
        assert_eq!(progress.total_puzzles_solved, 3);
        assert_eq!(progress.solved_for(Topic::Alphabet), 2);
        assert_eq!(progress.solved_for(Topic::Numbers), 0);
        assert_eq!(progress.solved_for(Topic::Addition), 1);
    }

    #[test]
    fn badges_unlock_at_five_ten_twenty() {
        let mut progress = PlayerProgress::default();
        assert!(earned_badges(&progress).is_empty());

        for _ in 0..5 {
            progress.record_solved(Topic::Numbers);
        }
        let badges = earned_badges(&progress);
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].level, BadgeLevel::Bronze);
        assert_eq!(badges[0].topic, Topic::Numbers);

        for _ in 0..15 {
            progress.record_solved(Topic::Numbers);
        }
        let badges = earned_badges(&progress);
        assert_eq!(badges.len(), 3);
        assert_eq!(badges[2].level, BadgeLevel::Gold);
    }

    #[test]
    fn leaderboard_sorts_by_score_then_name() {
        let entries = vec![
            LeaderboardEntry { name: "Sam".into(), score: 12 },
            LeaderboardEntry { name: "Jordan".into(), score: 20 },
            LeaderboardEntry { name: "Alex".into(), score: 12 },
        ];
        let ranked = ranked(entries);
        assert_eq!(ranked[0].name, "Jordan");
        assert_eq!(ranked[1].name, "Alex");
        assert_eq!(ranked[2].name, "Sam");
    }
}
