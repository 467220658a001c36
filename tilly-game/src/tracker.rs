//! Repeat avoidance for puzzle selection.
//!
//! Session-scoped: each [`RepeatTracker`] belongs to one game session and is
//! carried inside it, so concurrent sessions never see each other's history.
//!
//! Two recency windows per `(difficulty, topic)` cell: a bounded FIFO of
//! recently served question texts and a set of everything served this
//! session. Selection filters the candidate pool through both, relaxing in
//! two steps when the filters would reject everything, so a pick always
//! exists even for a single-template cell.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use crate::difficulty::Difficulty;
use crate::generator;
use crate::library;
use crate::puzzle::Puzzle;
use crate::topic::Topic;

/// How many distinct candidates the selector tries to offer the tracker,
/// topping up with extra draws when a cell has fewer template kinds.
const TARGET_POOL: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct CellWindow {
    difficulty: Difficulty,
    topic: Topic,
    history: VecDeque<String>,
    session: HashSet<String>,
}

/// Recency state for every `(difficulty, topic)` cell touched so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatTracker {
    cells: Vec<CellWindow>,
}

impl RepeatTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the per-session sets. Rolling history survives, so a fresh
    /// session still avoids the questions the last one just saw.
    pub fn begin_session(&mut self) {
        for cell in &mut self.cells {
            cell.session.clear();
        }
    }

    /// Pick one puzzle from `candidates`, avoiding recently served questions.
    ///
    /// Filters through both windows first; if nothing survives, clears the
    /// session set and retries with history only; if still nothing, clears
    /// history and uses the full pool. The chosen question text is recorded
    /// in both windows. Returns `None` only for an empty candidate slice.
    pub fn select<R: Rng>(&mut self, candidates: &[Puzzle], rng: &mut R) -> Option<Puzzle> {
        let first = candidates.first()?;
        let history_cap = (candidates.len() / 2).max(1);
        let cell = self.cell_mut(first.difficulty, first.topic);

        let mut survivors: Vec<&Puzzle> = candidates
            .iter()
            .filter(|p| !cell.history.contains(&p.question) && !cell.session.contains(&p.question))
            .collect();
        if survivors.is_empty() {
            cell.session.clear();
            survivors = candidates
                .iter()
                .filter(|p| !cell.history.contains(&p.question))
                .collect();
        }
        if survivors.is_empty() {
            cell.history.clear();
            survivors = candidates.iter().collect();
        }

        let chosen = (*survivors.choose(rng)?).clone();
        while cell.history.len() >= history_cap {
            cell.history.pop_front();
        }
        cell.history.push_back(chosen.question.clone());
        cell.session.insert(chosen.question.clone());
        Some(chosen)
    }

    fn cell_mut(&mut self, difficulty: Difficulty, topic: Topic) -> &mut CellWindow {
        let index = self
            .cells
            .iter()
            .position(|cell| cell.difficulty == difficulty && cell.topic == topic);
        match index {
            Some(i) => &mut self.cells[i],
            None => {
                self.cells.push(CellWindow {
                    difficulty,
                    topic,
                    ..CellWindow::default()
                });
                // just pushed, so last element exists
                let last = self.cells.len() - 1;
                &mut self.cells[last]
            }
        }
    }
}

/// Build a candidate pool for a `(topic, difficulty)` cell and let the
/// tracker choose from it. One candidate per template kind, topped up with
/// extra draws until the pool holds [`TARGET_POOL`] distinct questions or
/// the draw budget runs out. An empty template table yields the topic
/// fallback puzzle.
pub fn pick_puzzle<R: Rng>(
    topic: Topic,
    difficulty: Difficulty,
    tracker: &mut RepeatTracker,
    rng: &mut R,
) -> Puzzle {
    let kinds = library::templates(topic, difficulty);
    let mut candidates: Vec<Puzzle> = Vec::with_capacity(TARGET_POOL);
    for kind in kinds {
        push_unique(&mut candidates, generator::instantiate(*kind, difficulty, rng));
    }
    for _ in 0..16 {
        if candidates.len() >= TARGET_POOL {
            break;
        }
        let Some(kind) = kinds.choose(rng) else { break };
        push_unique(&mut candidates, generator::instantiate(*kind, difficulty, rng));
    }
    tracker
        .select(&candidates, rng)
        .unwrap_or_else(|| Puzzle::fallback(topic))
}

fn push_unique(candidates: &mut Vec<Puzzle>, puzzle: Puzzle) {
    if !candidates.iter().any(|p| p.question == puzzle.question) {
        candidates.push(puzzle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn numbered(question: &str) -> Puzzle {
        Puzzle {
            question: question.to_string(),
            ..Puzzle::fallback(Topic::Numbers)
        }
    }

    #[test]
    fn no_consecutive_repeats_with_a_multi_question_pool() {
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let mut tracker = RepeatTracker::new();
        let pool: Vec<Puzzle> = ["q1", "q2", "q3", "q4"].iter().map(|q| numbered(q)).collect();
        let mut previous = String::new();
        for _ in 0..100 {
            let chosen = tracker.select(&pool, &mut rng).unwrap();
            assert_ne!(chosen.question, previous, "served the same question twice in a row");
            previous = chosen.question;
        }
    }

    #[test]
    fn single_candidate_pool_always_yields_a_pick() {
        let mut rng = ChaCha20Rng::seed_from_u64(23);
        let mut tracker = RepeatTracker::new();
        let pool = vec![numbered("only")];
        for _ in 0..10 {
            let chosen = tracker.select(&pool, &mut rng).unwrap();
            assert_eq!(chosen.question, "only");
        }
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut rng = ChaCha20Rng::seed_from_u64(25);
        let mut tracker = RepeatTracker::new();
        assert!(tracker.select(&[], &mut rng).is_none());
    }

    #[test]
    fn begin_session_clears_session_sets_but_keeps_history() {
        let mut rng = ChaCha20Rng::seed_from_u64(27);
        let mut tracker = RepeatTracker::new();
        let pool: Vec<Puzzle> = ["a", "b", "c", "d"].iter().map(|q| numbered(q)).collect();
        for _ in 0..3 {
            tracker.select(&pool, &mut rng).unwrap();
        }
        let cell = &tracker.cells[0];
        assert!(!cell.session.is_empty());
        assert!(!cell.history.is_empty());
        let history_before = cell.history.clone();

        tracker.begin_session();
        let cell = &tracker.cells[0];
        assert!(cell.session.is_empty());
        assert_eq!(cell.history, history_before);
    }

    #[test]
    fn history_stays_bounded_at_half_the_pool() {
        let mut rng = ChaCha20Rng::seed_from_u64(29);
        let mut tracker = RepeatTracker::new();
        let pool: Vec<Puzzle> = ["a", "b", "c", "d", "e", "f"].iter().map(|q| numbered(q)).collect();
        for _ in 0..50 {
            tracker.select(&pool, &mut rng).unwrap();
        }
        assert!(tracker.cells[0].history.len() <= 3);
    }

    #[test]
    fn cells_are_keyed_by_difficulty_and_topic() {
        let mut rng = ChaCha20Rng::seed_from_u64(31);
        let mut tracker = RepeatTracker::new();
        pick_puzzle(Topic::Addition, Difficulty::Novice, &mut tracker, &mut rng);
        pick_puzzle(Topic::Addition, Difficulty::Master, &mut tracker, &mut rng);
        pick_puzzle(Topic::Alphabet, Difficulty::Novice, &mut tracker, &mut rng);
        assert_eq!(tracker.cells.len(), 3);
    }

    #[test]
    fn pick_puzzle_serves_well_formed_puzzles_for_every_cell() {
        let mut rng = ChaCha20Rng::seed_from_u64(33);
        let mut tracker = RepeatTracker::new();
        for topic in Topic::ALL {
            for difficulty in Difficulty::SELECTABLE {
                for _ in 0..20 {
                    let puzzle = pick_puzzle(topic, difficulty, &mut tracker, &mut rng);
                    assert!(puzzle.is_well_formed());
                    assert_eq!(puzzle.topic, topic);
                }
            }
        }
    }

    #[test]
    fn tracker_round_trips_through_serde() {
        let mut rng = ChaCha20Rng::seed_from_u64(35);
        let mut tracker = RepeatTracker::new();
        pick_puzzle(Topic::Numbers, Difficulty::Scholar, &mut tracker, &mut rng);
        let json = serde_json::to_string(&tracker).unwrap();
        let restored: RepeatTracker = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tracker);
    }
}
