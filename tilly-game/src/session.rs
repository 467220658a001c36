//! The authoritative state machine for a single play session.
//!
//! `NotStarted → InProgress → BonusOffered → Won`, with "play again" looping
//! back into `InProgress`. Operations either succeed and mutate state or
//! reject their input and change nothing; there is no failure mode that
//! leaves a session corrupt.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::error::GameError;
use crate::messages;
use crate::puzzle::Puzzle;
use crate::topic::Topic;
use crate::tracker::{self, RepeatTracker};
use crate::world::{Location, START_LOCATION, world};

/// Puzzles to solve before Tilly is found and the bonus question appears.
pub const WIN_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    NotStarted,
    InProgress,
    /// Tilly is found; one optional bonus puzzle is on offer.
    BonusOffered,
    Won,
}

/// Outcome of one answer attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub message: String,
    pub was_bonus: bool,
}

/// End-of-game stats handed to the UI and the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub player_name: String,
    pub difficulty: Difficulty,
    pub puzzles_solved: u32,
    pub moves: u32,
    pub hints_used: u32,
    pub max_streak: u32,
    pub bonus_solved: Option<bool>,
    pub tilly_location_name: String,
    pub elapsed_seconds: Option<u64>,
}

// Placeholder only; load paths call `rehydrate` right after deserializing.
fn restored_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0)
}

/// One player's game. Owns its own repeat tracker and rng, so sessions never
/// interfere with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub player_name: String,
    pub difficulty: Difficulty,
    pub phase: SessionPhase,
    pub current_location: String,
    /// Where Tilly is hiding. Flavor only: finding her is gated on puzzles
    /// solved, not on standing in the right room.
    pub tilly_location: String,
    pub puzzles_solved: u32,
    pub moves: u32,
    pub hints_used: u32,
    pub streak: u32,
    pub max_streak: u32,
    pub bonus_solved: Option<bool>,
    pub current_puzzle: Option<Puzzle>,
    tracker: RepeatTracker,
    seed: u64,
    started_at_ms: Option<f64>,
    #[serde(skip, default = "restored_rng")]
    rng: ChaCha20Rng,
}

impl GameSession {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            player_name: String::new(),
            difficulty: Difficulty::default(),
            phase: SessionPhase::NotStarted,
            current_location: START_LOCATION.to_string(),
            tilly_location: START_LOCATION.to_string(),
            puzzles_solved: 0,
            moves: 0,
            hints_used: 0,
            streak: 0,
            max_streak: 0,
            bonus_solved: None,
            current_puzzle: None,
            tracker: RepeatTracker::new(),
            seed,
            started_at_ms: None,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Begin a new game. Rejects an empty (after trimming) player name with
    /// no state change. Tilly hides in a random room, the player starts at
    /// home, and the first puzzle is loaded for the home topic.
    pub fn start_game(&mut self, name: &str, difficulty: Difficulty) -> Result<String, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        self.player_name = name.to_string();
        self.difficulty = difficulty;
        self.puzzles_solved = 0;
        self.moves = 0;
        self.hints_used = 0;
        self.streak = 0;
        self.max_streak = 0;
        self.bonus_solved = None;
        self.started_at_ms = None;
        self.tracker.begin_session();
        self.tilly_location = world()
            .location_keys()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(START_LOCATION)
            .to_string();
        self.current_location = START_LOCATION.to_string();
        self.phase = SessionPhase::InProgress;
        self.load_puzzle_for_current_location();
        Ok(messages::welcome(&self.player_name))
    }

    /// Restart with the same player and difficulty. Only valid once a game
    /// has been started at least once.
    pub fn reset_game(&mut self) -> Result<String, GameError> {
        if self.player_name.is_empty() {
            return Err(GameError::NotStarted);
        }
        let name = self.player_name.clone();
        self.start_game(&name, self.difficulty)
    }

    /// Record when play began, in milliseconds since the epoch. The clock is
    /// supplied by the platform layer; the core never reads one itself.
    pub fn note_start_time(&mut self, now_ms: f64) {
        self.started_at_ms = Some(now_ms);
    }

    /// Re-arm the rng after deserialization. The stream position is not
    /// persisted, so a restored session reseeds from its stored seed, offset
    /// by the progress counters so a reload does not re-deal draws the
    /// session already consumed.
    pub fn rehydrate(&mut self) {
        let offset = (u64::from(self.moves) << 32) | u64::from(self.puzzles_solved);
        self.rng = ChaCha20Rng::seed_from_u64(self.seed.wrapping_add(offset));
    }

    /// Walk through an exit of the current room. Loads a fresh puzzle for
    /// the destination's topic.
    pub fn move_to(&mut self, key: &str) -> Result<String, GameError> {
        if self.phase != SessionPhase::InProgress {
            return Err(GameError::NotStarted);
        }
        let here = self.location().ok_or(GameError::NotStarted)?;
        let destination = world()
            .get(key)
            .ok_or_else(|| GameError::UnknownLocation(key.to_string()))?;
        if !here.exits.contains(&destination.key) {
            return Err(GameError::NotAnExit {
                from: here.key.to_string(),
                to: key.to_string(),
            });
        }
        self.moves += 1;
        self.current_location = destination.key.to_string();
        self.load_puzzle_for_current_location();
        Ok(messages::moved_to(destination.name))
    }

    /// Attempt the active puzzle. Wrong answers reset the streak and leave
    /// the puzzle in place for another try. The fifth correct answer finds
    /// Tilly and swaps in a single bonus puzzle at a bumped difficulty;
    /// answering it, right or wrong, ends the game as a win.
    pub fn answer(&mut self, selected: &str) -> Result<AnswerFeedback, GameError> {
        if self.phase != SessionPhase::InProgress && self.phase != SessionPhase::BonusOffered {
            return Err(GameError::NotStarted);
        }
        let puzzle = self.current_puzzle.as_ref().ok_or(GameError::NoActivePuzzle)?;
        let correct = puzzle.accepts(selected);
        let was_bonus = self.phase == SessionPhase::BonusOffered;
        self.moves += 1;

        if was_bonus {
            self.bonus_solved = Some(correct);
            if correct {
                self.streak += 1;
                self.max_streak = self.max_streak.max(self.streak);
            }
            self.phase = SessionPhase::Won;
            self.current_puzzle = None;
            let message = if correct {
                messages::BONUS_SOLVED
            } else {
                messages::BONUS_MISSED
            };
            return Ok(AnswerFeedback {
                correct,
                message: message.to_string(),
                was_bonus: true,
            });
        }

        if correct {
            self.puzzles_solved += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
            if self.puzzles_solved >= WIN_THRESHOLD {
                self.offer_bonus();
                return Ok(AnswerFeedback {
                    correct: true,
                    message: messages::BONUS_OFFER.to_string(),
                    was_bonus: false,
                });
            }
            self.load_puzzle_for_current_location();
            Ok(AnswerFeedback {
                correct: true,
                message: messages::encouragement(self.streak).to_string(),
                was_bonus: false,
            })
        } else {
            self.streak = 0;
            Ok(AnswerFeedback {
                correct: false,
                message: messages::RETRY.to_string(),
                was_bonus: false,
            })
        }
    }

    /// Generic hint for the active puzzle's topic. Costs a move.
    pub fn get_hint(&mut self) -> Result<&'static str, GameError> {
        let puzzle = self.current_puzzle.as_ref().ok_or(GameError::NoActivePuzzle)?;
        let topic = puzzle.topic;
        self.hints_used += 1;
        self.moves += 1;
        Ok(messages::hint(topic))
    }

    /// A flavor line about the current room. Costs a move.
    pub fn look_around(&mut self) -> Result<String, GameError> {
        if self.phase == SessionPhase::NotStarted {
            return Err(GameError::NotStarted);
        }
        let here = self.location().ok_or(GameError::NotStarted)?;
        self.moves += 1;
        let detail = here
            .details
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        Ok(messages::look_around(here.name, detail))
    }

    /// Final stats for display and persistence. Idempotent; callable in any
    /// phase. Elapsed time is computed only if a start time was recorded.
    #[must_use]
    pub fn finish(&self, now_ms: Option<f64>) -> SessionSummary {
        let elapsed_seconds = match (self.started_at_ms, now_ms) {
            (Some(start), Some(now)) if now >= start => Some(((now - start) / 1000.0) as u64),
            _ => None,
        };
        let tilly_location_name = world()
            .get(&self.tilly_location)
            .map_or_else(|| crate::world::format_location_name(&self.tilly_location), |loc| {
                loc.name.to_string()
            });
        SessionSummary {
            player_name: self.player_name.clone(),
            difficulty: self.difficulty,
            puzzles_solved: self.puzzles_solved,
            moves: self.moves,
            hints_used: self.hints_used,
            max_streak: self.max_streak,
            bonus_solved: self.bonus_solved,
            tilly_location_name,
            elapsed_seconds,
        }
    }

    /// The room the player is standing in, if the key is valid.
    #[must_use]
    pub fn location(&self) -> Option<&'static Location> {
        world().get(&self.current_location)
    }

    fn load_puzzle_for_current_location(&mut self) {
        let topic = self.location().map_or(Topic::default(), |loc| loc.topic);
        self.current_puzzle = Some(tracker::pick_puzzle(
            topic,
            self.difficulty,
            &mut self.tracker,
            &mut self.rng,
        ));
    }

    fn offer_bonus(&mut self) {
        let topic = Topic::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        self.current_puzzle = Some(tracker::pick_puzzle(
            topic,
            self.difficulty.bumped(),
            &mut self.tracker,
            &mut self.rng,
        ));
        self.phase = SessionPhase::BonusOffered;
    }
}
