//! Finding Tilly Game Engine
//!
//! Platform-agnostic core logic for the Finding Tilly puzzle-hunt game.
//! This crate provides puzzle generation, repeat avoidance, the session
//! state machine, and the persistence-collaborator trait without any UI
//! or platform-specific dependencies.

pub mod backend;
pub mod difficulty;
pub mod error;
pub mod generator;
pub mod library;
pub mod messages;
pub mod progress;
pub mod puzzle;
pub mod session;
pub mod topic;
pub mod tracker;
pub mod world;

// Re-export commonly used types
pub use backend::{
    Backend, BackendError, MockBackend, UserAccount, grant_earned_badges, record_puzzle_result,
    record_session, sync_progress,
};
pub use difficulty::Difficulty;
pub use error::GameError;
pub use generator::{generate, instantiate};
pub use library::{TemplateKind, templates};
pub use progress::{Badge, BadgeLevel, LeaderboardEntry, PlayerProgress, earned_badges, ranked};
pub use puzzle::{OPTION_COUNT, Puzzle};
pub use session::{AnswerFeedback, GameSession, SessionPhase, SessionSummary, WIN_THRESHOLD};
pub use topic::Topic;
pub use tracker::{RepeatTracker, pick_puzzle};
pub use world::{Location, START_LOCATION, WorldMap, format_location_name, world};
