//! Browser persistence via `localStorage`.
//!
//! Two keys: the active session (so a reload resumes mid-hunt) and the
//! lifetime progress counters. Both are best-effort; a storage failure is
//! reported but never blocks play.

use gloo::storage::{LocalStorage, Storage};
use thiserror::Error;
use tilly_game::{GameSession, PlayerProgress};

const SESSION_KEY: &str = "tilly.session";
const PROGRESS_KEY: &str = "tilly.progress";

#[derive(Debug, Error)]
pub enum WebStorageError {
    #[error("storage operation failed: {0}")]
    Storage(String),
}

pub fn save_session(session: &GameSession) -> Result<(), WebStorageError> {
    LocalStorage::set(SESSION_KEY, session)
        .map_err(|e| WebStorageError::Storage(format!("{e:?}")))
}

#[must_use]
pub fn load_session() -> Option<GameSession> {
    LocalStorage::get(SESSION_KEY).ok().map(|mut session: GameSession| {
        session.rehydrate();
        session
    })
}

pub fn clear_session() {
    LocalStorage::delete(SESSION_KEY);
}

pub fn save_progress(progress: &PlayerProgress) -> Result<(), WebStorageError> {
    LocalStorage::set(PROGRESS_KEY, progress)
        .map_err(|e| WebStorageError::Storage(format!("{e:?}")))
}

#[must_use]
pub fn load_progress() -> PlayerProgress {
    LocalStorage::get(PROGRESS_KEY).unwrap_or_default()
}
