//! Persistence and identity seam.
//!
//! The game core talks to an abstract [`Backend`]; the only implementation
//! shipped here is an in-memory [`MockBackend`] seeded with demo data, so
//! the whole game runs with no server. Saves are best-effort: the wrapper
//! functions log failures and swallow them, because gameplay is never
//! blocked by a persistence error.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

use crate::progress::{Badge, LeaderboardEntry, PlayerProgress};
use crate::session::SessionSummary;
use crate::topic::Topic;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already in use")]
    EmailInUse,
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// A signed-in player. The password never leaves the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub uid: String,
    pub email: String,
    pub display_name: String,
}

/// Everything the game needs from a persistence service.
pub trait Backend {
    fn sign_in(&self, email: &str, password: &str) -> Result<UserAccount, BackendError>;
    fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<UserAccount, BackendError>;
    fn sign_out(&self);
    fn get_progress(&self, uid: &str) -> Result<PlayerProgress, BackendError>;
    fn update_user_progress(&self, uid: &str, progress: PlayerProgress)
    -> Result<(), BackendError>;
    fn save_puzzle_result(&self, uid: &str, topic: Topic, correct: bool)
    -> Result<(), BackendError>;
    fn save_game_session(&self, uid: &str, summary: &SessionSummary) -> Result<(), BackendError>;
    fn award_badge(&self, uid: &str, badge: Badge) -> Result<(), BackendError>;
    fn get_badges(&self, uid: &str) -> Result<Vec<Badge>, BackendError>;
    fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, BackendError>;
}

#[derive(Debug, Clone)]
struct StoredUser {
    account: UserAccount,
    password: String,
    progress: PlayerProgress,
    sessions: Vec<SessionSummary>,
    badges: Vec<Badge>,
}

#[derive(Debug, Default)]
struct MockState {
    users: HashMap<String, StoredUser>,
    leaderboard: Vec<LeaderboardEntry>,
    next_uid: u32,
}

/// In-memory backend with the demo account and a small sample leaderboard.
#[derive(Debug)]
pub struct MockBackend {
    state: RefCell<MockState>,
}

impl MockBackend {
    /// Demo credentials: `test@example.com` / `password123`.
    #[must_use]
    pub fn new() -> Self {
        let mut users = HashMap::new();
        users.insert(
            "user1".to_string(),
            StoredUser {
                account: UserAccount {
                    uid: "user1".to_string(),
                    email: "test@example.com".to_string(),
                    display_name: "Test User".to_string(),
                },
                password: "password123".to_string(),
                progress: PlayerProgress {
                    total_puzzles_solved: 15,
                    alphabet_puzzles_solved: 5,
                    number_puzzles_solved: 5,
                    addition_puzzles_solved: 5,
                    hints_used: 3,
                },
                sessions: Vec::new(),
                badges: Vec::new(),
            },
        );
        let leaderboard = vec![
            LeaderboardEntry { name: "Alex".to_string(), score: 15 },
            LeaderboardEntry { name: "Sam".to_string(), score: 12 },
            LeaderboardEntry { name: "Jordan".to_string(), score: 20 },
        ];
        Self {
            state: RefCell::new(MockState {
                users,
                leaderboard,
                next_uid: 2,
            }),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MockBackend {
    fn sign_in(&self, email: &str, password: &str) -> Result<UserAccount, BackendError> {
        let state = self.state.borrow();
        state
            .users
            .values()
            .find(|user| user.account.email == email && user.password == password)
            .map(|user| user.account.clone())
            .ok_or(BackendError::InvalidCredentials)
    }

    fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<UserAccount, BackendError> {
        let mut state = self.state.borrow_mut();
        if state.users.values().any(|user| user.account.email == email) {
            return Err(BackendError::EmailInUse);
        }
        let uid = format!("user{}", state.next_uid);
        state.next_uid += 1;
        let account = UserAccount {
            uid: uid.clone(),
            email: email.to_string(),
            display_name: display_name.to_string(),
        };
        state.users.insert(
            uid,
            StoredUser {
                account: account.clone(),
                password: password.to_string(),
                progress: PlayerProgress::default(),
                sessions: Vec::new(),
                badges: Vec::new(),
            },
        );
        Ok(account)
    }

    fn sign_out(&self) {}

    fn get_progress(&self, uid: &str) -> Result<PlayerProgress, BackendError> {
        self.state
            .borrow()
            .users
            .get(uid)
            .map(|user| user.progress)
            .ok_or_else(|| BackendError::UserNotFound(uid.to_string()))
    }

    fn update_user_progress(
        &self,
        uid: &str,
        progress: PlayerProgress,
    ) -> Result<(), BackendError> {
        let mut state = self.state.borrow_mut();
        let user = state
            .users
            .get_mut(uid)
            .ok_or_else(|| BackendError::UserNotFound(uid.to_string()))?;
        user.progress = progress;
        Ok(())
    }

    fn save_puzzle_result(
        &self,
        uid: &str,
        topic: Topic,
        correct: bool,
    ) -> Result<(), BackendError> {
        let mut state = self.state.borrow_mut();
        let user = state
            .users
            .get_mut(uid)
            .ok_or_else(|| BackendError::UserNotFound(uid.to_string()))?;
        if correct {
            user.progress.record_solved(topic);
        }
        Ok(())
    }

    fn save_game_session(&self, uid: &str, summary: &SessionSummary) -> Result<(), BackendError> {
        let mut state = self.state.borrow_mut();
        let user = state
            .users
            .get_mut(uid)
            .ok_or_else(|| BackendError::UserNotFound(uid.to_string()))?;
        user.sessions.push(summary.clone());
        Ok(())
    }

    /// Idempotent: re-awarding a badge the player already holds is a no-op.
    fn award_badge(&self, uid: &str, badge: Badge) -> Result<(), BackendError> {
        let mut state = self.state.borrow_mut();
        let user = state
            .users
            .get_mut(uid)
            .ok_or_else(|| BackendError::UserNotFound(uid.to_string()))?;
        if !user
            .badges
            .iter()
            .any(|held| held.topic == badge.topic && held.level == badge.level)
        {
            user.badges.push(badge);
        }
        Ok(())
    }

    fn get_badges(&self, uid: &str) -> Result<Vec<Badge>, BackendError> {
        self.state
            .borrow()
            .users
            .get(uid)
            .map(|user| user.badges.clone())
            .ok_or_else(|| BackendError::UserNotFound(uid.to_string()))
    }

    fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, BackendError> {
        Ok(self.state.borrow().leaderboard.clone())
    }
}

/// Save a finished session, logging and swallowing any failure.
pub fn record_session(backend: &dyn Backend, uid: &str, summary: &SessionSummary) {
    if let Err(err) = backend.save_game_session(uid, summary) {
        log::warn!("failed to save session for {uid}: {err}");
    }
}

/// Save one puzzle attempt, logging and swallowing any failure.
pub fn record_puzzle_result(backend: &dyn Backend, uid: &str, topic: Topic, correct: bool) {
    if let Err(err) = backend.save_puzzle_result(uid, topic, correct) {
        log::warn!("failed to save puzzle result for {uid}: {err}");
    }
}

/// Push updated progress counters, logging and swallowing any failure.
pub fn sync_progress(backend: &dyn Backend, uid: &str, progress: PlayerProgress) {
    if let Err(err) = backend.update_user_progress(uid, progress) {
        log::warn!("failed to sync progress for {uid}: {err}");
    }
}

/// Grant every badge the counters have earned, logging and swallowing
/// failures. The backend deduplicates, so this is safe to call after every
/// solve.
pub fn grant_earned_badges(backend: &dyn Backend, uid: &str, progress: &PlayerProgress) {
    for badge in crate::progress::earned_badges(progress) {
        if let Err(err) = backend.award_badge(uid, badge) {
            log::warn!("failed to award badge for {uid}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_account_signs_in() {
        let backend = MockBackend::new();
        let account = backend.sign_in("test@example.com", "password123").unwrap();
        assert_eq!(account.display_name, "Test User");
        assert_eq!(
            backend.sign_in("test@example.com", "wrong"),
            Err(BackendError::InvalidCredentials)
        );
    }

    #[test]
    fn sign_up_rejects_duplicate_emails() {
        let backend = MockBackend::new();
        let account = backend.sign_up("kid@example.com", "pw", "Kiddo").unwrap();
        assert_eq!(account.uid, "user2");
        assert_eq!(
            backend.sign_up("kid@example.com", "pw2", "Other"),
            Err(BackendError::EmailInUse)
        );
        assert_eq!(
            backend.sign_up("test@example.com", "pw", "Dup"),
            Err(BackendError::EmailInUse)
        );
    }

    #[test]
    fn puzzle_results_roll_into_progress() {
        let backend = MockBackend::new();
        let account = backend.sign_up("kid@example.com", "pw", "Kiddo").unwrap();
        backend.save_puzzle_result(&account.uid, Topic::Numbers, true).unwrap();
        backend.save_puzzle_result(&account.uid, Topic::Numbers, false).unwrap();
        backend.save_puzzle_result(&account.uid, Topic::Addition, true).unwrap();
        let progress = backend.get_progress(&account.uid).unwrap();
        assert_eq!(progress.total_puzzles_solved, 2);
        assert_eq!(progress.number_puzzles_solved, 1);
        assert_eq!(progress.addition_puzzles_solved, 1);
    }

    #[test]
    fn best_effort_wrappers_swallow_unknown_users() {
        let backend = MockBackend::new();
        record_puzzle_result(&backend, "ghost", Topic::Alphabet, true);
        sync_progress(&backend, "ghost", PlayerProgress::default());
        // no panic, no state change
        assert_eq!(
            backend.get_progress("ghost"),
            Err(BackendError::UserNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn badges_are_awarded_once() {
        let backend = MockBackend::new();
        let account = backend.sign_up("kid@example.com", "pw", "Kiddo").unwrap();
        let mut progress = PlayerProgress::default();
        for _ in 0..5 {
            progress.record_solved(Topic::Alphabet);
        }
        grant_earned_badges(&backend, &account.uid, &progress);
        grant_earned_badges(&backend, &account.uid, &progress);
        let badges = backend.get_badges(&account.uid).unwrap();
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].topic, Topic::Alphabet);
    }

    #[test]
    fn seeded_leaderboard_is_served() {
        let backend = MockBackend::new();
        let entries = backend.get_leaderboard().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().any(|e| e.name == "Jordan" && e.score == 20));
    }
}
