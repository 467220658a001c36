use thiserror::Error;

/// Validation errors surfaced by the session state machine.
///
/// Every variant means "input rejected, nothing changed". There is no fatal
/// error class: a session always remains in a valid, continuable state, and
/// content gaps or backend failures are resolved internally instead of
/// erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player name cannot be empty")]
    EmptyPlayerName,
    #[error("no game in progress")]
    NotStarted,
    #[error("unknown location: {0}")]
    UnknownLocation(String),
    #[error("cannot reach {to} from {from}")]
    NotAnExit { from: String, to: String },
    #[error("no active puzzle")]
    NoActivePuzzle,
}
