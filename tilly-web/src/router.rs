use tilly_game::SessionPhase;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Welcome,
    #[at("/game")]
    Game,
    #[at("/win")]
    Win,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Which view a session phase belongs on.
    #[must_use]
    pub const fn from_phase(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::NotStarted => Self::Welcome,
            SessionPhase::InProgress | SessionPhase::BonusOffered => Self::Game,
            SessionPhase::Won => Self::Win,
        }
    }

    /// The phase a route expects, where it expects one. `Leaderboard` and
    /// `NotFound` overlay any phase; `Game` covers both in-progress phases.
    #[must_use]
    pub const fn expected_phase(&self) -> Option<SessionPhase> {
        match self {
            Self::Welcome => Some(SessionPhase::NotStarted),
            Self::Game => Some(SessionPhase::InProgress),
            Self::Win => Some(SessionPhase::Won),
            Self::Leaderboard | Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_map_onto_views() {
        assert_eq!(Route::from_phase(SessionPhase::NotStarted), Route::Welcome);
        assert_eq!(Route::from_phase(SessionPhase::InProgress), Route::Game);
        assert_eq!(Route::from_phase(SessionPhase::BonusOffered), Route::Game);
        assert_eq!(Route::from_phase(SessionPhase::Won), Route::Win);
    }

    #[test]
    fn overlay_routes_carry_no_phase() {
        assert_eq!(Route::Leaderboard.expected_phase(), None);
        assert_eq!(Route::NotFound.expected_phase(), None);
        assert_eq!(Route::Welcome.expected_phase(), Some(SessionPhase::NotStarted));
    }
}
