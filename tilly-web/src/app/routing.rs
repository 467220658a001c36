use crate::router::Route;
use tilly_game::SessionPhase;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Keep the address bar in step with the session phase. Overlay routes
/// (leaderboard, 404) are left alone so the player can browse them in any
/// phase.
#[hook]
pub fn use_sync_route_with_phase(
    phase: SessionPhase,
    navigator: Option<Navigator>,
    route: Option<Route>,
) {
    use_effect_with(phase, move |phase| {
        let target = Route::from_phase(*phase);
        let on_overlay = route.as_ref().is_some_and(|r| r.expected_phase().is_none());
        if let Some(navigator) = navigator {
            if !on_overlay && route != Some(target.clone()) {
                navigator.push(&target);
            }
        }
    });
}
