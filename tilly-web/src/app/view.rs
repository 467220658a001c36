use tilly_game::{
    Backend, Difficulty, GameSession, PlayerProgress, SessionPhase, earned_badges,
    grant_earned_badges, ranked, record_puzzle_result, record_session, sync_progress,
};
use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::game::GamePage;
use crate::pages::leaderboard::LeaderboardPage;
use crate::pages::not_found::NotFound;
use crate::pages::welcome::WelcomePage;
use crate::pages::win::WinPage;
use crate::router::Route;

fn now_ms() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        Some(js_sys::Date::now())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn persist_session(session: &GameSession) {
    #[cfg(target_arch = "wasm32")]
    if let Err(err) = crate::storage::save_session(session) {
        log::warn!("could not save session: {err}");
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = session;
}

fn persist_progress(progress: &PlayerProgress) {
    #[cfg(target_arch = "wasm32")]
    if let Err(err) = crate::storage::save_progress(progress) {
        log::warn!("could not save progress: {err}");
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = progress;
}

fn drop_saved_session() {
    #[cfg(target_arch = "wasm32")]
    crate::storage::clear_session();
}

/// Compose the whole screen: header, the view for the current route and
/// phase, footer. All session mutations happen in the callbacks built here.
pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let on_start = {
        let session = state.session.clone();
        let message = state.message.clone();
        let form_error = state.form_error.clone();
        Callback::from(move |(name, difficulty): (String, Difficulty)| {
            let mut next = (*session).clone();
            match next.start_game(&name, difficulty) {
                Ok(welcome) => {
                    if let Some(now) = now_ms() {
                        next.note_start_time(now);
                    }
                    persist_session(&next);
                    message.set(AttrValue::from(welcome));
                    form_error.set(AttrValue::default());
                    session.set(next);
                }
                Err(err) => form_error.set(AttrValue::from(err.to_string())),
            }
        })
    };

    let on_answer = {
        let session = state.session.clone();
        let message = state.message.clone();
        let progress = state.progress.clone();
        let user = state.user.clone();
        let backend = state.backend.clone();
        Callback::from(move |selected: String| {
            let mut next = (*session).clone();
            let topic = next.current_puzzle.as_ref().map(|p| p.topic);
            match next.answer(&selected) {
                Ok(feedback) => {
                    if feedback.correct {
                        if let Some(topic) = topic {
                            let mut updated = *progress;
                            updated.record_solved(topic);
                            persist_progress(&updated);
                            progress.set(updated);
                            if let Some(account) = user.as_ref() {
                                record_puzzle_result(backend.as_ref(), &account.uid, topic, true);
                                sync_progress(backend.as_ref(), &account.uid, updated);
                                grant_earned_badges(backend.as_ref(), &account.uid, &updated);
                            }
                        }
                    }
                    if next.phase == SessionPhase::Won {
                        let summary = next.finish(now_ms());
                        if let Some(account) = user.as_ref() {
                            record_session(backend.as_ref(), &account.uid, &summary);
                        }
                        drop_saved_session();
                    } else {
                        persist_session(&next);
                    }
                    message.set(AttrValue::from(feedback.message));
                    session.set(next);
                }
                Err(err) => message.set(AttrValue::from(err.to_string())),
            }
        })
    };

    let on_move = {
        let session = state.session.clone();
        let message = state.message.clone();
        Callback::from(move |key: String| {
            let mut next = (*session).clone();
            match next.move_to(&key) {
                Ok(moved) => {
                    persist_session(&next);
                    message.set(AttrValue::from(moved));
                    session.set(next);
                }
                Err(err) => message.set(AttrValue::from(err.to_string())),
            }
        })
    };

    let on_hint = {
        let session = state.session.clone();
        let message = state.message.clone();
        let progress = state.progress.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            match next.get_hint() {
                Ok(hint) => {
                    let mut updated = *progress;
                    updated.record_hint();
                    persist_progress(&updated);
                    progress.set(updated);
                    persist_session(&next);
                    message.set(AttrValue::from(hint));
                    session.set(next);
                }
                Err(err) => message.set(AttrValue::from(err.to_string())),
            }
        })
    };

    let on_look = {
        let session = state.session.clone();
        let message = state.message.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            match next.look_around() {
                Ok(detail) => {
                    persist_session(&next);
                    message.set(AttrValue::from(detail));
                    session.set(next);
                }
                Err(err) => message.set(AttrValue::from(err.to_string())),
            }
        })
    };

    let on_play_again = {
        let session = state.session.clone();
        let message = state.message.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            match next.reset_game() {
                Ok(welcome) => {
                    if let Some(now) = now_ms() {
                        next.note_start_time(now);
                    }
                    persist_session(&next);
                    message.set(AttrValue::from(welcome));
                    session.set(next);
                }
                Err(err) => message.set(AttrValue::from(err.to_string())),
            }
        })
    };

    let go_leaderboard = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Leaderboard);
            }
        })
    };

    let go_back = {
        let navigator = navigator.clone();
        let phase = state.session.phase;
        Callback::from(move |()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::from_phase(phase));
            }
        })
    };

    let current = route
        .cloned()
        .unwrap_or_else(|| Route::from_phase(state.session.phase));
    let main_view = match current {
        Route::Leaderboard => {
            let entries = ranked(state.backend.get_leaderboard().unwrap_or_default());
            html! { <LeaderboardPage entries={entries} on_back={go_back} /> }
        }
        Route::NotFound => html! { <NotFound on_go_home={go_back} /> },
        Route::Welcome | Route::Game | Route::Win => match state.session.phase {
            SessionPhase::NotStarted => html! {
                <WelcomePage on_start={on_start} error={(*state.form_error).clone()} />
            },
            SessionPhase::InProgress | SessionPhase::BonusOffered => html! {
                <GamePage
                    session={(*state.session).clone()}
                    message={(*state.message).clone()}
                    on_answer={on_answer}
                    on_move={on_move}
                    on_hint={on_hint}
                    on_look={on_look}
                />
            },
            SessionPhase::Won => {
                let summary = state.session.finish(now_ms());
                let badges = earned_badges(&state.progress);
                html! {
                    <WinPage summary={summary} badges={badges} on_play_again={on_play_again} />
                }
            }
        },
    };

    html! {
        <>
            <Header
                player_name={AttrValue::from(state.session.player_name.clone())}
                on_show_leaderboard={go_leaderboard}
            />
            <main id="main" role="main">
                { main_view }
            </main>
            <Footer />
        </>
    }
}
