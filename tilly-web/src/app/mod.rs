#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use tilly_game::Backend;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod routing;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();

    // Once, on mount: resume any saved hunt, restore progress counters, and
    // sign in the bundled demo account so saves have somewhere to go.
    {
        let session = app_state.session.clone();
        let progress = app_state.progress.clone();
        let user = app_state.user.clone();
        let backend = app_state.backend.clone();
        use_effect_with((), move |_| {
            if let Some(saved) = crate::storage::load_session() {
                session.set(saved);
            }
            progress.set(crate::storage::load_progress());
            if let Ok(account) = backend.sign_in("test@example.com", "password123") {
                user.set(Some(account));
            }
        });
    }

    let navigator = use_navigator();
    let route = use_route::<Route>();
    routing::use_sync_route_with_phase(app_state.session.phase, navigator.clone(), route.clone());

    view::render_app(&app_state, route.as_ref(), navigator)
}
