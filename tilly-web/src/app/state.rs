use std::rc::Rc;
use tilly_game::{GameSession, MockBackend, PlayerProgress, UserAccount};
use yew::prelude::*;

fn initial_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x7111_7
    }
}

/// All shared UI state, one `UseStateHandle` per concern.
#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<GameSession>,
    /// Latest feedback line shown in the message box.
    pub message: UseStateHandle<AttrValue>,
    /// Validation feedback for the welcome form.
    pub form_error: UseStateHandle<AttrValue>,
    pub progress: UseStateHandle<PlayerProgress>,
    pub user: UseStateHandle<Option<UserAccount>>,
    pub backend: Rc<MockBackend>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let backend = use_memo((), |_| MockBackend::new());
    AppState {
        session: use_state(|| GameSession::new(initial_seed())),
        message: use_state(AttrValue::default),
        form_error: use_state(AttrValue::default),
        progress: use_state(PlayerProgress::default),
        user: use_state(|| None),
        backend,
    }
}
