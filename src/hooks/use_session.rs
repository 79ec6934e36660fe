// ============================================================================
// USE SESSION HOOK - current session from the Session Store
// ============================================================================

use yew::prelude::*;

use crate::hooks::app_context::use_app_context;
use crate::models::session::Session;

#[derive(Clone)]
pub struct UseSessionHandle {
    pub session: UseStateHandle<Option<Session>>,
    /// Persists a fresh session (login/register) and updates the handle
    pub sign_in: Callback<Session>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let ctx = use_app_context();
    let session = {
        let store = ctx.session.clone();
        use_state(move || store.get())
    };

    let sign_in = {
        let store = ctx.session.clone();
        let session = session.clone();
        Callback::from(move |fresh: Session| {
            store.set(&fresh);
            session.set(Some(fresh));
        })
    };

    UseSessionHandle {
        session,
        sign_in,
    }
}
