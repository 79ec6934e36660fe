// ============================================================================
// USE TIMETABLE HOOK - cached entries, refreshed from the API on mount
// ============================================================================

use yew::prelude::*;

use crate::app::navigate;
use crate::hooks::app_context::use_app_context;
use crate::models::session::Role;
use crate::models::timetable::TimetableEntry;
use crate::viewmodels::navigation_viewmodel::expire_session;
use crate::viewmodels::timetable_viewmodel::{load_cached, save_cached};

pub struct UseTimetableHandle {
    pub entries: UseStateHandle<Vec<TimetableEntry>>,
    pub loading: UseStateHandle<bool>,
}

#[hook]
pub fn use_timetable(role: Role) -> UseTimetableHandle {
    let ctx = use_app_context();
    let entries = {
        let backend = ctx.session.backend();
        use_state(move || load_cached(backend.as_ref()))
    };
    let loading = use_state(|| false);

    {
        let entries = entries.clone();
        let loading = loading.clone();
        use_effect_with(role, move |role| {
            let role = *role;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match role {
                    Role::Student => ctx.api.student().timetable().await,
                    Role::Faculty | Role::Admin => ctx.api.faculty().timetable().await,
                };
                match result {
                    Ok(fresh) => {
                        log::info!("📅 Timetable refreshed: {} entries", fresh.len());
                        save_cached(ctx.session.backend().as_ref(), &fresh);
                        entries.set(fresh);
                    }
                    Err(e) if e.is_unauthorized() => {
                        let route = expire_session(&ctx.session, &ctx.realtime, &ctx.notifications);
                        navigate(route);
                        return;
                    }
                    Err(e) => {
                        // keep showing the cached copy
                        log::warn!("⚠️ Timetable refresh failed, using cache: {}", e);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    UseTimetableHandle { entries, loading }
}
