// ============================================================================
// APP CONTEXT - Shared services handed to every component
// ============================================================================
// Built once by the root component; the realtime connection manager lives
// here instead of in a process-wide static.
// ============================================================================

use yew::prelude::*;

use crate::services::realtime::ConnectionManager;
use crate::services::ApiClient;
use crate::state::NotificationCenter;
use crate::stores::SessionStore;

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub session: SessionStore,
    pub api: ApiClient,
    pub realtime: ConnectionManager,
    pub notifications: NotificationCenter,
}

impl AppContext {
    /// Browser storage, configured backend, browser transports
    pub fn browser() -> Self {
        let session = SessionStore::browser();
        Self {
            api: ApiClient::from_config(session.clone()),
            session,
            realtime: ConnectionManager::from_config(),
            notifications: NotificationCenter::new(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub context: AppContext,
    pub children: Children,
}

#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    html! {
        <ContextProvider<AppContext> context={props.context.clone()}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

/// Context provided by [`AppContextProvider`]; falls back to a browser
/// context when rendered outside of it.
#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| {
        log::warn!("⚠️ AppContext missing, using a standalone browser context");
        AppContext::browser()
    })
}
