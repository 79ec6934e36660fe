// ============================================================================
// APP - root component
// ============================================================================
// Builds the application context once, resolves the current path against the
// stored session and keeps the realtime connection open while signed in.
// ============================================================================

use serde_json::Value;
use yew::prelude::*;

use crate::app::{current_path, navigate, resolve, Page, Resolution};
use crate::components::login_screen::LoginScreen;
use crate::components::role_shell::RoleShell;
use crate::components::toaster::Toaster;
use crate::hooks::{AppContext, AppContextProvider};

/// Realtime event carrying a user-facing message
const NOTIFICATION_EVENT: &str = "notification";

fn notification_text(payload: &Value) -> Option<String> {
    payload
        .get("message")
        .or_else(|| payload.get("title"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[function_component(App)]
pub fn app() -> Html {
    let context = use_memo((), |_| AppContext::browser());
    let path = use_memo((), |_| current_path());
    let session = use_state({
        let context = context.clone();
        move || context.session.get()
    });

    let resolution = resolve(&path, (*session).as_ref());

    {
        let context = (*context).clone();
        let token = (*session).as_ref().map(|s| s.token.clone());
        use_effect_with(token, move |token| {
            if let Some(token) = token {
                let connection = context.realtime.open(token);
                let notifications = context.notifications.clone();
                connection.off(NOTIFICATION_EVENT);
                connection.on(
                    NOTIFICATION_EVENT,
                    Callback::from(move |payload: Value| {
                        if let Some(text) = notification_text(&payload) {
                            notifications.info(text);
                        }
                    }),
                );
            }
            || ()
        });
    }

    {
        let resolution = resolution.clone();
        use_effect_with(resolution, |resolution| {
            if let Resolution::Redirect(route) = resolution {
                log::info!("↪️ Redirecting to {}", route);
                navigate(route);
            }
            || ()
        });
    }

    let body = match (resolution, (*session).as_ref()) {
        (Resolution::Render(Page::Login), _) => html! { <LoginScreen /> },
        (Resolution::Render(page), Some(session)) => html! {
            <RoleShell session={session.clone()} {page} path={AttrValue::from((*path).clone())} />
        },
        _ => html! { <div class="loading-screen">{"Loading..."}</div> },
    };

    html! {
        <AppContextProvider context={(*context).clone()}>
            {body}
            <Toaster />
        </AppContextProvider>
    }
}
