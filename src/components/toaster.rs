// ============================================================================
// TOASTER - renders the notification center, auto-dismissing each toast
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_app_context;
use crate::models::notification::Notification;
use crate::state::NotificationCenter;

/// Starts one dismiss timer per notification id, never two
fn schedule_dismissals(
    center: &NotificationCenter,
    scheduled: &RefCell<HashSet<String>>,
    items: &[Notification],
) {
    for notification in items {
        if !scheduled.borrow_mut().insert(notification.id.clone()) {
            continue;
        }
        let center = center.clone();
        let id = notification.id.clone();
        Timeout::new(CONFIG.toast_duration_ms, move || center.dismiss(&id)).forget();
    }
}

#[function_component(Toaster)]
pub fn toaster() -> Html {
    let ctx = use_app_context();
    let items = {
        let center = ctx.notifications.clone();
        use_state(move || center.items())
    };

    {
        let items = items.clone();
        let center = ctx.notifications.clone();
        let store = ctx.session.backend();
        use_effect_with((), move |_| {
            let scheduled: Rc<RefCell<HashSet<String>>> = Rc::default();
            let subscriber = {
                let center = center.clone();
                let scheduled = scheduled.clone();
                Callback::from(move |current: Vec<Notification>| {
                    schedule_dismissals(&center, &scheduled, &current);
                    items.set(current);
                })
            };
            center.subscribe(subscriber);
            // pushed before this effect ran
            schedule_dismissals(&center, &scheduled, &center.items());
            // left behind by the page we navigated away from
            center.restore_deferred(store.as_ref());
            || ()
        });
    }

    let dismiss = |id: String| {
        let center = ctx.notifications.clone();
        Callback::from(move |_e: MouseEvent| center.dismiss(&id))
    };

    html! {
        <div class="toaster" aria-live="polite">
            { for items.iter().map(|n| html! {
                <div key={n.id.clone()} class={n.kind.class()} role="status">
                    <span class="toast-message">{n.message.clone()}</span>
                    <button type="button" class="toast-close" aria-label="Dismiss" onclick={dismiss(n.id.clone())}>
                        {"✕"}
                    </button>
                </div>
            }) }
        </div>
    }
}
