// ============================================================================
// ALERT DIALOG - confirmation modal with explicit action / cancel
// ============================================================================

use yew::prelude::*;

use super::dialog::{request_close, DialogContext};

pub use super::dialog::{
    DialogDescription as AlertDialogDescription, DialogFooter as AlertDialogFooter,
    DialogHeader as AlertDialogHeader, DialogTitle as AlertDialogTitle,
};

#[derive(Properties, PartialEq)]
pub struct AlertDialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AlertDialog)]
pub fn alert_dialog(props: &AlertDialogProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close = request_close::<MouseEvent>(&props.on_open_change);
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let context = DialogContext {
        on_open_change: props.on_open_change.clone(),
    };

    html! {
        <ContextProvider<DialogContext> {context}>
            <div class="dialog-root">
                <div class="dialog-overlay" onclick={close}></div>
                <div
                    class={classes!("dialog-content", "alert-dialog", props.class.clone())}
                    role="alertdialog"
                    aria-modal="true"
                    onclick={stop}
                >
                    {props.children.clone()}
                </div>
            </div>
        </ContextProvider<DialogContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertDialogActionProps {
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub destructive: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Runs the action, then closes the dialog
#[function_component(AlertDialogAction)]
pub fn alert_dialog_action(props: &AlertDialogActionProps) -> Html {
    let ctx = use_context::<DialogContext>();
    let onclick = {
        let action = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            action.emit(e);
            if let Some(ctx) = &ctx {
                ctx.on_open_change.emit(false);
            }
        })
    };
    let variant = if props.destructive { "btn-destructive" } else { "btn-default" };
    html! {
        <button type="button" class={classes!("btn", variant)} disabled={props.disabled} {onclick}>
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertDialogCancelProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AlertDialogCancel)]
pub fn alert_dialog_cancel(props: &AlertDialogCancelProps) -> Html {
    let onclick = use_context::<DialogContext>()
        .map(|ctx| request_close::<MouseEvent>(&ctx.on_open_change))
        .unwrap_or_default();
    html! {
        <button type="button" class="btn btn-outline" {onclick}>
            {props.children.clone()}
        </button>
    }
}
