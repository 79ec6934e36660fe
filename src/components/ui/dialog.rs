// ============================================================================
// DIALOG - controlled modal
// ============================================================================
// `open` decides whether anything renders at all. The dialog keeps no
// open/closed state of its own: overlay clicks and the close button ask the
// parent to close through `on_open_change(false)`.
// ============================================================================

use yew::prelude::*;

/// Callback that asks the parent to close, whatever event triggered it
pub(crate) fn request_close<E: 'static>(on_open_change: &Callback<bool>) -> Callback<E> {
    let on_open_change = on_open_change.clone();
    Callback::from(move |_: E| on_open_change.emit(false))
}

/// Lets nested close affordances reach the owning dialog
#[derive(Clone, PartialEq)]
pub struct DialogContext {
    pub on_open_change: Callback<bool>,
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub show_close: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
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
                <div class="dialog-overlay" onclick={close.clone()}></div>
                <div
                    class={classes!("dialog-content", props.class.clone())}
                    role="dialog"
                    aria-modal="true"
                    onclick={stop}
                >
                    {props.children.clone()}
                    if props.show_close {
                        <button type="button" class="dialog-close" aria-label="Close" onclick={close}>
                            {"✕"}
                        </button>
                    }
                </div>
            </div>
        </ContextProvider<DialogContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct DialogCloseProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Any button that should close the surrounding dialog
#[function_component(DialogClose)]
pub fn dialog_close(props: &DialogCloseProps) -> Html {
    let onclick = use_context::<DialogContext>()
        .map(|ctx| request_close::<MouseEvent>(&ctx.on_open_change))
        .unwrap_or_default();
    html! {
        <button type="button" class={classes!("btn", "btn-outline", props.class.clone())} {onclick}>
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DialogHeader)]
pub fn dialog_header(props: &SectionProps) -> Html {
    html! { <div class={classes!("dialog-header", props.class.clone())}>{props.children.clone()}</div> }
}

#[function_component(DialogFooter)]
pub fn dialog_footer(props: &SectionProps) -> Html {
    html! { <div class={classes!("dialog-footer", props.class.clone())}>{props.children.clone()}</div> }
}

#[function_component(DialogTitle)]
pub fn dialog_title(props: &SectionProps) -> Html {
    html! { <h2 class={classes!("dialog-title", props.class.clone())}>{props.children.clone()}</h2> }
}

#[function_component(DialogDescription)]
pub fn dialog_description(props: &SectionProps) -> Html {
    html! { <p class={classes!("dialog-description", props.class.clone())}>{props.children.clone()}</p> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn close_request_always_asks_for_false() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let on_open_change = {
            let calls = calls.clone();
            Callback::from(move |open: bool| calls.borrow_mut().push(open))
        };
        let close = request_close::<()>(&on_open_change);
        close.emit(());
        close.emit(());
        assert_eq!(*calls.borrow(), vec![false, false]);
    }
}
