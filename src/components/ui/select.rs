// ============================================================================
// SELECT - controlled dropdown
// ============================================================================
// The value belongs to the parent; only open/closed lives here. While open,
// the panel is fixed under the trigger and follows it on scroll and resize.
// A mousedown anywhere outside the trigger and panel closes it.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Node, Window};
use yew::prelude::*;

use crate::state::select_state::{
    display_label, panel_position, PanelPosition, SelectOption, SelectOutcome, SelectState,
    TriggerRect,
};

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub value: AttrValue,
    pub on_value_change: Callback<String>,
    pub options: Vec<SelectOption>,
    #[prop_or(AttrValue::Static("Select..."))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
}

fn trigger_rect(trigger: &NodeRef) -> Option<TriggerRect> {
    let element = trigger.cast::<web_sys::Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(TriggerRect {
        top: rect.top(),
        left: rect.left(),
        bottom: rect.bottom(),
        width: rect.width(),
    })
}

fn contains(container: &NodeRef, target: Option<&Node>) -> bool {
    match (container.cast::<Node>(), target) {
        (Some(node), Some(target)) => node.contains(Some(target)),
        _ => false,
    }
}

/// Window/document listeners that only exist while the panel is open.
/// Dropping the guard detaches them.
struct OpenListeners {
    window: Window,
    document: Document,
    reposition: Closure<dyn FnMut(web_sys::Event)>,
    outside: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl OpenListeners {
    fn attach(
        state: UseStateHandle<SelectState>,
        position: UseStateHandle<PanelPosition>,
        trigger: NodeRef,
        panel: NodeRef,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let reposition = {
            let trigger = trigger.clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                if let Some(rect) = trigger_rect(&trigger) {
                    position.set(panel_position(rect));
                }
            }) as Box<dyn FnMut(web_sys::Event)>)
        };

        let outside = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !contains(&trigger, target.as_ref()) && !contains(&panel, target.as_ref()) {
                state.set((*state).outside_click());
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        // capture phase so scrolling any ancestor counts
        let _ = window.add_event_listener_with_callback_and_bool(
            "scroll",
            reposition.as_ref().unchecked_ref(),
            true,
        );
        let _ = window
            .add_event_listener_with_callback("resize", reposition.as_ref().unchecked_ref());
        let _ = document
            .add_event_listener_with_callback("mousedown", outside.as_ref().unchecked_ref());

        Some(Self {
            window,
            document,
            reposition,
            outside,
        })
    }
}

impl Drop for OpenListeners {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback_and_bool(
            "scroll",
            self.reposition.as_ref().unchecked_ref(),
            true,
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.reposition.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mousedown", self.outside.as_ref().unchecked_ref());
    }
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let state = use_state(SelectState::default);
    let position = use_state(PanelPosition::default);
    let trigger_ref = use_node_ref();
    let panel_ref = use_node_ref();

    {
        let state = state.clone();
        let position = position.clone();
        let trigger_ref = trigger_ref.clone();
        let panel_ref = panel_ref.clone();
        use_effect_with(*state, move |current| {
            let listeners = if current.is_open() {
                if let Some(rect) = trigger_rect(&trigger_ref) {
                    position.set(panel_position(rect));
                }
                OpenListeners::attach(state, position, trigger_ref, panel_ref)
            } else {
                None
            };
            move || drop(listeners)
        });
    }

    let on_trigger = {
        let state = state.clone();
        Callback::from(move |_e: MouseEvent| state.set((*state).toggle()))
    };

    let pick = |value: String| {
        let state = state.clone();
        let on_value_change = props.on_value_change.clone();
        Callback::from(move |_e: MouseEvent| {
            let (next, outcome) = (*state).select(&value);
            if let SelectOutcome::ValueChanged(value) = outcome {
                on_value_change.emit(value);
            }
            state.set(next);
        })
    };

    let label = display_label(&props.options, &props.value, &props.placeholder).to_string();
    let has_value = props.options.iter().any(|o| o.value == props.value.as_str());
    let open = state.is_open();

    html! {
        <div class={classes!("select", props.class.clone())}>
            <button
                ref={trigger_ref}
                type="button"
                class="select-trigger"
                aria-haspopup="listbox"
                aria-expanded={open.to_string()}
                aria-label={props.aria_label.clone()}
                onclick={on_trigger}
            >
                <span class={if has_value { "select-value" } else { "select-value placeholder" }}>
                    {label}
                </span>
                <span class="select-chevron">{"▾"}</span>
            </button>
            if open {
                <div ref={panel_ref} class="select-content" role="listbox" style={position.style()}>
                    { for props.options.iter().map(|option| {
                        let selected = option.value == props.value.as_str();
                        html! {
                            <div
                                key={option.value.clone()}
                                class={classes!("select-item", selected.then_some("selected"))}
                                role="option"
                                aria-selected={selected.to_string()}
                                onclick={pick(option.value.clone())}
                            >
                                {option.label.clone()}
                                if selected {
                                    <span class="select-check">{"✓"}</span>
                                }
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
