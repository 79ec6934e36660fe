// ============================================================================
// SHEET - controlled side panel
// ============================================================================

use yew::prelude::*;

use super::dialog::{request_close, DialogContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetSide {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl SheetSide {
    pub fn class(&self) -> &'static str {
        match self {
            SheetSide::Top => "sheet-top",
            SheetSide::Right => "sheet-right",
            SheetSide::Bottom => "sheet-bottom",
            SheetSide::Left => "sheet-left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    #[prop_or_default]
    pub side: SheetSide,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Sheet)]
pub fn sheet(props: &SheetProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close = request_close::<MouseEvent>(&props.on_open_change);
    let context = DialogContext {
        on_open_change: props.on_open_change.clone(),
    };

    html! {
        <ContextProvider<DialogContext> {context}>
            <div class="sheet-root">
                <div class="sheet-overlay" onclick={close.clone()}></div>
                <aside
                    class={classes!("sheet-content", props.side.class(), props.class.clone())}
                    role="dialog"
                    aria-modal="true"
                >
                    <button type="button" class="sheet-close" aria-label="Close" onclick={close}>
                        {"✕"}
                    </button>
                    {props.children.clone()}
                </aside>
            </div>
        </ContextProvider<DialogContext>>
    }
}
