// ============================================================================
// TABS - controlled or self-managed tab set
// ============================================================================
// Children are typed: one or more `TabsList` and the `TabsContent` panels.
// Only the active panel is mounted.
// ============================================================================

use yew::html::ChildrenRenderer;
use yew::prelude::*;
use yew::virtual_dom::VChild;

use crate::state::tabs_state::{initial_tab, resolve_active};

#[derive(Clone, PartialEq)]
pub struct TabsContext {
    pub active: AttrValue,
    pub on_select: Callback<AttrValue>,
}

#[derive(Clone, PartialEq)]
pub enum TabsSlot {
    List(VChild<TabsList>),
    Content(VChild<TabsContent>),
}

impl From<VChild<TabsList>> for TabsSlot {
    fn from(child: VChild<TabsList>) -> Self {
        TabsSlot::List(child)
    }
}

impl From<VChild<TabsContent>> for TabsSlot {
    fn from(child: VChild<TabsContent>) -> Self {
        TabsSlot::Content(child)
    }
}

impl From<TabsSlot> for Html {
    fn from(slot: TabsSlot) -> Self {
        match slot {
            TabsSlot::List(child) => child.into(),
            TabsSlot::Content(child) => child.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    /// Seed for the internal value when uncontrolled
    #[prop_or_default]
    pub default_value: Option<AttrValue>,
    /// Parent-owned value; overrides the internal one
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub on_value_change: Callback<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: ChildrenRenderer<TabsSlot>,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let internal = {
        let values: Vec<AttrValue> = props
            .children
            .iter()
            .filter_map(|slot| match slot {
                TabsSlot::Content(child) => Some(child.props.value.clone()),
                TabsSlot::List(_) => None,
            })
            .collect();
        let default_value = props.default_value.clone();
        use_state(move || {
            let values: Vec<&str> = values.iter().map(|v| v.as_str()).collect();
            AttrValue::from(initial_tab(default_value.as_deref(), &values))
        })
    };

    // keep the internal value aligned with a controlling parent
    {
        let internal = internal.clone();
        use_effect_with(props.value.clone(), move |value| {
            if let Some(value) = value {
                internal.set(value.clone());
            }
            || ()
        });
    }

    let active = AttrValue::from(
        resolve_active(props.value.as_deref(), internal.as_str()).to_string(),
    );

    let on_select = {
        let internal = internal.clone();
        let on_value_change = props.on_value_change.clone();
        Callback::from(move |value: AttrValue| {
            internal.set(value.clone());
            on_value_change.emit(value);
        })
    };

    let context = TabsContext {
        active: active.clone(),
        on_select,
    };

    html! {
        <ContextProvider<TabsContext> {context}>
            <div class={classes!("tabs", props.class.clone())}>
                { for props.children.iter().filter_map(|slot| {
                    let hidden = matches!(&slot, TabsSlot::Content(child) if child.props.value != active);
                    (!hidden).then(|| Html::from(slot))
                }) }
            </div>
        </ContextProvider<TabsContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabsListProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TabsList)]
pub fn tabs_list(props: &TabsListProps) -> Html {
    html! {
        <div class={classes!("tabs-list", props.class.clone())} role="tablist">
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabsTriggerProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TabsTrigger)]
pub fn tabs_trigger(props: &TabsTriggerProps) -> Html {
    let Some(ctx) = use_context::<TabsContext>() else {
        log::warn!("⚠️ TabsTrigger '{}' rendered outside Tabs", props.value);
        return Html::default();
    };
    let active = ctx.active == props.value;
    let onclick = {
        let value = props.value.clone();
        Callback::from(move |_e: MouseEvent| ctx.on_select.emit(value.clone()))
    };
    html! {
        <button
            type="button"
            role="tab"
            class={classes!("tabs-trigger", active.then_some("active"), props.class.clone())}
            aria-selected={active.to_string()}
            {onclick}
        >
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabsContentProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TabsContent)]
pub fn tabs_content(props: &TabsContentProps) -> Html {
    let active = use_context::<TabsContext>()
        .map(|ctx| ctx.active == props.value)
        .unwrap_or(false);
    if !active {
        return Html::default();
    }
    html! {
        <div class={classes!("tabs-content", props.class.clone())} role="tabpanel">
            {props.children.clone()}
        </div>
    }
}
