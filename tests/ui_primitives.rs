//! Browser checks for the controlled UI primitives.
//! Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, MouseEvent, MouseEventInit};
use yew::prelude::*;

use learnify_web::components::ui::dialog::DialogProps;
use learnify_web::components::ui::select::SelectProps;
use learnify_web::components::ui::{
    Dialog, Select, Tabs, TabsContent, TabsList, TabsTrigger,
};
use learnify_web::state::select_state::SelectOption;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// Lets the scheduler render and run effects
async fn settle() {
    TimeoutFuture::new(10).await;
}

fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

fn click(element: &Element) {
    element.clone().dyn_into::<HtmlElement>().unwrap().click();
}

#[allow(deprecated)]
fn mousedown(target: &Element) {
    let mut init = MouseEventInit::new();
    init.bubbles(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, Callback<T>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let callback = {
        let calls = calls.clone();
        Callback::from(move |value: T| calls.borrow_mut().push(value))
    };
    (calls, callback)
}

fn type_select(on_value_change: Callback<String>) -> SelectProps {
    SelectProps {
        value: AttrValue::from("all"),
        on_value_change,
        options: vec![
            SelectOption::new("all", "All Types"),
            SelectOption::new("Lecture", "Lecture"),
            SelectOption::new("Lab", "Lab"),
        ],
        placeholder: AttrValue::from("Type"),
        class: Classes::new(),
        aria_label: None,
    }
}

#[wasm_bindgen_test]
async fn select_outside_click_closes_without_emitting() {
    let root = mount_point();
    let (calls, on_value_change) = recorder::<String>();
    let handle =
        yew::Renderer::<Select>::with_root_and_props(root.clone(), type_select(on_value_change))
            .render();
    settle().await;

    let trigger = find(&root, ".select-trigger").unwrap();
    assert_eq!(trigger.text_content().unwrap_or_default().trim_end_matches('▾'), "All Types");
    assert!(find(&root, ".select-content").is_none());

    click(&trigger);
    settle().await;
    let panel = find(&root, ".select-content").unwrap();

    // inside the panel or on the trigger keeps it open
    mousedown(&panel);
    mousedown(&trigger);
    settle().await;
    assert!(find(&root, ".select-content").is_some());

    let body: Element = web_sys::window().unwrap().document().unwrap().body().unwrap().into();
    mousedown(&body);
    settle().await;
    assert!(find(&root, ".select-content").is_none());
    assert!(calls.borrow().is_empty());

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn select_option_emits_then_closes() {
    let root = mount_point();
    let (calls, on_value_change) = recorder::<String>();
    let handle =
        yew::Renderer::<Select>::with_root_and_props(root.clone(), type_select(on_value_change))
            .render();
    settle().await;

    click(&find(&root, ".select-trigger").unwrap());
    settle().await;
    let options = root.query_selector_all(".select-item").unwrap();
    assert_eq!(options.length(), 3);
    let lab: Element = options.item(2).unwrap().dyn_into().unwrap();
    click(&lab);
    settle().await;

    assert_eq!(*calls.borrow(), vec!["Lab".to_string()]);
    assert!(find(&root, ".select-content").is_none());

    handle.destroy();
    root.remove();
}

#[function_component(ScheduleTabs)]
fn schedule_tabs() -> Html {
    html! {
        <Tabs default_value="lectures">
            <TabsList>
                <TabsTrigger value="lectures">{"Lectures"}</TabsTrigger>
                <TabsTrigger value="labs">{"Labs"}</TabsTrigger>
            </TabsList>
            <TabsContent value="lectures"><p id="lectures-panel">{"Calculus"}</p></TabsContent>
            <TabsContent value="labs"><p id="labs-panel">{"Networks"}</p></TabsContent>
        </Tabs>
    }
}

#[wasm_bindgen_test]
async fn tabs_mount_only_the_active_panel() {
    let root = mount_point();
    let handle = yew::Renderer::<ScheduleTabs>::with_root(root.clone()).render();
    settle().await;

    assert!(find(&root, "#lectures-panel").is_some());
    assert!(find(&root, "#labs-panel").is_none());

    let triggers = root.query_selector_all(".tabs-trigger").unwrap();
    let labs: Element = triggers.item(1).unwrap().dyn_into().unwrap();
    click(&labs);
    settle().await;

    assert!(find(&root, "#lectures-panel").is_none());
    assert!(find(&root, "#labs-panel").is_some());
    assert!(labs.class_list().contains("active"));

    handle.destroy();
    root.remove();
}

fn dialog_props(open: bool, on_open_change: Callback<bool>) -> DialogProps {
    DialogProps {
        open,
        on_open_change,
        class: Classes::new(),
        show_close: true,
        children: Children::default(),
    }
}

#[wasm_bindgen_test]
async fn dialog_overlay_and_close_button_request_close() {
    let root = mount_point();
    let (calls, on_open_change) = recorder::<bool>();
    let handle =
        yew::Renderer::<Dialog>::with_root_and_props(root.clone(), dialog_props(true, on_open_change))
            .render();
    settle().await;

    // clicks inside the content do not reach the overlay
    click(&find(&root, ".dialog-content").unwrap());
    settle().await;
    assert!(calls.borrow().is_empty());

    click(&find(&root, ".dialog-overlay").unwrap());
    click(&find(&root, ".dialog-close").unwrap());
    settle().await;
    assert_eq!(*calls.borrow(), vec![false, false]);

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn closed_dialog_renders_nothing() {
    let root = mount_point();
    let (_calls, on_open_change) = recorder::<bool>();
    let handle =
        yew::Renderer::<Dialog>::with_root_and_props(root.clone(), dialog_props(false, on_open_change))
            .render();
    settle().await;

    assert!(find(&root, ".dialog-root").is_none());

    handle.destroy();
    root.remove();
}
