// ============================================================================
// ROLE SHELL - sidebar + page body for a signed-in user
// ============================================================================

use yew::prelude::*;

use crate::app::Page;
use crate::components::sidebar::Sidebar;
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Sheet, SheetSide};
use crate::models::session::Session;
use crate::viewmodels::navigation_viewmodel::nav_items;
use crate::views::{PlaceholderView, TimetableView};

#[derive(Properties, PartialEq)]
pub struct RoleShellProps {
    pub session: Session,
    pub page: Page,
    pub path: AttrValue,
}

#[function_component(RoleShell)]
pub fn role_shell(props: &RoleShellProps) -> Html {
    let menu_open = use_state(|| false);
    let role = props.session.role();

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| menu_open.set(true))
    };
    let on_menu_change = {
        let menu_open = menu_open.clone();
        Callback::from(move |open: bool| menu_open.set(open))
    };

    let section = props.page.section().unwrap_or_default();
    let body = if section == "timetable" {
        html! { <TimetableView {role} /> }
    } else {
        let title = nav_items(role)
            .iter()
            .find(|item| item.route.rsplit('/').next() == Some(section))
            .map(|item| item.label.to_string())
            .unwrap_or_else(|| section.replace('-', " "));
        html! { <PlaceholderView title={title} /> }
    };

    let user_name = AttrValue::from(props.session.user.name.clone());

    html! {
        <div class="app-shell">
            <Sidebar class="sidebar-desktop" {role} path={props.path.clone()} user_name={user_name.clone()} />

            <Sheet open={*menu_open} on_open_change={on_menu_change} side={SheetSide::Left}>
                <Sidebar {role} path={props.path.clone()} {user_name} />
            </Sheet>

            <main class="app-main">
                <header class="app-topbar">
                    <Button
                        class="menu-button"
                        variant={ButtonVariant::Ghost}
                        size={ButtonSize::Icon}
                        onclick={open_menu}
                    >
                        {"☰"}
                    </Button>
                </header>
                {body}
            </main>
        </div>
    }
}
