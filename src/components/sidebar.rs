// ============================================================================
// SIDEBAR - role navigation with active highlight and logout
// ============================================================================

use yew::prelude::*;

use crate::app::navigate;
use crate::components::ui::{
    AlertDialog, AlertDialogAction, AlertDialogCancel, AlertDialogDescription,
    AlertDialogFooter, AlertDialogHeader, AlertDialogTitle, Button, ButtonVariant,
};
use crate::hooks::use_app_context;
use crate::models::session::Role;
use crate::viewmodels::navigation_viewmodel::{active_index, logout, nav_items};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub role: Role,
    pub path: AttrValue,
    pub user_name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let ctx = use_app_context();
    let confirm_open = use_state(|| false);

    let items = nav_items(props.role);
    let active = active_index(items, &props.path);

    let on_open_change = {
        let confirm_open = confirm_open.clone();
        Callback::from(move |open: bool| confirm_open.set(open))
    };

    let ask_logout = {
        let confirm_open = confirm_open.clone();
        Callback::from(move |_e: MouseEvent| confirm_open.set(true))
    };

    let do_logout = Callback::from(move |_e: MouseEvent| {
        let route = logout(&ctx.session, &ctx.realtime, &ctx.notifications);
        navigate(route);
    });

    html! {
        <aside class={classes!("sidebar", props.class.clone())}>
            <div class="sidebar-header">
                <div class="sidebar-logo">{"🎓"}</div>
                <div>
                    <h1 class="sidebar-title">{"Learnify"}</h1>
                    <p class="sidebar-role">{props.role.as_str()}</p>
                </div>
            </div>

            <nav class="sidebar-nav">
                { for items.iter().enumerate().map(|(index, item)| html! {
                    <a
                        key={item.route}
                        href={item.route}
                        class={classes!("nav-item", (active == Some(index)).then_some("active"))}
                        aria-current={(active == Some(index)).then_some("page")}
                    >
                        <span class={classes!("icon", format!("icon-{}", item.icon))}></span>
                        <span>{item.label}</span>
                    </a>
                }) }
            </nav>

            <div class="sidebar-footer">
                <p class="sidebar-user">{props.user_name.clone()}</p>
                <Button variant={ButtonVariant::Ghost} onclick={ask_logout}>{"Logout"}</Button>
            </div>

            <AlertDialog open={*confirm_open} {on_open_change}>
                <AlertDialogHeader>
                    <AlertDialogTitle>{"Log out?"}</AlertDialogTitle>
                    <AlertDialogDescription>
                        {"You will need to sign in again to access your courses."}
                    </AlertDialogDescription>
                </AlertDialogHeader>
                <AlertDialogFooter>
                    <AlertDialogCancel>{"Cancel"}</AlertDialogCancel>
                    <AlertDialogAction destructive=true onclick={do_logout}>{"Logout"}</AlertDialogAction>
                </AlertDialogFooter>
            </AlertDialog>
        </aside>
    }
}
