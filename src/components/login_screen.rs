// ============================================================================
// LOGIN SCREEN - sign in / register
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::navigate;
use crate::components::ui::{Button, Select, Tabs, TabsContent, TabsList, TabsTrigger};
use crate::hooks::{use_app_context, use_session};
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::models::notification::NotificationKind;
use crate::models::session::Role;
use crate::services::api_error::ApiError;
use crate::state::select_state::SelectOption;
use crate::viewmodels::navigation_viewmodel::dashboard_route;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

fn role_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new(Role::Student.as_str(), "Student"),
        SelectOption::new(Role::Faculty.as_str(), "Faculty"),
    ]
}

fn parse_role(value: &str) -> Role {
    match value {
        "faculty" => Role::Faculty,
        "admin" => Role::Admin,
        _ => Role::Student,
    }
}

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let ctx = use_app_context();
    let session = use_session();
    let submitting = use_state(|| false);
    let role = use_state(|| Role::Student.as_str().to_string());

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    // Shared tail of login and register
    let finish = {
        let ctx = ctx.clone();
        let sign_in = session.sign_in.clone();
        let submitting = submitting.clone();
        Callback::from(move |result: Result<AuthResponse, ApiError>| {
            submitting.set(false);
            match result {
                Ok(response) => {
                    let role = response.session.role();
                    log::info!("✅ Signed in as {} ({})", response.session.user.email, role.as_str());
                    sign_in.emit(response.session);
                    // the dashboard is a new page load
                    ctx.notifications.defer(
                        ctx.session.backend().as_ref(),
                        NotificationKind::Success,
                        response.message.unwrap_or_else(|| "Welcome back!".to_string()),
                    );
                    navigate(dashboard_route(role));
                }
                Err(e) => {
                    ctx.notifications.error(e.to_string());
                }
            }
        })
    };

    let on_login = {
        let ctx = ctx.clone();
        let finish = finish.clone();
        let submitting = submitting.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LoginRequest {
                email: input_value(&email_ref),
                password: input_value(&password_ref),
            };
            if request.email.is_empty() || request.password.is_empty() {
                ctx.notifications.error("Please fill in all fields");
                return;
            }
            submitting.set(true);
            let api = ctx.api.clone();
            let finish = finish.clone();
            wasm_bindgen_futures::spawn_local(async move {
                finish.emit(api.auth().login(&request).await);
            });
        })
    };

    let on_register = {
        let ctx = ctx.clone();
        let submitting = submitting.clone();
        let role = role.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = RegisterRequest {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                password: input_value(&password_ref),
                role: parse_role(&role),
            };
            if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
                ctx.notifications.error("Please fill in all fields");
                return;
            }
            submitting.set(true);
            let api = ctx.api.clone();
            let finish = finish.clone();
            wasm_bindgen_futures::spawn_local(async move {
                finish.emit(api.auth().register(&request).await);
            });
        })
    };

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |value: String| role.set(value))
    };

    let busy = *submitting;

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">{"🎓"}</div>
                    <h1>{"Learnify"}</h1>
                    <p>{"Your campus, in one place"}</p>
                </div>

                <Tabs default_value="login">
                    <TabsList>
                        <TabsTrigger value="login">{"Sign in"}</TabsTrigger>
                        <TabsTrigger value="register">{"Register"}</TabsTrigger>
                    </TabsList>

                    <TabsContent value="login">
                        <form class="login-form" onsubmit={on_login}>
                            <div class="form-group">
                                <label for="email">{"Email"}</label>
                                <input ref={email_ref.clone()} id="email" type="email" autocomplete="email" />
                            </div>
                            <div class="form-group">
                                <label for="password">{"Password"}</label>
                                <input ref={password_ref.clone()} id="password" type="password" autocomplete="current-password" />
                            </div>
                            <Button submit=true disabled={busy}>
                                { if busy { "Signing in..." } else { "Sign in" } }
                            </Button>
                        </form>
                    </TabsContent>

                    <TabsContent value="register">
                        <form class="login-form" onsubmit={on_register}>
                            <div class="form-group">
                                <label for="name">{"Full name"}</label>
                                <input ref={name_ref} id="name" type="text" autocomplete="name" />
                            </div>
                            <div class="form-group">
                                <label for="register-email">{"Email"}</label>
                                <input ref={email_ref} id="register-email" type="email" autocomplete="email" />
                            </div>
                            <div class="form-group">
                                <label for="register-password">{"Password"}</label>
                                <input ref={password_ref} id="register-password" type="password" autocomplete="new-password" />
                            </div>
                            <div class="form-group">
                                <label>{"I am a"}</label>
                                <Select
                                    value={AttrValue::from((*role).clone())}
                                    on_value_change={on_role_change}
                                    options={role_options()}
                                    placeholder="Select role"
                                />
                            </div>
                            <Button submit=true disabled={busy}>
                                { if busy { "Creating account..." } else { "Create account" } }
                            </Button>
                        </form>
                    </TabsContent>
                </Tabs>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_values_round_trip_through_the_select() {
        for option in role_options() {
            assert_eq!(parse_role(&option.value).as_str(), option.value);
        }
        assert_eq!(parse_role("anything"), Role::Student);
    }
}
