//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api::Api;
use crate::components::use_toasts;
use crate::context::{use_app_context, use_auth, Route};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let ctx = use_app_context();
    let auth = use_auth();
    let toasts = use_toasts();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let email = email.get();
        let password = password.get();
        if email.trim().is_empty() || password.is_empty() {
            toasts.error("Email and password are required");
            return;
        }
        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.login(email.trim(), &password).await {
                Ok(user) => {
                    toasts.success(format!("Welcome back, {}!", user.username));
                    auth.set_user(user);
                    ctx.navigate(Route::Home);
                }
                Err(err) => toasts.error(err.message().to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <h1>"Log in"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
            <p class="auth-switch">
                "New here? "
                <a on:click=move |_| ctx.navigate(Route::Register)>"Create an account"</a>
            </p>
        </div>
    }
}
