//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api::Api;
use crate::components::use_toasts;
use crate::context::{use_app_context, use_auth, Route};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let ctx = use_app_context();
    let auth = use_auth();
    let toasts = use_toasts();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let username = username.get();
        let email = email.get();
        let password = password.get();
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            toasts.error("All fields are required");
            return;
        }
        if password != confirm.get() {
            toasts.error("Passwords do not match");
            return;
        }
        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.register(username.trim(), email.trim(), &password).await {
                Ok(user) => {
                    toasts.success(format!("Welcome, {}!", user.username));
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
            <h1>"Create an account"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
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
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <a on:click=move |_| ctx.navigate(Route::Login)>"Log in"</a>
            </p>
        </div>
    }
}
