//! Profile Page
//!
//! Account settings: update username/email, change password, delete the
//! account.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api::Api;
use crate::components::use_toasts;
use crate::context::{use_app_context, use_auth, Route};
use recipe_core::User;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="page profile">
            {move || match auth.user() {
                Some(user) => view! {
                    <div>
                        <h1>{format!("Hi, {}", user.username)}</h1>
                        <ProfileForm user=user/>
                        <PasswordForm/>
                        <DangerZone/>
                    </div>
                }.into_any(),
                None => view! {
                    <p class="auth-required">"Log in to manage your profile."</p>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileForm(user: User) -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = use_auth();
    let toasts = use_toasts();

    let (username, set_username) = signal(user.username);
    let (email, set_email) = signal(user.email);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.user() else { return };
        if submitting.get() {
            return;
        }
        let username = username.get();
        let email = email.get();
        if username.trim().is_empty() || email.trim().is_empty() {
            toasts.error("Username and email are required");
            return;
        }
        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api
                .update_profile(&user.id, Some(username.trim()), Some(email.trim()))
                .await
            {
                Ok(updated) => {
                    auth.set_user(updated);
                    toasts.success("Profile updated");
                }
                Err(err) => toasts.error(err.message().to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="profile-section">
            <h2>"Profile"</h2>
            <form on:submit=on_submit>
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
                <button class="btn primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn PasswordForm() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = use_auth();
    let toasts = use_toasts();

    let (current_pw, set_current_pw) = signal(String::new());
    let (new_pw, set_new_pw) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.user() else { return };
        if submitting.get() {
            return;
        }
        let current = current_pw.get();
        let new = new_pw.get();
        if current.is_empty() || new.is_empty() {
            toasts.error("Both password fields are required");
            return;
        }
        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.change_password(&user.id, &current, &new).await {
                Ok(()) => {
                    set_current_pw.set(String::new());
                    set_new_pw.set(String::new());
                    toasts.success("Password changed");
                }
                Err(err) => toasts.error(err.message().to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="profile-section">
            <h2>"Change password"</h2>
            <form on:submit=on_submit>
                <label>
                    "Current password"
                    <input
                        type="password"
                        prop:value=move || current_pw.get()
                        on:input=move |ev| set_current_pw.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "New password"
                    <input
                        type="password"
                        prop:value=move || new_pw.get()
                        on:input=move |ev| set_new_pw.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Updating..." } else { "Update password" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn DangerZone() -> impl IntoView {
    let api = expect_context::<Api>();
    let ctx = use_app_context();
    let auth = use_auth();
    let toasts = use_toasts();

    // First click arms the confirmation, second click deletes
    let (confirming, set_confirming) = signal(false);
    let (deleting, set_deleting) = signal(false);

    let on_delete = move |_| {
        if !confirming.get() {
            set_confirming.set(true);
            return;
        }
        let Some(user) = auth.user() else { return };
        if deleting.get() {
            return;
        }
        set_deleting.set(true);
        let api = api.clone();
        spawn_local(async move {
            api.delete_account(&user.id).await;
            auth.clear();
            toasts.success("Account deleted");
            ctx.navigate(Route::Home);
        });
    };

    view! {
        <section class="profile-section danger">
            <h2>"Danger zone"</h2>
            <p>"Deleting your account logs you out and removes your login. Your recipes stay in the catalog."</p>
            <div class="danger-actions">
                <button class="btn danger" on:click=on_delete disabled=move || deleting.get()>
                    {move || if deleting.get() {
                        "Deleting..."
                    } else if confirming.get() {
                        "Click again to confirm"
                    } else {
                        "Delete account"
                    }}
                </button>
                {move || confirming.get().then(|| view! {
                    <button class="btn" on:click=move |_| set_confirming.set(false)>
                        "Cancel"
                    </button>
                })}
            </div>
        </section>
    }
}
