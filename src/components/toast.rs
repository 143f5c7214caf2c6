//! Toast Notifications
//!
//! Notification sink for the app: pages push success/error messages, the
//! step timers push their completion notification. Toasts dismiss
//! themselves after a few seconds.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub body: Option<String>,
}

/// Toast queue provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), None);
    }

    pub fn error(&self, title: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), None);
    }

    /// Titled notification with a body, e.g. a timer completion
    pub fn notify(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Info, title.into(), Some(body.into()));
    }

    fn push(&self, kind: ToastKind, title: String, body: Option<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                title,
                body,
            })
        });

        let toasts = self.toasts;
        Timeout::new(TOAST_DISMISS_MS, move || {
            let _ = toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
        })
        .forget();
    }

    fn list(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Toast stack, rendered once at the app root
#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.list()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                        ToastKind::Info => "toast info",
                    };
                    view! {
                        <div class=class>
                            <span class="toast-title">{toast.title.clone()}</span>
                            {toast.body.clone().map(|body| view! { <span class="toast-body">{body}</span> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
