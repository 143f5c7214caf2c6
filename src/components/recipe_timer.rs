//! Recipe Step Timer Component
//!
//! Hosts one `StepTimer` state machine per rendered step that declares a
//! timer duration. The component owns the single outstanding scheduled
//! tick as a droppable `Timeout` handle: each tick re-arms the next one
//! only while the machine still reports `Running`, and every transition
//! that leaves `Running` (pause, reset, completion, unmount) drops the
//! handle, which cancels the underlying browser timer synchronously.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use recipe_core::{StepTimer, TimerEvent};

use crate::components::toast::{use_toasts, ToastContext};

const TICK_MS: u32 = 1_000;

#[component]
pub fn RecipeTimer(minutes: f64, step_description: String) -> impl IntoView {
    let toasts = use_toasts();
    let timer = RwSignal::new(StepTimer::from_minutes(minutes));
    let pending_tick = StoredValue::new_local(None::<Timeout>);
    let description = StoredValue::new(step_description.clone());

    let on_start = move |_| {
        let started = timer.try_update(|t| t.start()).unwrap_or(false);
        // One outstanding tick per instance: only arm when none is pending
        if started && pending_tick.with_value(|slot| slot.is_none()) {
            arm_tick(timer, pending_tick, description, toasts);
        }
    };

    let on_pause = move |_| {
        let left_running = timer.try_update(|t| t.pause()).unwrap_or(false);
        if left_running {
            pending_tick.update_value(|slot| {
                slot.take();
            });
        }
    };

    let on_reset = move |_| {
        timer.update(|t| t.reset());
        pending_tick.update_value(|slot| {
            slot.take();
        });
    };

    on_cleanup(move || {
        pending_tick.try_update_value(|slot| {
            slot.take();
        });
    });

    view! {
        <div class=move || {
            if timer.with(|t| t.is_completed()) { "recipe-timer complete" } else { "recipe-timer" }
        }>
            <div class="timer-header">
                <span class="timer-label">{format!("Timer: {} min", format_minutes(minutes))}</span>
                <span class="timer-display">{move || timer.with(|t| t.display())}</span>
            </div>

            <div class="timer-progress">
                <div
                    class="timer-progress-fill"
                    style:width=move || format!("{:.1}%", timer.with(|t| t.progress() * 100.0))
                ></div>
            </div>

            <p class="timer-step">{step_description}</p>

            <div class="timer-controls">
                {move || if timer.with(|t| t.is_running()) {
                    view! {
                        <button class="timer-btn" on:click=on_pause>"Pause"</button>
                    }.into_any()
                } else {
                    let completed = timer.with(|t| t.is_completed());
                    view! {
                        <button class="timer-btn" disabled=completed on:click=on_start>
                            {if completed { "Complete" } else { "Start" }}
                        </button>
                    }.into_any()
                }}
                <button class="timer-btn ghost" on:click=on_reset>"Reset"</button>
            </div>
        </div>
    }
}

/// Arm the next tick. The handle lands in `pending_tick`, replacing (and
/// thereby cancelling) whatever was there.
fn arm_tick(
    timer: RwSignal<StepTimer>,
    pending_tick: StoredValue<Option<Timeout>, LocalStorage>,
    description: StoredValue<String>,
    toasts: ToastContext,
) {
    let timeout = Timeout::new(TICK_MS, move || {
        let event = timer.try_update(|t| t.tick()).flatten();
        if let Some(TimerEvent::Completed) = event {
            pending_tick.set_value(None);
            notify_completion(&toasts, &description.get_value());
        } else if timer.try_with_untracked(|t| t.is_running()).unwrap_or(false) {
            arm_tick(timer, pending_tick, description, toasts);
        } else {
            pending_tick.set_value(None);
        }
    });
    pending_tick.set_value(Some(timeout));
}

/// One completion notification per transition into `Completed`. The audio
/// cue is best-effort: its failure never reaches the timer.
fn notify_completion(toasts: &ToastContext, description: &str) {
    toasts.notify("Timer Complete", format!("{} is ready!", description));
    if let Ok(audio) = web_sys::HtmlAudioElement::new_with_src("/notification.mp3") {
        let _ = audio.play();
    }
}

/// "3" for whole minutes, "0.5" for fractional ones
fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{}", minutes as u32)
    } else {
        format!("{}", minutes)
    }
}
