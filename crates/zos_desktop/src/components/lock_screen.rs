use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;
use crate::{
    clock::ClockSnapshot,
    lock_screen::{avatar_initial, UnlockOutcome, ERROR_FLASH_MS},
};

#[component]
pub(super) fn LockScreen(
    wm: WindowManagerHandle,
    services: ShellServices,
    lock: RwSignal<LockScreenState>,
) -> impl IntoView {
    let config = services.lock_config();
    let clock_now = create_rw_signal(ClockSnapshot::now());
    let flash_timer = store_value(None::<TimeoutHandle>);

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }
    on_cleanup(move || {
        if let Some(timer) = flash_timer.get_value() {
            timer.clear();
        }
    });

    let submit = move || {
        let policy = services.lock_config();
        let outcome = lock.try_update(|lock| lock.submit(&policy));
        match outcome {
            Some(UnlockOutcome::Unlocked) => logging::log!("desktop unlocked"),
            Some(UnlockOutcome::Rejected) => {
                if let Some(previous) = flash_timer.get_value() {
                    previous.clear();
                }
                let timer = set_timeout_with_handle(
                    move || lock.update(LockScreenState::clear_error),
                    Duration::from_millis(ERROR_FLASH_MS),
                )
                .ok();
                flash_timer.set_value(timer);
            }
            Some(UnlockOutcome::Ignored) | None => {}
        }
    };

    let wallpaper_style =
        move || format!("background-image:url('{}');", wm.settings().wallpaper);
    let unlock_control = if config.require_password {
        view! {
            <form on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                submit();
            }>
                <input
                    type="password"
                    placeholder="Enter Password"
                    autofocus=true
                    class=move || {
                        if lock.with(|lock| lock.show_error) { "zos-lock-input error" } else { "zos-lock-input" }
                    }
                    prop:value=move || lock.with(|lock| lock.input.clone())
                    on:input=move |ev| lock.update(|lock| lock.set_input(event_target_value(&ev)))
                />
            </form>
        }
        .into_view()
    } else {
        view! {
            <button class="zos-lock-unlock" on:click=move |_| submit()>
                "Click to Unlock"
            </button>
        }
        .into_view()
    };

    view! {
        <div class="zos-lock-screen" style=wallpaper_style>
            <div class="zos-lock-blur" />
            <div class="zos-lock-content">
                <div class="zos-lock-time">{move || clock_now.get().twenty_four_hour_label()}</div>
                <div class="zos-lock-date">{move || clock_now.get().long_date_label()}</div>
                <div class="zos-lock-avatar" aria-hidden="true">{avatar_initial(&config.user_name)}</div>
                <div class="zos-lock-user">{config.user_name.clone()}</div>
                {unlock_control}
            </div>
        </div>
    }
}
