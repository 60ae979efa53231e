use std::time::Duration;

use super::*;
use crate::{
    clock::ClockSnapshot,
    menu_bar::{default_menus, MenuBarState, MenuEntry, DEFAULT_APP_NAME},
};

#[component]
pub(super) fn MenuBar(
    wm: WindowManagerHandle,
    on_command: Callback<MenuCommand>,
) -> impl IntoView {
    let bar = create_rw_signal(MenuBarState::default());
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let app_name = move || {
        wm.active_window()
            .map(|w| w.title)
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
    };
    let has_active_window = move || wm.active_window_id().is_some();

    let menus = default_menus()
        .into_iter()
        .map(|menu| {
            let title = menu.title;
            let entries = store_value(menu.entries);
            let is_open = move || bar.with(|bar| bar.is_open(title));
            view! {
                <div class="zos-menu" on:mouseenter=move |_| bar.update(|bar| bar.hover(title))>
                    <button
                        class=move || if is_open() { "zos-menu-title open" } else { "zos-menu-title" }
                        aria-haspopup="menu"
                        aria-expanded=move || is_open().to_string()
                        on:click=move |_| bar.update(|bar| bar.toggle(title))
                    >
                        {title}
                    </button>
                    <Show when=is_open fallback=|| ()>
                        <div class="zos-menu-dropdown" role="menu" aria-label=title>
                            {entries
                                .get_value()
                                .into_iter()
                                .map(|entry| match entry {
                                    MenuEntry::Separator => {
                                        view! { <div class="zos-menu-separator" role="separator" /> }
                                            .into_view()
                                    }
                                    MenuEntry::Item { label, shortcut, disabled, command } => {
                                        let is_disabled = move || {
                                            disabled
                                                || command.is_some_and(|command| {
                                                    command.needs_active_window() && !has_active_window()
                                                })
                                        };
                                        view! {
                                            <button
                                                class="zos-menu-item"
                                                role="menuitem"
                                                disabled=is_disabled
                                                on:click=move |_| {
                                                    if let Some(command) = command {
                                                        on_command.call(command);
                                                    }
                                                    bar.update(MenuBarState::close);
                                                }
                                            >
                                                <span>{label}</span>
                                                {shortcut
                                                    .map(|shortcut| {
                                                        view! { <span class="zos-menu-shortcut">{shortcut}</span> }
                                                    })}
                                            </button>
                                        }
                                            .into_view()
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <header class="zos-menu-bar" style=format!("height:{MENU_BAR_HEIGHT_PX}px;")>
            <div class="zos-menu-bar-left">
                <span class="zos-menu-logo" aria-hidden="true">"◆"</span>
                <span class="zos-menu-app-name">{app_name}</span>
                {menus}
            </div>
            <div class="zos-menu-bar-right">
                <span class="zos-menu-date">{move || clock_now.get().short_date_label()}</span>
                <span class="zos-menu-time">{move || clock_now.get().twelve_hour_label()}</span>
            </div>
            <Show when=move || bar.with(|bar| bar.open_menu.is_some()) fallback=|| ()>
                <div class="zos-menu-dismiss" on:click=move |_| bar.update(MenuBarState::close) />
            </Show>
        </header>
    }
}
