use super::*;

const FALLBACK_WINDOW_ICON: &str = "📱";

#[component]
pub(super) fn AppSwitcherOverlay(
    wm: WindowManagerHandle,
    services: ShellServices,
    switcher: RwSignal<AppSwitcherState>,
) -> impl IntoView {
    let windows = create_memo(move |_| wm.state().with(switcher_windows));
    let is_visible =
        move || switcher.with(|switcher| switcher.is_open) && windows.with(|windows| !windows.is_empty());

    view! {
        <Show when=is_visible fallback=|| ()>
            <div class="zos-app-switcher" role="listbox" aria-label="App Switcher">
                <div class="zos-app-switcher-backdrop" />
                <div class="zos-app-switcher-panel">
                    {move || {
                        windows
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, win)| {
                                let window_id = store_value(win.id.clone());
                                let is_selected =
                                    move || switcher.with(|switcher| switcher.selected == index);
                                let icon = services
                                    .with_registry(|registry| {
                                        registry.manifest(&win.app_id).map(|app| app.icon.clone())
                                    })
                                    .unwrap_or_else(|| FALLBACK_WINDOW_ICON.to_string());
                                view! {
                                    <button
                                        class=move || {
                                            if is_selected() {
                                                "zos-app-switcher-item selected"
                                            } else {
                                                "zos-app-switcher-item"
                                            }
                                        }
                                        role="option"
                                        aria-selected=move || is_selected().to_string()
                                        on:click=move |_| {
                                            switcher.update(AppSwitcherState::cancel);
                                            wm.focus(window_id.get_value());
                                        }
                                    >
                                        {app_icon(icon, win.title.clone())}
                                        <span class="zos-app-switcher-title">{win.title.clone()}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}
