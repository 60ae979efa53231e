use super::*;
use crate::{
    dock::{badge_label, dock_entries, magnification_scale},
    model::DesktopSettings,
};

fn dock_class(settings: &DesktopSettings) -> String {
    let mut class = format!("zos-dock {}", settings.dock_position.css_id());
    if settings.dock_position.is_vertical() {
        class.push_str(" vertical");
    }
    if settings.dock_auto_hide {
        class.push_str(" auto-hide");
    }
    class
}

#[component]
pub(super) fn Dock(wm: WindowManagerHandle, services: ShellServices) -> impl IntoView {
    let hovered = create_rw_signal(None::<usize>);
    let settings = create_memo(move |_| wm.settings());
    let entries = create_memo(move |_| {
        let badges = services.badges().get();
        services.with_registry(|registry| {
            wm.state()
                .with(|desktop| dock_entries(registry.apps(), desktop, &badges))
        })
    });
    let minimized = create_memo(move |_| {
        wm.windows()
            .into_iter()
            .filter(|w| w.is_minimized)
            .collect::<Vec<_>>()
    });

    view! {
        <nav class=move || settings.with(dock_class) aria-label="Dock" on:mouseleave=move |_| hovered.set(None)>
            {move || {
                entries
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let app_id = store_value(entry.app_id.clone());
                        let item_style = move || {
                            settings.with(|s| {
                                let scale = magnification_scale(index, hovered.get(), s.dock_magnification);
                                let px = f64::from(s.dock_size) * scale;
                                format!("width:{px}px;height:{px}px;")
                            })
                        };
                        view! {
                            <button
                                class="zos-dock-item"
                                style=item_style
                                aria-label=entry.name.clone()
                                data-testid=format!("dock-{}", entry.app_id)
                                on:mouseenter=move |_| hovered.set(Some(index))
                                on:click=move |_| wm.open(app_id.get_value())
                            >
                                <span class="zos-dock-tooltip">{entry.name.clone()}</span>
                                {app_icon(entry.icon.clone(), entry.name.clone())}
                                {entry.is_running.then(|| view! { <span class="zos-dock-running" /> })}
                                {badge_label(entry.badge)
                                    .map(|label| view! { <span class="zos-dock-badge">{label}</span> })}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <Show when=move || minimized.with(|windows| !windows.is_empty()) fallback=|| ()>
                <span class="zos-dock-divider" role="separator" />
                {move || {
                    minimized
                        .get()
                        .into_iter()
                        .map(|win| {
                            let window_id = store_value(win.id.clone());
                            view! {
                                <button
                                    class="zos-dock-item minimized"
                                    title=win.title.clone()
                                    aria-label=format!("Restore {}", win.title)
                                    on:click=move |_| wm.restore(window_id.get_value())
                                >
                                    <span class="zos-dock-tooltip">{win.title.clone()}</span>
                                    <span class="zos-dock-thumbnail" aria-hidden="true">
                                        {win.title.chars().next().map(String::from).unwrap_or_default()}
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::DockPosition;

    #[test]
    fn side_docks_get_the_vertical_layout_class() {
        let settings = |dock_position, dock_auto_hide| DesktopSettings {
            dock_position,
            dock_auto_hide,
            ..DesktopSettings::default()
        };

        assert_eq!(dock_class(&settings(DockPosition::Bottom, false)), "zos-dock bottom");
        assert_eq!(dock_class(&settings(DockPosition::Left, false)), "zos-dock left vertical");
        assert_eq!(
            dock_class(&settings(DockPosition::Right, true)),
            "zos-dock right vertical auto-hide"
        );
    }
}
