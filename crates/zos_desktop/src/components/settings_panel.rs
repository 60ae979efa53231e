//! Built-in preferences app that edits [`DesktopSettings`](crate::model::DesktopSettings).

use super::*;
use crate::{
    model::{DockPosition, SettingsPatch, Theme},
    runtime_context::WindowManagerHandle,
};

/// App id the window layer renders with [`DesktopSettingsPanel`] instead of a registry module.
pub const SETTINGS_APP_ID: &str = "system.settings";

pub const ACCENT_COLORS: [(&str, &str); 7] = [
    ("Blue", "#007AFF"),
    ("Purple", "#5856D6"),
    ("Pink", "#FF2D55"),
    ("Red", "#FF3B30"),
    ("Orange", "#FF9500"),
    ("Yellow", "#FFCC00"),
    ("Green", "#34C759"),
];

pub const WALLPAPERS: [&str; 4] = [
    "/wallpapers/default.jpg",
    "/wallpapers/dark.jpg",
    "/wallpapers/gradient.jpg",
    "/wallpapers/abstract.jpg",
];

const DOCK_SIZE_MIN: u32 = 32;
const DOCK_SIZE_MAX: u32 = 128;

/// Slider value to dock size; garbage is ignored and out-of-range values are clamped.
fn parse_dock_size(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| (value.round() as u32).clamp(DOCK_SIZE_MIN, DOCK_SIZE_MAX))
}

fn option_class(selected: bool) -> &'static str {
    if selected {
        "zos-settings-option selected"
    } else {
        "zos-settings-option"
    }
}

#[component]
pub fn DesktopSettingsPanel(wm: WindowManagerHandle) -> impl IntoView {
    let state = wm.state();
    let settings = create_memo(move |_| state.with(|desktop| desktop.settings.clone()));

    let themes = Theme::ALL
        .into_iter()
        .map(|theme| {
            view! {
                <button
                    class=move || option_class(settings.with(|s| s.theme == theme))
                    on:click=move |_| wm.update_settings(SettingsPatch::theme(theme))
                >
                    {theme.label()}
                </button>
            }
        })
        .collect_view();

    let accents = ACCENT_COLORS
        .into_iter()
        .map(|(name, value)| {
            view! {
                <button
                    class=move || {
                        if settings.with(|s| s.accent_color == value) {
                            "zos-settings-swatch selected"
                        } else {
                            "zos-settings-swatch"
                        }
                    }
                    style=format!("background-color:{value};")
                    title=name
                    aria-label=name
                    on:click=move |_| wm.update_settings(SettingsPatch::accent_color(value))
                />
            }
        })
        .collect_view();

    let wallpapers = WALLPAPERS
        .into_iter()
        .map(|path| {
            view! {
                <button
                    class=move || option_class(settings.with(|s| s.wallpaper == path))
                    on:click=move |_| wm.update_settings(SettingsPatch::wallpaper(path))
                >
                    <img src=path alt="Wallpaper" />
                </button>
            }
        })
        .collect_view();

    let positions = DockPosition::ALL
        .into_iter()
        .map(|position| {
            view! {
                <option
                    value=position.css_id()
                    selected=move || settings.with(|s| s.dock_position == position)
                >
                    {position.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="zos-settings">
            <section>
                <h3>"Appearance"</h3>
                <div class="zos-settings-themes">{themes}</div>
            </section>
            <section>
                <h3>"Accent Color"</h3>
                <div class="zos-settings-accents">{accents}</div>
            </section>
            <section>
                <h3>"Wallpaper"</h3>
                <div class="zos-settings-wallpapers">{wallpapers}</div>
            </section>
            <section>
                <h3>"Dock"</h3>
                <label class="zos-settings-row">
                    <span>"Size"</span>
                    <input
                        type="range"
                        min=DOCK_SIZE_MIN
                        max=DOCK_SIZE_MAX
                        prop:value=move || settings.with(|s| s.dock_size.to_string())
                        on:input=move |ev| {
                            if let Some(size) = parse_dock_size(&event_target_value(&ev)) {
                                wm.update_settings(SettingsPatch::dock_size(size));
                            }
                        }
                    />
                </label>
                <label class="zos-settings-row">
                    <span>"Magnification"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || settings.with(|s| s.dock_magnification)
                        on:change=move |ev| {
                            wm.update_settings(SettingsPatch::dock_magnification(event_target_checked(&ev)))
                        }
                    />
                </label>
                <label class="zos-settings-row">
                    <span>"Auto Hide"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || settings.with(|s| s.dock_auto_hide)
                        on:change=move |ev| {
                            wm.update_settings(SettingsPatch::dock_auto_hide(event_target_checked(&ev)))
                        }
                    />
                </label>
                <label class="zos-settings-row">
                    <span>"Position"</span>
                    <select on:change=move |ev| {
                        if let Some(position) = DockPosition::from_css_id(&event_target_value(&ev)) {
                            wm.update_settings(SettingsPatch::dock_position(position));
                        }
                    }>
                        {positions}
                    </select>
                </label>
            </section>
        </div>
    }
}
