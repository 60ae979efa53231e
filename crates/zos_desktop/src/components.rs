//! Desktop shell UI composition: wallpaper, window layer, dock, menu bar, and overlays.

mod app_switcher;
mod boot_sequence;
mod dock;
mod lock_screen;
mod menu_bar;
mod settings_panel;
mod spotlight;
mod window;

use leptos::*;

pub use self::settings_panel::{DesktopSettingsPanel, SETTINGS_APP_ID};

use self::{
    app_switcher::AppSwitcherOverlay, boot_sequence::BootScreen, dock::Dock,
    lock_screen::LockScreen, menu_bar::MenuBar, spotlight::SpotlightOverlay,
    window::DesktopWindow,
};
use crate::{
    app_switcher::{switcher_windows, AppSwitcherState},
    dock::icon_is_image,
    keyboard::{route_keydown, route_keyup, KeyChord, OverlayFlags, ShellShortcut},
    lock_screen::LockScreenState,
    menu_bar::MenuCommand,
    runtime_context::{DesktopRuntimeContext, ShellServices, WindowManagerHandle},
    spotlight::{SpotlightAction, SpotlightState},
};

const MENU_BAR_HEIGHT_PX: i32 = 28;

/// Overlay state owned by the shell; each overlay is an independent state machine.
#[derive(Clone, Copy)]
struct ShellOverlays {
    booting: RwSignal<bool>,
    lock: RwSignal<LockScreenState>,
    spotlight: RwSignal<SpotlightState>,
    switcher: RwSignal<AppSwitcherState>,
}

impl ShellOverlays {
    fn new(booting: bool) -> Self {
        Self {
            booting: create_rw_signal(booting),
            lock: create_rw_signal(LockScreenState::default()),
            spotlight: create_rw_signal(SpotlightState::default()),
            switcher: create_rw_signal(AppSwitcherState::default()),
        }
    }

    fn flags(self) -> OverlayFlags {
        OverlayFlags {
            booting: self.booting.get_untracked(),
            locked: self.lock.with_untracked(|lock| lock.is_locked),
            spotlight_open: self.spotlight.with_untracked(|spotlight| spotlight.is_open),
            switcher_open: self.switcher.with_untracked(|switcher| switcher.is_open),
        }
    }

    fn dismiss(self) {
        self.spotlight.update(SpotlightState::close);
        self.switcher.update(AppSwitcherState::cancel);
    }

    fn lock_desktop(self) {
        self.dismiss();
        self.lock.update(LockScreenState::lock);
        logging::log!("desktop locked");
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Renders an app icon that is either an image URL or a glyph.
fn app_icon(icon: String, name: String) -> View {
    if icon_is_image(&icon) {
        view! { <img class="zos-app-icon" src=icon alt=name /> }.into_view()
    } else {
        view! { <span class="zos-app-icon zos-app-glyph" aria-hidden="true">{icon}</span> }
            .into_view()
    }
}

fn run_shortcut(wm: WindowManagerHandle, overlays: ShellOverlays, shortcut: ShellShortcut) {
    match shortcut {
        ShellShortcut::ToggleSpotlight => {
            overlays.switcher.update(AppSwitcherState::cancel);
            overlays.spotlight.update(SpotlightState::toggle);
        }
        ShellShortcut::LockScreen => overlays.lock_desktop(),
        ShellShortcut::SwitcherNext | ShellShortcut::SwitcherPrevious => {
            let count = wm.state().with_untracked(|desktop| switcher_windows(desktop).len());
            overlays.switcher.update(|switcher| {
                if !switcher.is_open && !switcher.begin(count) {
                    return;
                }
                if shortcut == ShellShortcut::SwitcherNext {
                    switcher.next(count);
                } else {
                    switcher.previous(count);
                }
            });
        }
        ShellShortcut::CommitSwitcher => {
            let windows = wm.state().with_untracked(switcher_windows);
            if let Some(window_id) = overlays
                .switcher
                .try_update(|switcher| switcher.commit(&windows))
                .flatten()
            {
                wm.focus(window_id);
            }
        }
        ShellShortcut::Dismiss => overlays.dismiss(),
    }
}

fn run_menu_command(wm: WindowManagerHandle, overlays: ShellOverlays, command: MenuCommand) {
    let active = untrack(|| wm.active_window()).map(|w| (w.id, w.app_id));
    match (command, active) {
        (MenuCommand::NewWindow, Some((_, app_id))) => wm.open(app_id),
        (MenuCommand::CloseWindow, Some((window_id, _))) => wm.close(window_id),
        (MenuCommand::MinimizeWindow, Some((window_id, _))) => wm.minimize(window_id),
        (MenuCommand::ZoomWindow, Some((window_id, _))) => wm.maximize(window_id),
        (MenuCommand::OpenSpotlight, _) => {
            overlays.switcher.update(AppSwitcherState::cancel);
            overlays.spotlight.update(SpotlightState::open);
        }
        (MenuCommand::LockScreen, _) => overlays.lock_desktop(),
        (command, None) => logging::debug_warn!("menu command {command:?} needs a focused window"),
    }
}

fn run_spotlight_action(
    wm: WindowManagerHandle,
    services: ShellServices,
    action: SpotlightAction,
) {
    match action {
        SpotlightAction::OpenApp(app_id) => wm.open(app_id),
        SpotlightAction::OpenExternalUrl(url) => services.open_external_url(url),
        SpotlightAction::None => {}
    }
}

#[component]
/// Full desktop: every window, the dock and menu bar, plus boot, lock, spotlight and switcher.
pub fn DesktopShell(runtime: DesktopRuntimeContext) -> impl IntoView {
    let wm = runtime.window_manager();
    let services = runtime.services();
    let boot = runtime.boot();
    let overlays = ShellOverlays::new(boot.is_some());

    let keydown_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let chord = KeyChord::from_event(&ev);
        if let Some(shortcut) = route_keydown(&chord, overlays.flags()) {
            ev.prevent_default();
            run_shortcut(wm, overlays, shortcut);
        }
    });
    on_cleanup(move || keydown_listener.remove());

    let keyup_listener = window_event_listener(ev::keyup, move |ev| {
        let chord = KeyChord::from_event(&ev);
        if let Some(shortcut) = route_keyup(&chord, overlays.flags()) {
            run_shortcut(wm, overlays, shortcut);
        }
    });
    on_cleanup(move || keyup_listener.remove());

    let window_ids = create_memo(move |_| {
        wm.state().with(|desktop| {
            desktop
                .windows
                .iter()
                .map(|w| w.id.clone())
                .collect::<Vec<_>>()
        })
    });
    let settings = create_memo(move |_| wm.settings());
    let wallpaper_style = move || {
        settings.with(|s| {
            format!(
                "background-image:url('{}');--dock-size:{}px;",
                s.wallpaper, s.dock_size
            )
        })
    };
    let theme = move || settings.with(|s| s.theme.css_id());

    view! {
        <div class="zos-desktop" data-theme=theme style=wallpaper_style>
            <MenuBar
                wm=wm
                on_command=Callback::new(move |command| run_menu_command(wm, overlays, command))
            />
            <main class="zos-window-layer">
                <For
                    each=move || window_ids.get()
                    key=|window_id| window_id.clone()
                    children=move |window_id| view! { <DesktopWindow wm=wm services=services window_id=window_id /> }
                />
            </main>
            <Dock wm=wm services=services />
            <SpotlightOverlay
                services=services
                state=overlays.spotlight
                on_action=Callback::new(move |action| run_spotlight_action(wm, services, action))
            />
            <AppSwitcherOverlay wm=wm services=services switcher=overlays.switcher />
            <Show when=move || overlays.lock.with(|lock| lock.is_locked) fallback=|| ()>
                <LockScreen wm=wm services=services lock=overlays.lock />
            </Show>
            {move || {
                boot
                    .filter(|_| overlays.booting.get())
                    .map(|config| {
                        view! {
                            <BootScreen
                                config=config
                                on_complete=Callback::new(move |_| overlays.booting.set(false))
                            />
                        }
                    })
            }}
        </div>
    }
}
