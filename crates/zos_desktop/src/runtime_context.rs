//! Runtime wiring for the desktop shell.
//!
//! [`DesktopRuntimeContext`] owns the long-lived reducer container, the runtime effect queue, and
//! the injected collaborators (app registry, search provider, lock policy). Its signals stay
//! private: components receive a [`WindowManagerHandle`] for window reads and mutations, and
//! [`ShellServices`] for the collaborators.
#![allow(clippy::clone_on_copy)]

use std::{collections::HashMap, rc::Rc};

use leptos::*;
use zos_app_contract::{AppRegistry, ApplicationId};

use crate::{
    clock, effect_executor, host,
    model::{
        BootConfig, DesktopConfig, DesktopSettings, DesktopState, LockConfig, OpenWindowRequest,
        SettingsPatch, WindowId, WindowRecord,
    },
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    spotlight::SearchProvider,
};

#[derive(Clone, Copy)]
/// Reactive desktop state plus the dispatch callback and injected collaborators.
pub struct DesktopRuntimeContext {
    state: RwSignal<DesktopState>,
    dispatch: Callback<DesktopAction>,
    services: ShellServices,
    boot: Option<BootConfig>,
}

impl DesktopRuntimeContext {
    /// Creates the state container and installs the effect executor in the current owner.
    pub fn new(
        config: &DesktopConfig,
        registry: Rc<AppRegistry>,
        search: Rc<dyn SearchProvider>,
    ) -> Self {
        let state = create_rw_signal(DesktopState::with_settings(config.initial_settings()));
        let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

        let dispatch = Callback::new(move |action: DesktopAction| {
            let mut desktop = state.get_untracked();
            let previous = desktop.clone();
            let new_effects = reduce_desktop(&mut desktop, action.clone());

            if desktop != previous {
                state.set(desktop);
            } else {
                logging::debug_warn!("desktop action left state unchanged: {action:?}");
            }
            if !new_effects.is_empty() {
                effects.update(|queue| queue.extend(new_effects));
            }
        });

        let services = ShellServices {
            registry: store_value(registry),
            search: store_value(search),
            lock: store_value(config.lock.clone()),
            badges: create_rw_signal(HashMap::new()),
            effects,
        };

        host::apply_appearance(&state.get_untracked().settings);
        effect_executor::install(effects, state.read_only());
        Self {
            state,
            dispatch,
            services,
            boot: config.boot,
        }
    }

    /// Window-manager surface handed to components.
    pub fn window_manager(&self) -> WindowManagerHandle {
        WindowManagerHandle { runtime: *self }
    }

    /// Registry, search, lock policy and badges handed to components.
    pub fn services(&self) -> ShellServices {
        self.services
    }

    /// Boot animation settings; `None` skips the boot sequence.
    pub fn boot(&self) -> Option<BootConfig> {
        self.boot
    }

    fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[derive(Clone, Copy)]
/// Collaborators injected at startup. None of them can touch the window collection.
pub struct ShellServices {
    registry: StoredValue<Rc<AppRegistry>>,
    search: StoredValue<Rc<dyn SearchProvider>>,
    lock: StoredValue<LockConfig>,
    badges: RwSignal<HashMap<ApplicationId, u32>>,
    effects: RwSignal<Vec<RuntimeEffect>>,
}

impl ShellServices {
    pub fn with_registry<T>(&self, f: impl FnOnce(&AppRegistry) -> T) -> T {
        self.registry.with_value(|registry| f(registry))
    }

    pub fn with_search<T>(&self, f: impl FnOnce(&dyn SearchProvider) -> T) -> T {
        self.search.with_value(|search| f(search.as_ref()))
    }

    pub fn lock_config(&self) -> LockConfig {
        self.lock.get_value()
    }

    /// Dock badge counts reported by mounted apps.
    pub fn badges(&self) -> ReadSignal<HashMap<ApplicationId, u32>> {
        self.badges.read_only()
    }

    /// Records an app's dock badge; zero removes it.
    pub fn set_badge(&self, app_id: ApplicationId, count: u32) {
        self.badges.update(|badges| {
            if count == 0 {
                badges.remove(&app_id);
            } else {
                badges.insert(app_id, count);
            }
        });
    }

    /// Queues a browser navigation that does not come from a state transition.
    pub fn open_external_url(&self, url: String) {
        self.effects
            .update(|queue| queue.push(RuntimeEffect::OpenExternalUrl(url)));
    }
}

#[derive(Clone, Copy)]
/// The fixed mutation set over the window collection and settings, plus tracked reads.
pub struct WindowManagerHandle {
    runtime: DesktopRuntimeContext,
}

impl WindowManagerHandle {
    /// Read-only view of the whole desktop state.
    pub fn state(&self) -> ReadSignal<DesktopState> {
        self.runtime.state.read_only()
    }

    /// Current window records in insertion order (tracked).
    pub fn windows(&self) -> Vec<WindowRecord> {
        self.runtime.state.with(|desktop| desktop.windows.clone())
    }

    /// Current settings (tracked).
    pub fn settings(&self) -> DesktopSettings {
        self.runtime.state.with(|desktop| desktop.settings.clone())
    }

    /// Id of the focused window, if any (tracked).
    pub fn active_window_id(&self) -> Option<WindowId> {
        self.runtime.state.with(DesktopState::focused_window_id)
    }

    /// Record of the focused window, if any (tracked).
    pub fn active_window(&self) -> Option<WindowRecord> {
        let window_id = self.active_window_id()?;
        self.runtime
            .state
            .with(|desktop| desktop.window(&window_id).cloned())
    }

    /// Opens a new window titled after the app's registry name.
    pub fn open(&self, app_id: ApplicationId) {
        let title = self
            .runtime
            .services
            .with_registry(|registry| registry.title_for(&app_id));
        let request =
            OpenWindowRequest::new(app_id, clock::next_monotonic_timestamp_ms()).with_title(title);
        self.runtime
            .dispatch_action(DesktopAction::OpenWindow(request));
    }

    pub fn close(&self, window_id: WindowId) {
        self.runtime
            .dispatch_action(DesktopAction::CloseWindow { window_id });
    }

    pub fn focus(&self, window_id: WindowId) {
        self.runtime
            .dispatch_action(DesktopAction::FocusWindow { window_id });
    }

    pub fn minimize(&self, window_id: WindowId) {
        self.runtime
            .dispatch_action(DesktopAction::MinimizeWindow { window_id });
    }

    pub fn maximize(&self, window_id: WindowId) {
        self.runtime
            .dispatch_action(DesktopAction::MaximizeWindow { window_id });
    }

    /// Un-minimizes (when needed) and focuses a window.
    pub fn restore(&self, window_id: WindowId) {
        self.runtime
            .dispatch_action(DesktopAction::RestoreWindow { window_id });
    }

    pub fn update_settings(&self, patch: SettingsPatch) {
        self.runtime
            .dispatch_action(DesktopAction::UpdateSettings(patch));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::Theme, spotlight::NoSearch};

    fn runtime() -> DesktopRuntimeContext {
        let _ = leptos::create_runtime();
        DesktopRuntimeContext::new(
            &DesktopConfig::default(),
            Rc::new(AppRegistry::new()),
            Rc::new(NoSearch),
        )
    }

    #[test]
    fn active_window_follows_open_focus_and_minimize() {
        let wm = runtime().window_manager();
        assert_eq!(wm.active_window_id(), None);

        wm.open(ApplicationId::trusted("ai.hanzo.notes"));
        wm.open(ApplicationId::trusted("ai.hanzo.clock"));
        let windows = wm.windows();
        assert_eq!(windows.len(), 2);
        let (notes, clock) = (windows[0].id.clone(), windows[1].id.clone());
        assert_eq!(wm.active_window_id(), Some(clock.clone()));

        wm.focus(notes.clone());
        assert_eq!(wm.active_window_id(), Some(notes.clone()));
        assert_eq!(
            wm.active_window().map(|win| win.app_id),
            Some(ApplicationId::trusted("ai.hanzo.notes"))
        );

        wm.minimize(notes);
        assert_eq!(wm.active_window_id(), Some(clock));
    }

    #[test]
    fn settings_reads_see_dispatched_updates() {
        let wm = runtime().window_manager();
        wm.update_settings(SettingsPatch::theme(Theme::Light));
        assert_eq!(wm.settings().theme, Theme::Light);
        assert_eq!(wm.state().with_untracked(|desktop| desktop.settings.theme), Theme::Light);
    }

    #[test]
    fn badges_are_readable_but_only_set_through_services() {
        let services = runtime().services();
        let notes = ApplicationId::trusted("ai.hanzo.notes");
        services.set_badge(notes.clone(), 3);
        assert_eq!(services.badges().with_untracked(|b| b.get(&notes).copied()), Some(3));
        services.set_badge(notes.clone(), 0);
        assert!(services.badges().with_untracked(|b| b.is_empty()));
    }
}
