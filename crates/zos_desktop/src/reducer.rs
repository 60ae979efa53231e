//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::{
    model::{DesktopState, OpenWindowRequest, SettingsPatch, WindowId},
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window using the supplied request.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a visible window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle the maximized flag of a window.
    MaximizeWindow {
        /// Window to maximize or un-maximize.
        window_id: WindowId,
    },
    /// Un-minimize and focus a window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Shallow-merge a partial settings update.
    UpdateSettings(SettingsPatch),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the newly focused window.
    FocusWindowInput(WindowId),
    /// Push theme and accent settings onto the document root.
    ApplyAppearance,
    /// Open an external URL (spotlight web results).
    OpenExternalUrl(String),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// This is the only place window records and settings are mutated. Actions that reference
/// unknown or ineligible windows leave the state untouched and yield no effects.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            let window_id = window_manager::open_window(state, req);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            let focused_before = state.focused_window_id();
            if window_manager::close_window(state, &window_id) {
                push_focus_change(state, focused_before, &mut effects);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if window_manager::focus_window(state, &window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let focused_before = state.focused_window_id();
            if window_manager::minimize_window(state, &window_id) {
                push_focus_change(state, focused_before, &mut effects);
            }
        }
        DesktopAction::MaximizeWindow { window_id } => {
            window_manager::toggle_maximize(state, &window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            if window_manager::restore_window(state, &window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::UpdateSettings(patch) => {
            if window_manager::update_settings(state, patch) {
                effects.push(RuntimeEffect::ApplyAppearance);
            }
        }
    }
    effects
}

fn push_focus_change(
    state: &DesktopState,
    focused_before: Option<WindowId>,
    effects: &mut Vec<RuntimeEffect>,
) {
    let focused_after = state.focused_window_id();
    if focused_after != focused_before {
        if let Some(window_id) = focused_after {
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use zos_app_contract::ApplicationId;

    use super::*;
    use crate::model::Theme;

    fn open(state: &mut DesktopState, app: &str, at_ms: u64) -> WindowId {
        let _ = reduce_desktop(
            state,
            DesktopAction::OpenWindow(OpenWindowRequest::new(
                ApplicationId::trusted(app),
                at_ms,
            )),
        );
        state.windows.last().expect("window").id.clone()
    }

    #[test]
    fn open_window_focuses_new_window_and_requests_input_focus() {
        let mut state = DesktopState::default();

        let first = open(&mut state, "ai.hanzo.notes", 10);
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow(
                OpenWindowRequest::new(ApplicationId::trusted("ai.hanzo.clock"), 20)
                    .with_title("Clock"),
            ),
        );
        let second = state.windows.last().expect("window").id.clone();

        assert_eq!(state.focused_window_id(), Some(second.clone()));
        assert_eq!(state.windows[0].id, first);
        assert_eq!(state.windows[1].title, "Clock");
        assert_eq!(state.windows[1].z_index, 2);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(second)]);
    }

    #[test]
    fn closing_focused_window_refocuses_previous_window() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "ai.hanzo.notes", 10);
        let second = open(&mut state, "ai.hanzo.clock", 20);

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::CloseWindow { window_id: second },
        );

        assert_eq!(state.focused_window_id(), Some(first.clone()));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(first)]);
    }

    #[test]
    fn closing_background_window_emits_nothing() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "ai.hanzo.notes", 10);
        let second = open(&mut state, "ai.hanzo.clock", 20);

        let effects = reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: first });

        assert!(effects.is_empty());
        assert_eq!(state.focused_window_id(), Some(second));
    }

    #[test]
    fn focus_on_already_focused_window_has_no_effects() {
        let mut state = DesktopState::default();
        open(&mut state, "ai.hanzo.notes", 10);
        let second = open(&mut state, "ai.hanzo.clock", 20);
        let before = state.clone();

        let effects = reduce_desktop(&mut state, DesktopAction::FocusWindow { window_id: second });

        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn settings_update_requests_appearance_refresh_only_on_change() {
        let mut state = DesktopState::default();

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::UpdateSettings(SettingsPatch::theme(Theme::Light)),
        );
        assert_eq!(effects, vec![RuntimeEffect::ApplyAppearance]);
        assert_eq!(state.settings.theme, Theme::Light);

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::UpdateSettings(SettingsPatch::theme(Theme::Light)),
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn restore_from_minimized_focuses_window() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "ai.hanzo.notes", 10);
        reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow {
                window_id: first.clone(),
            },
        );
        assert_eq!(state.focused_window_id(), None);

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::RestoreWindow {
                window_id: first.clone(),
            },
        );

        assert_eq!(state.focused_window_id(), Some(first.clone()));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(first)]);
    }
}
