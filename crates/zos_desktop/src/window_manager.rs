//! Window-manager transitions over the desktop window collection.
//!
//! Every operation is total: unknown ids are ignored and reported as "unchanged" through the
//! returned flag. Focus and stacking follow two rules:
//!
//! * at most one window is focused, and a minimized window never is;
//! * focusing or opening a window gives it `max(z_index) + 1`, so the most recently focused
//!   window always sits on top and ties cannot occur.

use crate::model::{DesktopState, OpenWindowRequest, Point, SettingsPatch, Size, WindowId, WindowRecord};

/// Top-left corner of the first window in the open cascade.
pub const CASCADE_ORIGIN: Point = Point { x: 100, y: 50 };
/// Offset (in px) between successive cascaded windows.
pub const CASCADE_STEP: i32 = 30;
const CASCADE_SPAN_X: i32 = 200;
const CASCADE_SPAN_Y: i32 = 150;

/// Returns the default position for a window opened while `open_count` windows exist.
pub fn cascade_position(open_count: usize) -> Point {
    let step = (open_count as i32).saturating_mul(CASCADE_STEP);
    Point {
        x: CASCADE_ORIGIN.x + step % CASCADE_SPAN_X,
        y: CASCADE_ORIGIN.y + step % CASCADE_SPAN_Y,
    }
}

/// Appends a focused window for `req.app_id` on top of the stack and returns its id.
pub fn open_window(state: &mut DesktopState, req: OpenWindowRequest) -> WindowId {
    let stamp = req
        .opened_at_ms
        .max(state.last_window_stamp.saturating_add(1));
    state.last_window_stamp = stamp;

    let window_id = WindowId::for_app(&req.app_id, stamp);
    let z_index = state.max_z_index() + 1;
    let position = cascade_position(state.windows.len());

    for window in &mut state.windows {
        window.is_focused = false;
    }
    state.windows.push(WindowRecord {
        id: window_id.clone(),
        title: req.title.unwrap_or_else(|| req.app_id.to_string()),
        app_id: req.app_id,
        position,
        size: Size::default(),
        z_index,
        is_minimized: false,
        is_maximized: false,
        is_focused: true,
    });
    window_id
}

/// Removes `window_id`. Focus moves to the most recently added visible window if it was focused.
///
/// Returns `true` when a window was removed.
pub fn close_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == *window_id) else {
        return false;
    };

    let removed = state.windows.remove(index);
    if removed.is_focused {
        let successor = state
            .windows
            .iter()
            .rev()
            .find(|w| w.is_visible())
            .map(|w| w.id.clone());
        if let Some(successor) = successor {
            focus_window(state, &successor);
        }
    }
    true
}

/// Focuses and raises `window_id`. Minimized windows are left alone; see [`restore_window`].
///
/// Returns `true` when focus or stacking changed.
pub fn focus_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let max_z = state.max_z_index();
    let Some(target) = state.windows.iter().find(|w| w.id == *window_id) else {
        return false;
    };
    if target.is_minimized {
        return false;
    }
    if target.is_focused && target.z_index == max_z {
        return false;
    }

    for window in &mut state.windows {
        if window.id == *window_id {
            window.is_focused = true;
            window.z_index = max_z + 1;
        } else {
            window.is_focused = false;
        }
    }
    true
}

/// Hides `window_id` while keeping its geometry and z-index.
///
/// If the window held focus, the topmost remaining visible window takes it over.
pub fn minimize_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == *window_id) else {
        return false;
    };
    if window.is_minimized {
        return false;
    }

    let was_focused = window.is_focused;
    window.is_minimized = true;
    window.is_focused = false;

    if was_focused {
        let successor = state
            .windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id.clone());
        if let Some(successor) = successor {
            focus_window(state, &successor);
        }
    }
    true
}

/// Toggles the maximized rendering hint. Focus and stacking are untouched.
pub fn toggle_maximize(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == *window_id) else {
        return false;
    };
    window.is_maximized = !window.is_maximized;
    true
}

/// Un-minimizes `window_id` and focuses it.
pub fn restore_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == *window_id) else {
        return false;
    };
    let was_minimized = window.is_minimized;
    window.is_minimized = false;
    focus_window(state, window_id) || was_minimized
}

/// Shallow-merges `patch` into the settings record.
pub fn update_settings(state: &mut DesktopState, patch: SettingsPatch) -> bool {
    let before = state.settings.clone();
    state.settings.apply(patch);
    state.settings != before
}
