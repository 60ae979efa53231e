//! Held-modifier app switcher: a selection index cycling over visible windows.

use crate::model::{DesktopState, WindowId, WindowRecord};

/// Visible windows, most recently focused first.
pub fn switcher_windows(state: &DesktopState) -> Vec<WindowRecord> {
    let mut windows: Vec<WindowRecord> = state
        .windows
        .iter()
        .filter(|w| w.is_visible())
        .cloned()
        .collect();
    windows.sort_by(|a, b| b.z_index.cmp(&a.z_index));
    windows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppSwitcherState {
    pub is_open: bool,
    pub selected: usize,
}

impl AppSwitcherState {
    /// Opens on the first entry. Stays closed when there is nothing to switch to.
    pub fn begin(&mut self, count: usize) -> bool {
        if count == 0 {
            return false;
        }
        *self = Self {
            is_open: true,
            selected: 0,
        };
        true
    }

    pub fn next(&mut self, count: usize) {
        self.step(count, 1);
    }

    pub fn previous(&mut self, count: usize) {
        self.step(count, -1);
    }

    fn step(&mut self, count: usize, delta: i64) {
        if !self.is_open || count == 0 {
            return;
        }
        let len = count as i64;
        self.selected = (self.selected as i64 + delta).rem_euclid(len) as usize;
    }

    /// Closes the switcher and returns the window to focus, if the selection still exists.
    pub fn commit(&mut self, windows: &[WindowRecord]) -> Option<WindowId> {
        if !self.is_open {
            return None;
        }
        self.is_open = false;
        windows.get(self.selected).map(|w| w.id.clone())
    }

    pub fn cancel(&mut self) {
        self.is_open = false;
    }
}
