use std::collections::HashSet;

use pretty_assertions::assert_eq;
use zos_app_contract::ApplicationId;
use zos_desktop::{
    app_switcher::{switcher_windows, AppSwitcherState},
    boot::{BootPhase, BootSequence, BootSignal},
    reduce_desktop, BootConfig, DesktopAction, DesktopState, OpenWindowRequest, WindowId,
};

const APPS: [&str; 3] = ["ai.hanzo.notes", "ai.hanzo.clock", "ai.hanzo.terminal"];

fn open(state: &mut DesktopState, app: &str, at_ms: u64) -> WindowId {
    let _ = reduce_desktop(
        state,
        DesktopAction::OpenWindow(OpenWindowRequest::new(ApplicationId::trusted(app), at_ms)),
    );
    state.windows.last().expect("opened window").id.clone()
}

fn focused(state: &DesktopState) -> Option<WindowId> {
    state.focused_window_id()
}

fn assert_invariants(state: &DesktopState) {
    let focused_count = state.windows.iter().filter(|w| w.is_focused).count();
    assert!(focused_count <= 1, "more than one focused window: {state:?}");
    assert!(
        state.windows.iter().all(|w| !(w.is_focused && w.is_minimized)),
        "minimized window holds focus: {state:?}"
    );

    let ids: HashSet<&WindowId> = state.windows.iter().map(|w| &w.id).collect();
    assert_eq!(ids.len(), state.windows.len(), "duplicate window ids");
    let z: HashSet<u32> = state.windows.iter().map(|w| w.z_index).collect();
    assert_eq!(z.len(), state.windows.len(), "tied z-index values");

    if let Some(window) = state.focused_window() {
        assert_eq!(window.z_index, state.max_z_index(), "focused window is not on top: {state:?}");
    }
    if state.windows.iter().any(|w| w.is_visible()) {
        assert!(state.focused_window().is_some(), "visible windows but nothing focused: {state:?}");
    }
}

/// Small deterministic generator so the sequence test replays identically.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound.max(1)
    }
}

#[test]
fn open_a_then_b_then_focus_a_restacks_a_on_top() {
    let mut state = DesktopState::default();
    let a = open(&mut state, APPS[0], 10);
    let b = open(&mut state, APPS[1], 10);

    assert_eq!(focused(&state), Some(b.clone()));
    let (a_z, b_z) = (
        state.window(&a).expect("a").z_index,
        state.window(&b).expect("b").z_index,
    );
    assert!(b_z > a_z);

    let _ = reduce_desktop(&mut state, DesktopAction::FocusWindow { window_id: a.clone() });
    assert_eq!(focused(&state), Some(a.clone()));
    assert_eq!(state.window(&a).expect("a").z_index, a_z.max(b_z) + 1);
}

#[test]
fn closing_focused_window_hands_focus_to_previous_window() {
    let mut state = DesktopState::default();
    let a = open(&mut state, APPS[0], 1);
    let b = open(&mut state, APPS[1], 2);

    let _ = reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: b });
    assert_eq!(focused(&state), Some(a));
}

#[test]
fn closing_unfocused_window_keeps_focus() {
    let mut state = DesktopState::default();
    let a = open(&mut state, APPS[0], 1);
    let b = open(&mut state, APPS[1], 2);

    let _ = reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: a });
    assert_eq!(focused(&state), Some(b));
}

#[test]
fn minimize_clears_focus_and_keeps_geometry() {
    let mut state = DesktopState::default();
    let a = open(&mut state, APPS[0], 1);
    let before = state.window(&a).expect("a").clone();

    let _ = reduce_desktop(&mut state, DesktopAction::MinimizeWindow { window_id: a.clone() });
    let after = state.window(&a).expect("a");
    assert!(after.is_minimized);
    assert!(!after.is_focused);
    assert_eq!(
        (after.position, after.size, after.z_index),
        (before.position, before.size, before.z_index)
    );
}

#[test]
fn every_open_is_unique_focused_and_on_top() {
    let mut state = DesktopState::default();
    let mut highest = 0;
    for round in 0..20 {
        // Same timestamp each time: ids must still be unique.
        let id = open(&mut state, APPS[round % APPS.len()], 42);
        let win = state.window(&id).expect("opened");
        assert!(win.is_focused);
        assert!(win.z_index > highest);
        highest = win.z_index;
        assert_invariants(&state);
    }
}

fn run_random_sequence(seed: u64, steps: u64) {
    let mut rng = Lcg(seed);
    let mut state = DesktopState::default();

    for step in 0..steps {
        let target = (!state.windows.is_empty())
            .then(|| state.windows[rng.next(state.windows.len())].id.clone())
            .unwrap_or_else(|| WindowId("missing".to_string()));
        let action = match rng.next(6) {
            0 => DesktopAction::OpenWindow(OpenWindowRequest::new(
                ApplicationId::trusted(APPS[rng.next(APPS.len())]),
                step / 3,
            )),
            1 => DesktopAction::CloseWindow { window_id: target },
            2 => DesktopAction::FocusWindow { window_id: target },
            3 => DesktopAction::MinimizeWindow { window_id: target },
            4 => DesktopAction::MaximizeWindow { window_id: target },
            _ => DesktopAction::RestoreWindow { window_id: target },
        };

        let focused_before = focused(&state);
        let closing_unfocused = matches!(
            &action,
            DesktopAction::CloseWindow { window_id } if Some(window_id) != focused_before.as_ref()
        );

        let _ = reduce_desktop(&mut state, action);
        assert_invariants(&state);
        if closing_unfocused {
            assert_eq!(focused(&state), focused_before);
        }
    }
}

#[test]
fn random_operation_sequences_preserve_invariants() {
    run_random_sequence(0x5eed, 2000);
}

#[test]
fn focus_handoff_keeps_the_focused_window_on_top_across_seeds() {
    for seed in 1..=50 {
        run_random_sequence(seed, 500);
    }
}

#[test]
fn switcher_over_three_windows_wraps_after_three_steps() {
    let mut state = DesktopState::default();
    for (index, app) in APPS.iter().enumerate() {
        open(&mut state, app, index as u64);
    }
    let windows = switcher_windows(&state);

    let mut one = AppSwitcherState::default();
    one.begin(windows.len());
    one.next(windows.len());

    let mut four = AppSwitcherState::default();
    four.begin(windows.len());
    (0..4).for_each(|_| four.next(windows.len()));

    assert_eq!(four.commit(&windows), one.commit(&windows));
}

#[test]
fn default_boot_completes_once_after_full_progress() {
    let mut boot = BootSequence::new(BootConfig::default());
    let mut completions = Vec::new();
    let mut elapsed = 0;
    while elapsed <= 5000 {
        if let Some(signal) = boot.advance_to(elapsed) {
            completions.push((signal, boot.progress()));
        }
        elapsed += 10;
    }

    assert_eq!(completions, vec![(BootSignal::Completed, 100)]);
    assert_eq!(boot.phase(), BootPhase::Complete);
}
