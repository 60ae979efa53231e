//! Keyboard shortcut routing shared by the global listeners and the spotlight input.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    pub key: String,
    pub code: String,
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            code: ev.code(),
            meta: ev.meta_key(),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            shift: ev.shift_key(),
        }
    }

    pub fn key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = code.to_string();
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellShortcut {
    ToggleSpotlight,
    LockScreen,
    SwitcherNext,
    SwitcherPrevious,
    CommitSwitcher,
    Dismiss,
}

/// Which overlays are up when a key arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayFlags {
    pub booting: bool,
    pub locked: bool,
    pub spotlight_open: bool,
    pub switcher_open: bool,
}

impl OverlayFlags {
    fn blocks_shortcuts(self) -> bool {
        self.booting || self.locked
    }
}

pub fn route_keydown(chord: &KeyChord, overlays: OverlayFlags) -> Option<ShellShortcut> {
    if overlays.blocks_shortcuts() {
        return None;
    }
    if chord.meta && chord.code == "Space" {
        return Some(ShellShortcut::ToggleSpotlight);
    }
    if chord.meta && chord.code == "KeyL" {
        return Some(ShellShortcut::LockScreen);
    }
    if chord.meta && chord.key == "Tab" {
        return Some(if chord.shift {
            ShellShortcut::SwitcherPrevious
        } else {
            ShellShortcut::SwitcherNext
        });
    }
    if chord.key == "Escape" && (overlays.spotlight_open || overlays.switcher_open) {
        return Some(ShellShortcut::Dismiss);
    }
    None
}

/// Releasing the held modifier commits the app switcher.
pub fn route_keyup(chord: &KeyChord, overlays: OverlayFlags) -> Option<ShellShortcut> {
    (chord.key == "Meta" && overlays.switcher_open).then_some(ShellShortcut::CommitSwitcher)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotlightKey {
    Close,
    Next,
    Previous,
    Confirm,
}

pub fn route_spotlight_key(chord: &KeyChord) -> Option<SpotlightKey> {
    match chord.key.as_str() {
        "Escape" => Some(SpotlightKey::Close),
        "ArrowDown" => Some(SpotlightKey::Next),
        "ArrowUp" => Some(SpotlightKey::Previous),
        "Enter" => Some(SpotlightKey::Confirm),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn meta_shortcuts_map_to_shell_commands() {
        let idle = OverlayFlags::default();
        assert_eq!(
            route_keydown(&KeyChord::key(" ").with_code("Space").with_meta(), idle),
            Some(ShellShortcut::ToggleSpotlight)
        );
        assert_eq!(
            route_keydown(&KeyChord::key("l").with_code("KeyL").with_meta(), idle),
            Some(ShellShortcut::LockScreen)
        );
        assert_eq!(
            route_keydown(&KeyChord::key("Tab").with_meta(), idle),
            Some(ShellShortcut::SwitcherNext)
        );
        assert_eq!(
            route_keydown(&KeyChord::key("Tab").with_meta().with_shift(), idle),
            Some(ShellShortcut::SwitcherPrevious)
        );
        assert_eq!(route_keydown(&KeyChord::key("l").with_code("KeyL"), idle), None);
    }

    #[test]
    fn escape_only_dismisses_open_overlays() {
        let escape = KeyChord::key("Escape");
        assert_eq!(route_keydown(&escape, OverlayFlags::default()), None);
        assert_eq!(
            route_keydown(
                &escape,
                OverlayFlags {
                    switcher_open: true,
                    ..OverlayFlags::default()
                }
            ),
            Some(ShellShortcut::Dismiss)
        );
    }

    #[test]
    fn lock_and_boot_swallow_shortcuts() {
        let chord = KeyChord::key(" ").with_code("Space").with_meta();
        for overlays in [
            OverlayFlags {
                locked: true,
                ..OverlayFlags::default()
            },
            OverlayFlags {
                booting: true,
                ..OverlayFlags::default()
            },
        ] {
            assert_eq!(route_keydown(&chord, overlays), None);
        }
    }

    #[test]
    fn modifier_release_commits_only_open_switcher() {
        let release = KeyChord::key("Meta");
        assert_eq!(route_keyup(&release, OverlayFlags::default()), None);
        assert_eq!(
            route_keyup(
                &release,
                OverlayFlags {
                    switcher_open: true,
                    ..OverlayFlags::default()
                }
            ),
            Some(ShellShortcut::CommitSwitcher)
        );
    }

    #[test]
    fn spotlight_navigation_keys() {
        assert_eq!(
            route_spotlight_key(&KeyChord::key("ArrowDown")),
            Some(SpotlightKey::Next)
        );
        assert_eq!(
            route_spotlight_key(&KeyChord::key("Enter")),
            Some(SpotlightKey::Confirm)
        );
        assert_eq!(route_spotlight_key(&KeyChord::key("a")), None);
    }
}
