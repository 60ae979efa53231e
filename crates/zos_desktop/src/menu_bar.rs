//! Menu bar model: menus, their entries, and which menu is open.

/// Window-manager intents reachable from menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    NewWindow,
    CloseWindow,
    MinimizeWindow,
    ZoomWindow,
    OpenSpotlight,
    LockScreen,
}

impl MenuCommand {
    /// Commands acting on the focused window are disabled while none is focused.
    pub fn needs_active_window(self) -> bool {
        matches!(
            self,
            Self::NewWindow | Self::CloseWindow | Self::MinimizeWindow | Self::ZoomWindow
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        label: &'static str,
        shortcut: Option<&'static str>,
        disabled: bool,
        command: Option<MenuCommand>,
    },
    Separator,
}

impl MenuEntry {
    fn item(label: &'static str, shortcut: Option<&'static str>) -> Self {
        Self::Item {
            label,
            shortcut,
            disabled: false,
            command: None,
        }
    }

    fn command(label: &'static str, shortcut: Option<&'static str>, command: MenuCommand) -> Self {
        Self::Item {
            label,
            shortcut,
            disabled: false,
            command: Some(command),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuBarMenu {
    pub title: &'static str,
    pub entries: Vec<MenuEntry>,
}

pub const DEFAULT_APP_NAME: &str = "Finder";

pub fn default_menus() -> Vec<MenuBarMenu> {
    vec![
        MenuBarMenu {
            title: "File",
            entries: vec![
                MenuEntry::command("New Window", Some("⌘N"), MenuCommand::NewWindow),
                MenuEntry::command("Close Window", Some("⌘W"), MenuCommand::CloseWindow),
                MenuEntry::Separator,
                MenuEntry::command("Lock Screen", Some("⌘L"), MenuCommand::LockScreen),
                MenuEntry::item("Quit", Some("⌘Q")),
            ],
        },
        MenuBarMenu {
            title: "Edit",
            entries: vec![
                MenuEntry::item("Undo", Some("⌘Z")),
                MenuEntry::item("Redo", Some("⇧⌘Z")),
                MenuEntry::Separator,
                MenuEntry::item("Cut", Some("⌘X")),
                MenuEntry::item("Copy", Some("⌘C")),
                MenuEntry::item("Paste", Some("⌘V")),
            ],
        },
        MenuBarMenu {
            title: "View",
            entries: vec![
                MenuEntry::item("Toggle Full Screen", Some("⌃⌘F")),
                MenuEntry::command("Spotlight", Some("⌘Space"), MenuCommand::OpenSpotlight),
            ],
        },
        MenuBarMenu {
            title: "Window",
            entries: vec![
                MenuEntry::command("Minimize", Some("⌘M"), MenuCommand::MinimizeWindow),
                MenuEntry::command("Zoom", None, MenuCommand::ZoomWindow),
            ],
        },
        MenuBarMenu {
            title: "Help",
            entries: vec![MenuEntry::item("zOS Help", None)],
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuBarState {
    pub open_menu: Option<&'static str>,
}

impl MenuBarState {
    /// Clicking a title opens it, or closes it when it is already open.
    pub fn toggle(&mut self, title: &'static str) {
        self.open_menu = if self.open_menu == Some(title) {
            None
        } else {
            Some(title)
        };
    }

    /// Hovering switches menus only while one is already open.
    pub fn hover(&mut self, title: &'static str) {
        if self.open_menu.is_some() {
            self.open_menu = Some(title);
        }
    }

    pub fn close(&mut self) {
        self.open_menu = None;
    }

    pub fn is_open(&self, title: &str) -> bool {
        self.open_menu == Some(title)
    }
}
