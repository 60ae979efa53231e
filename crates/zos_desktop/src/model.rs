use serde::{Deserialize, Serialize};
use thiserror::Error;
use zos_app_contract::ApplicationId;

pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
pub const DEFAULT_DOCK_SIZE: u32 = 64;
pub const DEFAULT_BOOT_DURATION_MS: u64 = 3000;
pub const DEFAULT_LOCK_PASSWORD: &str = "password";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    /// Builds the `<app-id>-<timestamp>` id used for a freshly opened window.
    pub fn for_app(app_id: &ApplicationId, opened_at_ms: u64) -> Self {
        Self(format!("{app_id}-{opened_at_ms}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub z_index: u32,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub is_focused: bool,
}

impl WindowRecord {
    /// Visible windows are rendered and may hold focus.
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Auto,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Auto];

    pub fn css_id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockPosition {
    #[default]
    Bottom,
    Left,
    Right,
}

impl DockPosition {
    pub const ALL: [DockPosition; 3] = [DockPosition::Bottom, DockPosition::Left, DockPosition::Right];

    pub fn css_id(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bottom => "Bottom",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }

    pub fn from_css_id(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|position| position.css_id() == raw)
    }

    pub fn is_vertical(self) -> bool {
        !matches!(self, Self::Bottom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopSettings {
    pub theme: Theme,
    pub accent_color: String,
    pub wallpaper: String,
    pub dock_position: DockPosition,
    pub dock_size: u32,
    pub dock_magnification: bool,
    pub dock_auto_hide: bool,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            accent_color: "#007AFF".to_string(),
            wallpaper: "/wallpapers/default.jpg".to_string(),
            dock_position: DockPosition::Bottom,
            dock_size: DEFAULT_DOCK_SIZE,
            dock_magnification: true,
            dock_auto_hide: false,
        }
    }
}

impl DesktopSettings {
    /// Shallow-merges every field present in `patch`.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(accent_color) = patch.accent_color {
            self.accent_color = accent_color;
        }
        if let Some(wallpaper) = patch.wallpaper {
            self.wallpaper = wallpaper;
        }
        if let Some(dock_position) = patch.dock_position {
            self.dock_position = dock_position;
        }
        if let Some(dock_size) = patch.dock_size {
            self.dock_size = dock_size;
        }
        if let Some(dock_magnification) = patch.dock_magnification {
            self.dock_magnification = dock_magnification;
        }
        if let Some(dock_auto_hide) = patch.dock_auto_hide {
            self.dock_auto_hide = dock_auto_hide;
        }
    }

    pub fn merged(mut self, patch: SettingsPatch) -> Self {
        self.apply(patch);
        self
    }
}

/// Partial settings update; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub accent_color: Option<String>,
    pub wallpaper: Option<String>,
    pub dock_position: Option<DockPosition>,
    pub dock_size: Option<u32>,
    pub dock_magnification: Option<bool>,
    pub dock_auto_hide: Option<bool>,
}

impl SettingsPatch {
    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Self::default()
        }
    }

    pub fn accent_color(color: impl Into<String>) -> Self {
        Self {
            accent_color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn wallpaper(path: impl Into<String>) -> Self {
        Self {
            wallpaper: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn dock_position(position: DockPosition) -> Self {
        Self {
            dock_position: Some(position),
            ..Self::default()
        }
    }

    pub fn dock_size(size: u32) -> Self {
        Self {
            dock_size: Some(size),
            ..Self::default()
        }
    }

    pub fn dock_magnification(enabled: bool) -> Self {
        Self {
            dock_magnification: Some(enabled),
            ..Self::default()
        }
    }

    pub fn dock_auto_hide(enabled: bool) -> Self {
        Self {
            dock_auto_hide: Some(enabled),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub settings: DesktopSettings,
    /// Creation stamp of the most recently opened window; keeps window ids strictly increasing.
    pub last_window_stamp: u64,
}

impl DesktopState {
    pub fn with_settings(settings: DesktopSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| w.is_focused)
            .map(|w| w.id.clone())
    }

    pub fn focused_window(&self) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.is_focused)
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == *window_id)
    }

    pub fn max_z_index(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    pub fn is_app_running(&self, app_id: &ApplicationId) -> bool {
        self.windows.iter().any(|w| w.app_id == *app_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub app_id: ApplicationId,
    pub title: Option<String>,
    /// Wall-clock creation time; the window manager bumps it when it would collide.
    pub opened_at_ms: u64,
}

impl OpenWindowRequest {
    pub fn new(app_id: ApplicationId, opened_at_ms: u64) -> Self {
        Self {
            app_id,
            title: None,
            opened_at_ms,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    pub duration_ms: u64,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_BOOT_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    pub require_password: bool,
    /// Placeholder secret compared verbatim; this is not a credential system.
    pub password: String,
    pub user_name: String,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            require_password: false,
            password: DEFAULT_LOCK_PASSWORD.to_string(),
            user_name: "User".to_string(),
        }
    }
}

/// Mount-time configuration: default settings merged with `settings`, optional boot animation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub settings: SettingsPatch,
    pub boot: Option<BootConfig>,
    pub lock: LockConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("desktop config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DesktopConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn initial_settings(&self) -> DesktopSettings {
        DesktopSettings::default().merged(self.settings.clone())
    }
}
