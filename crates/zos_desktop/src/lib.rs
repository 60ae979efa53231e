//! Browser desktop shell: window manager state, dock, menu bar, spotlight, app switcher, lock
//! screen, and boot sequence.
//!
//! State transitions live in plain modules ([`window_manager`], [`reducer`], and one module per
//! overlay) and are exercised without a DOM. [`components`] renders them with Leptos and
//! [`runtime_context`] wires the reducer, effect queue, and injected collaborators together.

pub mod app_switcher;
pub mod boot;
pub mod clock;
pub mod components;
pub mod dock;
mod effect_executor;
pub mod host;
pub mod keyboard;
pub mod lock_screen;
pub mod menu_bar;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod spotlight;
pub mod window_manager;

pub use components::{DesktopSettingsPanel, DesktopShell, SETTINGS_APP_ID};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::{DesktopRuntimeContext, ShellServices, WindowManagerHandle};
pub use spotlight::{
    NoSearch, ResultKind, SearchProvider, SpotlightAction, SpotlightResult, SpotlightState,
};
