//! Shared contract types between the desktop window manager and the apps it hosts.
//!
//! The desktop never resolves renderers dynamically per frame. Apps are registered up front in an
//! [`AppRegistry`], which validates identifiers at registration time and afterwards acts as a plain
//! lookup table from [`ApplicationId`] to launcher metadata and an optional [`AppModule`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for an app package, e.g. `ai.hanzo.calculator`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` conforms to the `segment.segment...` policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, RegistryError> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(RegistryError::InvalidApplicationId(raw))
        }
    }

    /// Creates an id without validation.
    ///
    /// The window manager accepts any id on `open`; only registration enforces the naming policy.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while building an [`AppRegistry`].
pub enum RegistryError {
    /// The id does not follow the dotted lowercase naming policy.
    #[error("invalid application id `{0}`; expected namespaced dotted segments")]
    InvalidApplicationId(String),
    /// An app with the same id was already registered.
    #[error("application `{0}` is already registered")]
    DuplicateApplication(ApplicationId),
    /// A renderer was registered for an id that has no manifest.
    #[error("no manifest registered for application `{0}`")]
    UnknownApplication(ApplicationId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Launcher metadata for one app, as supplied by the app catalog.
pub struct AppManifest {
    /// Canonical app id.
    pub id: ApplicationId,
    /// Human-readable name shown in the dock, spotlight and window titles.
    pub name: String,
    /// Glyph or image URL used as the app icon.
    pub icon: String,
    /// One-line description shown as the spotlight subtitle.
    #[serde(default)]
    pub description: String,
}

#[derive(Clone)]
/// Per-window context handed to an app when its view is mounted.
pub struct AppMountContext {
    /// App id the window was opened for.
    pub app_id: ApplicationId,
    /// Window id assigned by the window manager.
    pub window_id: String,
    /// Close notification: asks the window manager to close this window.
    pub on_close: Callback<()>,
    /// Dock badge notification for the app; `0` clears the badge.
    pub on_badge: Callback<u32>,
}

impl AppMountContext {
    /// Requests that the hosting window be closed.
    pub fn close(&self) {
        self.on_close.call(());
    }

    /// Shows `count` on the app's dock item.
    pub fn set_badge(&self, count: u32) {
        self.on_badge.call(count);
    }
}

/// Static app mount function stored in the registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Renderable app module.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[derive(Debug, Clone, Default)]
/// Ordered launcher catalog plus the app id to renderer lookup table.
pub struct AppRegistry {
    apps: Vec<AppManifest>,
    modules: HashMap<ApplicationId, AppModule>,
}

impl AppRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an app to the launcher catalog.
    ///
    /// # Errors
    ///
    /// Fails when the id breaks the naming policy or is already registered.
    pub fn register_app(&mut self, manifest: AppManifest) -> Result<(), RegistryError> {
        if !is_valid_application_id(manifest.id.as_str()) {
            return Err(RegistryError::InvalidApplicationId(
                manifest.id.as_str().to_string(),
            ));
        }
        if self.manifest(&manifest.id).is_some() {
            return Err(RegistryError::DuplicateApplication(manifest.id));
        }
        self.apps.push(manifest);
        Ok(())
    }

    /// Binds a renderer to an already registered app.
    ///
    /// # Errors
    ///
    /// Fails when the app has no manifest or already has a renderer.
    pub fn register_module(
        &mut self,
        app_id: ApplicationId,
        module: AppModule,
    ) -> Result<(), RegistryError> {
        if self.manifest(&app_id).is_none() {
            return Err(RegistryError::UnknownApplication(app_id));
        }
        if self.modules.contains_key(&app_id) {
            return Err(RegistryError::DuplicateApplication(app_id));
        }
        self.modules.insert(app_id, module);
        Ok(())
    }

    /// Registers a manifest and its renderer in one step.
    ///
    /// # Errors
    ///
    /// See [`AppRegistry::register_app`].
    pub fn register(
        &mut self,
        manifest: AppManifest,
        module: AppModule,
    ) -> Result<(), RegistryError> {
        let app_id = manifest.id.clone();
        self.register_app(manifest)?;
        self.register_module(app_id, module)
    }

    /// Returns the launcher catalog in registration order.
    pub fn apps(&self) -> &[AppManifest] {
        &self.apps
    }

    /// Looks up launcher metadata for `app_id`.
    pub fn manifest(&self, app_id: &ApplicationId) -> Option<&AppManifest> {
        self.apps.iter().find(|app| app.id == *app_id)
    }

    /// Looks up the renderer for `app_id`; `None` means the window is not rendered.
    pub fn module(&self, app_id: &ApplicationId) -> Option<AppModule> {
        self.modules.get(app_id).copied()
    }

    /// Display title for a window of `app_id`, falling back to the raw id.
    pub fn title_for(&self, app_id: &ApplicationId) -> String {
        self.manifest(app_id)
            .map(|app| app.name.clone())
            .unwrap_or_else(|| app_id.to_string())
    }
}
