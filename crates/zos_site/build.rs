use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Theme {
    Light,
    Dark,
    Auto,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum DockPosition {
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wallpaper: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dock_position: Option<DockPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dock_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dock_magnification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dock_auto_hide: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Boot {
    duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Lock {
    #[serde(default)]
    require_password: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct App {
    id: String,
    name: String,
    icon: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct DesktopFile {
    schema_version: u32,
    #[serde(default)]
    settings: Settings,
    boot: Option<Boot>,
    lock: Option<Lock>,
    #[serde(default)]
    apps: Vec<App>,
}

#[derive(Serialize)]
struct DesktopConfigJson {
    settings: Settings,
    boot: Option<Boot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lock: Option<Lock>,
}

fn is_valid_app_id(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split('.').collect();
    parts.len() >= 2
        && parts.iter().all(|part| {
            part.starts_with(|c: char| c.is_ascii_lowercase())
                && !part.ends_with('-')
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        })
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let desktop: DesktopFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if desktop.schema_version != SCHEMA_VERSION {
        panic!(
            "desktop config schema mismatch in {}: expected {SCHEMA_VERSION} found {}",
            path.display(),
            desktop.schema_version
        );
    }
    if let Some(size) = desktop.settings.dock_size {
        if !(32..=128).contains(&size) {
            panic!("dock_size must be within 32..=128, found {size}");
        }
    }

    let mut seen = HashSet::new();
    for app in &desktop.apps {
        if !is_valid_app_id(&app.id) {
            panic!("invalid app id `{}` in {}", app.id, path.display());
        }
        if !seen.insert(app.id.as_str()) {
            panic!("duplicate app id `{}` in {}", app.id, path.display());
        }
    }

    let apps_json = serde_json::to_string_pretty(&desktop.apps).expect("serialize app catalog");
    let config_json = serde_json::to_string_pretty(&DesktopConfigJson {
        settings: desktop.settings,
        boot: desktop.boot,
        lock: desktop.lock,
    })
    .expect("serialize desktop config");
    let generated = format!(
        "/// Build-time generated desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{config_json}\"##;\n\
/// Build-time generated app catalog JSON, in dock order.\n\
pub const APP_CATALOG_JSON: &str = r##\"{apps_json}\"##;\n"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
