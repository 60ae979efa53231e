//! Build-time desktop configuration and the app registry assembled from it.

use leptos::logging;
use zos_app_contract::{AppManifest, AppRegistry};
use zos_desktop::DesktopConfig;

use crate::demo_apps;

include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));

/// Parses the embedded desktop config, falling back to defaults when it is unreadable.
pub fn desktop_config() -> DesktopConfig {
    parse_desktop_config(DESKTOP_CONFIG_JSON)
}

fn parse_desktop_config(raw: &str) -> DesktopConfig {
    DesktopConfig::from_json(raw).unwrap_or_else(|err| {
        logging::warn!("{err}; using default desktop config");
        DesktopConfig::default()
    })
}

/// Embedded launcher catalog in dock order.
pub fn app_catalog() -> Vec<AppManifest> {
    parse_app_catalog(APP_CATALOG_JSON)
}

fn parse_app_catalog(raw: &str) -> Vec<AppManifest> {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        logging::warn!("app catalog is not valid JSON: {err}");
        Vec::new()
    })
}

/// Registers every catalog entry and binds the demo renderers that exist.
///
/// Entries that fail registration are skipped with a warning; the desktop still boots.
pub fn build_registry(catalog: Vec<AppManifest>) -> AppRegistry {
    let mut registry = AppRegistry::new();
    for manifest in catalog {
        let app_id = manifest.id.clone();
        if let Err(err) = registry.register_app(manifest) {
            logging::warn!("skipping catalog entry: {err}");
            continue;
        }
        if let Some(module) = demo_apps::module_for(&app_id) {
            if let Err(err) = registry.register_module(app_id, module) {
                logging::warn!("skipping renderer: {err}");
            }
        }
    }
    registry
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use zos_app_contract::ApplicationId;
    use zos_desktop::{DockPosition, Theme};

    use super::*;

    #[test]
    fn embedded_config_parses_and_keeps_boot_enabled() {
        let config = desktop_config();
        assert_eq!(config.boot.map(|boot| boot.duration_ms), Some(3000));
        assert_eq!(config.initial_settings().theme, Theme::Dark);
        assert_eq!(config.initial_settings().dock_position, DockPosition::Bottom);
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        assert_eq!(parse_desktop_config("{ not json"), DesktopConfig::default());
        assert_eq!(parse_app_catalog("[{]"), Vec::<AppManifest>::new());
    }

    #[test]
    fn registry_keeps_catalog_order_and_skips_bad_entries() {
        let mut catalog = app_catalog();
        let first = catalog[0].clone();
        catalog.push(first);
        catalog.push(AppManifest {
            id: ApplicationId::trusted("NoDots"),
            name: "Broken".to_string(),
            icon: "?".to_string(),
            description: String::new(),
        });

        let expected = app_catalog().len();
        let registry = build_registry(catalog);
        assert_eq!(registry.apps().len(), expected);
        assert_eq!(registry.apps()[0].id.as_str(), "ai.hanzo.notes");
    }

    #[test]
    fn catalog_apps_without_renderers_stay_launchable() {
        let registry = build_registry(app_catalog());
        let music = ApplicationId::trusted("ai.hanzo.music");
        assert!(registry.manifest(&music).is_some());
        assert!(registry.module(&music).is_none());
        assert!(registry
            .module(&ApplicationId::trusted("ai.hanzo.notes"))
            .is_some());
    }
}
