//! Spotlight search over the app catalog.

use url::Url;
use zos_app_contract::{AppManifest, ApplicationId};
use zos_desktop::{ResultKind, SearchProvider, SpotlightAction, SpotlightResult, SETTINGS_APP_ID};

const WEB_SEARCH_BASE: &str = "https://duckduckgo.com/";

const SETTINGS_KEYWORDS: [&str; 6] = [
    "appearance",
    "theme",
    "wallpaper",
    "dock",
    "accent",
    "settings",
];

/// Matches the query case-insensitively against app names, descriptions and ids.
///
/// Every non-empty query ends with a web search fallback row.
#[derive(Debug, Clone, Default)]
pub struct CatalogSearch {
    apps: Vec<AppManifest>,
}

impl CatalogSearch {
    pub fn new(apps: Vec<AppManifest>) -> Self {
        Self { apps }
    }

    fn app_results(&self, needle: &str) -> impl Iterator<Item = SpotlightResult> + '_ {
        let needle = needle.to_string();
        self.apps
            .iter()
            .filter(move |app| {
                app.name.to_lowercase().contains(&needle)
                    || app.description.to_lowercase().contains(&needle)
                    || app.id.as_str().contains(&needle)
            })
            .map(|app| SpotlightResult {
                id: app.id.to_string(),
                kind: ResultKind::App,
                title: app.name.clone(),
                subtitle: (!app.description.is_empty()).then(|| app.description.clone()),
                icon: Some(app.icon.clone()),
                action: SpotlightAction::OpenApp(app.id.clone()),
            })
    }

    fn settings_result(&self, needle: &str) -> Option<SpotlightResult> {
        let settings_id = ApplicationId::trusted(SETTINGS_APP_ID);
        let listed = self.apps.iter().any(|app| app.id == settings_id);
        let matches = needle.len() >= 3
            && SETTINGS_KEYWORDS
                .iter()
                .any(|keyword| keyword.starts_with(needle) || needle.starts_with(keyword));
        (listed && matches).then(|| SpotlightResult {
            id: format!("setting-{needle}"),
            kind: ResultKind::Setting,
            title: "Appearance".to_string(),
            subtitle: Some("Theme, wallpaper and dock".to_string()),
            icon: None,
            action: SpotlightAction::OpenApp(settings_id),
        })
    }
}

/// Web search URL for `text`, with the query percent-encoded.
pub fn web_search_url(text: &str) -> Option<String> {
    Url::parse_with_params(WEB_SEARCH_BASE, &[("q", text)])
        .ok()
        .map(String::from)
}

impl SearchProvider for CatalogSearch {
    fn query(&self, text: &str) -> Vec<SpotlightResult> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let needle = trimmed.to_lowercase();

        let mut results: Vec<SpotlightResult> = self.app_results(&needle).collect();
        results.extend(self.settings_result(&needle));
        if let Some(url) = web_search_url(trimmed) {
            results.push(SpotlightResult {
                id: "web-search".to_string(),
                kind: ResultKind::Web,
                title: format!("Search the web for \"{trimmed}\""),
                subtitle: None,
                icon: None,
                action: SpotlightAction::OpenExternalUrl(url),
            });
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn manifest(id: &str, name: &str, description: &str) -> AppManifest {
        AppManifest {
            id: ApplicationId::trusted(id),
            name: name.to_string(),
            icon: "*".to_string(),
            description: description.to_string(),
        }
    }

    fn search() -> CatalogSearch {
        CatalogSearch::new(vec![
            manifest("ai.hanzo.notes", "Notes", "Jot down quick notes"),
            manifest("ai.hanzo.calculator", "Calculator", "Basic arithmetic"),
            manifest(SETTINGS_APP_ID, "System Preferences", ""),
        ])
    }

    fn kinds(results: &[SpotlightResult]) -> Vec<(ResultKind, String)> {
        results
            .iter()
            .map(|result| (result.kind, result.id.clone()))
            .collect()
    }

    #[test]
    fn blank_query_returns_nothing() {
        assert!(search().query("   ").is_empty());
    }

    #[test]
    fn matches_names_case_insensitively_then_offers_web_search() {
        let results = search().query("CALC");
        assert_eq!(
            kinds(&results),
            vec![
                (ResultKind::App, "ai.hanzo.calculator".to_string()),
                (ResultKind::Web, "web-search".to_string()),
            ]
        );
        assert_eq!(
            results[0].action,
            SpotlightAction::OpenApp(ApplicationId::trusted("ai.hanzo.calculator"))
        );
    }

    #[test]
    fn description_text_matches_too() {
        let results = search().query("arithmetic");
        assert_eq!(results[0].title, "Calculator");
    }

    #[test]
    fn appearance_keywords_route_to_preferences() {
        let results = search().query("theme");
        let setting = results
            .iter()
            .find(|result| result.kind == ResultKind::Setting)
            .expect("setting row");
        assert_eq!(
            setting.action,
            SpotlightAction::OpenApp(ApplicationId::trusted(SETTINGS_APP_ID))
        );
    }

    #[test]
    fn web_search_url_encodes_the_query() {
        assert_eq!(
            web_search_url("rust & wasm").as_deref(),
            Some("https://duckduckgo.com/?q=rust+%26+wasm")
        );
    }
}
