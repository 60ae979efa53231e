//! Dock projection: launcher entries annotated with running state and hover magnification.

use std::collections::HashMap;

use zos_app_contract::{AppManifest, ApplicationId};

use crate::model::DesktopState;

/// Scale applied to the hovered icon and its neighbours, indexed by distance.
const MAGNIFICATION_FALLOFF: [f64; 3] = [1.5, 1.25, 1.1];

#[derive(Debug, Clone, PartialEq)]
pub struct DockEntry {
    pub app_id: ApplicationId,
    pub name: String,
    pub icon: String,
    pub is_running: bool,
    pub badge: Option<u32>,
}

/// Projects the launcher catalog onto the current window collection and app-reported badges.
pub fn dock_entries(
    apps: &[AppManifest],
    state: &DesktopState,
    badges: &HashMap<ApplicationId, u32>,
) -> Vec<DockEntry> {
    apps.iter()
        .map(|app| DockEntry {
            app_id: app.id.clone(),
            name: app.name.clone(),
            icon: app.icon.clone(),
            is_running: state.is_app_running(&app.id),
            badge: badges.get(&app.id).copied(),
        })
        .collect()
}

/// Icon scale for the item at `index` given the currently hovered item.
pub fn magnification_scale(index: usize, hovered: Option<usize>, enabled: bool) -> f64 {
    let Some(hovered) = hovered.filter(|_| enabled) else {
        return 1.0;
    };
    MAGNIFICATION_FALLOFF
        .get(index.abs_diff(hovered))
        .copied()
        .unwrap_or(1.0)
}

/// Badge text; zero and missing counts render nothing.
pub fn badge_label(badge: Option<u32>) -> Option<String> {
    match badge {
        None | Some(0) => None,
        Some(count) if count > 99 => Some("99+".to_string()),
        Some(count) => Some(count.to_string()),
    }
}

/// Icons are plain URLs when they look like paths, otherwise a glyph.
pub fn icon_is_image(icon: &str) -> bool {
    icon.starts_with('/') || icon.starts_with("http://") || icon.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::OpenWindowRequest, window_manager};

    fn app(id: &str, name: &str) -> AppManifest {
        AppManifest {
            id: ApplicationId::trusted(id),
            name: name.to_string(),
            icon: "+".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn magnification_follows_fixed_falloff_table() {
        let scales: Vec<f64> = (0..6)
            .map(|index| magnification_scale(index, Some(2), true))
            .collect();
        assert_eq!(scales, vec![1.1, 1.25, 1.5, 1.25, 1.1, 1.0]);
    }

    #[test]
    fn magnification_is_flat_when_disabled_or_idle() {
        assert_eq!(magnification_scale(3, Some(3), false), 1.0);
        assert_eq!(magnification_scale(3, None, true), 1.0);
    }

    #[test]
    fn running_flag_tracks_open_windows() {
        let apps = vec![app("ai.hanzo.notes", "Notes"), app("ai.hanzo.clock", "Clock")];
        let mut state = DesktopState::default();
        window_manager::open_window(
            &mut state,
            OpenWindowRequest::new(ApplicationId::trusted("ai.hanzo.clock"), 5),
        );

        let entries = dock_entries(&apps, &state, &HashMap::new());
        assert_eq!(entries.len(), 2);
        assert!(!entries[0].is_running);
        assert!(entries[1].is_running);
        assert_eq!(entries[1].name, "Clock");
    }

    #[test]
    fn badges_attach_to_matching_apps() {
        let apps = vec![app("ai.hanzo.notes", "Notes"), app("ai.hanzo.clock", "Clock")];
        let badges = HashMap::from([(ApplicationId::trusted("ai.hanzo.notes"), 3)]);

        let entries = dock_entries(&apps, &DesktopState::default(), &badges);
        assert_eq!(entries[0].badge, Some(3));
        assert_eq!(entries[1].badge, None);
    }

    #[test]
    fn badge_label_caps_at_ninety_nine() {
        assert_eq!(badge_label(None), None);
        assert_eq!(badge_label(Some(0)), None);
        assert_eq!(badge_label(Some(7)), Some("7".to_string()));
        assert_eq!(badge_label(Some(100)), Some("99+".to_string()));
    }

    #[test]
    fn icon_kind_detection() {
        assert!(icon_is_image("/icons/notes.png"));
        assert!(!icon_is_image("N"));
    }
}
