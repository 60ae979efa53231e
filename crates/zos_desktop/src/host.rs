//! Browser-side execution of reducer effects.
//!
//! Everything here touches the DOM and is compiled to a no-op off `wasm32`, so the state modules
//! and their tests never depend on a document being present.

use leptos::{logging, ReadSignal, SignalWithUntracked};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{DesktopSettings, DesktopState, WindowId},
    reducer::RuntimeEffect,
};

/// DOM id of a window frame; the frame is the keyboard focus target for its window.
pub fn window_dom_id(window_id: &WindowId) -> String {
    format!("zos-window-{}", window_id.as_str())
}

pub(crate) fn run_runtime_effect(state: ReadSignal<DesktopState>, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(window_id) => focus_window_element(&window_id),
        RuntimeEffect::ApplyAppearance => {
            state.with_untracked(|desktop| apply_appearance(&desktop.settings));
        }
        RuntimeEffect::OpenExternalUrl(url) => open_external_url(&url),
    }
}

fn focus_window_element(window_id: &WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(&window_dom_id(window_id)) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        // The frame is mounted in the same tick as the state change; focus after render.
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0)
            .is_err()
        {
            logging::warn!("could not schedule focus for window `{window_id}`");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

/// Mirrors theme and accent color onto the document root for the stylesheet.
pub(crate) fn apply_appearance(settings: &DesktopSettings) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        if root
            .set_attribute("data-theme", settings.theme.css_id())
            .is_err()
        {
            logging::warn!("could not set data-theme on document root");
        }
        let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        if root
            .style()
            .set_property("--accent-color", &settings.accent_color)
            .is_err()
        {
            logging::warn!("could not set accent color `{}`", settings.accent_color);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = settings;
}

fn open_external_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            logging::warn!("open external url failed for `{url}`: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    logging::debug_warn!("external urls are only opened in the browser: {url}");
}
