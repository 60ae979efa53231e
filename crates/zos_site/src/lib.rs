mod catalog;
mod demo_apps;
mod search;
mod web_app;

pub use search::{web_search_url, CatalogSearch};
pub use web_app::{DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
