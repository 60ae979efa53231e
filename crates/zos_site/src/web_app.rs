use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use zos_desktop::{DesktopRuntimeContext, DesktopShell};

use crate::{catalog, search::CatalogSearch};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="zOS" />
        <Meta name="description" content="A macOS-style desktop environment running in the browser." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

/// Assembles the desktop runtime from the embedded config and app catalog.
#[component]
pub fn DesktopEntry() -> impl IntoView {
    let config = catalog::desktop_config();
    let apps = catalog::app_catalog();
    let search = Rc::new(CatalogSearch::new(apps.clone()));
    let registry = Rc::new(catalog::build_registry(apps));
    let runtime = DesktopRuntimeContext::new(&config, registry, search);

    view! { <DesktopShell runtime /> }
}
