//! Binary entrypoint for the browser-hosted zOS desktop.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    zos_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `zos_site_app` for wasm32 with the `csr` feature."
    );
}
