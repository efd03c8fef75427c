//! Browser composition root for the MyStore application.

mod web_app;

pub use web_app::{SiteApp, StoreRootRoute};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts the application into the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
