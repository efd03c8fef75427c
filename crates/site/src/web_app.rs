use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use mystore_app::{provide_store_services, StoreListingView, StoreServices};
use storage_host::{normalize_prefix, StoreConfig};
use storage_host_web::{WebObjectStoreService, WebPrefsStore};

fn store_config() -> StoreConfig {
    StoreConfig {
        endpoint: option_env!("MYSTORE_STORAGE_ENDPOINT")
            .unwrap_or_default()
            .to_string(),
        bucket: option_env!("MYSTORE_BUCKET").unwrap_or("mystore").to_string(),
        anon_key: option_env!("MYSTORE_ANON_KEY").unwrap_or_default().to_string(),
        base_route: "/mystore".to_string(),
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let config = store_config();
    provide_store_services(StoreServices {
        objects: Rc::new(WebObjectStoreService::new(config.clone())),
        prefs: Rc::new(WebPrefsStore),
        config,
    });

    view! {
        <Title text="MyStore" />
        <Meta
            name="description"
            content="Browse, preview, upload, and download files in your hosted store."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="/mystore" view=StoreRootRoute />
                    <Route path="/mystore/*path" view=StoreFolderRoute />
                    <Route path="/*any" view=|| view! { <Redirect path="/mystore" /> } />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn StoreRootRoute() -> impl IntoView {
    view! { <StoreListingView prefix=Signal::derive(String::new) /> }
}

#[component]
fn StoreFolderRoute() -> impl IntoView {
    let params = use_params_map();
    let prefix = Signal::derive(move || {
        normalize_prefix(&params.with(|map| map.get("path").cloned()).unwrap_or_default())
    });

    view! { <StoreListingView prefix /> }
}
