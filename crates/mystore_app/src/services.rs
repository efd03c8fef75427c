//! Runtime-selected service bundle injected into the listing screens.

use std::rc::Rc;

use leptos::*;
use storage_host::{
    MemoryObjectStoreService, MemoryPrefsStore, ObjectStoreService, PrefsStore, StoreConfig,
};

/// Service bundle shared by every listing component.
///
/// All environment-specific service selection happens before this bundle
/// crosses into app components, which keeps the views decoupled from
/// browser adapter details.
#[derive(Clone)]
pub struct StoreServices {
    /// Hosted object-store backend.
    pub objects: Rc<dyn ObjectStoreService>,
    /// Lightweight preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Static backend and routing configuration.
    pub config: StoreConfig,
}

impl StoreServices {
    /// In-memory bundle for tests and non-wasm composition.
    pub fn memory(config: StoreConfig) -> Self {
        Self {
            objects: Rc::new(MemoryObjectStoreService::default()),
            prefs: Rc::new(MemoryPrefsStore::default()),
            config,
        }
    }
}

/// Provides the service bundle to the component tree via context.
pub fn provide_store_services(services: StoreServices) {
    provide_context(services);
}

/// Returns the service bundle provided by an ancestor component.
///
/// Panics when no bundle was provided; composition wires one in before any
/// listing component mounts.
pub fn use_store_services() -> StoreServices {
    expect_context::<StoreServices>()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use storage_host::ListOptions;

    use super::*;

    #[test]
    fn memory_bundle_round_trips_an_upload() {
        let services = StoreServices::memory(StoreConfig::default());

        block_on(services.objects.upload("notes.txt", "text/plain", b"hi".to_vec()))
            .expect("upload");
        let entries = block_on(services.objects.list("", ListOptions::default())).expect("list");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "notes.txt");
    }
}
