//! Listing-preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use crate::entry::{ListingPrefs, LISTING_PREFS_KEY};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads a raw JSON string for a preference key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves a raw JSON string for a preference key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }
}

/// Loads the persisted listing preferences, if any.
///
/// A missing key and an unreadable value both yield `None`; stale or corrupt
/// preference JSON must never block the listing screen.
pub async fn load_listing_prefs<S: PrefsStore + ?Sized>(store: &S) -> Option<ListingPrefs> {
    let raw = store.load_pref(LISTING_PREFS_KEY).await.ok()??;
    serde_json::from_str(&raw).ok()
}

/// Persists the listing preferences.
///
/// # Errors
///
/// Returns an error when serialization or the store save fails.
pub async fn save_listing_prefs<S: PrefsStore + ?Sized>(
    store: &S,
    prefs: &ListingPrefs,
) -> Result<(), String> {
    let raw = serde_json::to_string(prefs).map_err(|e| e.to_string())?;
    store.save_pref(LISTING_PREFS_KEY, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use crate::entry::SortColumn;

    use super::*;

    #[test]
    fn memory_prefs_store_round_trips_raw_json() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("pref.key", "{\"k\":1}")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("pref.key")).expect("load"),
            Some("{\"k\":1}".to_string())
        );
    }

    #[test]
    fn listing_prefs_round_trip_through_store() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        assert_eq!(block_on(load_listing_prefs(store_obj)), None);

        let prefs = ListingPrefs {
            sort_by: SortColumn::UpdatedAt,
        };
        block_on(save_listing_prefs(store_obj, &prefs)).expect("save prefs");
        assert_eq!(block_on(load_listing_prefs(store_obj)), Some(prefs));
    }

    #[test]
    fn corrupt_listing_prefs_load_as_none() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref(LISTING_PREFS_KEY, "not json")).expect("save");
        assert_eq!(block_on(load_listing_prefs(store_obj)), None);
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
        block_on(store_obj.save_pref("k", "{}")).expect("save");
    }
}
