//! Static configuration for the hosted storage backend and app routing.

/// Connection and routing configuration shared across the app.
///
/// Built once at composition time and handed to adapters and views; nothing
/// mutates it after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the storage provider's API, without a trailing slash.
    pub endpoint: String,
    /// Bucket all MyStore objects live in.
    pub bucket: String,
    /// Public API key sent with every request.
    pub anon_key: String,
    /// Route prefix the listing screen is mounted under.
    pub base_route: String,
}

impl StoreConfig {
    /// URL of the provider's list operation for the configured bucket.
    pub fn list_url(&self) -> String {
        format!("{}/object/list/{}", self.endpoint, self.bucket)
    }

    /// URL of one object in the configured bucket.
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/object/{}/{}", self.endpoint, self.bucket, key)
    }

    /// App route for browsing the given folder prefix.
    ///
    /// The empty prefix routes to the store root.
    pub fn route_for_prefix(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.base_route.clone()
        } else {
            format!("{}/{}", self.base_route, prefix)
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            bucket: "mystore".to_string(),
            anon_key: String::new(),
            base_route: "/mystore".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StoreConfig {
        StoreConfig {
            endpoint: "https://example.storage.test/storage/v1".to_string(),
            bucket: "mystore".to_string(),
            anon_key: "public-anon-key".to_string(),
            base_route: "/mystore".to_string(),
        }
    }

    #[test]
    fn urls_target_the_configured_bucket() {
        let config = config();
        assert_eq!(
            config.list_url(),
            "https://example.storage.test/storage/v1/object/list/mystore"
        );
        assert_eq!(
            config.object_url("docs/a.pdf"),
            "https://example.storage.test/storage/v1/object/mystore/docs/a.pdf"
        );
    }

    #[test]
    fn route_for_prefix_handles_root_and_nested_folders() {
        let config = config();
        assert_eq!(config.route_for_prefix(""), "/mystore");
        assert_eq!(config.route_for_prefix("docs/reports"), "/mystore/docs/reports");
    }
}
