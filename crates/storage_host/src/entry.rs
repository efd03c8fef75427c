//! Listing/entry data types shared across host contracts and implementations.

use serde::{Deserialize, Serialize};

/// Hidden sentinel object the storage provider inserts to keep an otherwise-empty
/// folder prefix listable. Filtered out of every listing shown to the user.
pub const PLACEHOLDER_OBJECT_NAME: &str = ".emptyFolderPlaceholder";

/// localStorage key used for listing UI preferences.
pub const LISTING_PREFS_KEY: &str = "mystore.listing.prefs.v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Sort column accepted by the provider's list operation.
pub enum SortColumn {
    /// Sort by entry name.
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Sort by last-updated timestamp.
    #[serde(rename = "updated_at")]
    UpdatedAt,
}

impl SortColumn {
    /// Returns the provider's wire token for this column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Sort direction accepted by the provider's list operation.
///
/// The UI only ever requests ascending order.
pub enum SortOrder {
    /// Ascending order.
    #[default]
    #[serde(rename = "asc")]
    Asc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Sort clause carried in the list request body.
pub struct SortBy {
    /// Column to sort by.
    pub column: SortColumn,
    /// Sort direction.
    pub order: SortOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Options carried on a folder listing request.
pub struct ListOptions {
    /// Maximum number of entries to return.
    pub limit: u32,
    /// Offset into the listing.
    pub offset: u32,
    /// Sort clause.
    #[serde(rename = "sortBy")]
    pub sort_by: SortBy,
}

impl ListOptions {
    /// Standard listing page sorted ascending by the given column.
    pub const fn sorted_by(column: SortColumn) -> Self {
        Self {
            limit: 100,
            offset: 0,
            sort_by: SortBy {
                column,
                order: SortOrder::Asc,
            },
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::sorted_by(SortColumn::Name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// File metadata attached to a listing entry.
///
/// Field names match the provider wire format.
pub struct EntryMetadata {
    /// MIME type reported by the provider.
    #[serde(rename = "mimetype")]
    pub mime_type: String,
    /// File size in bytes.
    #[serde(rename = "size")]
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One item returned by a folder listing.
///
/// Presence of `metadata` is the sole file/folder discriminator: files carry
/// metadata, folder prefixes do not.
pub struct StorageEntry {
    /// Base name of the entry, unique within its parent folder.
    pub name: String,
    /// Last-updated timestamp as reported by the provider (files only in practice).
    #[serde(default)]
    pub updated_at: Option<String>,
    /// File metadata; absent for folder entries.
    #[serde(default)]
    pub metadata: Option<EntryMetadata>,
}

impl StorageEntry {
    /// Returns `true` when the entry represents a folder prefix.
    pub fn is_folder(&self) -> bool {
        self.metadata.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
/// User preferences for the listing screen UI.
pub struct ListingPrefs {
    /// Preferred sort column.
    pub sort_by: SortColumn,
}

/// Drops the provider's placeholder sentinel from a listing.
///
/// Idempotent: filtering an already-filtered listing is a no-op.
pub fn filter_placeholder_entries(entries: Vec<StorageEntry>) -> Vec<StorageEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.name != PLACEHOLDER_OBJECT_NAME)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn file_entry(name: &str) -> StorageEntry {
        StorageEntry {
            name: name.to_string(),
            updated_at: Some("2023-01-07T10:00:00.000Z".to_string()),
            metadata: Some(EntryMetadata {
                mime_type: "image/png".to_string(),
                size_bytes: 1_048_576,
            }),
        }
    }

    #[test]
    fn sort_tokens_match_provider_wire_strings() {
        assert_eq!(
            serde_json::to_string(&SortColumn::Name).expect("serialize"),
            "\"name\""
        );
        assert_eq!(
            serde_json::to_string(&SortColumn::UpdatedAt).expect("serialize"),
            "\"updated_at\""
        );
        assert_eq!(
            serde_json::to_string(&SortOrder::Asc).expect("serialize"),
            "\"asc\""
        );
    }

    #[test]
    fn list_options_serialize_to_provider_body_shape() {
        let options = ListOptions::sorted_by(SortColumn::UpdatedAt);
        let value = serde_json::to_value(options).expect("serialize");
        assert_eq!(
            value,
            json!({
                "limit": 100,
                "offset": 0,
                "sortBy": {"column": "updated_at", "order": "asc"}
            })
        );
    }

    #[test]
    fn entry_deserializes_from_provider_listing_payload() {
        let raw = json!([
            {"name": "reports", "updated_at": null, "metadata": null},
            {
                "name": "a.png",
                "updated_at": "2023-01-07T10:00:00.000Z",
                "metadata": {"mimetype": "image/png", "size": 1048576}
            }
        ]);

        let entries: Vec<StorageEntry> = serde_json::from_value(raw).expect("deserialize");
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_folder());
        assert!(!entries[1].is_folder());
        assert_eq!(
            entries[1].metadata.as_ref().map(|m| m.size_bytes),
            Some(1_048_576)
        );
    }

    #[test]
    fn placeholder_filter_is_idempotent() {
        let listing = vec![
            file_entry("a.png"),
            StorageEntry {
                name: PLACEHOLDER_OBJECT_NAME.to_string(),
                updated_at: None,
                metadata: None,
            },
            file_entry("b.png"),
        ];

        let once = filter_placeholder_entries(listing);
        let names: Vec<&str> = once.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);

        let twice = filter_placeholder_entries(once.clone());
        assert_eq!(twice, once);
    }
}
