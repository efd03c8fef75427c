//! Breadcrumb resolution and trail rendering for the listing screen.

use leptos::*;
use mystore_ui::{BreadcrumbSegment, BreadcrumbTrail};

use crate::services::use_store_services;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One resolved breadcrumb entry.
pub struct BreadcrumbEntry {
    /// Segment label shown to the user.
    pub label: String,
    /// App route for browsing up to this segment.
    pub href: String,
}

/// Resolves a folder path into breadcrumb entries with cumulative hrefs.
///
/// Each entry's href joins every segment up to and including its own position,
/// so repeated segment names resolve to distinct hrefs. An empty path yields
/// a single empty-label entry pointing at the base route.
pub fn resolve_breadcrumb(path: &str, base_route: &str) -> Vec<BreadcrumbEntry> {
    let segments: Vec<&str> = path.split('/').collect();
    segments
        .iter()
        .enumerate()
        .map(|(position, segment)| BreadcrumbEntry {
            label: (*segment).to_string(),
            href: format!("{base_route}/{}", segments[..=position].join("/")),
        })
        .collect()
}

#[component]
/// Breadcrumb trail for the current browsing prefix.
///
/// The store root renders a single root segment; nested prefixes append one
/// linked segment per folder with the last segment marked current.
pub fn ListingBreadcrumbs(#[prop(into)] prefix: Signal<String>) -> impl IntoView {
    let services = use_store_services();
    let base_route = services.config.base_route.clone();

    view! {
        <BreadcrumbTrail aria_label="Folder location">
            <BreadcrumbSegment
                label="MyStore"
                href=base_route.clone()
                current=Signal::derive(move || prefix.get().is_empty())
            />
            {move || {
                let path = prefix.get();
                if path.is_empty() {
                    return ().into_view();
                }
                let entries = resolve_breadcrumb(&path, &base_route);
                let last = entries.len().saturating_sub(1);
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(position, entry)| {
                        view! {
                            <BreadcrumbSegment
                                label=entry.label
                                href=entry.href
                                current=position == last
                                leading_separator=true
                            />
                        }
                    })
                    .collect_view()
            }}
        </BreadcrumbTrail>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nested_path_yields_cumulative_hrefs() {
        let entries = resolve_breadcrumb("docs/reports/2023", "/mystore");
        assert_eq!(
            entries,
            vec![
                BreadcrumbEntry {
                    label: "docs".to_string(),
                    href: "/mystore/docs".to_string(),
                },
                BreadcrumbEntry {
                    label: "reports".to_string(),
                    href: "/mystore/docs/reports".to_string(),
                },
                BreadcrumbEntry {
                    label: "2023".to_string(),
                    href: "/mystore/docs/reports/2023".to_string(),
                },
            ]
        );
    }

    #[test]
    fn repeated_segment_names_resolve_positionally() {
        let entries = resolve_breadcrumb("docs/docs", "/mystore");
        assert_eq!(entries[0].href, "/mystore/docs");
        assert_eq!(entries[1].href, "/mystore/docs/docs");
    }

    #[test]
    fn empty_path_yields_one_empty_label_entry() {
        let entries = resolve_breadcrumb("", "/mystore");
        assert_eq!(
            entries,
            vec![BreadcrumbEntry {
                label: String::new(),
                href: "/mystore/".to_string(),
            }]
        );
    }

    #[test]
    fn entry_count_matches_segment_count() {
        for (path, expected) in [("a", 1), ("a/b", 2), ("a/b/c", 3)] {
            assert_eq!(resolve_breadcrumb(path, "/mystore").len(), expected);
        }
    }
}
