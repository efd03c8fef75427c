//! Storage key-prefix helpers shared across host abstractions.

/// Normalizes a browsing prefix to the form the provider expects.
///
/// Trims whitespace, converts backslashes to `/`, drops empty segments, and
/// returns `""` for the store root (the provider lists the root under the
/// empty prefix, not `/`).
pub fn normalize_prefix(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    trimmed
        .replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Computes the storage key for an upload into the current browsing location.
///
/// The key is `prefix[/folder_name]/file_name` with empty components skipped,
/// so an upload at the store root with no folder name targets the bare file
/// name.
pub fn upload_key(prefix: &str, folder_name: Option<&str>, file_name: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let prefix = normalize_prefix(prefix);
    if !prefix.is_empty() {
        parts.push(&prefix);
    }
    if let Some(folder) = folder_name.map(str::trim).filter(|f| !f.is_empty()) {
        parts.push(folder);
    }
    parts.push(file_name);
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prefix_matches_expected_cases() {
        let cases = [
            ("", ""),
            ("   ", ""),
            ("/", ""),
            ("docs", "docs"),
            ("/docs/reports/", "docs/reports"),
            ("docs//reports", "docs/reports"),
            ("docs\\reports", "docs/reports"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_prefix(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn upload_key_joins_prefix_folder_and_file() {
        assert_eq!(
            upload_key("docs", Some("archive"), "x.pdf"),
            "docs/archive/x.pdf"
        );
        assert_eq!(upload_key("docs", None, "x.pdf"), "docs/x.pdf");
        assert_eq!(upload_key("", Some("archive"), "x.pdf"), "archive/x.pdf");
        assert_eq!(upload_key("", None, "x.pdf"), "x.pdf");
        assert_eq!(upload_key("", Some("   "), "x.pdf"), "x.pdf");
        assert_eq!(
            upload_key("/reports/2023/", Some("q4"), "a.png"),
            "reports/2023/q4/a.png"
        );
    }
}
