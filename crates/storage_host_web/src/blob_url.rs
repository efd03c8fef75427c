//! Blob and object-URL helpers for previews and downloads.
//!
//! Downloaded bytes become short-lived `blob:` URLs the UI can hand to `img`,
//! `iframe`, and `video` elements, or push through a synthetic anchor click
//! for save-to-disk.

#[cfg(not(target_arch = "wasm32"))]
fn unsupported() -> String {
    "Browser blob APIs are only available when compiled for wasm32".to_string()
}

/// Wraps raw bytes in a `Blob` and returns an object URL for it.
///
/// The caller owns the URL and must release it with [`revoke_object_url`]
/// when the consuming element unmounts.
///
/// # Errors
///
/// Returns an error when blob construction or URL creation fails.
pub fn object_url_from_bytes(bytes: &[u8], content_type: &str) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let part = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&part);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| format!("blob construction failed: {e:?}"))?;
        web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("object URL creation failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (bytes, content_type);
        Err(unsupported())
    }
}

/// Releases an object URL created by [`object_url_from_bytes`].
///
/// Best effort; a failed revoke only delays garbage collection.
pub fn revoke_object_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
    }
}

/// Triggers a browser save of an object URL under the given file name.
///
/// # Errors
///
/// Returns an error when the synthetic anchor cannot be created or clicked.
pub fn save_object_url(url: &str, file_name: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "document unavailable".to_string())?;
        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| format!("anchor creation failed: {e:?}"))?
            .dyn_into()
            .map_err(|_| "anchor element has unexpected type".to_string())?;
        anchor.set_href(url);
        anchor.set_download(file_name);
        anchor.click();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (url, file_name);
        Err(unsupported())
    }
}

/// Reads the full contents of a picked file into memory.
///
/// # Errors
///
/// Returns an error when the browser read fails.
pub async fn file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| format!("file read failed: {e:?}"))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = file;
        Err(unsupported())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn non_wasm_target_reports_unsupported_blob_apis() {
        let err = object_url_from_bytes(&[1, 2, 3], "image/png").expect_err("object url");
        assert!(err.contains("wasm32"));
        let err = save_object_url("blob:x", "a.png").expect_err("save");
        assert!(err.contains("wasm32"));
        revoke_object_url("blob:x");
    }
}
