//! Shared transport interop for the storage provider bridge.
//!
//! This module routes calls to target-specific implementations while
//! preserving a uniform API for higher-level bridge domain modules.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn http_post_json(url: &str, anon_key: &str, body_json: &str) -> Result<String, String> {
    imp::http_post_json(url, anon_key, body_json).await
}

pub async fn http_post_bytes(
    url: &str,
    anon_key: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<(), String> {
    imp::http_post_bytes(url, anon_key, content_type, bytes).await
}

pub async fn http_get_bytes(url: &str, anon_key: &str) -> Result<Vec<u8>, String> {
    imp::http_get_bytes(url, anon_key).await
}
