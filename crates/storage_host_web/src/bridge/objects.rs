pub(crate) async fn http_post_json(
    url: &str,
    anon_key: &str,
    body_json: &str,
) -> Result<String, String> {
    super::interop::http_post_json(url, anon_key, body_json).await
}

pub(crate) async fn http_post_bytes(
    url: &str,
    anon_key: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<(), String> {
    super::interop::http_post_bytes(url, anon_key, content_type, bytes).await
}

pub(crate) async fn http_get_bytes(url: &str, anon_key: &str) -> Result<Vec<u8>, String> {
    super::interop::http_get_bytes(url, anon_key).await
}
