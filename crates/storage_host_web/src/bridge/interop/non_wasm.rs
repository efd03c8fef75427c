fn unsupported() -> String {
    "Browser network APIs are only available when compiled for wasm32".to_string()
}

pub async fn http_post_json(
    _url: &str,
    _anon_key: &str,
    _body_json: &str,
) -> Result<String, String> {
    Err(unsupported())
}

pub async fn http_post_bytes(
    _url: &str,
    _anon_key: &str,
    _content_type: &str,
    _bytes: Vec<u8>,
) -> Result<(), String> {
    Err(unsupported())
}

pub async fn http_get_bytes(_url: &str, _anon_key: &str) -> Result<Vec<u8>, String> {
    Err(unsupported())
}
