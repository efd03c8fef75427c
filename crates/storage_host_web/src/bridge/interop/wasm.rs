use js_sys::Uint8Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

fn build_request(
    url: &str,
    method: &str,
    anon_key: &str,
    init: &RequestInit,
) -> Result<Request, String> {
    init.set_method(method);
    let request = Request::new_with_str_and_init(url, init).map_err(js_error)?;
    let headers = request.headers();
    headers
        .set("Authorization", &format!("Bearer {anon_key}"))
        .map_err(js_error)?;
    headers.set("apikey", anon_key).map_err(js_error)?;
    Ok(request)
}

async fn dispatch(request: &Request) -> Result<Response, String> {
    let value = JsFuture::from(window()?.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    value
        .dyn_into::<Response>()
        .map_err(|_| "fetch returned a non-Response value".to_string())
}

async fn response_text(response: &Response) -> Result<String, String> {
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(text.as_string().unwrap_or_default())
}

async fn ensure_ok(response: &Response) -> Result<(), String> {
    if response.ok() {
        return Ok(());
    }
    let body = response_text(response).await.unwrap_or_default();
    Err(format!("HTTP {}: {}", response.status(), body.trim()))
}

pub async fn http_post_json(url: &str, anon_key: &str, body_json: &str) -> Result<String, String> {
    let init = RequestInit::new();
    init.set_body(&JsValue::from_str(body_json));
    let request = build_request(url, "POST", anon_key, &init)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let response = dispatch(&request).await?;
    ensure_ok(&response).await?;
    response_text(&response).await
}

pub async fn http_post_bytes(
    url: &str,
    anon_key: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<(), String> {
    let body = Uint8Array::from(bytes.as_slice());
    let init = RequestInit::new();
    init.set_body(&body.into());
    let request = build_request(url, "POST", anon_key, &init)?;
    request
        .headers()
        .set("Content-Type", content_type)
        .map_err(js_error)?;

    let response = dispatch(&request).await?;
    ensure_ok(&response).await
}

pub async fn http_get_bytes(url: &str, anon_key: &str) -> Result<Vec<u8>, String> {
    let init = RequestInit::new();
    let request = build_request(url, "GET", anon_key, &init)?;

    let response = dispatch(&request).await?;
    ensure_ok(&response).await?;

    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(Uint8Array::new(&buffer).to_vec())
}
