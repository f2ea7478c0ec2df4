//! Typed wrappers around the browser APIs the views need.
//!
//! Requests go through `window.fetch` and resolve to the same [`ApiError`]
//! the native client uses, so views can show `err.to_string()` directly.

use bi_model::endpoint::Method;
use bi_model::error::decode;
use bi_model::{ApiConfig, ApiError, Endpoint};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Request, RequestInit, RequestMode, Response, Url};

fn js_detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::Connection("no window object".to_string()))
}

async fn send(config: &ApiConfig, endpoint: &Endpoint, body: Option<String>) -> Result<String, ApiError> {
    let url = endpoint.url(&config.base_url)?;

    let opts = RequestInit::new();
    opts.set_mode(RequestMode::Cors);
    match endpoint.method() {
        Method::Get => opts.set_method("GET"),
        Method::Post => opts.set_method("POST"),
    }
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", url, js_detail(&e))))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Connection(js_detail(&e)))?;
    }

    let response = JsFuture::from(window()?.fetch_with_request(&request))
        .await
        .map_err(|e| {
            log::warn!("[BI] fetch {} failed: {}", url, js_detail(&e));
            ApiError::Connection(js_detail(&e))
        })?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ApiError::Connection(js_detail(&e)))?;

    let text_promise = response.text().map_err(|e| ApiError::Decode(js_detail(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| ApiError::Decode(js_detail(&e)))?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        let err = ApiError::from_response(response.status(), &response.status_text(), &text);
        log::warn!("[BI] {} -> {}: {}", url, response.status(), err);
        return Err(err);
    }
    log::info!("[BI] {} -> {} ({} bytes)", url, response.status(), text.len());
    Ok(text)
}

/// GET an endpoint and return the body as text (CSV, HTML).
pub async fn get_text(config: &ApiConfig, endpoint: &Endpoint) -> Result<String, ApiError> {
    send(config, endpoint, None).await
}

/// GET an endpoint and decode its JSON body.
pub async fn get_json<T: DeserializeOwned>(config: &ApiConfig, endpoint: &Endpoint) -> Result<T, ApiError> {
    decode(&send(config, endpoint, None).await?)
}

/// POST a JSON body and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    config: &ApiConfig,
    endpoint: &Endpoint,
    body: &B,
) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    decode(&send(config, endpoint, Some(body)).await?)
}

/// Offer `text` to the user as a CSV file download.
pub fn download_csv(filename: &str, text: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let props = BlobPropertyBag::new();
    props.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props).map_err(|e| js_detail(&e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| js_detail(&e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_detail(&e))?
        .dyn_into()
        .map_err(|e| js_detail(&e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = Url::revoke_object_url(&url);

    log::info!("[BI] downloaded {} ({} bytes)", filename, text.len());
    Ok(())
}

/// Resolve after `ms` milliseconds. Fails at once when no timer can be
/// armed, so polling loops can stop instead of waiting forever.
pub async fn sleep_ms(ms: i32) -> Result<(), ApiError> {
    sleep_in(web_sys::window(), ms).await
}

async fn sleep_in(window: Option<web_sys::Window>, ms: i32) -> Result<(), ApiError> {
    let Some(window) = window else {
        log::warn!("[BI] sleep: no window object, not waiting");
        return Err(ApiError::Connection("no window object".to_string()));
    };
    let mut armed = Ok(());
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms) {
            armed = Err(js_detail(&e));
        }
    });
    if let Err(detail) = armed {
        log::warn!("[BI] sleep: setTimeout failed: {}", detail);
        return Err(ApiError::Connection(detail));
    }
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ApiError::Connection(js_detail(&e)))
}

/// Today's date for export filenames.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sleep_without_window_returns_at_once() {
        let err = sleep_in(None, 5_000).await.unwrap_err();
        assert!(matches!(err, ApiError::Connection(_)));
    }
}
