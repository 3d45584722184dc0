//! Cache-bypassing JSON fetch with a timeout.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Await `promise`, failing with [`FetchError::Timeout`] after `timeout_ms`.
///
/// Uses `Promise.race` against a timer that resolves to `undefined`, so a
/// promise that itself resolves to `undefined` reads as a timeout.
async fn with_timeout(promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });
    let race = Promise::race(&Array::of2(&promise, &timer));

    let value = JsFuture::from(race).await.map_err(|e| {
        FetchError::NetworkError(e.as_string().unwrap_or_else(|| "fetch rejected".to_string()))
    })?;
    if value.is_undefined() {
        return Err(FetchError::Timeout);
    }
    Ok(value)
}

/// GET a same-origin JSON document, never served from the HTTP cache.
pub async fn fetch_json_fresh<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let resp: Response = with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS)
        .await?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;
    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}
