//! Maintenance-mode polling.
//!
//! Fetches the status document on a fixed interval. Every failure is
//! swallowed; the last good status stays in effect.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::config::maintenance::{POLL_INTERVAL_MS, STATUS_URL};
use crate::core::error::FetchError;
use crate::models::MaintenanceStatus;
use crate::utils::fetch_json_fresh;

/// Fetch the current maintenance status once.
pub async fn check() -> Result<MaintenanceStatus, FetchError> {
    fetch_json_fresh::<MaintenanceStatus>(STATUS_URL).await
}

/// Poll immediately and then every [`POLL_INTERVAL_MS`], passing each
/// successfully fetched status to `on_status`.
pub fn start_polling(on_status: impl Fn(MaintenanceStatus) + 'static) {
    spawn_local(async move {
        loop {
            if let Ok(status) = check().await {
                on_status(status);
            }
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
        }
    });
}
