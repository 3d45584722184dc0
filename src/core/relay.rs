//! Email relay client.
//!
//! Form submissions are delivered by EmailJS, loaded as a global `emailjs`
//! script. The [`RelayClient`] trait is the seam used by the contact form
//! controller; [`EmailJs`] is the browser implementation.

use std::cell::Cell;
use std::future::Future;

use js_sys::{Function, Object, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::relay;
use crate::core::error::RelayError;
use crate::models::ContactFormData;
use crate::utils::dom;

/// Relay service and template identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
}

impl RelayConfig {
    /// Identifiers from the site configuration.
    pub fn from_site_config() -> Self {
        Self {
            service_id: relay::SERVICE_ID.to_string(),
            template_id: relay::TEMPLATE_ID.to_string(),
        }
    }
}

/// Successful relay reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub text: String,
}

/// Delivers a contact form payload.
pub trait RelayClient {
    fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &ContactFormData,
    ) -> impl Future<Output = Result<RelayResponse, RelayError>>;
}

// ============================================================================
// EmailJS
// ============================================================================

/// Get the global `emailjs` object injected by the relay script.
fn get_emailjs() -> Result<Object, RelayError> {
    let window = dom::window().ok_or_else(|| RelayError::Config("janela indisponível".into()))?;
    Reflect::get(&window, &"emailjs".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or_else(|| RelayError::Config("cliente EmailJS não carregado".into()))
}

fn get_method(target: &Object, name: &str) -> Result<Function, RelayError> {
    Reflect::get(target, &name.into())
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| RelayError::Config(format!("emailjs.{} indisponível", name)))
}

/// Read `{ status, text }` from a relay reply or rejection.
fn read_status(value: &JsValue) -> (Option<u16>, String) {
    let status = Reflect::get(value, &"status".into())
        .ok()
        .and_then(|v| v.as_f64())
        .map(|s| s as u16);
    let text = Reflect::get(value, &"text".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string())
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_default();
    (status, text)
}

/// Map a rejected `emailjs.send` promise to a [`RelayError`].
fn classify_rejection(value: &JsValue) -> RelayError {
    let (status, text) = read_status(value);
    if status.is_none() && value.is_instance_of::<js_sys::Error>() {
        // Thrown errors without a status come from the transport (e.g. fetch).
        return RelayError::Network(text);
    }
    RelayError::from_payload(status, &text)
}

/// EmailJS browser client.
///
/// `emailjs.init` runs on first use, so a missing relay script surfaces as a
/// configuration error at submit time instead of breaking the page.
#[derive(Debug)]
pub struct EmailJs {
    public_key: String,
    initialized: Cell<bool>,
}

impl EmailJs {
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            initialized: Cell::new(false),
        }
    }

    /// Call `emailjs.init(publicKey)` once.
    pub fn ensure_init(&self) -> Result<(), RelayError> {
        if self.initialized.get() {
            return Ok(());
        }
        let emailjs = get_emailjs()?;
        let init = get_method(&emailjs, "init")?;
        init.call1(&emailjs, &self.public_key.as_str().into())
            .map_err(|e| RelayError::Config(read_status(&e).1))?;
        self.initialized.set(true);
        Ok(())
    }
}

impl RelayClient for EmailJs {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &ContactFormData,
    ) -> Result<RelayResponse, RelayError> {
        self.ensure_init()?;
        let emailjs = get_emailjs()?;
        let send = get_method(&emailjs, "send")?;

        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| RelayError::Unknown(e.to_string()))?;

        let promise: Promise = send
            .call3(&emailjs, &service_id.into(), &template_id.into(), &params)
            .map_err(|e| classify_rejection(&e))?
            .into();

        let reply = JsFuture::from(promise)
            .await
            .map_err(|e| classify_rejection(&e))?;

        let (status, text) = read_status(&reply);
        Ok(RelayResponse {
            status: status.unwrap_or(200),
            text,
        })
    }
}
