//! Contact form submission controller.
//!
//! `Idle -> Submitting -> Idle`. Submits arriving while a request is in
//! flight are ignored; there is no queueing, cancellation or retry.

use std::cell::Cell;

use crate::core::error::{RelayError, ValidationError};
use crate::core::relay::{RelayClient, RelayConfig, RelayResponse};
use crate::core::validation::validate_form;
use crate::models::{ContactFormData, FormField, FormFields, Notification, SubmissionState};

/// Success toast text.
pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso! Entrarei em contato em breve.";

/// Page operations the controller needs from the form.
pub trait FormView {
    /// Current values of the five fields.
    fn read_fields(&self) -> FormFields;

    /// Disable/enable the submit button and swap its label.
    fn set_submitting(&self, submitting: bool);

    /// Clear all fields and inline errors.
    fn reset(&self);

    /// Show `error` inline under the field it belongs to.
    fn show_error(&self, field: FormField, error: &ValidationError);

    fn notify(&self, notification: Notification);

    /// Client-formatted submission time.
    fn timestamp(&self) -> String;
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight.
    Ignored,
    /// Validation failed; the relay was not called.
    Rejected(ValidationError),
    Sent(RelayResponse),
    Failed(RelayError),
}

pub struct ContactFormController<R, V> {
    relay: R,
    view: V,
    config: RelayConfig,
    state: Cell<SubmissionState>,
}

impl<R: RelayClient, V: FormView> ContactFormController<R, V> {
    pub fn new(relay: R, view: V, config: RelayConfig) -> Self {
        Self {
            relay,
            view,
            config,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Validate and forward the form to the relay.
    ///
    /// Takes `&self` so a second submit can observe the in-flight state.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.state.get().is_submitting() {
            return SubmitOutcome::Ignored;
        }

        let fields = self.view.read_fields();
        if let Err(err) = validate_form(&fields) {
            self.view.show_error(err.field(), &err);
            self.view.notify(Notification::error(err.to_string()));
            return SubmitOutcome::Rejected(err);
        }

        self.state.set(SubmissionState::Submitting);
        self.view.set_submitting(true);

        let data = ContactFormData::new(&fields, self.view.timestamp());
        let result = self
            .relay
            .send(&self.config.service_id, &self.config.template_id, &data)
            .await;

        self.state.set(SubmissionState::Idle);
        self.view.set_submitting(false);

        match result {
            Ok(response) => {
                self.view.reset();
                self.view.notify(Notification::success(SUCCESS_MESSAGE));
                SubmitOutcome::Sent(response)
            }
            Err(err) => {
                self.view.notify(Notification::error(err.to_string()));
                SubmitOutcome::Failed(err)
            }
        }
    }
}
