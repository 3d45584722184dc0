//! Reactive form state and the browser implementation of [`FormView`].

use leptos::prelude::*;

use crate::app::NotificationState;
use crate::core::FormView;
use crate::core::error::ValidationError;
use crate::core::phone::{PhoneField, PhoneStatus};
use crate::core::validation::validate_field;
use crate::models::{FormField, FormFields, Notification};
use crate::utils::format;

/// Field values, inline errors and the submitting flag as signals.
///
/// `Copy` because every field is a signal handle.
#[derive(Clone, Copy)]
pub struct ContactFormState {
    values: [RwSignal<String>; 5],
    errors: [RwSignal<Option<String>>; 5],
    /// Digit buffer and live status behind the phone input.
    pub phone: RwSignal<PhoneField>,
    pub submitting: RwSignal<bool>,
    notifications: NotificationState,
}

impl ContactFormState {
    pub fn new(notifications: NotificationState) -> Self {
        Self {
            values: std::array::from_fn(|_| RwSignal::new(String::new())),
            errors: std::array::from_fn(|_| RwSignal::new(None)),
            phone: RwSignal::new(PhoneField::new()),
            submitting: RwSignal::new(false),
            notifications,
        }
    }

    pub fn value(&self, field: FormField) -> RwSignal<String> {
        self.values[field as usize]
    }

    pub fn error(&self, field: FormField) -> RwSignal<Option<String>> {
        self.errors[field as usize]
    }

    /// Inline validation when a field loses focus.
    pub fn check(&self, field: FormField) {
        let message = match field {
            FormField::Phone => {
                self.phone.update(|p| {
                    p.on_blur();
                });
                self.phone.with_untracked(|p| p.hint())
            }
            _ => {
                let value = self.value(field).get_untracked();
                validate_field(field, &value).err().map(|e| e.to_string())
            }
        };
        self.error(field).set(message);
    }

    /// Run the phone mask on raw input and return the masked text.
    pub fn input_phone(&self, raw: &str) -> String {
        let mut display = String::new();
        self.phone.update(|p| display = p.on_input(raw));
        self.value(FormField::Phone).set(display.clone());
        self.error(FormField::Phone)
            .set(self.phone.with_untracked(|p| p.hint()));
        display
    }

    /// Clear a stale inline error while the user edits the field.
    pub fn input(&self, field: FormField, value: String) {
        self.value(field).set(value);
        if self.error(field).get_untracked().is_some() {
            self.check(field);
        }
    }

    pub fn phone_status(&self) -> PhoneStatus {
        self.phone.with(|p| p.status())
    }
}

impl FormView for ContactFormState {
    fn read_fields(&self) -> FormFields {
        let mut fields = FormFields::default();
        for field in FormField::ALL {
            fields.set(field, self.value(field).get_untracked());
        }
        fields
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
    }

    fn reset(&self) {
        for field in FormField::ALL {
            self.value(field).set(String::new());
            self.error(field).set(None);
        }
        self.phone.update(|p| p.reset());
    }

    fn show_error(&self, field: FormField, error: &ValidationError) {
        if field == FormField::Phone {
            self.phone.update(|p| {
                p.on_blur();
            });
        }
        self.error(field).set(Some(error.to_string()));
    }

    fn notify(&self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn timestamp(&self) -> String {
        format::current_timestamp()
    }
}
