//! Contact form data types.

use serde::Serialize;

/// The five user-editable fields of the contact form, in validation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FormField {
    /// All fields in the order they are validated.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Subject,
        FormField::Message,
    ];

    /// The `name`/`id` attribute of the field's input element.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// Human-readable label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Nome",
            FormField::Email => "E-mail",
            FormField::Phone => "Telefone",
            FormField::Subject => "Assunto",
            FormField::Message => "Mensagem",
        }
    }
}

/// Raw field values as entered by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Payload handed to the email relay.
///
/// Serializes to a flat object whose keys match the relay template variables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}

impl ContactFormData {
    /// Build the payload from validated fields, trimming surrounding whitespace.
    pub fn new(fields: &FormFields, timestamp: impl Into<String>) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            subject: fields.subject.trim().to_string(),
            message: fields.message.trim().to_string(),
            timestamp: timestamp.into(),
        }
    }
}

/// Submission lifecycle of a single form instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut fields = FormFields::default();
        for field in FormField::ALL {
            fields.set(field, field.id());
        }
        for field in FormField::ALL {
            assert_eq!(fields.get(field), field.id());
        }
    }

    #[test]
    fn test_payload_serializes_flat() {
        let fields = FormFields {
            name: "  Ana ".to_string(),
            email: "ana@example.com".to_string(),
            phone: "(21) 98765-4321".to_string(),
            subject: "Projeto".to_string(),
            message: "Olá, tudo bem?".to_string(),
        };
        let data = ContactFormData::new(&fields, "19/10/2026 14:30:00");
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["name"], "Ana");
        assert_eq!(json["phone"], "(21) 98765-4321");
        assert_eq!(json["timestamp"], "19/10/2026 14:30:00");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
