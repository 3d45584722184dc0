//! Custom error types for the site.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ValidationError`] - Contact form field validation (user-facing text)
//! - [`RelayError`] - Email relay submission failures
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`StorageError`] - localStorage operations

use thiserror::Error;

use crate::config::form::{MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS};
use crate::models::FormField;

/// A contact form field failed validation.
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, preencha o campo {}.", .0.label())]
    Empty(FormField),
    #[error("Por favor, insira um e-mail válido.")]
    InvalidEmail,
    #[error("Telefone incompleto. Use o formato (DD) 99999-9999.")]
    InvalidPhone,
    #[error("A mensagem deve ter pelo menos {} caracteres.", MESSAGE_MIN_CHARS)]
    MessageTooShort,
    #[error("A mensagem deve ter no máximo {} caracteres.", MESSAGE_MAX_CHARS)]
    MessageTooLong,
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> FormField {
        match self {
            Self::Empty(field) => *field,
            Self::InvalidEmail => FormField::Email,
            Self::InvalidPhone => FormField::Phone,
            Self::MessageTooShort | Self::MessageTooLong => FormField::Message,
        }
    }
}

/// Email relay failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// Bad public key, service or template identifier, or the relay script is missing.
    #[error("Erro de configuração do serviço de e-mail: {0}")]
    Config(String),
    /// Transport failure or transient server error.
    #[error("Falha de conexão ao enviar a mensagem. Tente novamente.")]
    Network(String),
    #[error("Erro ao enviar mensagem: {0}")]
    Unknown(String),
}

impl RelayError {
    /// Classify a relay rejection from its `{ status, text }` payload.
    ///
    /// Identifier and key problems are configuration errors regardless of
    /// status; status `0` (no response) and 5xx are network errors.
    pub fn from_payload(status: Option<u16>, text: &str) -> Self {
        let lowered = text.to_ascii_lowercase();
        let mentions_config = ["service id", "template id", "public key", "user id"]
            .iter()
            .any(|needle| lowered.contains(needle));

        if mentions_config {
            return Self::Config(text.to_string());
        }

        match status {
            Some(0) => Self::Network(text.to_string()),
            Some(code) if code >= 500 => Self::Network(text.to_string()),
            _ if text.is_empty() => Self::Unknown("erro desconhecido".to_string()),
            _ => Self::Unknown(text.to_string()),
        }
    }
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx response
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

/// localStorage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,
    #[error("failed to save to localStorage")]
    SaveFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_detected_from_text() {
        let err = RelayError::from_payload(Some(400), "The service ID is invalid");
        assert!(matches!(err, RelayError::Config(_)));

        let err = RelayError::from_payload(Some(400), "The template ID not found");
        assert!(matches!(err, RelayError::Config(_)));

        let err = RelayError::from_payload(Some(403), "The Public Key is invalid");
        assert!(matches!(err, RelayError::Config(_)));
    }

    #[test]
    fn test_network_errors() {
        assert_eq!(
            RelayError::from_payload(Some(0), "Failed to fetch"),
            RelayError::Network("Failed to fetch".to_string())
        );
        assert!(matches!(
            RelayError::from_payload(Some(503), "Service Unavailable"),
            RelayError::Network(_)
        ));
    }

    #[test]
    fn test_unknown_errors() {
        assert_eq!(
            RelayError::from_payload(Some(412), "Gmail_API: Request had insufficient scopes"),
            RelayError::Unknown("Gmail_API: Request had insufficient scopes".to_string())
        );
        assert_eq!(
            RelayError::from_payload(None, ""),
            RelayError::Unknown("erro desconhecido".to_string())
        );
    }

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(ValidationError::Empty(FormField::Subject).field(), FormField::Subject);
        assert_eq!(ValidationError::InvalidPhone.field(), FormField::Phone);
        assert_eq!(ValidationError::MessageTooLong.field(), FormField::Message);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::Empty(FormField::Name).to_string(),
            "Por favor, preencha o campo Nome."
        );
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "A mensagem deve ter pelo menos 10 caracteres."
        );
    }
}
