//! Brazilian phone-number mask and validation.
//!
//! The input keeps only digits (at most 11: 2-digit area code plus up to 9
//! digits) and renders them as `(DD) NNNNN-NNNN` while typing.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::phone::{FULL_MASK_LEN, MAX_DIGITS};
use crate::core::error::ValidationError;

/// Canonical phone format: `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{2}\) [0-9]{4,5}-[0-9]{4}$").expect("phone pattern is valid")
});

/// Keys that pass the keydown filter besides digits.
const NAVIGATION_KEYS: &[&str] = &[
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "ArrowDown",
    "Backspace",
    "Delete",
    "Tab",
    "Escape",
    "Enter",
];

/// Strip everything but ASCII digits and truncate to [`MAX_DIGITS`].
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect()
}

/// Render raw input through the mask.
///
/// | digits | output            |
/// |--------|-------------------|
/// | 0      | empty             |
/// | 1-2    | `(DD`             |
/// | 3-7    | `(DD) NNNNN`      |
/// | 8-11   | `(DD) NNNNN-NNNN` |
pub fn format_phone_number(raw: &str) -> String {
    let digits = sanitize_digits(raw);
    // Only ASCII digits remain, so byte slicing is safe.
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// `true` only for complete values in the canonical format.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Keydown filter for the phone input.
///
/// Accepts digits, arrow keys and the editing/control keys. Shortcuts with
/// Ctrl or Meta (paste, select-all) pass through; pasted text is sanitized
/// by the input handler.
pub fn is_allowed_key(key: &str, ctrl_or_meta: bool) -> bool {
    if ctrl_or_meta {
        return true;
    }
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_digit(),
        _ => NAVIGATION_KEYS.contains(&key),
    }
}

// ============================================================================
// PhoneInput
// ============================================================================

/// Digit buffer behind the masked input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhoneInput {
    digits: String,
}

impl PhoneInput {
    pub fn from_raw(raw: &str) -> Self {
        Self {
            digits: sanitize_digits(raw),
        }
    }

    /// Masked representation of the buffer.
    pub fn display(&self) -> String {
        format_phone_number(&self.digits)
    }
}

// ============================================================================
// PhoneField
// ============================================================================

/// Validation state shown next to the phone input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhoneStatus {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// Phone input with its live validation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhoneField {
    input: PhoneInput,
    status: PhoneStatus,
}

impl PhoneField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an input event and return the text to write back into the field.
    ///
    /// A full-length value that matches the pattern becomes valid and clears
    /// the hint. An invalid field keeps its hint until it is corrected.
    pub fn on_input(&mut self, raw: &str) -> String {
        self.input = PhoneInput::from_raw(raw);
        let display = self.input.display();

        self.status = if display.len() == FULL_MASK_LEN && is_valid_phone(&display) {
            PhoneStatus::Valid
        } else if self.status == PhoneStatus::Invalid {
            PhoneStatus::Invalid
        } else {
            PhoneStatus::Neutral
        };

        display
    }

    /// Validate when the user leaves the field.
    pub fn on_blur(&mut self) -> PhoneStatus {
        self.status = if is_valid_phone(&self.display()) {
            PhoneStatus::Valid
        } else {
            PhoneStatus::Invalid
        };
        self.status
    }

    pub fn status(&self) -> PhoneStatus {
        self.status
    }

    pub fn display(&self) -> String {
        self.input.display()
    }

    /// Hint shown under the field while it is invalid.
    pub fn hint(&self) -> Option<String> {
        (self.status == PhoneStatus::Invalid).then(|| ValidationError::InvalidPhone.to_string())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_digits() {
        assert_eq!(sanitize_digits("(21) 98765-4321"), "21987654321");
        assert_eq!(sanitize_digits("abc"), "");
        assert_eq!(sanitize_digits("2198765432100"), "21987654321");
        assert_eq!(sanitize_digits("２１"), "");
    }

    #[test]
    fn test_format_grouping_table() {
        let cases = [
            ("", ""),
            ("2", "(2"),
            ("21", "(21"),
            ("219", "(21) 9"),
            ("219999", "(21) 9999"),
            ("2198765", "(21) 98765"),
            ("21987654", "(21) 98765-4"),
            ("2198765432", "(21) 98765-432"),
            ("21999999999", "(21) 99999-9999"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_phone_number(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_format_every_length() {
        let all = "21987654321";
        for len in 0..=MAX_DIGITS {
            let out = format_phone_number(&all[..len]);
            assert_eq!(sanitize_digits(&out), &all[..len]);
            let expected_len = match len {
                0 => 0,
                1..=2 => len + 1,
                3..=7 => len + 3,
                _ => len + 4,
            };
            assert_eq!(out.len(), expected_len, "length {}", len);
        }
    }

    #[test]
    fn test_format_strips_and_truncates() {
        assert_eq!(format_phone_number("(21) 98765-4321 ramal 9"), "(21) 98765-4321");
        assert_eq!(format_phone_number("+55 21 9"), "(55) 219");
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("(21) 98765-4321"));
        assert!(is_valid_phone("(11) 3456-7890"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("(21"));
        assert!(!is_valid_phone("(21) 9876"));
        assert!(!is_valid_phone("(21) 98765-432"));
        assert!(!is_valid_phone("(21)98765-4321"));
        assert!(!is_valid_phone(" (21) 98765-4321"));
        assert!(!is_valid_phone("(21) 987654321"));
        assert!(!is_valid_phone("21987654321"));
        assert!(!is_valid_phone("(21) 987-4321"));
    }

    #[test]
    fn test_key_filter() {
        for key in ["0", "5", "9", "Backspace", "Delete", "Tab", "Escape", "Enter", "ArrowLeft"] {
            assert!(is_allowed_key(key, false), "{}", key);
        }
        for key in ["a", "-", " ", "(", "Home", "F5", "v"] {
            assert!(!is_allowed_key(key, false), "{}", key);
        }
        assert!(is_allowed_key("v", true));
    }

    #[test]
    fn test_typing_full_number_marks_valid() {
        let mut field = PhoneField::new();
        let display = field.on_input("21987654321");
        assert_eq!(display, "(21) 98765-4321");
        assert_eq!(field.status(), PhoneStatus::Valid);
        assert_eq!(field.hint(), None);
    }

    #[test]
    fn test_clearing_then_blur_marks_invalid() {
        let mut field = PhoneField::new();
        field.on_input("21987654321");
        assert_eq!(field.on_input(""), "");
        assert_eq!(field.on_blur(), PhoneStatus::Invalid);
        assert_eq!(
            field.hint().as_deref(),
            Some("Telefone incompleto. Use o formato (DD) 99999-9999.")
        );
    }

    #[test]
    fn test_hint_persists_until_corrected() {
        let mut field = PhoneField::new();
        field.on_input("2198");
        field.on_blur();
        field.on_input("21987");
        assert_eq!(field.status(), PhoneStatus::Invalid);
        field.on_input("21987654321");
        assert_eq!(field.status(), PhoneStatus::Valid);
        assert_eq!(field.hint(), None);
    }

    #[test]
    fn test_partial_input_is_neutral_while_typing() {
        let mut field = PhoneField::new();
        field.on_input("2198765");
        assert_eq!(field.status(), PhoneStatus::Neutral);
    }

    #[test]
    fn test_paste_is_sanitized() {
        let mut field = PhoneField::new();
        assert_eq!(field.on_input("tel: +(21) 9 8765 4321"), "(21) 98765-4321");
        assert_eq!(field.status(), PhoneStatus::Valid);
    }

    #[test]
    fn test_reset() {
        let mut field = PhoneField::new();
        field.on_input("21");
        field.on_blur();
        field.reset();
        assert_eq!(field, PhoneField::default());
    }
}
