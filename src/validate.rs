//! Form validation rules.
//!
//! Works on plain field descriptions rather than live widgets so the
//! rules can be exercised without a display server. The GTK side
//! collects entry contents into [`FieldInput`] records, runs
//! [`validate_fields`], and paints the per-field outcome back onto the
//! widgets.

use regex::Regex;
use std::sync::OnceLock;

/// How a field's value is checked beyond the `required` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text, only the `required` rule applies.
    Text,
    /// Must look like an email address when non-empty.
    Email,
}

/// A snapshot of one form field at validation time.
#[derive(Debug, Clone)]
pub struct FieldInput {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldInput {
    pub fn new(name: &str, value: &str, required: bool, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            required,
            kind,
        }
    }
}

/// Per-field validation outcome for a whole form.
#[derive(Debug, Clone, Default)]
pub struct FormReport {
    /// Field name paired with whether it passed.
    pub fields: Vec<(String, bool)>,
}

impl FormReport {
    /// True iff every field passed.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, ok)| *ok)
    }

    /// Outcome for a single field, if it was part of the validated set.
    pub fn field(&self, name: &str) -> Option<bool> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, ok)| *ok)
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    })
}

/// Check a single field against its rules.
///
/// Required fields must be non-blank after trimming. Email fields must
/// match the address pattern, but an empty optional email passes - an
/// absent value is not a malformed one.
pub fn validate_field(field: &FieldInput) -> bool {
    if field.required && field.value.trim().is_empty() {
        return false;
    }

    if field.kind == FieldKind::Email && !field.value.is_empty() {
        return email_regex().is_match(&field.value);
    }

    true
}

/// Validate a set of fields, producing a per-field report.
///
/// An empty slice yields a vacuously valid report.
pub fn validate_fields(fields: &[FieldInput]) -> FormReport {
    FormReport {
        fields: fields
            .iter()
            .map(|f| (f.name.clone(), validate_field(f)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_required_field_fails() {
        let fields = [
            FieldInput::new("name", "   ", true, FieldKind::Text),
            FieldInput::new("message", "hello", true, FieldKind::Text),
        ];

        let report = validate_fields(&fields);
        assert!(!report.is_valid());
        assert_eq!(report.field("name"), Some(false));
        assert_eq!(report.field("message"), Some(true));
    }

    #[test]
    fn test_malformed_email_fails() {
        let fields = [FieldInput::new(
            "email",
            "not-an-email",
            true,
            FieldKind::Email,
        )];

        assert!(!validate_fields(&fields).is_valid());
    }

    #[test]
    fn test_valid_form_passes() {
        let fields = [
            FieldInput::new("name", "Asha", true, FieldKind::Text),
            FieldInput::new("email", "a@b.com", true, FieldKind::Email),
        ];

        assert!(validate_fields(&fields).is_valid());
    }

    #[test]
    fn test_optional_empty_email_passes() {
        let field = FieldInput::new("email", "", false, FieldKind::Email);
        assert!(validate_field(&field));
    }

    #[test]
    fn test_email_rejects_whitespace_and_missing_dot() {
        for bad in ["a b@c.com", "a@b", "@b.com", "a@.com"] {
            let field = FieldInput::new("email", bad, true, FieldKind::Email);
            assert!(!validate_field(&field), "expected {bad:?} to fail");
        }
    }

    #[test]
    fn test_empty_field_set_is_vacuously_valid() {
        assert!(validate_fields(&[]).is_valid());
    }
}
