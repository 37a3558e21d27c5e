//! Form field value objects and validation rules

use regex::Regex;
use std::sync::LazyLock;

/// Email shape check (local part, @, domain, dot, tld — no whitespace)
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Consultation call lengths offered by the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallDuration {
    Min15,
    #[default]
    Min30,
    Min60,
}

impl CallDuration {
    pub fn next(&self) -> Self {
        match self {
            Self::Min15 => Self::Min30,
            Self::Min30 => Self::Min60,
            Self::Min60 => Self::Min15,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Min15 => Self::Min60,
            Self::Min30 => Self::Min15,
            Self::Min60 => Self::Min30,
        }
    }

    pub fn minutes(&self) -> u32 {
        match self {
            Self::Min15 => 15,
            Self::Min30 => 30,
            Self::Min60 => 60,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Min15 => "15 min (primeira conversa)",
            Self::Min30 => "30 min (consultoria)",
            Self::Min60 => "60 min (planejamento completo)",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Duration(CallDuration),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Declarative validation rule attached to a field.
///
/// Stateless; defined once per form at construction. `check` produces
/// either Ok or the human-readable message to show under the field.
#[derive(Debug, Clone, Default)]
pub struct FieldConstraint {
    pub required: bool,
    pub pattern: Option<Regex>,
    pub required_message: Option<&'static str>,
    pub invalid_message: Option<&'static str>,
}

impl FieldConstraint {
    /// No constraint; the field always validates
    pub fn none() -> Self {
        Self::default()
    }

    /// Required field with a specific "is required" message
    pub fn required(message: &'static str) -> Self {
        Self {
            required: true,
            required_message: Some(message),
            ..Self::default()
        }
    }

    /// Email-shaped field; required when `required_message` is given
    pub fn email(required_message: Option<&'static str>) -> Self {
        Self {
            required: required_message.is_some(),
            pattern: Some(EMAIL_PATTERN.clone()),
            required_message,
            invalid_message: Some("Email inválido"),
        }
    }

    /// Validate a value against this constraint.
    ///
    /// Whitespace-only counts as empty. The pattern only applies to
    /// non-empty values, so an optional email field passes when blank.
    pub fn check(&self, value: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(self
                    .required_message
                    .unwrap_or("Campo obrigatório")
                    .to_string());
            }
            return Ok(());
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(trimmed) {
                return Err(self
                    .invalid_message
                    .unwrap_or("Formato inválido")
                    .to_string());
            }
        }
        Ok(())
    }
}

/// Represents a single form field with its configuration, value and
/// last validation outcome
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub constraint: FieldConstraint,
    pub is_multiline: bool,
    pub error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, constraint: FieldConstraint, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            constraint,
            is_multiline,
            error: None,
        }
    }

    /// Create a new call-duration field
    pub fn duration(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Duration(CallDuration::default()),
            constraint: FieldConstraint::none(),
            is_multiline: false,
            error: None,
        }
    }

    /// Get the text value (returns empty string for duration fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Duration(_) => "",
        }
    }

    /// Get the duration value (returns the default for text fields)
    pub fn as_duration(&self) -> CallDuration {
        match &self.value {
            FieldValue::Duration(d) => *d,
            FieldValue::Text(_) => CallDuration::default(),
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Duration(_) => {}
        }
        // Stale feedback is misleading once the user resumes typing
        self.error = None;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Duration(_) => {}
        }
        self.error = None;
    }

    /// Cycle an enumerated duration value forward/backward
    pub fn cycle_duration(&mut self, forward: bool) {
        if let FieldValue::Duration(d) = &mut self.value {
            *d = if forward { d.next() } else { d.prev() };
        }
    }

    /// Clear the field value and any validation error
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Duration(d) => *d = CallDuration::default(),
        }
        self.error = None;
    }

    /// Run this field's constraint, storing the result for rendering.
    /// Returns true when the field is valid.
    pub fn validate(&mut self) -> bool {
        match self.constraint.check(self.as_text()) {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(message) => {
                self.error = Some(message);
                false
            }
        }
    }

    /// Trimmed text value as an Option, for optional payload fields
    pub fn as_optional_text(&self) -> Option<String> {
        let trimmed = self.as_text().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Duration(d) => d.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod constraint {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_rejects_empty() {
            let constraint = FieldConstraint::required("Nome é obrigatório");
            assert_eq!(constraint.check(""), Err("Nome é obrigatório".to_string()));
        }

        #[test]
        fn test_required_rejects_whitespace_only() {
            let constraint = FieldConstraint::required("Mensagem é obrigatória");
            assert_eq!(
                constraint.check("   \t "),
                Err("Mensagem é obrigatória".to_string())
            );
        }

        #[test]
        fn test_required_accepts_value() {
            let constraint = FieldConstraint::required("Nome é obrigatório");
            assert_eq!(constraint.check("Beatriz"), Ok(()));
        }

        #[test]
        fn test_none_accepts_anything() {
            let constraint = FieldConstraint::none();
            assert_eq!(constraint.check(""), Ok(()));
            assert_eq!(constraint.check("qualquer coisa"), Ok(()));
        }

        #[test]
        fn test_email_accepts_valid_shape() {
            let constraint = FieldConstraint::email(Some("Email é obrigatório"));
            assert_eq!(constraint.check("bia@viagens.com.br"), Ok(()));
        }

        #[test]
        fn test_email_rejects_missing_at() {
            let constraint = FieldConstraint::email(Some("Email é obrigatório"));
            assert_eq!(
                constraint.check("bia.viagens.com.br"),
                Err("Email inválido".to_string())
            );
        }

        #[test]
        fn test_email_rejects_missing_tld_dot() {
            let constraint = FieldConstraint::email(Some("Email é obrigatório"));
            assert_eq!(
                constraint.check("bia@viagens"),
                Err("Email inválido".to_string())
            );
        }

        #[test]
        fn test_email_rejects_whitespace_inside() {
            let constraint = FieldConstraint::email(Some("Email é obrigatório"));
            assert_eq!(
                constraint.check("bia maria@viagens.com"),
                Err("Email inválido".to_string())
            );
        }

        #[test]
        fn test_optional_email_skips_pattern_when_empty() {
            let constraint = FieldConstraint::email(None);
            assert_eq!(constraint.check(""), Ok(()));
        }

        #[test]
        fn test_required_message_wins_over_pattern() {
            let constraint = FieldConstraint::email(Some("Email é obrigatório"));
            assert_eq!(constraint.check("  "), Err("Email é obrigatório".to_string()));
        }
    }

    mod form_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validate_stores_error() {
            let mut field = FormField::text(
                "name",
                "Nome completo",
                FieldConstraint::required("Nome é obrigatório"),
                false,
            );
            assert!(!field.validate());
            assert_eq!(field.error.as_deref(), Some("Nome é obrigatório"));
        }

        #[test]
        fn test_validate_clears_error_on_pass() {
            let mut field = FormField::text(
                "name",
                "Nome completo",
                FieldConstraint::required("Nome é obrigatório"),
                false,
            );
            assert!(!field.validate());
            field.set_text("Beatriz".to_string());
            assert!(field.validate());
            assert!(field.error.is_none());
        }

        #[test]
        fn test_push_char_clears_stale_error() {
            let mut field = FormField::text(
                "email",
                "Email",
                FieldConstraint::email(Some("Email é obrigatório")),
                false,
            );
            field.validate();
            assert!(field.error.is_some());
            field.push_char('b');
            assert!(field.error.is_none());
        }

        #[test]
        fn test_clear_resets_value_and_error() {
            let mut field = FormField::text(
                "message",
                "Mensagem",
                FieldConstraint::required("Mensagem é obrigatória"),
                true,
            );
            field.set_text("olá".to_string());
            field.validate();
            field.clear();
            assert_eq!(field.as_text(), "");
            assert!(field.error.is_none());
        }

        #[test]
        fn test_as_optional_text_trims() {
            let mut field = FormField::text("phone", "Telefone", FieldConstraint::none(), false);
            assert_eq!(field.as_optional_text(), None);
            field.set_text("  (11) 99999-9999 ".to_string());
            assert_eq!(field.as_optional_text(), Some("(11) 99999-9999".to_string()));
        }

        #[test]
        fn test_duration_field_cycles() {
            let mut field = FormField::duration("duration", "Duração da conversa");
            assert_eq!(field.as_duration(), CallDuration::Min30);
            field.cycle_duration(true);
            assert_eq!(field.as_duration(), CallDuration::Min60);
            field.cycle_duration(true);
            assert_eq!(field.as_duration(), CallDuration::Min15);
            field.cycle_duration(false);
            assert_eq!(field.as_duration(), CallDuration::Min60);
        }

        #[test]
        fn test_duration_field_ignores_text_input() {
            let mut field = FormField::duration("duration", "Duração da conversa");
            field.push_char('x');
            assert_eq!(field.as_text(), "");
            assert_eq!(field.as_duration(), CallDuration::Min30);
        }

        #[test]
        fn test_duration_display_value() {
            let field = FormField::duration("duration", "Duração da conversa");
            assert_eq!(field.display_value(), "30 min (consultoria)");
        }
    }
}
