//! Form state management and form structs

use super::field::{FieldConstraint, FormField};
use crate::intake::{BookingLead, ContactLead, NewsletterLead};
use crate::state::Submission;
use std::time::Duration;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;

    /// Move focus forward, validating the field being left (the blur
    /// trigger for immediate feedback)
    fn next_field(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.validate();
        }
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.validate();
        }
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    /// Whether the focused field accepts newlines
    fn active_is_multiline(&self) -> bool {
        self.get_field(self.active_field())
            .is_some_and(|field| field.is_multiline)
    }

    /// Exhaustive validation at submit time; submission is blocked
    /// unless every field passes
    fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for index in 0..self.field_count() {
            if let Some(field) = self.get_field_mut(index) {
                if !field.validate() {
                    all_valid = false;
                }
            }
        }
        all_valid
    }
}

/// The two parameterizations of the shared lead form.
///
/// Contact and trip-planning have an identical field shape and target
/// endpoint, differing only in surrounding copy, so they are one
/// controller constructed two ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadFormKind {
    Contact,
    TripPlanning,
}

impl LeadFormKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Contact => "Deixe sua mensagem",
            Self::TripPlanning => "Planeje sua viagem",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Contact => "Preencha o formulário e vamos começar a planejar sua próxima aventura.",
            Self::TripPlanning => "Conte seus desejos e criamos um roteiro sob medida para você.",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Self::Contact => "contact_page",
            Self::TripPlanning => "trip_planning_page",
        }
    }
}

/// Shared contact / trip-planning form
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub kind: LeadFormKind,
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub destination: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    pub submission: Submission,
    /// Context carried over from the experience-card shortcut
    pub experience_slug: Option<String>,
}

impl LeadForm {
    pub fn new(kind: LeadFormKind, reset_after: Duration) -> Self {
        Self {
            kind,
            name: FormField::text(
                "name",
                "Nome completo *",
                FieldConstraint::required("Nome é obrigatório"),
                false,
            ),
            email: FormField::text(
                "email",
                "Email *",
                FieldConstraint::email(Some("Email é obrigatório")),
                false,
            ),
            phone: FormField::text(
                "phone",
                "Telefone / WhatsApp",
                FieldConstraint::none(),
                false,
            ),
            destination: FormField::text(
                "destination",
                "Seu destino dos sonhos",
                FieldConstraint::none(),
                false,
            ),
            message: FormField::text(
                "message",
                "Sua mensagem *",
                FieldConstraint::required("Mensagem é obrigatória"),
                true,
            ),
            active_field_index: 0,
            submission: Submission::new(reset_after),
            experience_slug: None,
        }
    }

    /// Carry an experience identifier into the form (shortcut landing)
    pub fn prefill_experience(&mut self, slug: impl Into<String>) {
        self.experience_slug = Some(slug.into());
    }

    /// Build the payload for one submission attempt
    pub fn to_lead(&self) -> ContactLead {
        ContactLead {
            name: self.name.as_text().trim().to_string(),
            email: self.email.as_text().trim().to_string(),
            phone: self.phone.as_optional_text(),
            destination: self.destination.as_optional_text(),
            message: self.message.as_text().trim().to_string(),
            experience_slug: self.experience_slug.clone(),
            source: self.kind.source(),
        }
    }

    /// Reset to a blank form after a successful submission
    pub fn clear_values(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.destination.clear();
        self.message.clear();
        self.experience_slug = None;
        self.active_field_index = 0;
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        5
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.get_field_mut(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.destination),
            4 => Some(&self.message),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.destination),
            4 => Some(&mut self.message),
            _ => None,
        }
    }
}

/// Consultation booking form
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub duration: FormField,
    pub notes: FormField,
    pub active_field_index: usize,
    pub submission: Submission,
}

impl BookingForm {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            name: FormField::text(
                "name",
                "Nome completo *",
                FieldConstraint::required("Nome é obrigatório"),
                false,
            ),
            email: FormField::text(
                "email",
                "Email *",
                FieldConstraint::email(Some("Email é obrigatório")),
                false,
            ),
            phone: FormField::text(
                "phone",
                "Telefone / WhatsApp",
                FieldConstraint::none(),
                false,
            ),
            duration: FormField::duration("duration", "Duração da conversa"),
            notes: FormField::text(
                "notes",
                "Sobre o que vamos conversar?",
                FieldConstraint::none(),
                true,
            ),
            active_field_index: 0,
            submission: Submission::new(reset_after),
        }
    }

    pub fn to_lead(&self) -> BookingLead {
        BookingLead {
            name: self.name.as_text().trim().to_string(),
            email: self.email.as_text().trim().to_string(),
            phone: self.phone.as_optional_text(),
            duration_minutes: self.duration.as_duration().minutes(),
            notes: self.notes.as_optional_text(),
            source: "booking_page",
        }
    }

    pub fn clear_values(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.duration.clear();
        self.notes.clear();
        self.active_field_index = 0;
    }
}

impl Form for BookingForm {
    fn field_count(&self) -> usize {
        5
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.get_field_mut(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.duration),
            4 => Some(&self.notes),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.duration),
            4 => Some(&mut self.notes),
            _ => None,
        }
    }
}

/// Newsletter signup: an email field plus an explicit consent checkbox.
/// Index 1 is the consent row, which has no `FormField`.
#[derive(Debug, Clone)]
pub struct NewsletterForm {
    pub email: FormField,
    pub consent: bool,
    pub active_field_index: usize,
    pub submission: Submission,
}

impl NewsletterForm {
    pub const CONSENT_MESSAGE: &'static str =
        "Você precisa aceitar os termos para continuar.";

    pub fn new(reset_after: Duration) -> Self {
        Self {
            email: FormField::text(
                "email",
                "Email *",
                FieldConstraint::email(Some("Email é obrigatório")),
                false,
            ),
            consent: false,
            active_field_index: 0,
            submission: Submission::new(reset_after),
        }
    }

    pub fn toggle_consent(&mut self) {
        self.consent = !self.consent;
    }

    pub fn is_consent_row_active(&self) -> bool {
        self.active_field_index == 1
    }

    pub fn to_lead(&self) -> NewsletterLead {
        NewsletterLead {
            email: self.email.as_text().trim().to_string(),
            consent: self.consent,
        }
    }

    pub fn clear_values(&mut self) {
        self.email.clear();
        self.consent = false;
        self.active_field_index = 0;
    }
}

impl Form for NewsletterForm {
    fn field_count(&self) -> usize {
        2 // email, consent row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.email),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.email),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::submission::DEFAULT_SUCCESS_RESET;
    use pretty_assertions::assert_eq;

    fn lead_form(kind: LeadFormKind) -> LeadForm {
        LeadForm::new(kind, DEFAULT_SUCCESS_RESET)
    }

    mod lead_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_blank_fields() {
            let form = lead_form(LeadFormKind::Contact);
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.experience_slug, None);
            assert!(form.submission.is_idle());
        }

        #[test]
        fn test_contact_and_trip_planning_share_field_shape() {
            let contact = lead_form(LeadFormKind::Contact);
            let trip = lead_form(LeadFormKind::TripPlanning);
            for index in 0..contact.field_count() {
                assert_eq!(
                    contact.get_field(index).unwrap().name,
                    trip.get_field(index).unwrap().name
                );
            }
        }

        #[test]
        fn test_kinds_differ_only_in_copy_and_source() {
            assert_eq!(LeadFormKind::Contact.source(), "contact_page");
            assert_eq!(LeadFormKind::TripPlanning.source(), "trip_planning_page");
            assert_ne!(
                LeadFormKind::Contact.title(),
                LeadFormKind::TripPlanning.title()
            );
        }

        #[test]
        fn test_validate_all_flags_every_missing_field() {
            let mut form = lead_form(LeadFormKind::Contact);
            assert!(!form.validate_all());
            assert!(form.name.error.is_some());
            assert!(form.email.error.is_some());
            assert!(form.message.error.is_some());
            // Optional fields stay clean
            assert!(form.phone.error.is_none());
            assert!(form.destination.error.is_none());
        }

        #[test]
        fn test_validate_all_passes_with_required_fields() {
            let mut form = lead_form(LeadFormKind::TripPlanning);
            form.name.set_text("Beatriz".to_string());
            form.email.set_text("bia@viagens.com.br".to_string());
            form.message.set_text("Quero ir ao Atacama".to_string());
            assert!(form.validate_all());
        }

        #[test]
        fn test_next_field_validates_field_being_left() {
            let mut form = lead_form(LeadFormKind::Contact);
            form.next_field(); // leave empty required name
            assert_eq!(form.active_field_index, 1);
            assert!(form.name.error.is_some());
        }

        #[test]
        fn test_to_lead_carries_experience_context() {
            let mut form = lead_form(LeadFormKind::Contact);
            form.name.set_text("Beatriz".to_string());
            form.email.set_text("bia@viagens.com.br".to_string());
            form.message.set_text("Olá".to_string());
            form.prefill_experience("escapadas-de-reequilibrio");
            let lead = form.to_lead();
            assert_eq!(
                lead.experience_slug.as_deref(),
                Some("escapadas-de-reequilibrio")
            );
            assert_eq!(lead.source, "contact_page");
            assert_eq!(lead.phone, None);
        }

        #[test]
        fn test_clear_values_resets_everything() {
            let mut form = lead_form(LeadFormKind::Contact);
            form.name.set_text("Beatriz".to_string());
            form.prefill_experience("jornada-de-essencia-pessoal");
            form.active_field_index = 3;
            form.clear_values();
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.experience_slug, None);
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod booking_form {
        use super::*;
        use crate::state::forms::CallDuration;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_defaults_to_thirty_minutes() {
            let form = BookingForm::new(DEFAULT_SUCCESS_RESET);
            assert_eq!(form.duration.as_duration(), CallDuration::Min30);
        }

        #[test]
        fn test_to_lead_serializes_chosen_duration() {
            let mut form = BookingForm::new(DEFAULT_SUCCESS_RESET);
            form.name.set_text("Beatriz".to_string());
            form.email.set_text("bia@viagens.com.br".to_string());
            form.duration.cycle_duration(true);
            let lead = form.to_lead();
            assert_eq!(lead.duration_minutes, 60);
            assert_eq!(lead.source, "booking_page");
        }

        #[test]
        fn test_validate_all_ignores_duration_field() {
            let mut form = BookingForm::new(DEFAULT_SUCCESS_RESET);
            form.name.set_text("Beatriz".to_string());
            form.email.set_text("bia@viagens.com.br".to_string());
            assert!(form.validate_all());
        }

        #[test]
        fn test_field_navigation_wraps() {
            let mut form = BookingForm::new(DEFAULT_SUCCESS_RESET);
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
            form.prev_field();
            assert_eq!(form.active_field_index, 4);
        }
    }

    mod newsletter_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_no_consent() {
            let form = NewsletterForm::new(DEFAULT_SUCCESS_RESET);
            assert!(!form.consent);
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_toggle_consent() {
            let mut form = NewsletterForm::new(DEFAULT_SUCCESS_RESET);
            form.toggle_consent();
            assert!(form.consent);
            form.toggle_consent();
            assert!(!form.consent);
        }

        #[test]
        fn test_consent_row_has_no_field() {
            let mut form = NewsletterForm::new(DEFAULT_SUCCESS_RESET);
            form.set_active_field(1);
            assert!(form.is_consent_row_active());
            assert!(form.get_active_field_mut().is_none());
            assert!(form.get_field(1).is_none());
        }

        #[test]
        fn test_validate_all_checks_email_shape() {
            let mut form = NewsletterForm::new(DEFAULT_SUCCESS_RESET);
            form.email.set_text("bia@viagens".to_string());
            assert!(!form.validate_all());
            assert_eq!(form.email.error.as_deref(), Some("Email inválido"));
        }

        #[test]
        fn test_to_lead_shape() {
            let mut form = NewsletterForm::new(DEFAULT_SUCCESS_RESET);
            form.email.set_text(" bia@viagens.com.br ".to_string());
            form.toggle_consent();
            let lead = form.to_lead();
            assert_eq!(lead.email, "bia@viagens.com.br");
            assert!(lead.consent);
        }
    }
}
