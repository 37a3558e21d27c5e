//! Application state definitions

use crate::state::{BookingForm, LeadForm, LeadFormKind, NewsletterForm};
use std::time::Duration;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Contact,
    TripPlanning,
    Booking,
    Newsletter,
    Experiences,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::Contact => "Contato",
            Self::TripPlanning => "Planeje sua viagem",
            Self::Booking => "Agendar conversa",
            Self::Newsletter => "Newsletter",
            Self::Experiences => "Experiências",
        }
    }
}

/// A curated experience shown on the experiences view; selecting one
/// fires the inquiry shortcut
#[derive(Debug, Clone)]
pub struct Experience {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub is_group: bool,
}

/// Static catalog standing in for the site's experience cards
pub const EXPERIENCES: &[Experience] = &[
    Experience {
        slug: "jornada-de-essencia-pessoal",
        title: "Jornada de Essência Pessoal",
        summary: "Roteiros sob medida criados a partir do seu pedido, \
                  com curadoria exclusiva de experiências.",
        is_group: false,
    },
    Experience {
        slug: "imersoes-tematicas",
        title: "Imersões Temáticas: Círculos de Descoberta",
        summary: "Viagens em grupo com um especialista acompanhando \
                  durante toda a jornada.",
        is_group: true,
    },
    Experience {
        slug: "escapadas-de-reequilibrio",
        title: "Escapadas de Reequilíbrio",
        summary: "Finais de semana em destinos onde o hotel é a própria \
                  experiência.",
        is_group: false,
    },
];

/// Main application state.
///
/// Each form instance owns its values and its submission machine;
/// nothing is shared between forms, so a failure on one never touches
/// another.
pub struct AppState {
    pub current_view: View,
    pub contact_form: LeadForm,
    pub trip_form: LeadForm,
    pub booking_form: BookingForm,
    pub newsletter_form: NewsletterForm,
    /// Selection on the experiences view
    pub selected_experience: usize,
}

impl AppState {
    pub fn new(success_reset: Duration) -> Self {
        Self {
            current_view: View::Home,
            contact_form: LeadForm::new(LeadFormKind::Contact, success_reset),
            trip_form: LeadForm::new(LeadFormKind::TripPlanning, success_reset),
            booking_form: BookingForm::new(success_reset),
            newsletter_form: NewsletterForm::new(success_reset),
            selected_experience: 0,
        }
    }

    /// Move experience selection down
    pub fn select_next_experience(&mut self) {
        if self.selected_experience + 1 < EXPERIENCES.len() {
            self.selected_experience += 1;
        }
    }

    /// Move experience selection up
    pub fn select_prev_experience(&mut self) {
        self.selected_experience = self.selected_experience.saturating_sub(1);
    }

    /// Advance every form's time-based transitions (success banners
    /// expiring back to idle)
    pub fn tick(&mut self) {
        self.contact_form.submission.tick();
        self.trip_form.submission.tick();
        self.booking_form.submission.tick();
        self.newsletter_form.submission.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::submission::DEFAULT_SUCCESS_RESET;

    #[test]
    fn test_new_starts_at_home() {
        let state = AppState::new(DEFAULT_SUCCESS_RESET);
        assert_eq!(state.current_view, View::Home);
        assert_eq!(state.selected_experience, 0);
    }

    #[test]
    fn test_forms_are_independent_instances() {
        let mut state = AppState::new(DEFAULT_SUCCESS_RESET);
        state.newsletter_form.submission.begin();
        state.newsletter_form.submission.fail("erro");
        assert!(state.contact_form.submission.is_idle());
        assert!(state.booking_form.submission.is_idle());
    }

    #[test]
    fn test_experience_selection_clamps() {
        let mut state = AppState::new(DEFAULT_SUCCESS_RESET);
        state.select_prev_experience();
        assert_eq!(state.selected_experience, 0);
        for _ in 0..10 {
            state.select_next_experience();
        }
        assert_eq!(state.selected_experience, EXPERIENCES.len() - 1);
    }

    #[test]
    fn test_catalog_slugs_are_unique() {
        let mut slugs: Vec<_> = EXPERIENCES.iter().map(|e| e.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), EXPERIENCES.len());
    }
}
