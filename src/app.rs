//! Application state and core logic

use crate::config::TuiConfig;
use crate::intake::{ExperienceInquiry, IntakeClient, IntakeClientTrait};
use crate::state::{AppState, Form, NewsletterForm, View, EXPERIENCES};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

/// Success copy when the endpoint sent no confirmation message
const CONTACT_SUCCESS: &str =
    "Mensagem enviada com sucesso! Entraremos em contato em breve.";
const BOOKING_SUCCESS: &str =
    "Conversa agendada! Enviaremos a confirmação por email.";
const NEWSLETTER_SUCCESS: &str = "Cadastrado! Verifique seu e-mail para confirmar.";

/// Generic retryable failure copy when the server sent no message
const SEND_ERROR: &str = "Erro ao enviar mensagem. Tente novamente.";
const SUBSCRIBE_ERROR: &str = "Erro ao cadastrar. Tente novamente.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Intake client for the lead collection endpoints
    intake: Arc<dyn IntakeClientTrait>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = IntakeClient::new(config.api_base(), config.request_timeout())?;
        Ok(Self::with_client(Arc::new(client), config.success_reset()))
    }

    /// Create an App over any intake client (tests inject a mock here)
    pub fn with_client(intake: Arc<dyn IntakeClientTrait>, success_reset: Duration) -> Self {
        Self {
            state: AppState::new(success_reset),
            intake,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-based transitions; called every event-loop cycle
    pub fn tick(&mut self) {
        self.state.tick();
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Contact | View::TripPlanning => {
                let view = self.state.current_view;
                self.handle_lead_form_key(view, key).await;
            }
            View::Booking => self.handle_booking_key(key).await,
            View::Newsletter => self.handle_newsletter_key(key).await,
            View::Experiences => self.handle_experiences_key(key).await,
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('1') | KeyCode::Char('c') => {
                self.state.current_view = View::Contact;
            }
            KeyCode::Char('2') | KeyCode::Char('p') => {
                self.state.current_view = View::TripPlanning;
            }
            KeyCode::Char('3') | KeyCode::Char('a') => {
                self.state.current_view = View::Booking;
            }
            KeyCode::Char('4') | KeyCode::Char('n') => {
                self.state.current_view = View::Newsletter;
            }
            KeyCode::Char('5') | KeyCode::Char('e') => {
                self.state.current_view = View::Experiences;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn lead_form(&self, view: View) -> &crate::state::LeadForm {
        match view {
            View::TripPlanning => &self.state.trip_form,
            _ => &self.state.contact_form,
        }
    }

    fn lead_form_mut(&mut self, view: View) -> &mut crate::state::LeadForm {
        match view {
            View::TripPlanning => &mut self.state.trip_form,
            _ => &mut self.state.contact_form,
        }
    }

    async fn handle_lead_form_key(&mut self, view: View, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.state.current_view = View::Home;
            return;
        }
        let ctrl_s = matches!(key.code, KeyCode::Char('s'))
            && key.modifiers.contains(KeyModifiers::CONTROL);
        let enter_submit =
            key.code == KeyCode::Enter && !self.lead_form(view).active_is_multiline();
        if ctrl_s || enter_submit {
            self.submit_lead_form(view).await;
            return;
        }

        let form = self.lead_form_mut(view);
        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Enter => {
                // Enter in the message field adds a newline
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char('\n');
                }
            }
            KeyCode::Char(c) => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(ch);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Submit the contact / trip-planning form.
    ///
    /// Order matters: the in-flight guard comes first (a resubmit while
    /// Submitting must be a no-op), then exhaustive validation, and
    /// only then the single request.
    async fn submit_lead_form(&mut self, view: View) {
        let form = self.lead_form_mut(view);
        if form.submission.is_submitting() {
            return;
        }
        if !form.validate_all() {
            return;
        }
        if !form.submission.begin() {
            return;
        }
        let lead = form.to_lead();

        let client = self.intake.clone();
        let result = client.submit_contact(lead).await;

        let form = self.lead_form_mut(view);
        match result {
            Ok(message) => {
                form.submission
                    .succeed(message.unwrap_or_else(|| CONTACT_SUCCESS.to_string()));
                form.clear_values();
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact lead submission failed");
                form.submission
                    .fail(err.server_message().unwrap_or(SEND_ERROR).to_string());
            }
        }
    }

    async fn handle_booking_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.state.current_view = View::Home;
            return;
        }
        let ctrl_s = matches!(key.code, KeyCode::Char('s'))
            && key.modifiers.contains(KeyModifiers::CONTROL);
        let enter_submit =
            key.code == KeyCode::Enter && !self.state.booking_form.active_is_multiline();
        if ctrl_s || enter_submit {
            self.submit_booking_form().await;
            return;
        }

        let form = &mut self.state.booking_form;
        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            // Cycles the duration choice; no-op on text fields
            KeyCode::Left => {
                if let Some(field) = form.get_active_field_mut() {
                    field.cycle_duration(false);
                }
            }
            KeyCode::Right => {
                if let Some(field) = form.get_active_field_mut() {
                    field.cycle_duration(true);
                }
            }
            KeyCode::Enter => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char('\n');
                }
            }
            KeyCode::Char(c) => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(ch);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    async fn submit_booking_form(&mut self) {
        let form = &mut self.state.booking_form;
        if form.submission.is_submitting() {
            return;
        }
        if !form.validate_all() {
            return;
        }
        if !form.submission.begin() {
            return;
        }
        let lead = form.to_lead();

        let client = self.intake.clone();
        let result = client.submit_booking(lead).await;

        let form = &mut self.state.booking_form;
        match result {
            Ok(message) => {
                form.submission
                    .succeed(message.unwrap_or_else(|| BOOKING_SUCCESS.to_string()));
                form.clear_values();
            }
            Err(err) => {
                tracing::warn!(error = %err, "booking submission failed");
                form.submission
                    .fail(err.server_message().unwrap_or(SEND_ERROR).to_string());
            }
        }
    }

    async fn handle_newsletter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.current_view = View::Home,
            KeyCode::Enter => self.submit_newsletter_form().await,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_newsletter_form().await;
            }
            KeyCode::Tab => self.state.newsletter_form.next_field(),
            KeyCode::BackTab => self.state.newsletter_form.prev_field(),
            KeyCode::Char(' ') if self.state.newsletter_form.is_consent_row_active() => {
                self.state.newsletter_form.toggle_consent();
            }
            KeyCode::Char(c) => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                if let Some(field) = self.state.newsletter_form.get_active_field_mut() {
                    field.push_char(ch);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.newsletter_form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Submit the newsletter form. The consent gate runs after
    /// validation and transitions straight to Error without issuing a
    /// request when the box is unchecked.
    async fn submit_newsletter_form(&mut self) {
        let form = &mut self.state.newsletter_form;
        if form.submission.is_submitting() {
            return;
        }
        if !form.validate_all() {
            return;
        }
        if !form.consent {
            form.submission.fail(NewsletterForm::CONSENT_MESSAGE);
            return;
        }
        if !form.submission.begin() {
            return;
        }
        let lead = form.to_lead();

        let client = self.intake.clone();
        let result = client.submit_newsletter(lead).await;

        let form = &mut self.state.newsletter_form;
        match result {
            Ok(message) => {
                form.submission
                    .succeed(message.unwrap_or_else(|| NEWSLETTER_SUCCESS.to_string()));
                form.clear_values();
            }
            Err(err) => {
                tracing::warn!(error = %err, "newsletter subscription failed");
                form.submission
                    .fail(err.server_message().unwrap_or(SUBSCRIBE_ERROR).to_string());
            }
        }
    }

    async fn handle_experiences_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.current_view = View::Home,
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev_experience(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next_experience(),
            KeyCode::Enter => self.inquire_selected_experience().await,
            _ => {}
        }
    }

    /// Experience-card shortcut: fire a minimal inquiry and always land
    /// on the contact form carrying the experience context. The request
    /// outcome is deliberately masked here so the visitor keeps a path
    /// forward; failures are only logged.
    async fn inquire_selected_experience(&mut self) {
        let Some(experience) = EXPERIENCES.get(self.state.selected_experience) else {
            return;
        };
        let slug = experience.slug;

        let client = self.intake.clone();
        if let Err(err) = client
            .submit_experience_inquiry(ExperienceInquiry::new(slug))
            .await
        {
            tracing::warn!(error = %err, slug, "experience inquiry failed, redirecting anyway");
        }

        self.state.contact_form.prefill_experience(slug);
        self.state.current_view = View::Contact;
    }
}
