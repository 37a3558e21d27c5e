//! Trait abstraction for the intake client to enable mocking in tests

use async_trait::async_trait;

use super::client::{Endpoint, IntakeClient, SubmitResult};
use super::payload::{BookingLead, ContactLead, ExperienceInquiry, NewsletterLead};

/// Intake operations, one per lead type.
///
/// Form controllers depend on this trait rather than the concrete
/// client so submission flows can run against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntakeClientTrait: Send + Sync {
    /// Submit a contact or trip-planning lead
    async fn submit_contact(&self, lead: ContactLead) -> SubmitResult;

    /// Submit a consultation booking request
    async fn submit_booking(&self, lead: BookingLead) -> SubmitResult;

    /// Submit a newsletter subscription
    async fn submit_newsletter(&self, lead: NewsletterLead) -> SubmitResult;

    /// Submit the minimal experience-card inquiry
    async fn submit_experience_inquiry(&self, inquiry: ExperienceInquiry) -> SubmitResult;
}

#[async_trait]
impl IntakeClientTrait for IntakeClient {
    async fn submit_contact(&self, lead: ContactLead) -> SubmitResult {
        self.post_lead(Endpoint::Contact, &lead).await
    }

    async fn submit_booking(&self, lead: BookingLead) -> SubmitResult {
        self.post_lead(Endpoint::Booking, &lead).await
    }

    async fn submit_newsletter(&self, lead: NewsletterLead) -> SubmitResult {
        self.post_lead(Endpoint::Newsletter, &lead).await
    }

    async fn submit_experience_inquiry(&self, inquiry: ExperienceInquiry) -> SubmitResult {
        self.post_lead(Endpoint::Contact, &inquiry).await
    }
}
