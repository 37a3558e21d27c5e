//! Intake client module for the lead collection HTTP contract

mod client;
mod payload;
mod traits;

pub use client::{Endpoint, IntakeClient, IntakeError, SubmitResult, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use payload::{BookingLead, ContactLead, ExperienceInquiry, NewsletterLead};
pub use traits::IntakeClientTrait;

#[cfg(test)]
pub use traits::MockIntakeClientTrait;
