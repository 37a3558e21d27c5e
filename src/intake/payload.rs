//! Serialized request bodies for the intake endpoints.
//!
//! Payloads are built fresh from form values on each submission attempt
//! and never persisted client-side.

use serde::Serialize;

/// Lead sent to the contact-message collection endpoint.
///
/// Shared by the contact and trip-planning forms, which have an
/// identical field shape and target.
#[derive(Debug, Clone, Serialize)]
pub struct ContactLead {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_slug: Option<String>,
    /// Which page produced the lead
    pub source: &'static str,
}

/// Consultation booking request
#[derive(Debug, Clone, Serialize)]
pub struct BookingLead {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub source: &'static str,
}

/// Newsletter subscription; `consent` is always true by the time this
/// is built (the controller gates on it before invoking the client)
#[derive(Debug, Clone, Serialize)]
pub struct NewsletterLead {
    pub email: String,
    pub consent: bool,
}

/// Minimal payload for the experience-card shortcut: just the
/// experience identifier and a source tag, no full form fields
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceInquiry {
    pub experience_slug: String,
    pub source: &'static str,
}

impl ExperienceInquiry {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            experience_slug: slug.into(),
            source: "experience_card",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contact_lead_skips_absent_optionals() {
        let lead = ContactLead {
            name: "Beatriz".to_string(),
            email: "bia@viagens.com.br".to_string(),
            phone: None,
            destination: None,
            message: "Quero conhecer o Atacama".to_string(),
            experience_slug: None,
            source: "contact_page",
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Beatriz",
                "email": "bia@viagens.com.br",
                "message": "Quero conhecer o Atacama",
                "source": "contact_page",
            })
        );
    }

    #[test]
    fn test_contact_lead_carries_experience_context() {
        let lead = ContactLead {
            name: "Beatriz".to_string(),
            email: "bia@viagens.com.br".to_string(),
            phone: Some("(11) 99999-9999".to_string()),
            destination: Some("Deserto do Atacama".to_string()),
            message: "Olá".to_string(),
            experience_slug: Some("escapadas-de-reequilibrio".to_string()),
            source: "trip_planning_page",
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["experience_slug"], "escapadas-de-reequilibrio");
        assert_eq!(json["phone"], "(11) 99999-9999");
    }

    #[test]
    fn test_newsletter_lead_shape() {
        let lead = NewsletterLead {
            email: "bia@viagens.com.br".to_string(),
            consent: true,
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "bia@viagens.com.br", "consent": true})
        );
    }

    #[test]
    fn test_booking_lead_serializes_duration_minutes() {
        let lead = BookingLead {
            name: "Beatriz".to_string(),
            email: "bia@viagens.com.br".to_string(),
            phone: None,
            duration_minutes: 30,
            notes: None,
            source: "booking_page",
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["duration_minutes"], 30);
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_experience_inquiry_is_minimal() {
        let inquiry = ExperienceInquiry::new("jornada-de-essencia-pessoal");
        let json = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "experience_slug": "jornada-de-essencia-pessoal",
                "source": "experience_card",
            })
        );
    }
}
