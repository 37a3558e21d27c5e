//! Form rendering module
//!
//! - `field_renderer`: field rendering utilities
//! - `lead_form`: contact / trip-planning forms (one parameterized view)
//! - `booking_form`: consultation booking form
//! - `newsletter_form`: newsletter signup

mod booking_form;
mod field_renderer;
mod lead_form;
mod newsletter_form;

pub use booking_form::draw as draw_booking;
pub use lead_form::draw as draw_lead_form;
pub use newsletter_form::draw as draw_newsletter;
