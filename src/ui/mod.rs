//! UI module for rendering the TUI

mod experiences;
mod forms;
mod home;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (content_area, status_area) = layout::create_layout(area);

    match app.state.current_view {
        View::Home => home::draw(frame, content_area),
        View::Contact => forms::draw_lead_form(frame, content_area, &app.state.contact_form),
        View::TripPlanning => forms::draw_lead_form(frame, content_area, &app.state.trip_form),
        View::Booking => forms::draw_booking(frame, content_area, &app.state.booking_form),
        View::Newsletter => forms::draw_newsletter(frame, content_area, &app.state.newsletter_form),
        View::Experiences => {
            experiences::draw(frame, content_area, app.state.selected_experience)
        }
    }

    layout::draw_status_bar(frame, status_area, app);
}
