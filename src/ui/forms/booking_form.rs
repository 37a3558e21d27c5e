//! Consultation booking form rendering

use super::field_renderer::draw_field;
use crate::state::{BookingForm, Form};
use crate::ui::widgets::draw_submission_banner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, form: &BookingForm) {
    let block = Block::default()
        .title(" Agendar uma conversa ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Length(1), // Status banner
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Duration
            Constraint::Min(5),    // Notes
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Escolha a duração e conte o que você procura. ←/→ trocam a duração.",
            Style::default().fg(Color::Gray),
        ))),
        chunks[0],
    );

    draw_submission_banner(frame, chunks[1], &form.submission);

    for (index, chunk) in (0..form.field_count()).zip(chunks.iter().skip(2)) {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, *chunk, field, form.active_field() == index);
        }
    }
}
