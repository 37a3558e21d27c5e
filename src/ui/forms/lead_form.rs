//! Contact / trip-planning form rendering (one parameterized view)

use super::field_renderer::draw_field;
use crate::state::{Form, LeadForm};
use crate::ui::widgets::draw_submission_banner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, form: &LeadForm) {
    let block = Block::default()
        .title(format!(" {} ", form.kind.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle + experience context
            Constraint::Length(1), // Status banner
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Destination
            Constraint::Min(5),    // Message
        ])
        .split(inner);

    let mut header = vec![Line::from(Span::styled(
        form.kind.subtitle(),
        Style::default().fg(Color::Gray),
    ))];
    if let Some(slug) = &form.experience_slug {
        header.push(Line::from(Span::styled(
            format!("Experiência selecionada: {slug}"),
            Style::default().fg(Color::Magenta),
        )));
    }
    frame.render_widget(Paragraph::new(header), chunks[0]);

    draw_submission_banner(frame, chunks[1], &form.submission);

    for (index, chunk) in (0..form.field_count()).zip(chunks.iter().skip(2)) {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, *chunk, field, form.active_field() == index);
        }
    }
}
