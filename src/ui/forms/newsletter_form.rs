//! Newsletter signup rendering (email + consent checkbox)

use super::field_renderer::draw_field;
use crate::state::{Form, NewsletterForm};
use crate::ui::widgets::draw_submission_banner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, form: &NewsletterForm) {
    let block = Block::default()
        .title(" Newsletter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Length(1), // Status banner
            Constraint::Length(3), // Email
            Constraint::Length(2), // Consent row
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Receba inspirações de viagem no seu email.",
            Style::default().fg(Color::Gray),
        ))),
        chunks[0],
    );

    draw_submission_banner(frame, chunks[1], &form.submission);

    if let Some(field) = form.get_field(0) {
        draw_field(frame, chunks[2], field, form.active_field() == 0);
    }

    let checkbox = if form.consent { "[x]" } else { "[ ]" };
    let consent_style = if form.is_consent_row_active() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{checkbox} Aceito receber emails e os termos de privacidade (espaço marca)"),
            consent_style,
        ))),
        chunks[3],
    );
}
