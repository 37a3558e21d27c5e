//! Shared widgets

use crate::state::{Submission, SubmissionStatus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the submission status banner for a form.
///
/// Idle renders nothing; the other states mirror the site's status
/// message block (spinner text while submitting, green confirmation,
/// red retryable error).
pub fn draw_submission_banner(frame: &mut Frame, area: Rect, submission: &Submission) {
    let line = match &submission.status {
        SubmissionStatus::Idle => return,
        SubmissionStatus::Submitting => Line::from(Span::styled(
            "Enviando...",
            Style::default().fg(Color::Yellow),
        )),
        SubmissionStatus::Success { message, .. } => Line::from(Span::styled(
            format!("✓ {message}"),
            Style::default().fg(Color::Green),
        )),
        SubmissionStatus::Error { message } => Line::from(Span::styled(
            format!("✗ {message}"),
            Style::default().fg(Color::Red),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}
