//! Layout helpers (content area + status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the bottom status bar with key hints for the current view
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.state.current_view {
        View::Home => "1-5 escolher · q sair",
        View::Contact | View::TripPlanning => {
            "Tab campo · Enter enviar · Ctrl+S enviar · Esc voltar"
        }
        View::Booking => "Tab campo · ←/→ duração · Ctrl+S enviar · Esc voltar",
        View::Newsletter => "Tab campo · espaço consentir · Enter enviar · Esc voltar",
        View::Experiences => "↑/↓ escolher · Enter tenho interesse · Esc voltar",
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.state.current_view.title()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(format!("  {hints}"), Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
