//! Experiences view: curated cards feeding the inquiry shortcut

use crate::state::EXPERIENCES;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, selected: usize) {
    let block = Block::default()
        .title(" Experiências ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (index, experience) in EXPERIENCES.iter().enumerate() {
        let is_selected = index == selected;
        let marker = if is_selected { "▸ " } else { "  " };
        let title_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut title_spans = vec![Span::styled(
            format!("{marker}{}", experience.title),
            title_style,
        )];
        if experience.is_group {
            title_spans.push(Span::styled(
                "  (em grupo)",
                Style::default().fg(Color::Magenta),
            ));
        }
        lines.push(Line::from(title_spans));
        lines.push(Line::from(Span::styled(
            format!("    {}", experience.summary),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Enter registra seu interesse e abre o formulário de contato.",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
