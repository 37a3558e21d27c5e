//! Home view: entry menu to the lead forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MENU: &[(&str, &str)] = &[
    ("1", "Contato — deixe sua mensagem"),
    ("2", "Planeje sua viagem — roteiro sob medida"),
    ("3", "Agendar uma conversa"),
    ("4", "Newsletter"),
    ("5", "Experiências"),
];

pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Atendimento ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Toda grande jornada começa com um simples olá.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for (key, label) in MENU {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key}  "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(*label),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  q  Sair",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
