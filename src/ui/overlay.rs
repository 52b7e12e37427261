//! Modal boxes drawn on top of the current screen.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use super::centered;
use crate::presenter::Phase;

pub fn render_error(frame: &mut Frame, area: Rect, message: &str, phase: Phase) {
    let hint = match phase {
        Phase::Idle | Phase::Configuring => "r retry  ·  esc dismiss",
        _ => "esc dismiss",
    };
    let content = vec![
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(hint.fg(Color::DarkGray)),
    ];

    let bottom = Rect {
        y: area.bottom().saturating_sub(7),
        height: area.height.min(7),
        ..area
    };
    let popup = centered(bottom, 60, 6);
    frame.render_widget(Clear, popup);
    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Red)
                .title(" Error ")
                .title_style(Style::default().fg(Color::Red).bold())
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, popup);
}

pub fn render_confirm_quit(frame: &mut Frame, area: Rect) {
    let popup = centered(area, 44, 7);
    frame.render_widget(Clear, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quit this quiz?",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from("Your progress will be lost.".fg(Color::Gray)),
        Line::from(""),
        Line::from("y yes  ·  n no".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Yellow),
    );
    frame.render_widget(widget, popup);
}
