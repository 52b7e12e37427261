mod overlay;
mod quiz;
mod result;
mod settings;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::Screen;
use crate::presenter::{LoadingKind, Phase, QuizView};

pub fn render(frame: &mut Frame, screen: &Screen) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let Some(view) = screen.view() else {
        render_banner(frame, area, "Starting...", Color::Yellow, None);
        return;
    };

    match view.phase {
        Phase::Idle => render_idle(frame, area, view),
        Phase::Loading => render_loading(frame, area, view),
        Phase::Configuring => settings::render(frame, area, view, &screen.form),
        Phase::InProgress | Phase::Answered => quiz::render(frame, area, view, screen.answer_cursor),
        Phase::Finished => result::render(frame, area, view, screen.result_scroll),
    }

    if let Some(message) = &view.error {
        overlay::render_error(frame, area, message, view.phase);
    }
    if view.confirming_quit {
        overlay::render_confirm_quit(frame, area);
    }
}

fn render_idle(frame: &mut Frame, area: Rect, view: &QuizView) {
    let hint = if view.error.is_some() {
        Some("r retry  ·  q quit")
    } else {
        None
    };
    render_banner(frame, area, "Categories not loaded", Color::DarkGray, hint);
}

fn render_loading(frame: &mut Frame, area: Rect, view: &QuizView) {
    let message = match view.loading {
        Some(LoadingKind::Categories) => "Loading categories...",
        Some(LoadingKind::Questions) | None => "Fetching questions...",
    };
    render_banner(frame, area, message, Color::Yellow, Some("q quit"));
}

fn render_banner(frame: &mut Frame, area: Rect, message: &str, color: Color, hint: Option<&str>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TRIVIA QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(color))),
        Line::from(""),
    ];
    if let Some(hint) = hint {
        content.push(Line::from(""));
        content.push(Line::from(hint.fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

/// Rectangle of `width` x `height` centred in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
