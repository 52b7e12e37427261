use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{COUNT_CHOICES, FormField, SettingsForm};
use crate::models::Difficulty;
use crate::presenter::QuizView;

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView, form: &SettingsForm) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let category = form
        .category
        .checked_sub(1)
        .and_then(|index| view.categories.get(index))
        .map(|category| category.name.as_str())
        .unwrap_or("Any Category");
    let difficulty = Difficulty::ALL
        .get(form.difficulty)
        .copied()
        .unwrap_or_default()
        .to_string();
    let count = COUNT_CHOICES
        .get(form.count)
        .map(|count| format!("{count} questions"))
        .unwrap_or_default();

    let start_style = if view.can_start {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TRIVIA QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        field_line("Category", category, form.focus == FormField::Category),
        Line::from(""),
        field_line("Difficulty", &difficulty, form.focus == FormField::Difficulty),
        Line::from(""),
        field_line("Questions", &count, form.focus == FormField::Count),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("ENTER", start_style)),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("j/k field  ·  h/l change  ·  enter start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let value_style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let (left, right) = if focused { ("< ", " >") } else { ("  ", "  ") };

    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(left, value_style),
        Span::styled(value, value_style),
        Span::styled(right, value_style),
    ])
}
