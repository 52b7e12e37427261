use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::QuestionKind;
use crate::presenter::{ChoiceMark, ChoiceView, QuestionView, QuizView};

const OPTION_LABELS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView, cursor: usize) {
    let Some(question) = &view.question else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], question, view.score);
    render_subtitle(frame, chunks[1], question);
    render_question_text(frame, chunks[2], &question.text);
    render_options(frame, chunks[3], &question.choices, cursor, question.outcome.is_none());
    render_feedback(frame, chunks[4], question.outcome);
    render_controls(frame, chunks[5], question.outcome.is_some());
}

fn render_progress(frame: &mut Frame, area: Rect, question: &QuestionView, score: usize) {
    let progress = format!(
        "score {}  ·  {}/{}",
        score, question.number, question.total
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_subtitle(frame: &mut Frame, area: Rect, question: &QuestionView) {
    let widget = Paragraph::new(subtitle(question)).fg(Color::Cyan);
    frame.render_widget(widget, area);
}

fn subtitle(question: &QuestionView) -> String {
    let kind = match question.kind {
        QuestionKind::Multiple => "Multiple Choice",
        QuestionKind::Boolean => "True / False",
    };
    let mut parts = Vec::with_capacity(3);
    if !question.category.is_empty() {
        parts.push(question.category.clone());
    }
    if let Some(difficulty) = question.difficulty {
        parts.push(difficulty.to_string());
    }
    parts.push(kind.to_string());
    parts.join("  ·  ")
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    choices: &[ChoiceView],
    cursor: usize,
    show_cursor: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(choices.len() * 2);

    for (index, choice) in choices.iter().enumerate() {
        let is_selected = show_cursor && index == cursor;
        let style = match choice.mark {
            ChoiceMark::Correct => Style::default().fg(Color::Green).bold(),
            ChoiceMark::Incorrect if choice.picked => Style::default().fg(Color::Red).bold(),
            ChoiceMark::Incorrect => Style::default().fg(Color::DarkGray),
            ChoiceMark::Hidden if is_selected => Style::default().fg(Color::Cyan).bold(),
            ChoiceMark::Hidden => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected || choice.picked { ">" } else { " " };
        let label = OPTION_LABELS.get(index).copied().unwrap_or(' ');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(choice.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::top(1)));
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, outcome: Option<bool>) {
    let line = match outcome {
        Some(true) => Line::from("Correct!".fg(Color::Green).bold()),
        Some(false) => Line::from("Wrong answer".fg(Color::Red).bold()),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect, answered: bool) {
    let text = if answered {
        "enter next  ·  q quit quiz"
    } else {
        "j/k navigate  ·  enter select  ·  q quit quiz"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
