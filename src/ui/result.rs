use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::presenter::QuizView;
use crate::rank::{QuizResult, Rank};
use crate::session::AnswerRecord;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView, scroll: usize) {
    let Some(result) = view.result else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &result);
    render_question_breakdown(frame, chunks[2], &view.history, scroll);
    render_controls(frame, chunks[3]);
}

fn rank_color(rank: Rank) -> Color {
    match rank {
        Rank::Master => Color::Green,
        Rank::Expert => Color::Cyan,
        Rank::Contender => Color::Yellow,
        Rank::Apprentice => Color::LightRed,
        Rank::Novice => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let color = rank_color(result.rank);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Correct answers: {} of {}  ({}%)",
                result.score, result.total, result.percentage
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(result.rank.message(), Style::default().fg(color))),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, history: &[AnswerRecord], scroll: usize) {
    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let (symbol, color) = if record.is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let mut spans = vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(truncate_question(&record.question), Style::default().fg(Color::Gray)),
            ];
            if !record.is_correct {
                spans.push(Span::styled(
                    format!("  ({})", record.correct),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r play again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
