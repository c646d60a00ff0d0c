use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::bar;
use crate::app::App;
use crate::i18n::t;
use crate::progress::subject_progress;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let language = app.language();
    let subjects = app.subjects();

    let columns = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
        .margin(1)
        .split(area);

    let lines: Vec<Line> = subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| {
            let is_selected = index == app.subject_cursor();
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };
            Line::from(Span::styled(format!(" {marker} {subject}"), style))
        })
        .collect();
    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(format!(" {} ", t(language, "subjects.title")))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(list, columns[0]);

    let Some(subject) = subjects.get(app.subject_cursor()) else {
        return;
    };
    let progress = subject_progress(&app.profile().history, subject);
    // accuracy of the most recent attempt in this subject
    let last_accuracy = app
        .profile()
        .history
        .iter()
        .rev()
        .find(|r| {
            r.subject
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(subject))
        })
        .map_or(0, |r| r.accuracy);

    let stat = |key: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("  {:<18}", t(language, key)), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(color).bold()),
        ])
    };
    let detail = Paragraph::new(vec![
        stat(
            "subjects.questions",
            app.question_count(subject).to_string(),
            Color::White,
        ),
        stat("subjects.completed", progress.completed.to_string(), Color::Cyan),
        stat(
            "subjects.averageScore",
            progress.average_score.to_string(),
            Color::Green,
        ),
        stat("subjects.streak", format!("{} 🔥", progress.streak), Color::Yellow),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(bar(last_accuracy, 30), Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {last_accuracy}%"), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  enter ", Style::default().fg(Color::Green).bold()),
            Span::styled(t(language, "subjects.start"), Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(format!(" {subject} "))
            .title_style(Style::default().fg(Color::Yellow).bold())
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(detail, columns[1]);
}
