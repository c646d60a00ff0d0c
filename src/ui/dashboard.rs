use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::bar;
use crate::app::App;
use crate::i18n::t;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let language = app.language();
    let profile = app.profile();
    let stats = &profile.stats;

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{}, {}!", t(language, "dashboard.welcome"), profile.display_name),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(t(language, "app.subtitle").fg(Color::DarkGray)),
    ]);
    frame.render_widget(greeting, chunks[0]);

    let stat = |key: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("  {:<22}", t(language, key)), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(color).bold()),
        ])
    };
    let lines = vec![
        stat("dashboard.totalScore", stats.total_score.to_string(), Color::Cyan),
        stat("dashboard.accuracy", format!("{}%", stats.accuracy), Color::Green),
        stat(
            "dashboard.streak",
            format!("{} 🔥", stats.current_streak),
            Color::Yellow,
        ),
        stat(
            "dashboard.completedQuizzes",
            stats.completed_quizzes.to_string(),
            Color::Magenta,
        ),
    ];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(format!(" {} ", t(language, "dashboard.progress")))
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, chunks[1]);

    let progress = stats.level_progress();
    let level = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("  {} {}  ", t(language, "dashboard.level"), stats.level),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(bar(progress, 30), Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {progress:>3}%"), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  enter ", Style::default().fg(Color::Green).bold()),
            Span::styled(t(language, "dashboard.startQuiz"), Style::default().fg(Color::Gray)),
            Span::styled("    n ", Style::default().fg(Color::Green).bold()),
            Span::styled(
                t(language, "dashboard.viewAnalytics"),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ]);
    frame.render_widget(level, chunks[2]);
}
