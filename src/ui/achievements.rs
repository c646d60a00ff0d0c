use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::bar;
use crate::achievements::completion_percentage;
use crate::app::App;
use crate::i18n::t;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let language = app.language();
    let achievements = &app.profile().achievements;
    let pct = completion_percentage(achievements);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(
                    "  {} {}/{}  ",
                    t(language, "achievements.earned"),
                    app.profile().earned_count(),
                    achievements.len()
                ),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(bar(pct, 20), Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {pct}%"), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    for achievement in achievements {
        let (status, style) = if achievement.earned {
            (
                achievement
                    .earned_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| t(language, "achievements.earned").to_string()),
                Style::default().fg(Color::Green),
            )
        } else {
            (
                t(language, "achievements.locked").to_string(),
                Style::default().fg(Color::DarkGray),
            )
        };

        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", achievement.icon)),
            Span::styled(format!("{:<18}", achievement.name), style.bold()),
            Span::styled(
                format!("{:<42}", achievement.description),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(status, style),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(format!(" {} ", t(language, "achievements.title")))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}
