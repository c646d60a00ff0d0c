use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::i18n::t;
use crate::leaderboard::ranked;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let language = app.language();

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "  {:<6}{:<24}{:>8}{:>10}",
                t(language, "leaderboard.rank"),
                t(language, "leaderboard.name"),
                t(language, "leaderboard.score"),
                t(language, "leaderboard.accuracy"),
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for row in ranked(&app.profile().leaderboard) {
        let medal = match row.rank {
            1 => "🥇",
            2 => "🥈",
            3 => "🥉",
            _ => "  ",
        };
        let style = if row.entry.is_you {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {:<3}", row.rank), style),
            Span::raw(format!("{medal} ")),
            Span::styled(
                format!("{} {:<21}", row.entry.avatar, row.entry.name),
                style,
            ),
            Span::styled(format!("{:>8}", row.entry.score), style),
            Span::styled(format!("{:>9}%", row.entry.accuracy), style),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(format!(" {} ", t(language, "leaderboard.title")))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}
