mod achievements;
mod analytics;
mod class;
mod dashboard;
mod leaderboard;
mod quiz;
mod result;
mod subjects;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Page};
use crate::i18n::t;

/// Render the header, the current page and its key hints.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Page
        Constraint::Length(1), // Controls
    ])
    .split(area);

    render_header(frame, chunks[0], app);
    match app.page {
        Page::Dashboard => dashboard::render(frame, chunks[1], app),
        Page::Subjects => subjects::render(frame, chunks[1], app),
        Page::Quiz => quiz::render(frame, chunks[1], app),
        Page::Result => result::render(frame, chunks[1], app),
        Page::Leaderboard => leaderboard::render(frame, chunks[1], app),
        Page::Achievements => achievements::render(frame, chunks[1], app),
        Page::Analytics => analytics::render(frame, chunks[1], app),
        Page::Class => class::render(frame, chunks[1], app),
    }
    render_controls(frame, chunks[2], app.page);
}

fn page_key(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "nav.dashboard",
        Page::Subjects => "nav.subjects",
        Page::Quiz | Page::Result => "nav.quiz",
        Page::Leaderboard => "nav.leaderboard",
        Page::Achievements => "nav.achievements",
        Page::Analytics => "nav.analytics",
        Page::Class => "nav.class",
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let language = app.language();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", t(language, page_key(app.page))),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled(
            format!(" ·  {}", t(language, "app.subtitle")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  ·  {}  ·  {}", language.native_name(), app.role()),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", t(language, "app.title")))
            .title_style(Style::default().fg(Color::Cyan).bold()),
    );

    frame.render_widget(header, area);
}

fn render_controls(frame: &mut Frame, area: Rect, page: Page) {
    let hints = match page {
        Page::Dashboard => {
            "enter quiz  ·  s subjects  ·  b leaderboard  ·  a achievements  ·  n analytics  ·  l language  ·  q quit"
        }
        Page::Subjects => "j/k choose  ·  enter start  ·  esc back  ·  q quit",
        Page::Quiz => "j/k navigate  ·  enter select  ·  1-4 answer  ·  esc leave  ·  q quit",
        Page::Result => "j/k scroll  ·  r restart  ·  esc dashboard  ·  q quit",
        Page::Class => "b leaderboard  ·  n analytics  ·  l language  ·  q quit",
        Page::Leaderboard | Page::Achievements | Page::Analytics => "esc back  ·  q quit",
    };
    let widget = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// A text bar of `width` cells filled to `pct` percent.
fn bar(pct: u32, width: usize) -> String {
    let filled = (pct.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn pct_color(pct: u32) -> Color {
    match pct {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}
