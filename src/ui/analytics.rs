//! Weekly progress and per-subject stats from recorded attempts, the score
//! and accuracy trends, and the most recent attempts.

use chrono::Utc;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use super::{bar, pct_color};
use crate::app::App;
use crate::i18n::{Language, t};
use crate::models::DatedValue;
use crate::progress::{category_stats, weekly_progress};

const BAR_WIDTH: usize = 25;
const RECENT_ATTEMPTS: usize = 6;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let language = app.language();
    let analytics = &app.profile().analytics;

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);
    let thirds = [
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ];
    let left = Layout::vertical(thirds).split(columns[0]);
    let right = Layout::vertical(thirds).split(columns[1]);

    render_weekly_progress(frame, left[0], app, language);

    // scores are scaled against the best point in the series
    let best = analytics
        .score_over_time
        .iter()
        .map(|p| p.value)
        .max()
        .unwrap_or(0);
    render_series(
        frame,
        left[1],
        t(language, "analytics.scoreOverTime"),
        &analytics.score_over_time,
        |value| if best == 0 { 0 } else { value * 100 / best },
        |value| value.to_string(),
    );
    render_series(
        frame,
        left[2],
        t(language, "analytics.accuracyTrend"),
        &analytics.accuracy_trend,
        |value| value,
        |value| format!("{value}%"),
    );

    let subjects: Vec<Line> = analytics
        .subject_performance
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(format!("  {:<13}", s.subject), Style::default().fg(Color::Gray)),
                Span::styled(bar(s.score, BAR_WIDTH), Style::default().fg(pct_color(s.score))),
                Span::styled(format!(" {:>3}%", s.score), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(subjects).block(panel(t(language, "analytics.subjectPerformance"))),
        right[0],
    );

    render_category_stats(frame, right[1], app, language);
    render_recent_attempts(frame, right[2], app, language);
}

fn render_weekly_progress(frame: &mut Frame, area: Rect, app: &App, language: Language) {
    let week = weekly_progress(&app.profile().history, Utc::now().date_naive());
    let best = week.iter().map(|d| d.average_score).max().unwrap_or(0);

    let lines: Vec<Line> = week
        .iter()
        .map(|day| {
            let pct = if best == 0 {
                0
            } else {
                day.average_score * 100 / best
            };
            Line::from(vec![
                Span::styled(
                    format!("{} ", day.date.format("%a")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(bar(pct, BAR_WIDTH), Style::default().fg(Color::Green)),
                Span::styled(
                    format!(
                        " {:>4}  {} {}",
                        day.average_score,
                        day.attempts,
                        t(language, "analytics.attempts")
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(panel(t(language, "analytics.weeklyProgress"))),
        area,
    );
}

fn render_category_stats(frame: &mut Frame, area: Rect, app: &App, language: Language) {
    let history = &app.profile().history;
    let mut lines: Vec<Line> = category_stats(history)
        .iter()
        .map(|stats| {
            let pct = stats.average_accuracy;
            Line::from(vec![
                Span::styled(
                    format!("  {:<13}", stats.category),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(bar(pct, BAR_WIDTH), Style::default().fg(pct_color(pct))),
                Span::styled(
                    format!(
                        " {:>4}  {} {}",
                        stats.average_score,
                        stats.attempts,
                        t(language, "analytics.attempts")
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    if lines.is_empty() {
        lines.push(empty_line(language));
    }

    frame.render_widget(
        Paragraph::new(lines).block(panel(t(language, "analytics.categoryStats"))),
        area,
    );
}

fn empty_line(language: Language) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}...", t(language, "analytics.noAttempts")),
        Style::default().fg(Color::DarkGray).italic(),
    ))
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .title(format!(" {title} "))
        .title_style(Style::default().fg(Color::Cyan).bold())
        .padding(Padding::horizontal(1))
}

fn render_series(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    points: &[DatedValue],
    scale: impl Fn(u32) -> u32,
    label: impl Fn(u32) -> String,
) {
    let lines: Vec<Line> = points
        .iter()
        .map(|point| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", point.date.format("%b %d")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(bar(scale(point.value), BAR_WIDTH), Style::default().fg(Color::Cyan)),
                Span::styled(format!(" {}", label(point.value)), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

fn render_recent_attempts(frame: &mut Frame, area: Rect, app: &App, language: Language) {
    let mut lines: Vec<Line> = app
        .profile()
        .history
        .iter()
        .rev()
        .take(RECENT_ATTEMPTS)
        .map(|attempt| {
            let mut spans = vec![
                Span::styled(
                    format!("{} ", attempt.finished_at.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:>5} ", attempt.score),
                    Style::default().fg(Color::White).bold(),
                ),
                Span::styled(
                    format!("{}/{} ({}%) ", attempt.correct, attempt.total, attempt.accuracy),
                    Style::default().fg(pct_color(attempt.accuracy)),
                ),
                Span::styled(attempt.language.code(), Style::default().fg(Color::Yellow)),
            ];
            if let Some(badge) = &attempt.badge {
                spans.push(Span::styled(format!("  🏆 {badge}"), Style::default().fg(Color::Yellow)));
            }
            Line::from(spans)
        })
        .collect();

    if lines.is_empty() {
        lines.push(empty_line(language));
    }

    frame.render_widget(
        Paragraph::new(lines).block(panel(t(language, "analytics.recentAttempts"))),
        area,
    );
}
