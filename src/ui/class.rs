use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::{bar, pct_color};
use crate::app::App;
use crate::i18n::{Language, t};
use crate::leaderboard::{ATTENTION_THRESHOLD, class_subject_averages, class_summary, most_active};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let language = app.language();

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(9),
    ])
    .margin(1)
    .split(area);
    let bottom = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_overview(frame, chunks[0], app, language);
    render_students(frame, chunks[1], app, language);
    render_needs_attention(frame, bottom[0], app, language);
    render_subject_performance(frame, bottom[1], app, language);
}

fn panel(title: String, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .title(title)
        .title_style(Style::default().fg(color).bold())
        .padding(Padding::horizontal(1))
}

fn render_overview(frame: &mut Frame, area: Rect, app: &App, language: Language) {
    let summary = class_summary(&app.profile().leaderboard);

    let stat = |key: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("  {:<20}", t(language, key)), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(color).bold()),
        ])
    };
    let overview = Paragraph::new(vec![
        Line::from(""),
        stat("class.students", summary.students.to_string(), Color::Cyan),
        stat("class.averageScore", summary.average_score.to_string(), Color::Magenta),
        stat(
            "class.averageAccuracy",
            format!("{}%", summary.average_accuracy),
            pct_color(summary.average_accuracy),
        ),
    ])
    .block(panel(format!(" {} ", t(language, "class.title")), Color::Cyan));
    frame.render_widget(overview, area);
}

fn render_students(frame: &mut Frame, area: Rect, app: &App, language: Language) {
    let mut lines: Vec<Line> = Vec::new();

    for student in most_active(&app.profile().class) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {:<16}", student.avatar, student.name),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(
                format!("{} {:<3}", t(language, "dashboard.level"), student.level),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("{:>3} {}  ", student.completed_quizzes, t(language, "class.quizzes")),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("{:>2} 🔥  ", student.current_streak),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("{}% ", student.accuracy),
                Style::default().fg(pct_color(student.accuracy)),
            ),
            Span::styled(
                format!("  {}: {}", t(language, "class.lastActive"), student.last_active),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        let mut scores: Vec<Span> = student
            .subjects
            .iter()
            .map(|s| {
                Span::styled(
                    format!("{} {}  ", s.subject, s.score),
                    Style::default().fg(pct_color(s.score)),
                )
            })
            .collect();
        scores.insert(0, Span::raw("    "));
        scores.push(Span::styled(
            format!("{} {}", t(language, "subjects.averageScore"), student.subject_average()),
            Style::default().fg(Color::White),
        ));
        lines.push(Line::from(scores));
    }

    let widget = Paragraph::new(lines).block(panel(
        format!(" {} ", t(language, "class.studentProgress")),
        Color::Cyan,
    ));
    frame.render_widget(widget, area);
}

fn render_needs_attention(frame: &mut Frame, area: Rect, app: &App, language: Language) {
    let summary = class_summary(&app.profile().leaderboard);

    let mut lines: Vec<Line> = summary
        .needs_attention
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("! ", Style::default().fg(Color::Red)),
                Span::styled(
                    format!("{} {:<20}", entry.avatar, entry.name),
                    Style::default().fg(Color::White),
                ),
                Span::styled(format!("{}%", entry.accuracy), Style::default().fg(Color::Red)),
            ])
        })
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{} {ATTENTION_THRESHOLD}%", t(language, "class.allOnTrack")),
            Style::default().fg(Color::Green).italic(),
        )));
    }

    let widget = Paragraph::new(lines).block(panel(
        format!(
            " {} (< {ATTENTION_THRESHOLD}%) ",
            t(language, "class.needsAttention")
        ),
        Color::Yellow,
    ));
    frame.render_widget(widget, area);
}

fn render_subject_performance(frame: &mut Frame, area: Rect, app: &App, language: Language) {
    let lines: Vec<Line> = class_subject_averages(&app.profile().class)
        .iter()
        .map(|subject| {
            let pct = subject.average.round() as u32;
            Line::from(vec![
                Span::styled(format!("{:<13}", subject.subject), Style::default().fg(Color::Gray)),
                Span::styled(bar(pct, 20), Style::default().fg(pct_color(pct))),
                Span::styled(
                    format!(" {:.1}", subject.average),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(panel(
        format!(" {} ", t(language, "class.subjectPerformance")),
        Color::Cyan,
    ));
    frame.render_widget(widget, area);
}
