use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::bar;
use crate::app::App;
use crate::i18n::{Language, resolve, t};
use crate::models::Difficulty;
use crate::session::{Phase, QuizSession};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let language = app.language();
    let Some(session) = app.session() else {
        render_empty(frame, area, language);
        return;
    };
    let Some(item) = session.current_item() else {
        return;
    };
    let text = resolve(item, language);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session, language);
    render_question_text(frame, chunks[1], text.prompt, &item.subject);
    render_options(frame, chunks[2], session, text.options, app.selected_option());
    render_feedback(frame, chunks[3], session.phase(), language);
}

fn render_empty(frame: &mut Frame, area: Rect, language: Language) {
    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(t(language, "quiz.empty").fg(Color::Yellow)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession, language: Language) {
    let difficulty = session.difficulty_label();
    let pct = (session.progress() * 100.0).round() as u32;

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(
                    "{} {} {} {}",
                    t(language, "quiz.question"),
                    session.current_index() + 1,
                    t(language, "quiz.of"),
                    session.len()
                ),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("   "),
            Span::styled(
                format!("[{difficulty}]"),
                Style::default().fg(difficulty_color(difficulty)).bold(),
            ),
        ]),
        Line::from(Span::styled(bar(pct, 40), Style::default().fg(Color::Cyan))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, prompt: &str, subject: &str) {
    let widget = Paragraph::new(vec![
        Line::from(Span::styled(prompt, Style::default().fg(Color::White).bold())),
        Line::from(subject.fg(Color::DarkGray)),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    session: &QuizSession,
    options: &[String; 4],
    cursor: usize,
) {
    let answered = session.selected_answer(session.current_index());
    let correct_index = session.current_item().map(|item| item.correct_index);
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        // once answered, the correct option turns green and a wrong pick red
        let style = match answered {
            Some(_) if Some(index) == correct_index => Style::default().fg(Color::Green).bold(),
            Some(picked) if picked == index => Style::default().fg(Color::Red).bold(),
            Some(_) => Style::default().fg(Color::DarkGray),
            None if index == cursor => Style::default().fg(Color::Cyan).bold(),
            None => Style::default().fg(Color::Gray),
        };
        let marker = if answered.is_none() && index == cursor {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, phase: Phase, language: Language) {
    let Phase::Feedback { correct } = phase else {
        return;
    };
    let (key, color) = if correct {
        ("quiz.correct", Color::Green)
    } else {
        ("quiz.incorrect", Color::Red)
    };

    let widget = Paragraph::new(Span::styled(t(language, key), Style::default().fg(color).bold()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(color)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}
