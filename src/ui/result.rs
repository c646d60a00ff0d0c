use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::pct_color;
use crate::app::{App, CompletedQuiz};
use crate::i18n::{Language, resolve, t};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.last_result() else {
        return;
    };
    let language = app.language();

    let chunks = Layout::vertical([Constraint::Length(9), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    render_score_summary(frame, chunks[0], result, language);
    render_question_breakdown(frame, chunks[1], result, language, app.result_scroll());
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &CompletedQuiz, language: Language) {
    let outcome = result.outcome;
    let color = pct_color(outcome.accuracy);

    let mut content = vec![
        Line::from(Span::styled(
            t(language, "quiz.completed"),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{}: ", t(language, "quiz.yourScore")),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("{}  ({}%)", outcome.score, outcome.accuracy),
                Style::default().fg(color).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}: {}", t(language, "quiz.correctAnswers"), outcome.correct),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{}: {}", t(language, "quiz.incorrectAnswers"), outcome.incorrect()),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(""),
    ];
    if let Some(badge) = &result.badge {
        content.push(Line::from(Span::styled(
            format!("🏆 {}  {}", t(language, "quiz.newBadge"), badge),
            Style::default().fg(Color::Yellow).bold(),
        )));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    result: &CompletedQuiz,
    language: Language,
    scroll: usize,
) {
    let lines: Vec<Line> = result
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let answer = result.answers.get(&index).copied();
            let (symbol, color) = match answer {
                Some(option) if item.is_correct(option) => ("+", Color::Green),
                _ => ("-", Color::Red),
            };

            Line::from(vec![
                Span::styled(format!(" {symbol} "), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(resolve(item, language).prompt),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    if text.chars().count() > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_prompts_are_truncated_on_char_boundaries() {
        let prompt = "வ".repeat(60);
        let preview = truncate_question(&prompt);
        assert_eq!(preview.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert_eq!(truncate_question("short"), "short");
    }
}
