use context_scanner_engine::{Run, RunKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn style_for(kind: RunKind) -> Style {
    match kind {
        RunKind::CommandName => Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
        RunKind::ParameterText => Style::default().fg(Color::Green),
        RunKind::OptionText => Style::default().fg(Color::Yellow),
        RunKind::CommentText => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        RunKind::PlainText => Style::default(),
    }
}

/// Splits classified text into display lines, one styled span per run
/// fragment. Line `n` of the result is line `n + 1` of the document, so
/// outline entries index straight into it.
pub fn styled_lines(text: &str, runs: &[Run]) -> Vec<Line<'static>> {
    let mut lines = vec![];
    let mut current: Vec<Span<'static>> = vec![];

    for run in runs {
        let style = style_for(run.kind);
        let mut rest = &text[run.start..run.end()];
        while let Some(i) = rest.find(['\n', '\r']) {
            push_piece(&mut current, &rest[..i], style);
            lines.push(Line::from(std::mem::take(&mut current)));
            let terminator = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[i + terminator..];
        }
        push_piece(&mut current, rest, style);
    }

    lines.push(Line::from(current));
    lines
}

fn push_piece(line: &mut Vec<Span<'static>>, piece: &str, style: Style) {
    if !piece.is_empty() {
        line.push(Span::styled(piece.replace('\t', "    "), style));
    }
}
