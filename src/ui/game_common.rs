//! Status bar shown under the playfield.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints shown on the second status line.
pub const CONTROLS: [(&str, &str); 2] = [("[Space]", "Flap"), ("[Esc/q]", "Quit")];

/// Build the key hint line, e.g. `[Space] Flap  [Esc/q] Quit`.
pub fn controls_line(controls: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(controls.len() * 3);
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Two centered lines: a status message, then the key hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    let status = Paragraph::new(status_text.to_string())
        .style(
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height < 2 || controls.is_empty() {
        return;
    }
    let hints = Paragraph::new(controls_line(controls)).alignment(Alignment::Center);
    frame.render_widget(
        hints,
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_controls_line_text() {
        assert_eq!(plain(&controls_line(&CONTROLS)), "[Space] Flap  [Esc/q] Quit");
    }

    #[test]
    fn test_controls_line_empty() {
        assert!(controls_line(&[]).spans.is_empty());
    }
}
