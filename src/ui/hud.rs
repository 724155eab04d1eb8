use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::game::Snapshot;

const HUD_SEPARATOR: &str = " │ ";

/// Renders the one-line HUD under the play area and returns the area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot<'_>) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(
            snapshot.snake.len(),
            snapshot.score,
            snapshot.bounds.width,
            snapshot.bounds.height,
            usize::from(hud_area.width),
        ))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray)),
        hud_area,
    );

    play_area
}

fn info_line(
    length: usize,
    score: u32,
    width: u16,
    height: u16,
    available_width: usize,
) -> Line<'static> {
    let value_style = Style::default().fg(Color::White);
    let score_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dimensions = format!("{width}x{height}");
    let length = length.to_string();
    let score = score.to_string();

    let compact = info_width(&dimensions, &length, &score, false) > available_width;
    let (length_label, score_label) = if compact {
        ("L: ", "S: ")
    } else {
        ("Length: ", "Score: ")
    };

    Line::from(vec![
        Span::raw(dimensions),
        Span::raw(HUD_SEPARATOR),
        Span::raw(length_label),
        Span::styled(length, value_style),
        Span::raw(HUD_SEPARATOR),
        Span::raw(score_label),
        Span::styled(score, score_style),
    ])
}

fn info_width(dimensions: &str, length: &str, score: &str, compact: bool) -> usize {
    let labels = if compact { "L: S: " } else { "Length: Score: " };
    dimensions.width()
        + HUD_SEPARATOR.width() * 2
        + labels.width()
        + length.width()
        + score.width()
}

#[cfg(test)]
mod tests {
    use super::{info_line, info_width};

    fn line_text(width: usize) -> String {
        info_line(3, 12, 32, 32, width)
            .spans
            .iter()
            .map(|span| span.content.to_string())
            .collect()
    }

    #[test]
    fn wide_hud_uses_full_labels() {
        assert_eq!(line_text(80), "32x32 │ Length: 3 │ Score: 12");
    }

    #[test]
    fn narrow_hud_uses_compact_labels() {
        assert_eq!(line_text(10), "32x32 │ L: 3 │ S: 12");
    }

    #[test]
    fn separator_counts_as_single_column() {
        assert_eq!(info_width("5x5", "1", "0", true), 3 + 6 + 6 + 1 + 1);
    }
}
