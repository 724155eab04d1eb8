use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::game::EndReason;

/// Columns of padding between popup text and its border on each side.
const POPUP_PADDING_X: u16 = 2;

/// Draws the title screen shown before the first tick.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect) {
    let lines = [
        "SNAKE",
        "",
        "Press any key to start",
        "",
        "Arrows/WASD to move",
        "[Q]/[Esc] Quit",
    ];
    let popup = popup_for(area, &lines);
    frame.render_widget(Clear, popup);

    let title_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let body: Vec<Line<'_>> = lines
        .iter()
        .enumerate()
        .map(|(index, text)| {
            if index == 0 {
                Line::styled(*text, title_style)
            } else {
                Line::from(*text)
            }
        })
        .collect();

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        popup,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    end_reason: Option<EndReason>,
) {
    let score_line = format!("Score: {score}");
    let lines = [
        "GAME OVER",
        "",
        score_line.as_str(),
        end_reason_text(end_reason),
        "",
        "[Enter]/[Space]/[R] Play Again",
        "[Q]/[Esc] Quit",
    ];
    let popup = popup_for(area, &lines);
    frame.render_widget(Clear, popup);

    let title_style = Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD);
    let body: Vec<Line<'_>> = lines
        .iter()
        .enumerate()
        .map(|(index, text)| {
            if index == 0 {
                Line::styled(*text, title_style)
            } else {
                Line::from(*text)
            }
        })
        .collect();

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Replaces the board when the terminal cannot show all of it.
pub fn render_too_small_notice(frame: &mut Frame<'_>, area: Rect, required: (u16, u16)) {
    let need = format!("Need {}x{}, have {}x{}", required.0, required.1, area.width, area.height);
    let lines = [
        "Terminal too small",
        "",
        need.as_str(),
        "Game paused until resized",
        "[Q]/[Esc] Quit",
    ];
    let popup = popup_for(area, &lines);
    frame.render_widget(Clear, area);

    let title_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let body: Vec<Line<'_>> = lines
        .iter()
        .enumerate()
        .map(|(index, text)| {
            if index == 0 {
                Line::styled(*text, title_style)
            } else {
                Line::from(*text)
            }
        })
        .collect();

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

fn end_reason_text(end_reason: Option<EndReason>) -> &'static str {
    match end_reason {
        Some(EndReason::WallCollision) => "Cause: hit wall",
        Some(EndReason::SelfCollision) => "Cause: hit yourself",
        Some(EndReason::BoardFull) => "Board full!",
        None => "",
    }
}

/// Returns a popup rect sized to fit `lines`, clamped to `area`.
fn popup_for(area: Rect, lines: &[&str]) -> Rect {
    let text_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    let width = u16::try_from(text_width)
        .unwrap_or(u16::MAX)
        .saturating_add(2 * POPUP_PADDING_X + 2);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    centered_popup(area, width, height)
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::game::EndReason;

    use super::{end_reason_text, popup_for};

    #[test]
    fn popup_fits_longest_line_and_is_centered() {
        let area = Rect::new(0, 0, 40, 20);
        let popup = popup_for(area, &["GAME OVER", "Score: 10"]);

        assert_eq!(popup.width, 9 + 4 + 2);
        assert_eq!(popup.height, 4);
        assert_eq!(popup.x, (40 - popup.width) / 2);
        assert_eq!(popup.y, (20 - popup.height) / 2);
    }

    #[test]
    fn popup_never_exceeds_area() {
        let area = Rect::new(0, 0, 8, 3);
        let popup = popup_for(area, &["a rather long line of text", "", "", ""]);

        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn every_end_reason_has_text() {
        for reason in [
            EndReason::WallCollision,
            EndReason::SelfCollision,
            EndReason::BoardFull,
        ] {
            assert!(!end_reason_text(Some(reason)).is_empty());
        }
        assert!(end_reason_text(None).is_empty());
    }
}
