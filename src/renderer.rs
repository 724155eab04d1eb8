use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::board::{GridSize, Position};
use crate::config::{
    GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::game::{GameStatus, Snapshot};
use crate::input::Direction;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu, render_too_small_notice};

/// Terminal columns per logical cell; keeps cells roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Terminal rows taken by the HUD below the board.
const HUD_ROWS: u16 = 1;

/// Which overlay the frontend shows on top of the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Start,
    Playing,
}

/// Renders the full game frame from a read-only snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, screen: Screen) {
    let area = frame.area();
    if !grid_fits(area, snapshot.bounds) {
        let (width, height) = required_area(snapshot.bounds);
        render_too_small_notice(frame, area, (width, height));
        return;
    }

    let play_area = render_hud(frame, area, snapshot);

    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);

    if screen == Screen::Start {
        render_start_menu(frame, play_area);
        return;
    }

    if snapshot.status == GameStatus::Over {
        render_game_over_menu(frame, play_area, snapshot.score, snapshot.end_reason);
    }
}

/// Returns the terminal `(columns, rows)` needed to show the whole board,
/// its border and the HUD.
#[must_use]
pub fn required_area(bounds: GridSize) -> (u16, u16) {
    let columns = bounds.width.saturating_mul(CELL_COLUMNS).saturating_add(2);
    let rows = bounds.height.saturating_add(2 + HUD_ROWS);
    (columns, rows)
}

/// Returns true when `area` can show every cell of the board.
#[must_use]
pub fn grid_fits(area: Rect, bounds: GridSize) -> bool {
    let (columns, rows) = required_area(bounds);
    area.width >= columns && area.height >= rows
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>) {
    if snapshot.snake.occupies(snapshot.food) {
        return;
    }

    let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, snapshot.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>) {
    let head = snapshot.snake.head();
    let tail = snapshot.snake.tail();
    let single_segment = snapshot.snake.len() == 1;

    let buffer = frame.buffer_mut();
    for segment in snapshot.segments() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, *segment) else {
            continue;
        };

        let (glyph, style) = if *segment == head {
            (
                head_glyph(snapshot.direction),
                Style::new()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            )
        } else if *segment == tail && !single_segment {
            (GLYPH_SNAKE_TAIL, Style::new().fg(Color::DarkGray))
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(Color::Green))
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Maps a logical cell to the terminal cell inside `inner`, or `None` when
/// it falls outside the grid or the visible area.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !bounds.in_bounds(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
