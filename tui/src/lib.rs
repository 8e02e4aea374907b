//! TUI rendering for tally using ratatui.
//!
//! One view: a heading, a counter button, a hint line. Rendering is a pure
//! function of [`App`] state, except that the button's screen rectangle is
//! recorded back into the view state for mouse hit-testing.

mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use tally_engine::{App, ButtonArea};

/// Fixed heading text. Invariant across all interactions.
pub const HEADING: &str = "Hello world!";

/// Button label for a given counter value.
#[must_use]
pub fn button_label(count: u64) -> String {
    format!("count is {count}")
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.view().ui_options;
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(3),    // Button
            Constraint::Length(1), // Hint line
        ])
        .split(frame.area());

    draw_heading(frame, chunks[0], &palette);
    draw_button(frame, app, chunks[1], &palette, &glyphs);
    draw_hints(frame, chunks[2], &palette, &glyphs);
}

fn draw_heading(frame: &mut Frame, area: Rect, palette: &Palette) {
    let heading = Paragraph::new(Line::from(Span::styled(HEADING, styles::heading(palette))));
    frame.render_widget(heading, area);
}

fn draw_button(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let label = button_label(app.count());

    // Border plus one cell of padding on each side, clamped to the frame.
    let width = (label.width() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    let button = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    // Remember where the button landed so clicks can be hit-tested.
    app.view_mut().button_area = Some(ButtonArea {
        x: button.x,
        y: button.y,
        width: button.width,
        height: button.height,
    });

    let widget = Paragraph::new(Line::from(Span::styled(
        label,
        styles::button_label(palette),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(glyphs.button_border)
            .border_style(Style::default().fg(palette.button_border)),
    );
    frame.render_widget(widget, button);
}

fn draw_hints(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hints = Line::from(vec![
        Span::styled("Space/Enter or click", styles::hint(palette)),
        Span::styled(format!(" {} ", glyphs.separator), styles::hint(palette)),
        Span::styled("q quit", styles::hint(palette)),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
