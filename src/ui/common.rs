//! Shared layout helpers for the game screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Play field, inside the outer border.
    pub content: Rect,
    /// Two-line status bar under the play field.
    pub status_bar: Rect,
    /// Info panel on the right, with its own border.
    pub info_panel: Rect,
}

/// Create the bordered game layout.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [content area]                │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    game_layout(area, info_panel_width)
}

/// The areas `create_game_layout` draws into, without drawing anything.
/// Mouse hit-testing uses this to agree with the last rendered frame.
pub fn game_layout(area: Rect, info_panel_width: u16) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render a two-line status bar: a message, then `(key, action)` hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// A `width`×`height` rectangle centered in `area`, clipped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
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
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 80, 24);
        let r = centered_rect(area, 40, 10);
        assert_eq!(r, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(5, 5, 10, 4);
        let r = centered_rect(area, 40, 10);
        assert_eq!(r, area);
    }

    #[test]
    fn test_game_layout_splits_inside_border() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = game_layout(area, 22);
        assert_eq!(layout.info_panel.width, 22);
        assert_eq!(layout.status_bar.height, 2);
        assert_eq!(layout.content.x, 1);
        assert_eq!(layout.content.y, 1);
        assert_eq!(layout.content.bottom(), layout.status_bar.y);
        assert_eq!(layout.info_panel.right(), area.right() - 1);
    }
}
