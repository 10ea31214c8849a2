//! Terminal rendering of a flappy session.
//!
//! The play field samples the 864×936 world at the center of every terminal
//! cell, so the picture scales with the terminal size.

use super::common::{centered_rect, create_game_layout, game_layout, render_status_bar};
use crate::core::constants::{GROUND_TILE, GROUND_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::game_loop::GameLoop;
use crate::flappy::logic::GameInput;
use crate::flappy::types::{Phase, Session};
use crate::input::ClickTarget;
use crate::scores::ScoreStore;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;
const OVERLAY_WIDTH: u16 = 30;
const OVERLAY_HEIGHT: u16 = 8;

/// What a terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    Bird,
    Ground,
    GroundStripe,
}

/// Classify the world point `(wx, wy)`.
pub fn cell_at(session: &Session, wx: f64, wy: f64) -> Cell {
    if session.bird.hitbox().contains(wx, wy) {
        return Cell::Bird;
    }
    let in_pipe = session
        .pipes
        .iter()
        .flat_map(|pair| pair.segments())
        .any(|pipe| pipe.hitbox().contains(wx, wy));
    if in_pipe {
        return Cell::Pipe;
    }
    if wy >= GROUND_Y as f64 {
        let tile = GROUND_TILE as f64;
        let along = (wx - session.ground_scroll as f64).rem_euclid(tile);
        return if along < tile / 2.0 {
            Cell::Ground
        } else {
            Cell::GroundStripe
        };
    }
    Cell::Sky
}

/// Render the whole game screen.
pub fn render_game<S: ScoreStore>(frame: &mut Frame, area: Rect, game: &GameLoop<S>) {
    let session = game.session();
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, INFO_PANEL_WIDTH);

    render_play_area(frame, layout.content, session);
    render_status(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, game);

    if session.phase == Phase::GameOver {
        render_game_over(frame, layout.content, session);
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, session: &Session) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = SCREEN_WIDTH as f64 / width as f64;
    let y_scale = SCREEN_HEIGHT as f64 / height as f64;

    // The bird is smaller than a cell on short terminals; always show its center
    let bird = session.bird.hitbox();
    let bird_col = ((bird.x as f64 + bird.width as f64 / 2.0) / x_scale) as usize;
    let bird_row = ((bird.y as f64 + bird.height as f64 / 2.0) / y_scale) as usize;

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let wy = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let wx = (col as f64 + 0.5) * x_scale;
            let cell = if row == bird_row && col == bird_col {
                Cell::Bird
            } else {
                cell_at(session, wx, wy)
            };
            spans.push(cell_span(cell, session));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn cell_span(cell: Cell, session: &Session) -> Span<'static> {
    match cell {
        Cell::Sky => Span::styled(" ", Style::default().bg(Color::Rgb(110, 200, 230))),
        Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
        Cell::Ground => Span::styled("▒", Style::default().fg(Color::Rgb(210, 185, 110))),
        Cell::GroundStripe => {
            Span::styled("▒", Style::default().fg(Color::Rgb(185, 160, 90)))
        }
        Cell::Bird => {
            let glyph = if session.phase == Phase::GameOver {
                "x"
            } else if session.bird.velocity < -0.5 {
                "▲"
            } else if session.bird.velocity > 4.0 {
                "▼"
            } else {
                "►"
            };
            Span::styled(
                glyph,
                Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::Rgb(110, 200, 230))
                    .add_modifier(Modifier::BOLD),
            )
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    match session.phase {
        Phase::Idle => render_status_bar(
            frame,
            area,
            "Press Space or click to fly!",
            Color::Yellow,
            &[("[Space/Up/Click]", "Flap"), ("[Esc]", "Quit")],
        ),
        Phase::Flying => render_status_bar(
            frame,
            area,
            &format!(
                "Score: {}  High Score: {}",
                session.score, session.high_score
            ),
            Color::Green,
            &[("[Space/Up/Click]", "Flap"), ("[Esc]", "Quit")],
        ),
        Phase::GameOver => render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel<S: ScoreStore>(frame: &mut Frame, area: Rect, game: &GameLoop<S>) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let session = game.session();
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", game.player()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(
                session.high_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    if let Some(notice) = game.notice() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// The game-over box and its two buttons, placed inside the play area.
struct GameOverLayout {
    overlay: Rect,
    text: Rect,
    restart: Rect,
    quit: Rect,
}

fn game_over_layout(content: Rect) -> GameOverLayout {
    let overlay = centered_rect(content, OVERLAY_WIDTH, OVERLAY_HEIGHT);
    let inner = Block::default().borders(Borders::ALL).inner(overlay);

    // Buttons take the last inner row, under the three score lines
    if inner.height < 4 {
        return GameOverLayout {
            overlay,
            text: inner,
            restart: Rect::default(),
            quit: Rect::default(),
        };
    }
    let row = Rect {
        y: inner.bottom() - 1,
        height: 1,
        ..inner
    };
    let half = row.width / 2;
    GameOverLayout {
        overlay,
        text: Rect {
            height: inner.height - 1,
            ..inner
        },
        restart: Rect { width: half, ..row },
        quit: Rect {
            x: row.x + half,
            width: row.width - half,
            ..row
        },
    }
}

/// Clickable buttons on the game-over box for a frame of size `area`.
pub fn game_over_targets(area: Rect) -> [ClickTarget; 2] {
    let layout = game_over_layout(game_layout(area, INFO_PANEL_WIDTH).content);
    [
        ClickTarget {
            area: layout.restart,
            input: GameInput::Restart,
        },
        ClickTarget {
            area: layout.quit,
            input: GameInput::Quit,
        },
    ]
}

fn render_game_over(frame: &mut Frame, area: Rect, session: &Session) {
    let layout = game_over_layout(area);
    frame.render_widget(Clear, layout.overlay);

    let block = Block::default()
        .title(" GAME OVER ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(block, layout.overlay);

    let lines = vec![
        Line::from(""),
        Line::from(format!("Score: {}", session.score)),
        Line::from(Span::styled(
            format!("High Score: {}", session.high_score),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        layout.text,
    );

    let button = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Span::styled(" [R] Restart ", button)).alignment(Alignment::Center),
        layout.restart,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(" [Q] Quit ", button)).alignment(Alignment::Center),
        layout.quit,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::SCROLL_SPEED;
    use crate::flappy::physics::scroll_ground;
    use crate::flappy::types::PipePair;

    #[test]
    fn test_bird_cell() {
        let session = Session::new(0);
        let b = session.bird.hitbox();
        assert_eq!(
            cell_at(&session, b.x as f64 + 1.0, b.y as f64 + 1.0),
            Cell::Bird
        );
    }

    #[test]
    fn test_pipe_and_sky_cells() {
        let mut session = Session::new(0);
        session.pipes.push(PipePair::new(500, 468));
        // Above the gap is pipe, inside the gap is sky
        assert_eq!(cell_at(&session, 510.0, 100.0), Cell::Pipe);
        assert_eq!(cell_at(&session, 510.0, 468.0), Cell::Sky);
        assert_eq!(cell_at(&session, 700.0, 100.0), Cell::Sky);
    }

    #[test]
    fn test_ground_stripes_follow_scroll() {
        let mut session = Session::new(0);
        let y = GROUND_Y as f64 + 10.0;
        let half = GROUND_TILE as f64 / 2.0;
        assert_eq!(cell_at(&session, 1.0, y), Cell::Ground);
        assert_eq!(cell_at(&session, half + 1.0, y), Cell::GroundStripe);
        assert_eq!(cell_at(&session, GROUND_TILE as f64 + 1.0, y), Cell::Ground);
        session.ground_scroll = -(GROUND_TILE / 2);
        assert_eq!(cell_at(&session, 1.0, y), Cell::GroundStripe);
    }

    #[test]
    fn test_ground_scrolls_without_jumping_on_wrap() {
        let mut session = Session::new(0);
        let y = GROUND_Y as f64 + 10.0;
        let mut wrapped = 0;

        for _ in 0..12 {
            let before = session.clone();
            scroll_ground(&mut session.ground_scroll);
            if session.ground_scroll == 0 {
                wrapped += 1;
            }
            // Each tick the picture shifts left by exactly one scroll step
            for x in 0..700 {
                let wx = x as f64 + 0.5;
                assert_eq!(
                    cell_at(&session, wx, y),
                    cell_at(&before, wx + SCROLL_SPEED as f64, y),
                    "offset {} -> {} at x {}",
                    before.ground_scroll,
                    session.ground_scroll,
                    x
                );
            }
        }
        assert!(wrapped >= 1);
    }

    #[test]
    fn test_game_over_targets_sit_in_the_overlay() {
        let area = Rect::new(0, 0, 100, 40);
        let [restart, quit] = game_over_targets(area);
        let content = game_layout(area, INFO_PANEL_WIDTH).content;
        let overlay = centered_rect(content, OVERLAY_WIDTH, OVERLAY_HEIGHT);

        assert_eq!(restart.input, GameInput::Restart);
        assert_eq!(quit.input, GameInput::Quit);
        assert_eq!(restart.area.y, quit.area.y);
        assert_eq!(restart.area.right(), quit.area.x);
        assert!(restart.area.width > 0 && quit.area.width > 0);
        // Inside the border of the box
        assert!(restart.area.x > overlay.x);
        assert!(quit.area.right() < overlay.right());
        assert_eq!(restart.area.y, overlay.bottom() - 2);
    }

    #[test]
    fn test_tiny_terminal_has_no_buttons() {
        let [restart, quit] = game_over_targets(Rect::new(0, 0, 30, 6));
        assert_eq!(restart.area.area(), 0);
        assert_eq!(quit.area.area(), 0);
    }
}
