//! Terminal event mapping.
//!
//! Translates crossterm key and mouse events into [`GameInput`]s. Terminals
//! that cannot report key releases get a synthetic release right after each
//! flap key press, so every press is still a fresh edge. A left click that
//! lands on an on-screen button emits that button's input instead of a flap.

use crate::flappy::logic::GameInput;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

/// A clickable screen region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickTarget {
    pub area: Rect,
    pub input: GameInput,
}

impl ClickTarget {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    /// Whether the terminal reports key release events.
    key_releases: bool,
}

impl InputMapper {
    pub fn new(key_releases: bool) -> Self {
        Self { key_releases }
    }

    /// Map one terminal event to zero or more game inputs, in order.
    ///
    /// `targets` are the buttons currently on screen.
    pub fn map(&self, event: &Event, targets: &[ClickTarget]) -> Vec<GameInput> {
        match event {
            Event::Key(key) => self.map_key(key),
            Event::Mouse(mouse) => map_mouse(mouse, targets),
            _ => Vec::new(),
        }
    }

    fn map_key(&self, key: &KeyEvent) -> Vec<GameInput> {
        let flap_key = is_flap_key(key.code);

        match key.kind {
            KeyEventKind::Release => {
                if flap_key && self.key_releases {
                    vec![GameInput::PointerUp]
                } else {
                    Vec::new()
                }
            }
            // A held key is still one press
            KeyEventKind::Repeat if self.key_releases => Vec::new(),
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    return vec![GameInput::QuitRequested];
                }
                match key.code {
                    _ if flap_key => {
                        if self.key_releases {
                            vec![GameInput::PointerDown]
                        } else {
                            vec![GameInput::PointerDown, GameInput::PointerUp]
                        }
                    }
                    KeyCode::Esc => vec![GameInput::QuitRequested],
                    KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                        vec![GameInput::Restart]
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') => vec![GameInput::Quit],
                    _ => Vec::new(),
                }
            }
        }
    }
}

fn map_mouse(mouse: &MouseEvent, targets: &[ClickTarget]) -> Vec<GameInput> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match targets
                .iter()
                .find(|target| target.contains(mouse.column, mouse.row))
            {
                Some(target) => vec![target.input],
                None => vec![GameInput::PointerDown],
            }
        }
        MouseEventKind::Up(MouseButton::Left) => vec![GameInput::PointerUp],
        _ => Vec::new(),
    }
}

fn is_flap_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k'))
}
