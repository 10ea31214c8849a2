//! Login gate shown before play.
//!
//! Collects a player name and a masked password. The password only gates
//! the form; it is never kept past submission.

use crate::config::validate_player_name;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

/// Result of feeding a key to the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    None,
    /// Login accepted for this player name.
    Submit(String),
    Quit,
}

pub struct LoginScreen {
    pub username: String,
    password: String,
    pub focus: LoginField,
    pub validation_error: Option<String>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: LoginField::Username,
            validation_error: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => LoginAction::Quit,
            KeyCode::Char('c') if ctrl => LoginAction::Quit,
            // Other control chords are not text
            KeyCode::Char(_) if ctrl => LoginAction::None,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
                LoginAction::None
            }
            KeyCode::Enter => match self.focus {
                LoginField::Username => {
                    self.focus = LoginField::Password;
                    LoginAction::None
                }
                LoginField::Password => self.submit(),
            },
            KeyCode::Backspace => {
                self.active_field().pop();
                self.validation_error = None;
                LoginAction::None
            }
            KeyCode::Char(c) => {
                self.active_field().push(c);
                self.validation_error = None;
                LoginAction::None
            }
            _ => LoginAction::None,
        }
    }

    fn active_field(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn submit(&mut self) -> LoginAction {
        match validate_player_name(&self.username) {
            Ok(name) => {
                self.password.clear();
                LoginAction::Submit(name)
            }
            Err(error) => {
                self.validation_error = Some(error);
                self.focus = LoginField::Username;
                LoginAction::None
            }
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Spacer
                Constraint::Length(4), // Username label + field
                Constraint::Length(4), // Password label + field
                Constraint::Length(2), // Validation
                Constraint::Min(0),    // Filler
                Constraint::Length(1), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Flappy Bird - Login")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let masked = "*".repeat(self.password.chars().count());
        render_field(
            f,
            chunks[2],
            "Username:",
            &self.username,
            self.focus == LoginField::Username,
        );
        render_field(
            f,
            chunks[3],
            "Password:",
            &masked,
            self.focus == LoginField::Password,
        );

        if let Some(error) = &self.validation_error {
            let line = Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ));
            f.render_widget(Paragraph::new(line), chunks[4]);
        }

        let controls = Paragraph::new("[Tab] Switch field    [Enter] Login    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[6]);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    f.render_widget(Paragraph::new(label), Rect { height: 1, ..area });

    let border_color = if focused { Color::White } else { Color::DarkGray };
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let input = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(
        input,
        Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(screen: &mut LoginScreen, code: KeyCode) -> LoginAction {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_login_flow() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "alice");
        assert_eq!(press(&mut screen, KeyCode::Enter), LoginAction::None);
        assert_eq!(screen.focus, LoginField::Password);
        type_text(&mut screen, "hunter2");
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            LoginAction::Submit("alice".to_string())
        );
        assert!(screen.password.is_empty());
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "bobb");
        press(&mut screen, KeyCode::Backspace);
        assert_eq!(screen.username, "bob");
        press(&mut screen, KeyCode::Tab);
        type_text(&mut screen, "pw");
        press(&mut screen, KeyCode::Backspace);
        assert_eq!(screen.username, "bob");
        assert_eq!(screen.password, "p");
    }

    #[test]
    fn test_empty_username_rejected() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "   ");
        press(&mut screen, KeyCode::Tab);
        assert_eq!(press(&mut screen, KeyCode::Enter), LoginAction::None);
        assert!(screen.validation_error.is_some());
        assert_eq!(screen.focus, LoginField::Username);
    }

    #[test]
    fn test_escape_quits() {
        let mut screen = LoginScreen::new();
        assert_eq!(press(&mut screen, KeyCode::Esc), LoginAction::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_without_typing() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "eve");
        let action = screen.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, LoginAction::Quit);
        assert_eq!(screen.username, "eve");
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "eve");
        let action = screen.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(action, LoginAction::None);
        assert_eq!(screen.username, "eve");

        // Shifted capitals are still text
        screen.handle_key(KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT));
        assert_eq!(screen.username, "eveE");
    }
}
