//! Keyboard and mouse mapping.

use crate::action::Action;
use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, instrument};

use super::ui::{Hit, ScreenLayout};

/// What an input event asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply an activation to the session.
    Apply(Action),
    /// Move the keyboard cursor.
    MoveCursor(Position),
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

/// Maps a key press to a command.
#[instrument]
pub fn key_command(key: KeyEvent, cursor: Position) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let code = match key.code {
        KeyCode::Char('h') => KeyCode::Left,
        KeyCode::Char('j') => KeyCode::Down,
        KeyCode::Char('k') => KeyCode::Up,
        KeyCode::Char('l') => KeyCode::Right,
        other => other,
    };

    let command = match code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Command::MoveCursor(move_cursor(cursor, code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Command::Apply(Action::place(cursor)),
        KeyCode::Char(c @ '1'..='9') => {
            let pos = c
                .to_digit(10)
                .and_then(|d| Position::from_index(d as usize - 1))?;
            Command::Apply(Action::place(pos))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Apply(Action::Restart),
        KeyCode::Char('s') | KeyCode::Char('S') => Command::Apply(Action::ResetScores),
        KeyCode::Char('t') | KeyCode::Char('T') => Command::Apply(Action::ToggleTheme),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    debug!(?command, "Key mapped");
    Some(command)
}

/// Maps a left click to the widget under the pointer.
#[instrument(skip(layout))]
pub fn mouse_command(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let command = match layout.hit_test(mouse.column, mouse.row)? {
        Hit::Cell(pos) => Command::Apply(Action::place(pos)),
        Hit::Restart => Command::Apply(Action::Restart),
        Hit::ResetScores => Command::Apply(Action::ResetScores),
        Hit::ToggleTheme => Command::Apply(Action::ToggleTheme),
    };
    debug!(?command, "Click mapped");
    Some(command)
}
