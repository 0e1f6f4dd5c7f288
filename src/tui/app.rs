//! Application state and event handling.

use crossterm::event::{Event, KeyEventKind};
use tracing::{debug, instrument};

use super::input::{Command, key_command, mouse_command};
use super::ui::ScreenLayout;
use crate::action::Action;
use crate::games::tictactoe::Position;
use crate::session::Session;
use crate::theme::Theme;

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    layout: Option<ScreenLayout>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        Self {
            session: Session::new(theme),
            cursor: Position::Center,
            layout: None,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user has asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the layout of the frame just drawn, for mouse hit-testing.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = Some(layout);
    }

    /// Handles one terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: &Event) {
        let command = match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => key_command(*key, self.cursor),
            Event::Mouse(mouse) => self
                .layout
                .as_ref()
                .and_then(|layout| mouse_command(*mouse, layout)),
            _ => None,
        };
        if let Some(command) = command {
            self.apply(command);
        }
    }

    /// Applies a command.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Apply(action) => {
                if let Action::PlaceMark { row, col } = action
                    && let Some(pos) = Position::from_coords(row, col)
                {
                    self.cursor = pos;
                }
                self.session.dispatch(action);
            }
            Command::MoveCursor(pos) => {
                debug!(?pos, "Cursor moved");
                self.cursor = pos;
            }
            Command::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }
}
