//! Two-player Tic Tac Toe for the terminal.
//!
//! # Architecture
//!
//! - **Games**: board types, win evaluation and the round state machine
//! - **Session**: the current round plus cumulative scores and theme
//! - **Action**: UI activations applied to a session one at a time
//! - **TUI**: ratatui front end mapping keys and clicks to actions
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameStatus, Player, Session, Theme};
//!
//! let mut session = Session::new(Theme::Light);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     session.place_mark(row, col);
//! }
//! assert_eq!(session.game().status(), GameStatus::Won(Player::X));
//! assert_eq!(session.scores().get(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod games;
mod session;
mod theme;
mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, Placement, Player, Position, Rejection, Square, check_winner,
    is_full, rules, winning_line,
};

// Crate-level exports - Session state
pub use action::Action;
pub use session::{Scores, Session};
pub use theme::Theme;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Terminal UI
pub use tui::{App, Command, Hit, Palette, ScreenLayout, key_command, mouse_command, move_cursor, run_tui};
