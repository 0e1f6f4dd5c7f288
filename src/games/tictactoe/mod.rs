//! Tic-tac-toe: board types, win evaluation and the round state machine.

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{Game, Placement, Rejection};
pub use position::Position;
pub use rules::{check_winner, is_full, winning_line};
pub use types::{Board, GameStatus, Player, Square};
