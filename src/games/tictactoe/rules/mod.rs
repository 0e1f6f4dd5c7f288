//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};
