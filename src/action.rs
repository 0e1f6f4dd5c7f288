//! First-class UI activations.
//!
//! Every cell click and button press becomes an [`Action`] that the
//! session applies synchronously, one at a time.

use crate::games::tictactoe::Position;
use serde::{Deserialize, Serialize};

/// An activation coming from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Activate the cell at `(row, col)`.
    #[display("Place mark at ({}, {})", row, col)]
    PlaceMark {
        /// Row, 0 = top.
        row: usize,
        /// Column, 0 = left.
        col: usize,
    },
    /// Start a fresh round, keeping scores.
    #[display("Restart game")]
    Restart,
    /// Zero both scores and start a fresh round.
    #[display("Reset scores")]
    ResetScores,
    /// Switch between light and dark theme.
    #[display("Toggle theme")]
    ToggleTheme,
}

impl Action {
    /// Cell activation for a named position.
    pub fn place(pos: Position) -> Self {
        Action::PlaceMark {
            row: pos.row(),
            col: pos.col(),
        }
    }
}
