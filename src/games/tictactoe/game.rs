//! Game engine for a single round of tic-tac-toe.

use super::position::Position;
use super::rules::{check_winner, is_full, winning_line};
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// Row or column outside `0..3`.
    #[display("Coordinates out of bounds")]
    OutOfBounds,
    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
    /// The round has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// What a placement did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// The activation was ignored; nothing changed.
    Rejected(Rejection),
    /// The mark was placed and play continues.
    Continued,
    /// The mark was placed and won the round.
    Won(Player),
    /// The mark filled the board without a winner.
    Draw,
}

impl Placement {
    /// True if the mark was written to the board.
    pub fn is_accepted(self) -> bool {
        !matches!(self, Placement::Rejected(_))
    }
}

/// One round of tic-tac-toe: board, turn, move count and status.
///
/// Invalid placements are no-ops rather than errors. The turn flips after
/// every accepted placement, the round-ending one included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    move_count: u8,
    status: GameStatus,
}

impl Game {
    /// Creates a new round with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next placement writes.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The completed line when the round has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.status {
            GameStatus::Won(_) => winning_line(&self.board).map(|(_, line)| line),
            _ => None,
        }
    }

    /// True if a placement at `pos` would be accepted.
    pub fn is_playable(&self, pos: Position) -> bool {
        self.status == GameStatus::InProgress && self.board.is_empty(pos)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Out-of-range coordinates, occupied squares and finished rounds are
    /// ignored and leave the round untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Placement {
        match Position::from_coords(row, col) {
            Some(pos) => self.place(pos),
            None => {
                debug!("Ignoring placement outside the board");
                Placement::Rejected(Rejection::OutOfBounds)
            }
        }
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Placement {
        if self.status.is_over() {
            debug!(status = ?self.status, "Ignoring placement after game over");
            return Placement::Rejected(Rejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("Ignoring placement on occupied square");
            return Placement::Rejected(Rejection::Occupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.move_count += 1;

        let placement = if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
            info!(%winner, moves = self.move_count, "Game won");
            Placement::Won(winner)
        } else if self.move_count == 9 {
            debug_assert!(is_full(&self.board));
            self.status = GameStatus::Draw;
            info!("Game drawn");
            Placement::Draw
        } else {
            Placement::Continued
        };

        // Flips on the terminal move too.
        self.to_move = player.opponent();
        placement
    }

    /// Resets the round: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting round");
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
