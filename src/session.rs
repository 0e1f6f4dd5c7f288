//! Session state: the current round plus scores and theme.

use crate::action::Action;
use crate::games::tictactoe::{Game, GameStatus, Placement, Player, Position};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Cumulative win counts for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
}

impl Scores {
    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Everything the interface shows, mutated only through the methods below.
///
/// Scores outlive individual rounds; the theme is independent of both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    game: Game,
    scores: Scores,
    theme: Theme,
}

impl Session {
    /// Creates a session with a fresh round, zero scores and the given theme.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        info!("Creating new session");
        Self {
            game: Game::new(),
            scores: Scores::default(),
            theme,
        }
    }

    /// The current round.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Win counts across rounds.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Status line text: `"X wins!"`, `"Draw"` or `"Turn: X"`.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Won(player) => format!("{} wins!", player),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Turn: {}", self.game.to_move()),
        }
    }

    /// Places the current player's mark, crediting the winner if it ends the round.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Placement {
        let placement = self.game.place_mark(row, col);
        if let Placement::Won(winner) = placement {
            self.scores.record_win(winner);
            info!(
                %winner,
                x = self.scores.x,
                o = self.scores.o,
                "Score updated"
            );
        }
        placement
    }

    /// Places the current player's mark at a named cell.
    pub fn place(&mut self, pos: Position) -> Placement {
        self.place_mark(pos.row(), pos.col())
    }

    /// Starts a fresh round. Scores are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game.restart();
    }

    /// Zeroes both scores, then restarts the round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!("Resetting scores");
        self.scores.reset();
        self.restart();
    }

    /// Switches the theme. Nothing else changes.
    #[instrument(skip(self), fields(from = %self.theme))]
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = %self.theme, "Theme toggled");
    }

    /// Applies one activation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::PlaceMark { row, col } => {
                self.place_mark(row, col);
            }
            Action::Restart => self.restart(),
            Action::ResetScores => self.reset_scores(),
            Action::ToggleTheme => self.toggle_theme(),
        }
    }
}
