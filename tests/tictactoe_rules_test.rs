//! Tests for win evaluation over arbitrary and reachable boards.

use std::collections::HashSet;
use tictactoe::{Board, Game, GameStatus, Player, Position, Square, check_winner, rules::LINES};

/// Every assignment of Empty/X/O to the nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut board = Board::new();
        for pos in Position::ALL {
            let square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            board.set(pos, square);
            code /= 3;
        }
        board
    })
}

fn completed_by(board: &Board, line: [Position; 3]) -> Option<Player> {
    let [a, b, c] = line.map(|pos| board.get(pos));
    match (a, b, c) {
        (Square::Occupied(p), Square::Occupied(q), Square::Occupied(r)) if p == q && q == r => {
            Some(p)
        }
        _ => None,
    }
}

#[test]
fn test_lines_cover_rows_columns_diagonals() {
    let unique: HashSet<_> = LINES.iter().collect();
    assert_eq!(unique.len(), 8);
    assert_eq!(
        LINES[0],
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert_eq!(
        LINES[3],
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
    );
    assert_eq!(
        LINES[7],
        [Position::TopRight, Position::Center, Position::BottomLeft]
    );
}

#[test]
fn test_winner_matches_first_completed_line_on_every_board() {
    for board in all_boards() {
        let expected = LINES.iter().find_map(|line| completed_by(&board, *line));
        assert_eq!(check_winner(&board), expected, "board:\n{}", board.display());
    }
}

#[test]
fn test_each_line_wins_alone() {
    for player in [Player::X, Player::O] {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(player));
            }
            assert_eq!(check_winner(&board), Some(player));
        }
    }
}

/// Walks every game reachable by legal alternating play.
fn visit_reachable(game: Game, seen: &mut HashSet<Game>, check: &mut impl FnMut(&Game)) {
    if !seen.insert(game) {
        return;
    }
    check(&game);
    if game.status() != GameStatus::InProgress {
        return;
    }
    for pos in Position::valid_moves(game.board()) {
        let mut next = game;
        assert!(next.place(pos).is_accepted());
        visit_reachable(next, seen, check);
    }
}

#[test]
fn test_no_reachable_board_has_two_winners() {
    let mut seen = HashSet::new();
    visit_reachable(Game::new(), &mut seen, &mut |game| {
        let winners: HashSet<_> = LINES
            .iter()
            .filter_map(|line| completed_by(game.board(), *line))
            .collect();
        assert!(winners.len() <= 1, "board:\n{}", game.board().display());
    });
    // Distinct reachable positions of tic-tac-toe.
    assert_eq!(seen.len(), 5478);
}

#[test]
fn test_reachable_games_keep_counters_consistent() {
    let mut seen = HashSet::new();
    visit_reachable(Game::new(), &mut seen, &mut |game| {
        let moves = game.move_count() as usize;
        assert_eq!(moves, game.board().occupied());
        let expected = if moves % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.to_move(), expected);
        match game.status() {
            GameStatus::Won(winner) => assert_eq!(check_winner(game.board()), Some(winner)),
            GameStatus::Draw => {
                assert_eq!(moves, 9);
                assert_eq!(check_winner(game.board()), None);
            }
            GameStatus::InProgress => {
                assert!(moves < 9);
                assert_eq!(check_winner(game.board()), None);
            }
        }
    });
}
