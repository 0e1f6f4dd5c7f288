//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::games::tictactoe::{GameStatus, Player, Position, Square};
use crate::session::Session;
use crate::theme::Theme;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 16;

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Regular text.
    pub foreground: Color,
    /// Disabled cells, separators, help text.
    pub muted: Color,
    /// Title and primary button.
    pub accent: Color,
    /// Marks and score of player X.
    pub x: Color,
    /// Marks and score of player O.
    pub o: Color,
    /// Cursor and winning line.
    pub highlight: Color,
}

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                x: Color::Blue,
                o: Color::Red,
                highlight: Color::LightYellow,
            },
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                x: Color::LightBlue,
                o: Color::LightRed,
                highlight: Color::Yellow,
            },
        }
    }

    fn player(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// A clickable element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// The "Restart Game" button.
    Restart,
    /// The "Reset Scores" button.
    ResetScores,
    /// The theme toggle button.
    ToggleTheme,
}

/// Screen regions for one frame, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    theme_button: Rect,
    title: Rect,
    status: Rect,
    scoreboard: Rect,
    cells: [Rect; 9],
    restart: Rect,
    reset_scores: Rect,
    help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into header, board, controls and help line.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Theme button + title
                Constraint::Length(3), // Status
                Constraint::Length(1), // Scoreboard
                Constraint::Min(CELL_HEIGHT * 3), // Board
                Constraint::Length(3), // Controls
                Constraint::Length(1), // Help
            ])
            .split(area);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BUTTON_WIDTH - 4), Constraint::Min(0)])
            .split(chunks[0]);

        let board = center_rect(chunks[3], CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let mut cells = [Rect::default(); 9];
        for pos in Position::ALL {
            cells[pos.to_index()] = Rect::new(
                board.x + pos.col() as u16 * CELL_WIDTH,
                board.y + pos.row() as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board);
        }

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(2),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .split(center_rect(chunks[4], BUTTON_WIDTH * 2 + 2, 3));

        Self {
            theme_button: header[0],
            title: header[1],
            status: chunks[1],
            scoreboard: chunks[2],
            cells,
            restart: controls[0],
            reset_scores: controls[2],
            help: chunks[5],
        }
    }

    /// Screen area of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Screen area of the restart button.
    pub fn restart_button(&self) -> Rect {
        self.restart
    }

    /// Screen area of the reset-scores button.
    pub fn reset_scores_button(&self) -> Rect {
        self.reset_scores
    }

    /// Screen area of the theme toggle button.
    pub fn theme_button(&self) -> Rect {
        self.theme_button
    }

    /// Finds the clickable element at terminal column `x`, row `y`.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        let point = ratatui::layout::Position::new(x, y);
        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| self.cell(*pos).contains(point))
        {
            return Some(Hit::Cell(pos));
        }
        if self.restart.contains(point) {
            Some(Hit::Restart)
        } else if self.reset_scores.contains(point) {
            Some(Hit::ResetScores)
        } else if self.theme_button.contains(point) {
            Some(Hit::ToggleTheme)
        } else {
            None
        }
    }
}

/// Renders the whole screen and returns the layout used.
pub fn draw(frame: &mut Frame, session: &Session, cursor: Position) -> ScreenLayout {
    let area = frame.area();
    let layout = ScreenLayout::new(area);
    let palette = Palette::for_theme(session.theme());
    let base = Style::default().bg(palette.background).fg(palette.foreground);

    frame.render_widget(Block::default().style(base), area);

    draw_header(frame, &layout, session, &palette);
    draw_board(frame, &layout, session, cursor, &palette);
    draw_controls(frame, &layout, &palette);

    let help = Paragraph::new(
        "←↑↓→ move · Enter/1-9 place · r restart · s reset scores · t theme · q quit",
    )
    .style(Style::default().fg(palette.muted))
    .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn draw_header(frame: &mut Frame, layout: &ScreenLayout, session: &Session, palette: &Palette) {
    let toggle = Paragraph::new(session.theme().toggle_label())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(toggle, layout.theme_button);

    // Title sits on the middle row of the header.
    let title = Paragraph::new("\nTic Tac Toe")
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let status_style = match session.game().status() {
        GameStatus::Won(player) => Style::default()
            .fg(palette.player(player))
            .add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        GameStatus::InProgress => Style::default().fg(palette.foreground),
    };
    let status = Paragraph::new(session.status_line())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(status, layout.status);

    let scores = session.scores();
    let scoreboard = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("X: {}", scores.get(Player::X)),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("O: {}", scores.get(Player::O)),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(scoreboard, layout.scoreboard);
}

fn draw_board(
    frame: &mut Frame,
    layout: &ScreenLayout,
    session: &Session,
    cursor: Position,
    palette: &Palette,
) {
    let game = session.game();
    let winning = game.winning_line();
    let show_cursor = game.status() == GameStatus::InProgress;

    for pos in Position::ALL {
        let (symbol, mut style) = match game.board().get(pos) {
            Square::Empty if game.is_playable(pos) => {
                (pos.number().to_string(), Style::default().fg(palette.muted))
            }
            Square::Empty => (" ".to_string(), Style::default().fg(palette.muted)),
            Square::Occupied(player) => (
                player.to_string(),
                Style::default()
                    .fg(palette.player(player))
                    .add_modifier(Modifier::BOLD),
            ),
        };
        if !game.is_playable(pos) && game.status().is_over() {
            style = style.add_modifier(Modifier::DIM);
        }
        if winning.is_some_and(|line| line.contains(&pos)) {
            style = style.bg(palette.highlight).remove_modifier(Modifier::DIM);
        }

        let border_style = if show_cursor && pos == cursor {
            Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        let border_type = if show_cursor && pos == cursor {
            BorderType::Thick
        } else {
            BorderType::Plain
        };

        let cell = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(border_style),
            );
        frame.render_widget(cell, layout.cell(pos));
    }
}

fn draw_controls(frame: &mut Frame, layout: &ScreenLayout, palette: &Palette) {
    let button = |label: &'static str, color: Color| {
        Paragraph::new(label)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            )
    };
    frame.render_widget(button("Restart Game", palette.accent), layout.restart);
    frame.render_widget(button("Reset Scores", palette.muted), layout.reset_scores);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(session: &Session) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                draw(frame, session, Position::Center);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn centre(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_renders_status_scores_and_toggle() {
        let mut session = Session::new(Theme::Light);
        let screen = render(&session);
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Turn: X"));
        assert!(screen.contains("X: 0"));
        assert!(screen.contains("O: 0"));
        assert!(screen.contains("Dark"));
        assert!(screen.contains("Restart Game"));
        assert!(screen.contains("Reset Scores"));

        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            session.place_mark(row, col);
        }
        session.toggle_theme();
        let screen = render(&session);
        assert!(screen.contains("X wins!"));
        assert!(screen.contains("X: 1"));
        assert!(screen.contains("Light"));
    }

    #[test]
    fn test_hit_test_finds_cells_and_buttons() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30));
        for pos in Position::ALL {
            let (x, y) = centre(layout.cell(pos));
            assert_eq!(layout.hit_test(x, y), Some(Hit::Cell(pos)));
        }
        let (x, y) = centre(layout.restart_button());
        assert_eq!(layout.hit_test(x, y), Some(Hit::Restart));
        let (x, y) = centre(layout.reset_scores_button());
        assert_eq!(layout.hit_test(x, y), Some(Hit::ResetScores));
        let (x, y) = centre(layout.theme_button());
        assert_eq!(layout.hit_test(x, y), Some(Hit::ToggleTheme));
        assert_eq!(layout.hit_test(79, 29), None);
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30));
        for a in Position::ALL {
            for b in Position::ALL {
                if a != b {
                    assert!(!layout.cell(a).intersects(layout.cell(b)));
                }
            }
        }
    }
}
