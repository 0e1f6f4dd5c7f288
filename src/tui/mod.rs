//! Terminal UI.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, key_command, mouse_command, move_cursor};
pub use ui::{Hit, Palette, ScreenLayout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::config::Settings;

/// Runs the game until the user quits.
///
/// Takes over the terminal and restores it before returning, including
/// when the event loop fails.
#[instrument(skip(settings), fields(theme = %settings.theme()))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*settings.theme());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?app.session().scores(), "Leaving Tic Tac Toe TUI");
    res
}

/// Draw, wait for one event, apply it; repeat.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let mut layout = None;
        terminal.draw(|frame| {
            layout = Some(ui::draw(frame, app.session(), app.cursor()));
        })?;
        if let Some(layout) = layout {
            app.set_layout(layout);
        }

        let event = event::read()?;
        app.handle_event(&event);
    }
    Ok(())
}
