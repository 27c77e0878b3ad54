mod config;
mod error;
mod kanban_board;
mod render;
mod seed;
mod surface;
mod task;
#[cfg(test)]
mod test_support;
mod ui;

use anyhow::Context;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kanban_board::KanbanBoard;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::File, io, path::Path, sync::Mutex};
use surface::BoardView;
use tracing_subscriber::EnvFilter;

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config.log_file)?;

    let tasks = seed::load_seed(config.seed.as_deref())?;
    let mut board = KanbanBoard::new(tasks, BoardView::new(), config.board_options());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run_app(&mut terminal, &mut board);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => tracing::info!(tasks = board.tasks().len(), "board closed"),
        Err(err) => tracing::error!(error = %err, "board loop failed"),
    }
    result.context("terminal event loop failed")
}
