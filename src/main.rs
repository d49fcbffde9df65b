mod config;
mod editor;
mod error;
mod form;
mod loader;
mod logging;
mod mode;
mod record;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use config::Config;
use editor::{Action, EditorState};
use loader::PendingLoad;

const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = Config::parse();
    let _log_guard = logging::init(&config.log_path())?;
    info!("roster starting");

    let mut state = EditorState::new();
    let mut pending = Some(loader::spawn(config.source()));

    // Set up terminal
    terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_loop(&mut terminal, &mut state, &mut pending);

    // Teardown runs even if the loop errored
    terminal::disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("roster exiting with {} records", state.records.len());
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut EditorState,
    pending: &mut Option<PendingLoad>,
) -> Result<()> {
    while state.running {
        if let Some(result) = pending.as_ref().and_then(PendingLoad::poll) {
            *pending = None;
            state.dispatch(Action::Loaded(result));
        }

        let visible_rows = ui::visible_rows(terminal.size()?.height);
        state.adjust_scroll(visible_rows);

        terminal.draw(|frame| {
            ui::draw(frame, state);
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                let action = editor::handle_key(state, key);
                state.dispatch(action);
            }
        }
    }
    Ok(())
}
