// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Music Catalog Search TUI.
//!
//! A terminal search-as-you-type client for the iTunes music catalog.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background worker that talks to the catalog.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering and the
//!   debounce timer for the search text.
//! * A **Background Worker** performs the blocking catalog requests.
//! * An **Input Thread** captures keyboard input and forwards it to the
//!   event loop.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even if the event loop fails. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.

mod actions;
mod catalog;
mod components;
mod config;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::info;

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    catalog::ItunesCatalog,
    components::{CardGrid, SearchBox},
    config::AppConfig,
    model::search::SearchController,
    theme::Theme,
};

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub search: SearchController,

    pub search_box: SearchBox,
    pub card_grid: CardGrid,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: &AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let search = SearchController::new(config.fallback_term.clone(), config.debounce());

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            command_tx,
            search,
            search_box: SearchBox::new(),
            card_grid: CardGrid::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration, installs logging, sets up the communication
/// channels, manages the terminal lifecycle, and returns an error if any
/// part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let log_dir = config::config_dir().context("Failed to locate configuration directory")?;
    let _log_guard = util::logging::init(&log_dir)?;

    info!(search_url = %config.search_url, debounce_ms = config.debounce_ms, "starting");

    let catalog = ItunesCatalog::new(&config).context("Failed to create catalog client")?;

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(&config, command_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, catalog, command_rx);
    restore_terminal(&mut terminal);

    info!("exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// Enables raw mode to capture all keyboard input and switches the terminal
/// to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * A command worker to run catalog searches.
/// * An input thread to poll for terminal events.
///
/// It then issues the initial search and hands control to
/// [`process_events`] to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    catalog: ItunesCatalog,
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    // Spawn a background worker to run catalog searches off the UI thread.
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(catalog, app.search.latest_seq(), command_rx, command_event_tx);

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx_input.send(AppEvent::Key(key)).ok();
                }
                Ok(Event::Resize(..)) => {
                    tx_input.send(AppEvent::Resize).ok();
                }
                Ok(_) => {}
                Err(e) => {
                    tx_input.send(AppEvent::InputFailed(e.to_string())).ok();
                    break;
                }
            }
        }
    });

    // Populate the grid without waiting for input
    actions::events::activate(app)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
