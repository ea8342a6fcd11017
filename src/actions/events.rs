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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (search completions), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Wait**: While a search is pending, the loop waits no longer than the
//!    time left on the debounce timer, so the timer fires on time even when
//!    no events arrive.
//! 3. **Process**: The [`process_events`] function updates the [`App`] state
//!    and sends due searches to the command worker.
//! 4. **Render**: After each wake-up the UI is re-drawn using the `ratatui`
//!    terminal.

use std::{
    io::Stdout,
    sync::mpsc::RecvTimeoutError,
    time::{Duration, Instant},
};

use anyhow::{Context, Result, bail};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::error;

use crate::{
    App,
    actions::commands::AppCommand,
    catalog::CatalogError,
    model::{Track, search::SearchRequest},
    render::draw,
};

// Upper bound on how long the loop sleeps when no search is pending
const IDLE_WAIT: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize,

    SearchCompleted {
        seq: u64,
        outcome: Result<Vec<Track>, CatalogError>,
    },

    ExitApplication,

    // The terminal stopped delivering input
    InputFailed(String),
}

/// Issues the initial search when the interface first comes up.
pub(crate) fn activate(app: &mut App) -> Result<()> {
    if let Some(request) = app.search.activate() {
        send_search(app, request)?;
    }
    Ok(())
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    loop {
        match app.event_rx.recv_timeout(wait_timeout(app, Instant::now())) {
            Ok(AppEvent::ExitApplication) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(event) => handle_event(app, event)?,
            Err(RecvTimeoutError::Timeout) => {}
        }

        dispatch_due_search(app, Instant::now())?;

        // Render after every wake-up
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// How long the loop may sleep before the pending search, if any, is due.
fn wait_timeout(app: &App, now: Instant) -> Duration {
    app.search
        .next_deadline()
        .map_or(IDLE_WAIT, |deadline| deadline.saturating_duration_since(now))
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::SearchCompleted { seq, outcome } => {
            if app.search.complete(seq, outcome) {
                app.card_grid.set_results(app.search.results());
            }
        }

        AppEvent::InputFailed(message) => {
            error!(%message, "terminal input failed");
            bail!("Terminal input failed: {message}");
        }

        AppEvent::Resize | AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Sends the pending search to the worker once its debounce delay is over.
fn dispatch_due_search(app: &mut App, now: Instant) -> Result<()> {
    if let Some(request) = app.search.poll(now) {
        send_search(app, request)?;
    }
    Ok(())
}

fn send_search(app: &App, request: SearchRequest) -> Result<()> {
    app.command_tx
        .send(AppCommand::Search(request))
        .context("Command worker is not running")
}

/// Maps keyboard input to application actions.
///
/// Application keys (quit, reset) are taken first, then grid navigation;
/// anything left is an edit of the search text.
///
/// # Errors
///
/// Returns an error if a command fails to send to the background worker.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            app.search_box.clear();
            let request = app.search.reset();
            send_search(app, request)?;
        }

        _ => {
            let event = Event::Key(key);
            if app.card_grid.process_event(&event) {
                return Ok(());
            }

            if let Some(text) = app.search_box.handle_event(&event) {
                app.search.set_query_text(&text, Instant::now());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::config::AppConfig;

    fn app() -> (App, Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        (App::new(&AppConfig::default(), command_tx), command_rx)
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        process_key_event(app, KeyEvent::new(code, modifiers)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn sent_terms(command_rx: &Receiver<AppCommand>) -> Vec<String> {
        command_rx
            .try_iter()
            .map(|AppCommand::Search(request)| request.term)
            .collect()
    }

    fn track(id: u64) -> Track {
        Track {
            track_id: Some(id),
            ..Track::default()
        }
    }

    #[test]
    fn activation_sends_fallback_search_once() {
        let (mut app, command_rx) = app();

        activate(&mut app).unwrap();
        activate(&mut app).unwrap();

        assert_eq!(sent_terms(&command_rx), ["pop"]);
    }

    #[test]
    fn typing_is_debounced_until_deadline() {
        let (mut app, command_rx) = app();

        type_text(&mut app, "jazz");
        assert_eq!(app.search.query(), "jazz");
        assert!(sent_terms(&command_rx).is_empty());

        let deadline = app.search.next_deadline().unwrap();
        dispatch_due_search(&mut app, deadline).unwrap();

        assert_eq!(sent_terms(&command_rx), ["jazz"]);
    }

    #[test]
    fn reset_clears_input_and_searches_immediately() {
        let (mut app, command_rx) = app();
        type_text(&mut app, "metal");

        press(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);

        assert_eq!(app.search_box.value(), "");
        assert_eq!(app.search.query(), "");
        assert_eq!(app.search.next_deadline(), None);
        assert_eq!(sent_terms(&command_rx), ["pop"]);
    }

    #[test]
    fn escape_requests_exit() {
        let (mut app, _command_rx) = app();

        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn completion_updates_grid_and_stale_completion_is_ignored() {
        let (mut app, _command_rx) = app();
        let stale = app.search.execute_search("a");
        let current = app.search.execute_search("ab");

        handle_event(
            &mut app,
            AppEvent::SearchCompleted {
                seq: current.seq,
                outcome: Ok(vec![track(1), track(2)]),
            },
        )
        .unwrap();
        handle_event(
            &mut app,
            AppEvent::SearchCompleted {
                seq: stale.seq,
                outcome: Ok(vec![track(9)]),
            },
        )
        .unwrap();

        assert_eq!(app.search.results(), &[track(1), track(2)]);
        assert_eq!(app.card_grid.selected(), Some(0));
    }

    #[test]
    fn idle_loop_waits_the_idle_interval() {
        let (app, _command_rx) = app();

        assert_eq!(wait_timeout(&app, Instant::now()), IDLE_WAIT);
    }

    #[test]
    fn pending_search_bounds_the_wait() {
        let (mut app, _command_rx) = app();
        let start = Instant::now();
        let delay = AppConfig::default().debounce();

        app.search.set_query_text("jazz", start);

        assert_eq!(wait_timeout(&app, start), delay);
        assert_eq!(wait_timeout(&app, start + delay / 2), delay - delay / 2);
        assert_eq!(wait_timeout(&app, start + delay * 2), Duration::ZERO);
    }

    #[test]
    fn input_failure_stops_the_loop() {
        let (mut app, _command_rx) = app();

        let result = handle_event(&mut app, AppEvent::InputFailed("device gone".to_string()));

        assert!(result.unwrap_err().to_string().contains("device gone"));
    }

    #[test]
    fn navigation_keys_do_not_edit_query() {
        let (mut app, _command_rx) = app();
        type_text(&mut app, "ab");

        press(&mut app, KeyCode::Down, KeyModifiers::NONE);
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);

        assert_eq!(app.search.query(), "ab");
    }
}
