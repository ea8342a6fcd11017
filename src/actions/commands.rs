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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking
//! catalog requests from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppCommand`] requests into catalog searches and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Each search runs on its own short-lived thread, so a slow response never
//! holds up a newer search. Before starting a search the worker checks the
//! shared latest sequence number and skips any request that has already
//! been superseded. A search that is already running cannot be aborted;
//! its completion is discarded by the search controller when it arrives.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
        mpsc::{Receiver, Sender},
    },
    thread::{self, JoinHandle},
};
use tracing::debug;

use crate::{actions::events::AppEvent, catalog::Catalog, model::search::SearchRequest};

#[derive(Debug)]
pub(crate) enum AppCommand {
    Search(SearchRequest),
}

/// Spawns a background thread to process application commands.
///
/// The worker shares the catalog with the search threads it starts. It runs
/// until every command sender has been dropped, then waits for the searches
/// still in flight.
///
/// # Arguments
///
/// * `catalog` - The catalog searches are run against.
/// * `latest_seq` - Sequence number of the most recently issued search.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker<C>(
    catalog: C,
    latest_seq: Arc<AtomicU64>,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()>
where
    C: Catalog + 'static,
{
    let catalog = Arc::new(catalog);

    thread::spawn(move || {
        let mut searches: Vec<JoinHandle<()>> = vec![];

        while let Ok(command) = command_rx.recv() {
            searches.retain(|search| !search.is_finished());
            if let Some(search) = handle_command(&catalog, &latest_seq, command, &event_tx) {
                searches.push(search);
            }
        }

        for search in searches {
            let _ = search.join();
        }
        debug!("command worker finished");
    })
}

/// Orchestrates the execution of a single command, returning the thread
/// started for it, if any.
fn handle_command<C: Catalog + 'static>(
    catalog: &Arc<C>,
    latest_seq: &AtomicU64,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Option<JoinHandle<()>> {
    match command {
        AppCommand::Search(SearchRequest { seq, term }) => {
            let latest = latest_seq.load(Ordering::SeqCst);
            if seq < latest {
                debug!(seq, latest, term = %term, "skipping superseded search");
                return None;
            }

            let catalog = Arc::clone(catalog);
            let event_tx = event_tx.clone();

            Some(thread::spawn(move || {
                let outcome = catalog.search(&term);
                if event_tx.send(AppEvent::SearchCompleted { seq, outcome }).is_err() {
                    debug!(seq, "event loop gone, dropping search result");
                }
            }))
        }
    }
}
