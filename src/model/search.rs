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

//! Search-as-you-type state.
//!
//! This module provides the [`SearchController`], which owns the current
//! query text, the latest result set and the pending debounce timer. It turns
//! keystrokes into rate-limited [`SearchRequest`]s and applies completed
//! searches back onto the result set.
//!
//! The controller never performs I/O itself. Operations that issue a search
//! return the request, and the caller hands it to the command worker. Every
//! request carries a sequence number; a completion is only applied if it
//! belongs to the most recently issued request, so a slow response can never
//! overwrite the results of a newer one.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use tracing::{debug, info, warn};

use crate::{catalog::CatalogError, model::Track, model::debounce::Debounce};

/// A single outbound search, tagged with the sequence number it was issued
/// under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchRequest {
    pub(crate) seq: u64,
    pub(crate) term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchStatus {
    Idle,
    Searching(String),
    Ready(usize),
    Failed(String),
}

pub(crate) struct SearchController {
    query: String,
    results: Vec<Track>,
    status: SearchStatus,

    pending: Debounce<String>,
    fallback_term: String,

    activated: bool,
    next_seq: u64,
    active_seq: Option<u64>,

    // Shared with the command worker so it can skip superseded requests
    latest_seq: Arc<AtomicU64>,
}

impl SearchController {
    pub(crate) fn new(fallback_term: impl Into<String>, delay: Duration) -> Self {
        Self {
            query: String::new(),
            results: vec![],
            status: SearchStatus::Idle,
            pending: Debounce::new(delay),
            fallback_term: fallback_term.into(),
            activated: false,
            next_seq: 1,
            active_seq: None,
            latest_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn results(&self) -> &[Track] {
        &self.results
    }

    pub(crate) fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub(crate) fn latest_seq(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.latest_seq)
    }

    /// Issues the initial fallback search.
    ///
    /// Only the first call produces a request.
    pub(crate) fn activate(&mut self) -> Option<SearchRequest> {
        if self.activated {
            return None;
        }
        self.activated = true;

        let term = self.fallback_term.clone();
        Some(self.execute_search(&term))
    }

    /// Records new query text and restarts the debounce countdown.
    ///
    /// Nothing is sent until [`poll`](Self::poll) observes the deadline.
    pub(crate) fn set_query_text(&mut self, text: &str, now: Instant) {
        self.query = text.to_string();
        self.pending.schedule(self.query.clone(), now);
        debug!(query = %self.query, "search scheduled");
    }

    /// Returns the request for the pending query if its deadline has passed.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
        self.pending
            .take_due(now)
            .map(|term| self.execute_search(&term))
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.pending.deadline()
    }

    /// Issues exactly one search for `term`, or for the fallback term when
    /// `term` is empty.
    pub(crate) fn execute_search(&mut self, term: &str) -> SearchRequest {
        let term = if term.is_empty() {
            self.fallback_term.clone()
        } else {
            term.to_string()
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.active_seq = Some(seq);
        self.latest_seq.store(seq, Ordering::SeqCst);

        info!(seq, term = %term, "search issued");
        self.status = SearchStatus::Searching(term.clone());

        SearchRequest { seq, term }
    }

    /// Clears the query, cancels any pending search and immediately issues
    /// the fallback search.
    pub(crate) fn reset(&mut self) -> SearchRequest {
        self.query.clear();
        self.pending.cancel();

        let term = self.fallback_term.clone();
        self.execute_search(&term)
    }

    /// Applies a completed search.
    ///
    /// Returns `false` if the completion belongs to a superseded request and
    /// was discarded. A failed search leaves an empty result set.
    pub(crate) fn complete(&mut self, seq: u64, outcome: Result<Vec<Track>, CatalogError>) -> bool {
        if self.active_seq != Some(seq) {
            warn!(seq, active = ?self.active_seq, "discarding stale search response");
            return false;
        }

        match outcome {
            Ok(results) => {
                debug!(seq, count = results.len(), "search results applied");
                self.status = SearchStatus::Ready(results.len());
                self.results = results;
            }
            Err(e) => {
                warn!(seq, error = %e, "search failed");
                self.status = SearchStatus::Failed(e.to_string());
                self.results.clear();
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    fn controller() -> SearchController {
        SearchController::new("pop", DELAY)
    }

    fn track(id: u64, name: &str) -> Track {
        Track {
            track_id: Some(id),
            track_name: Some(name.to_string()),
            ..Track::default()
        }
    }

    #[test]
    fn activation_issues_fallback_search_once() {
        let mut search = controller();

        let request = search.activate().unwrap();
        assert_eq!(request.term, "pop");
        assert_eq!(search.status(), &SearchStatus::Searching("pop".to_string()));

        assert_eq!(search.activate(), None);
    }

    #[test]
    fn burst_collapses_to_final_text() {
        let start = Instant::now();
        let mut search = controller();
        let mut sent = vec![];

        for (i, text) in ["j", "ja", "jaz", "jazz"].iter().enumerate() {
            let now = start + Duration::from_millis(100 * i as u64);
            search.set_query_text(text, now);
            sent.extend(search.poll(now));
        }

        assert!(sent.is_empty());

        let last_keystroke = start + Duration::from_millis(300);
        sent.extend(search.poll(last_keystroke + DELAY - Duration::from_millis(1)));
        assert!(sent.is_empty());

        sent.extend(search.poll(last_keystroke + DELAY));
        sent.extend(search.poll(last_keystroke + DELAY * 4));

        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].term, "jazz");
        assert_eq!(search.query(), "jazz");
    }

    #[test]
    fn separated_inputs_each_search_once() {
        let start = Instant::now();
        let mut search = controller();
        let mut sent = vec![];

        search.set_query_text("rock", start);
        sent.extend(search.poll(start + DELAY));

        let later = start + DELAY * 3;
        search.set_query_text("rock ballad", later);
        sent.extend(search.poll(later + DELAY));
        sent.extend(search.poll(later + DELAY * 2));

        let terms: Vec<_> = sent.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, ["rock", "rock ballad"]);
        assert!(sent[0].seq < sent[1].seq);
    }

    #[test]
    fn reset_clears_query_and_searches_immediately() {
        let start = Instant::now();
        let mut search = controller();

        search.set_query_text("metal", start);
        let request = search.reset();

        assert_eq!(request.term, "pop");
        assert_eq!(search.query(), "");
        assert_eq!(search.next_deadline(), None);

        // The cancelled timer never fires
        assert_eq!(search.poll(start + DELAY * 2), None);
    }

    #[test]
    fn empty_term_uses_fallback() {
        let mut search = controller();

        assert_eq!(search.execute_search("").term, "pop");
        assert_eq!(search.execute_search("   ").term, "   ");
        assert_eq!(search.execute_search("blues").term, "blues");
    }

    #[test]
    fn clearing_the_input_searches_fallback_after_delay() {
        let start = Instant::now();
        let mut search = controller();

        search.set_query_text("x", start);
        search.set_query_text("", start + Duration::from_millis(10));

        let request = search.poll(start + Duration::from_millis(10) + DELAY).unwrap();
        assert_eq!(request.term, "pop");
    }

    #[test]
    fn completion_replaces_results_in_order() {
        let mut search = controller();
        let request = search.activate().unwrap();

        assert!(search.complete(request.seq, Ok(vec![track(1, "One"), track(2, "Two")])));

        let names: Vec<_> = search.results().iter().map(|t| t.title()).collect();
        assert_eq!(names, ["One", "Two"]);
        assert_eq!(search.status(), &SearchStatus::Ready(2));

        let request = search.execute_search("other");
        assert!(search.complete(request.seq, Ok(vec![track(3, "Three")])));
        assert_eq!(search.results(), &[track(3, "Three")]);
    }

    #[test]
    fn round_trip_applies_results_for_issued_term() {
        let start = Instant::now();
        let mut search = controller();
        let response = vec![track(10, "Take Five"), track(11, "Blue in Green")];

        search.set_query_text("jazz", start);
        let request = search.poll(start + DELAY).unwrap();
        assert_eq!(request.term, "jazz");

        assert!(search.complete(request.seq, Ok(response.clone())));
        assert_eq!(search.results(), response.as_slice());
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_results() {
        let start = Instant::now();
        let mut search = controller();

        search.set_query_text("a", start);
        let first = search.poll(start + DELAY).unwrap();

        let later = start + DELAY + Duration::from_millis(50);
        search.set_query_text("ab", later);
        let second = search.poll(later + DELAY).unwrap();

        // "ab" answers first, then the slower "a" response arrives
        assert!(search.complete(second.seq, Ok(vec![track(2, "ab")])));
        assert!(!search.complete(first.seq, Ok(vec![track(1, "a")])));

        assert_eq!(search.results(), &[track(2, "ab")]);
        assert_eq!(search.status(), &SearchStatus::Ready(1));
    }

    #[test]
    fn response_issued_before_reset_is_discarded() {
        let mut search = controller();

        let before = search.execute_search("grunge");
        let after = search.reset();

        assert!(!search.complete(before.seq, Ok(vec![track(1, "grunge")])));
        assert!(search.complete(after.seq, Ok(vec![])));
        assert!(search.results().is_empty());
    }

    #[test]
    fn failure_clears_results() {
        let mut search = controller();

        let first = search.execute_search("folk");
        search.complete(first.seq, Ok(vec![track(1, "folk")]));

        let second = search.execute_search("folk rock");
        assert!(search.complete(second.seq, Err(CatalogError::MissingResults)));

        assert!(search.results().is_empty());
        assert!(matches!(search.status(), SearchStatus::Failed(_)));
    }

    #[test]
    fn issuing_publishes_latest_sequence() {
        let mut search = controller();
        let latest = search.latest_seq();

        let request = search.execute_search("soul");

        assert_eq!(latest.load(Ordering::SeqCst), request.seq);
    }
}
