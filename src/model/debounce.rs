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

//! A single cancellable deferred value.
//!
//! [`Debounce`] holds at most one pending value together with the instant it
//! becomes due. Scheduling a new value replaces the previous one, so a burst
//! of calls collapses to the last value of the burst (trailing edge, no
//! max-wait).
//!
//! The timer does not run by itself. The owner passes the current time in
//! and asks whether the value is due, which keeps the event loop in charge
//! of when things happen and makes the behaviour testable without sleeping.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct Debounce<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debounce<T> {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Cancels any pending value and schedules `value` to become due after
    /// the configured delay.
    pub(crate) fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Takes the pending value if its deadline has been reached.
    pub(crate) fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((deadline, _)) if now >= deadline => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }
}
