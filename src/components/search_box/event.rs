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

//! Input handling for the search box.

use crossterm::event::Event;
use tui_input::backend::crossterm::EventHandler;

use crate::components::SearchBox;

impl SearchBox {
    /// Delegates the event to the managed input and returns the new text if
    /// the event changed it.
    ///
    /// Cursor movement alone returns `None`, only edits restart the search
    /// countdown.
    pub(crate) fn handle_event(&mut self, event: &Event) -> Option<String> {
        let before = self.input.value().to_string();
        self.input.handle_event(event);

        let after = self.input.value();
        (after != before).then(|| after.to_string())
    }
}
