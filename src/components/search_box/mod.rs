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

//! Search text input.
//!
//! This module wraps a `tui-input` text buffer. Every edit that changes the
//! text is reported to the caller, which feeds it to the search controller's
//! debounce timer.

mod event;
mod render;

use tui_input::Input;

pub(crate) const PLACEHOLDER: &str = "Search...";
pub(crate) const RESET_LABEL: &str = "[ Reset ^R ]";

pub(crate) struct SearchBox {
    pub(crate) input: Input,
}

impl SearchBox {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn clear(&mut self) {
        self.input.reset();
    }
}
