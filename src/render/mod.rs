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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event and whenever the debounce timer wakes the event
//! loop.

mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{App, render::status::draw_status};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the search box at the top, the result grid in
/// the middle and a single status line at the bottom.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    app.search_box.draw(f, outer[0], &app.theme);
    app.card_grid
        .draw(f, outer[1], app.search.results(), &app.theme);
    draw_status(f, outer[2], app);
}
