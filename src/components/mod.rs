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

//! Reusable UI components.
//!
//! Each component keeps its own view state and is split into a state module
//! (`mod.rs`), input handling (`event.rs`) and drawing (`render.rs`).
//!
//! * [`SearchBox`]: the search-as-you-type text input and its reset control.
//! * [`CardGrid`]: the responsive grid of result cards.

mod card_grid;
mod search_box;

pub(crate) use card_grid::CardGrid;
pub(crate) use search_box::SearchBox;
