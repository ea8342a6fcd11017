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

//! Visual styling and color configuration for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) input_fg: Color,
    pub(crate) placeholder_fg: Color,
    pub(crate) button_fg: Color,
    pub(crate) button_bg: Color,

    pub(crate) card_title_fg: Color,
    pub(crate) card_selected_border: Color,
    pub(crate) tag_bg: Color,
    pub(crate) tag_artist_fg: Color,
    pub(crate) tag_collection_fg: Color,
    pub(crate) tag_genre_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            muted_colour: Color::Rgb(162, 161, 166),
            error_colour: Color::Rgb(239, 83, 80),

            input_fg: Color::Rgb(255, 255, 255),
            placeholder_fg: Color::Rgb(120, 120, 128),
            button_fg: Color::Rgb(255, 255, 255),
            button_bg: Color::Rgb(29, 78, 216),

            card_title_fg: Color::Rgb(255, 255, 255),
            card_selected_border: Color::Rgb(250, 189, 47),
            tag_bg: Color::Rgb(55, 55, 65),
            tag_artist_fg: Color::Rgb(255, 215, 0),
            tag_collection_fg: Color::Rgb(179, 157, 219),
            tag_genre_fg: Color::Rgb(128, 203, 196),
        }
    }
}
