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

//! Input handling and event processing for the card grid.
//!
//! Only non-editing keys are taken here, so that every character the user
//! types still reaches the search box.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::CardGrid;

impl CardGrid {
    /// Applies grid navigation, returning `true` if the event was consumed.
    pub(crate) fn process_event(&mut self, event: &Event) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Down, _) => self.goto_row_below(),
            (KeyCode::Up, _) => self.goto_row_above(),
            (KeyCode::Tab, _) => self.goto_next(),
            (KeyCode::BackTab, _) => self.goto_previous(),
            (KeyCode::PageDown, _) => self.goto_page_forward(),
            (KeyCode::PageUp, _) => self.goto_page_back(),

            // Plain Home and End belong to the search box
            (KeyCode::Home, KeyModifiers::CONTROL) => self.goto_first(),
            (KeyCode::End, KeyModifiers::CONTROL) => self.goto_last(),

            _ => return false,
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::model::Track;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn navigation_keys_are_consumed() {
        let mut grid = CardGrid::new();
        grid.set_results(&vec![Track::default(); 3]);

        assert!(grid.process_event(&key(KeyCode::Tab)));
        assert!(grid.process_event(&key(KeyCode::Tab)));
        assert_eq!(grid.selected(), Some(2));

        assert!(grid.process_event(&key(KeyCode::BackTab)));
        assert_eq!(grid.selected(), Some(1));

        let ctrl_home = Event::Key(KeyEvent::new(KeyCode::Home, KeyModifiers::CONTROL));
        assert!(grid.process_event(&ctrl_home));
        assert_eq!(grid.selected(), Some(0));
    }

    #[test]
    fn typing_keys_pass_through() {
        let mut grid = CardGrid::new();

        assert!(!grid.process_event(&key(KeyCode::Char('j'))));
        assert!(!grid.process_event(&key(KeyCode::Backspace)));
        assert!(!grid.process_event(&key(KeyCode::Left)));
        assert!(!grid.process_event(&key(KeyCode::Home)));
    }
}
