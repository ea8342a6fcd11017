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

//! Responsive grid of result cards.
//!
//! This module keeps the view state of the result grid: which card is
//! selected and which row is scrolled to the top. Cards are identified by
//! their [`TrackKey`], so when a new result set arrives the selection stays on
//! the same track if it is still present.
//!
//! The number of columns depends on the width of the area the grid was last
//! drawn into, which is why navigation uses the layout remembered by
//! [`draw`](CardGrid::draw).

mod event;
mod render;

use std::collections::HashSet;

use crate::model::{Track, TrackKey};

pub(crate) const CARD_HEIGHT: u16 = 7;
pub(crate) const MIN_CARD_WIDTH: u16 = 32;
pub(crate) const MAX_COLUMNS: u16 = 3;

pub(crate) const EMPTY_PLACEHOLDER: &str = "No Results found";

pub(crate) struct CardGrid {
    keys: Vec<TrackKey>,
    selected: usize,
    offset_row: usize,
    columns: usize,
    visible_rows: usize,
}

/// The number of columns that fit in `width`.
pub(crate) fn columns_for(width: u16) -> usize {
    (width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS) as usize
}

/// Keys for each card in response order.
///
/// A `trackId` seen earlier in the same response falls back to its position
/// so every card keeps a distinct key.
pub(crate) fn card_keys(tracks: &[Track]) -> Vec<TrackKey> {
    let mut seen = HashSet::new();
    tracks
        .iter()
        .enumerate()
        .map(|(position, track)| match track.key(position) {
            TrackKey::Id(id) if !seen.insert(id) => TrackKey::Position(position),
            key => key,
        })
        .collect()
}

impl CardGrid {
    pub(crate) fn new() -> Self {
        Self {
            keys: vec![],
            selected: 0,
            offset_row: 0,
            columns: 1,
            visible_rows: 1,
        }
    }

    /// Replaces the cards, keeping the selection on the same track when it
    /// survives the update.
    pub(crate) fn set_results(&mut self, tracks: &[Track]) {
        let previous = self.selected_key();
        self.keys = card_keys(tracks);

        self.selected = previous
            .and_then(|key| self.keys.iter().position(|k| *k == key))
            .unwrap_or(0);

        if self.selected == 0 {
            self.offset_row = 0;
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        (!self.keys.is_empty()).then_some(self.selected)
    }

    pub(crate) fn selected_key(&self) -> Option<TrackKey> {
        self.keys.get(self.selected).copied()
    }

    fn select(&mut self, index: usize) {
        if let Some(last) = self.keys.len().checked_sub(1) {
            self.selected = index.min(last);
        }
    }

    fn goto_next(&mut self) {
        self.select(self.selected + 1);
    }

    fn goto_previous(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    fn goto_row_below(&mut self) {
        let target = self.selected + self.columns;
        if target < self.keys.len() {
            self.select(target);
        }
    }

    fn goto_row_above(&mut self) {
        if self.selected >= self.columns {
            self.select(self.selected - self.columns);
        }
    }

    fn goto_page_forward(&mut self) {
        self.select(self.selected + self.columns * self.visible_rows);
    }

    fn goto_page_back(&mut self) {
        self.select(self.selected.saturating_sub(self.columns * self.visible_rows));
    }

    fn goto_first(&mut self) {
        self.select(0);
    }

    fn goto_last(&mut self) {
        self.select(usize::MAX);
    }

    /// Records the layout of the last draw and scrolls so the selected row is
    /// visible.
    fn update_layout(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);

        let row = self.selected / self.columns;
        if row < self.offset_row {
            self.offset_row = row;
        } else if row >= self.offset_row + self.visible_rows {
            self.offset_row = row + 1 - self.visible_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks(ids: &[u64]) -> Vec<Track> {
        ids.iter()
            .map(|id| Track {
                track_id: Some(*id),
                ..Track::default()
            })
            .collect()
    }

    #[test]
    fn columns_follow_width() {
        assert_eq!(columns_for(10), 1);
        assert_eq!(columns_for(64), 2);
        assert_eq!(columns_for(96), 3);
        assert_eq!(columns_for(400), 3);
    }

    #[test]
    fn keys_follow_response_order() {
        let mut results = tracks(&[1, 2]);
        results.push(Track::default());

        assert_eq!(
            card_keys(&results),
            [TrackKey::Id(1), TrackKey::Id(2), TrackKey::Position(2)]
        );
    }

    #[test]
    fn repeated_track_ids_get_distinct_keys() {
        let keys = card_keys(&tracks(&[5, 6, 5]));

        assert_eq!(keys, [TrackKey::Id(5), TrackKey::Id(6), TrackKey::Position(2)]);
    }

    #[test]
    fn selection_stays_on_repeated_card() {
        let mut grid = CardGrid::new();
        grid.set_results(&tracks(&[5, 6, 5]));
        grid.goto_last();

        grid.set_results(&tracks(&[5, 6, 5]));

        assert_eq!(grid.selected(), Some(2));
    }

    #[test]
    fn selection_follows_track_across_updates() {
        let mut grid = CardGrid::new();
        grid.set_results(&tracks(&[1, 2, 3]));
        grid.goto_last();
        assert_eq!(grid.selected_key(), Some(TrackKey::Id(3)));

        grid.set_results(&tracks(&[3, 4]));
        assert_eq!(grid.selected(), Some(0));

        grid.goto_next();
        grid.set_results(&tracks(&[9]));
        assert_eq!(grid.selected_key(), Some(TrackKey::Id(9)));
    }

    #[test]
    fn empty_grid_has_no_selection() {
        let mut grid = CardGrid::new();
        grid.set_results(&[]);
        grid.goto_next();

        assert_eq!(grid.selected(), None);
        assert_eq!(grid.selected_key(), None);
    }

    #[test]
    fn row_navigation_moves_by_column_count() {
        let mut grid = CardGrid::new();
        grid.set_results(&tracks(&[1, 2, 3, 4, 5, 6, 7]));
        grid.update_layout(3, 2);

        grid.goto_row_below();
        assert_eq!(grid.selected(), Some(3));
        grid.goto_row_below();
        assert_eq!(grid.selected(), Some(6));

        // No card directly below, stay put
        grid.goto_row_below();
        assert_eq!(grid.selected(), Some(6));

        grid.goto_row_above();
        assert_eq!(grid.selected(), Some(3));
    }

    #[test]
    fn selected_row_is_scrolled_into_view() {
        let mut grid = CardGrid::new();
        grid.set_results(&tracks(&(1..=12).collect::<Vec<_>>()));

        grid.update_layout(2, 2);
        grid.goto_page_forward();
        grid.update_layout(2, 2);
        assert_eq!(grid.selected(), Some(4));
        assert_eq!(grid.offset_row, 1);

        grid.goto_first();
        grid.update_layout(2, 2);
        assert_eq!(grid.offset_row, 0);
    }
}
