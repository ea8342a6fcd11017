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

//! Domain models and core data structures.
//!
//! This module defines the catalog entities returned by the search service,
//! exactly as they arrive on the wire. Nothing here is validated: a result
//! is a passive record that is only ever displayed.

pub(crate) mod debounce;
pub(crate) mod search;

use serde::Deserialize;

/// A single catalog entry returned by the search service.
///
/// Every field is optional, the service omits fields for some kinds of
/// entry (audiobooks, collections) and absent values simply render empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Track {
    pub(crate) track_id: Option<u64>,
    pub(crate) track_name: Option<String>,
    pub(crate) artist_name: Option<String>,
    pub(crate) collection_name: Option<String>,
    pub(crate) primary_genre_name: Option<String>,
    #[serde(rename = "artworkUrl100")]
    pub(crate) artwork_url_100: Option<String>,
}

/// Identifies a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TrackKey {
    Id(u64),
    Position(usize),
}

impl Track {
    pub(crate) fn key(&self, position: usize) -> TrackKey {
        self.track_id.map_or(TrackKey::Position(position), TrackKey::Id)
    }

    pub(crate) fn title(&self) -> &str {
        self.track_name.as_deref().unwrap_or_default()
    }

    pub(crate) fn artist(&self) -> &str {
        self.artist_name.as_deref().unwrap_or_default()
    }

    pub(crate) fn collection(&self) -> &str {
        self.collection_name.as_deref().unwrap_or_default()
    }

    pub(crate) fn genre(&self) -> &str {
        self.primary_genre_name.as_deref().unwrap_or_default()
    }

    pub(crate) fn artwork(&self) -> &str {
        self.artwork_url_100.as_deref().unwrap_or_default()
    }
}

/// The envelope of a search response.
///
/// `results` stays optional so that a body without the list can be told
/// apart from an empty list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchResponse {
    pub(crate) result_count: Option<u64>,
    pub(crate) results: Option<Vec<Track>>,
}
