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

//! Remote music catalog access.
//!
//! This module wraps the catalog search endpoint. A search is a single
//! blocking `GET <search_url>?term=<term>` whose JSON body carries the
//! matches in a top-level `results` list.
//!
//! Requests block, so they are only ever made from the command worker, never
//! from the UI thread.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::AppConfig,
    model::{SearchResponse, Track},
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog returned HTTP {0}")]
    Status(u16),

    #[error("catalog response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("catalog response had no results list")]
    MissingResults,
}

/// A searchable source of tracks.
pub(crate) trait Catalog: Send + Sync {
    fn search(&self, term: &str) -> Result<Vec<Track>, CatalogError>;
}

pub(crate) struct ItunesCatalog {
    client: Client,
    search_url: String,
}

impl ItunesCatalog {
    pub(crate) fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
        })
    }
}

impl Catalog for ItunesCatalog {
    fn search(&self, term: &str) -> Result<Vec<Track>, CatalogError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("term", term)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;
        debug!(term, result_count = ?parsed.result_count, "catalog responded");

        parsed.results.ok_or(CatalogError::MissingResults)
    }
}
