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

//! Application configuration.
//!
//! This module manages the application configuration file. A missing or
//! unreadable file falls back to the defaults.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "tunesearch";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub search_url: String,
    pub fallback_term: String,
    pub debounce_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            search_url: "https://itunes.apple.com/search".to_string(),
            fallback_term: "pop".to_string(),
            debounce_ms: 500,
            request_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// The directory holding the configuration file, also used for the log.
pub fn config_dir() -> Result<PathBuf, confy::ConfyError> {
    let path = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    Ok(path.parent().map(PathBuf::from).unwrap_or_default())
}
