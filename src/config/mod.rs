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
//! This module manages the application configuration file. Each deployment
//! picks its display policies here: the date policy, the number style for
//! small values, the vocation token scheme and the profile host table.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    date::DatePolicy,
    format::NumberStyle,
    locale::Locale,
    profile::{DEFAULT_PROFILE_BASE, DEFAULT_SERVERS, ProfileHosts},
    vocation::TokenScheme,
};

pub const CONFIG_NAME: &str = "charview";

/// Brasília time, UTC-3 all year round.
const DEFAULT_UTC_OFFSET_MINUTES: i32 = -180;

const DEFAULT_LOG_FILTER: &str = "charview=warn";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub locale: Locale,
    pub date_policy: DatePolicy,
    pub number_style: NumberStyle,
    pub token_scheme: TokenScheme,
    pub utc_offset_minutes: i32,
    pub default_profile_host: String,
    pub profile_hosts: BTreeMap<String, String>,
    pub roster_file: Option<String>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            locale: Locale::default(),
            date_policy: DatePolicy::default(),
            number_style: NumberStyle::default(),
            token_scheme: TokenScheme::default(),
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            default_profile_host: DEFAULT_PROFILE_BASE.to_string(),
            profile_hosts: DEFAULT_SERVERS
                .iter()
                .map(|(server, base)| (server.to_string(), base.to_string()))
                .collect(),
            roster_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn profile_hosts(&self) -> ProfileHosts {
        ProfileHosts::new(
            self.profile_hosts.iter().map(|(k, v)| (k.clone(), v.clone())),
            self.default_profile_host.clone(),
        )
    }
}

/// Loads the configuration.
///
/// A missing file is created with the defaults. A file that exists but cannot
/// be parsed is an error, so callers can keep the user's file untouched.
pub fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, confy::ConfyError> {
    confy::load_path(path)
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

pub fn save_config_to(path: &Path, cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store_path(path, cfg)
}

pub fn config_path() -> Result<PathBuf, confy::ConfyError> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
}
