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

//! Character roster files.
//!
//! A roster is a JSON array of [`Character`] objects. Only `name` and
//! `world` are required; every other field may be omitted.

use std::{fs, io, path::{Path, PathBuf}};

use thiserror::Error;

use crate::model::Character;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed roster {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses a roster document.
pub fn parse_roster(json: &str) -> Result<Vec<Character>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads and parses the roster file at `path`.
///
/// # Errors
///
/// Returns [`RosterError::Io`] if the file cannot be read and
/// [`RosterError::Json`] if it is not a valid roster.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Character>, RosterError> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let characters = parse_roster(&json).map_err(|source| RosterError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), count = characters.len(), "loaded roster");
    Ok(characters)
}
