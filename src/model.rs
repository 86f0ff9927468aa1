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
//! This module defines the game characters displayed by the viewer and the
//! closed vocation enumeration they belong to. Characters are always supplied
//! by the caller; nothing in this crate mutates them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

/// A game character as read from a roster.
///
/// Only `name`, `world`, `server` and `vocation` take part in formatting
/// decisions, the remaining fields are display data for the viewer.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Character {
    pub name: String,
    pub world: String,
    #[serde(default)]
    pub server: Option<String>,
    /// A missing or `null` vocation reads as the empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vocation: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub experience: Option<f64>,
    #[serde(default)]
    pub last_seen: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Character {
    pub fn new(name: impl Into<String>, world: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            world: world.into(),
            ..Self::default()
        }
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn with_vocation(mut self, vocation: impl Into<String>) -> Self {
        self.vocation = vocation.into();
        self
    }
}

/// The vocation family, shared by the base and promoted rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocationFamily {
    Sorcerer,
    Druid,
    Paladin,
    Knight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocation {
    Sorcerer,
    MasterSorcerer,
    Druid,
    ElderDruid,
    Paladin,
    RoyalPaladin,
    Knight,
    EliteKnight,
}

impl Vocation {
    pub const ALL: [Vocation; 8] = [
        Vocation::Sorcerer,
        Vocation::MasterSorcerer,
        Vocation::Druid,
        Vocation::ElderDruid,
        Vocation::Paladin,
        Vocation::RoyalPaladin,
        Vocation::Knight,
        Vocation::EliteKnight,
    ];

    /// Parses a vocation name, tolerating case and surrounding whitespace.
    ///
    /// Returns `None` for anything outside the enumeration, including the
    /// empty string.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }

    /// The canonical display name, as the game spells it.
    pub const fn name(self) -> &'static str {
        match self {
            Vocation::Sorcerer => "Sorcerer",
            Vocation::MasterSorcerer => "Master Sorcerer",
            Vocation::Druid => "Druid",
            Vocation::ElderDruid => "Elder Druid",
            Vocation::Paladin => "Paladin",
            Vocation::RoyalPaladin => "Royal Paladin",
            Vocation::Knight => "Knight",
            Vocation::EliteKnight => "Elite Knight",
        }
    }

    pub const fn family(self) -> VocationFamily {
        match self {
            Vocation::Sorcerer | Vocation::MasterSorcerer => VocationFamily::Sorcerer,
            Vocation::Druid | Vocation::ElderDruid => VocationFamily::Druid,
            Vocation::Paladin | Vocation::RoyalPaladin => VocationFamily::Paladin,
            Vocation::Knight | Vocation::EliteKnight => VocationFamily::Knight,
        }
    }

    pub const fn is_promoted(self) -> bool {
        matches!(
            self,
            Vocation::MasterSorcerer
                | Vocation::ElderDruid
                | Vocation::RoyalPaladin
                | Vocation::EliteKnight
        )
    }
}

impl fmt::Display for Vocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vocation: {0:?}")]
pub struct UnknownVocation(pub String);

impl FromStr for Vocation {
    type Err = UnknownVocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vocation::parse(s).ok_or_else(|| UnknownVocation(s.to_string()))
    }
}
