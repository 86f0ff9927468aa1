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

//! # Character display formatting.
//!
//! Presentation helpers for a game-character tracker: compact numbers,
//! relative "last seen" dates, vocation colours and icons, profile links and
//! CSS class merging. Every formatting function is pure and returns a
//! defined value for every input, falling back to placeholder strings
//! instead of failing.
//!
//! Locale rendering and class conflict resolution are injected through the
//! [`locale::LocaleFormatter`] and [`classes::StyleMerger`] traits;
//! [`formatter::Formatter`] bundles them with the display policies of a
//! deployment.

pub mod classes;
pub mod config;
pub mod date;
pub mod format;
pub mod formatter;
pub mod locale;
pub mod logging;
pub mod model;
pub mod profile;
pub mod roster;
pub mod vocation;

pub use formatter::Formatter;
pub use model::{Character, Vocation};
