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
//!
//! This module defines the viewer's color palette, maps vocation tokens to
//! terminal colors, and converts colors to the hexadecimal strings used for
//! terminal emulator styling.

use charview::vocation::{BadgeVariant, ColorToken, VocationToken};
use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,

    pub(crate) sorcerer_fg: Color,
    pub(crate) druid_fg: Color,
    pub(crate) paladin_fg: Color,
    pub(crate) knight_fg: Color,

    pub(crate) badge_default_fg: Color,
    pub(crate) badge_secondary_fg: Color,
    pub(crate) badge_destructive_fg: Color,
    pub(crate) badge_success_fg: Color,
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
            background_colour: Color::Rgb(24, 22, 30),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            muted_colour: Color::Rgb(162, 161, 166),

            sorcerer_fg: Color::Rgb(239, 83, 80),
            druid_fg: Color::Rgb(102, 187, 106),
            paladin_fg: Color::Rgb(255, 202, 40),
            knight_fg: Color::Rgb(100, 181, 246),

            badge_default_fg: Color::Rgb(255, 255, 255),
            badge_secondary_fg: Color::Rgb(179, 157, 219),
            badge_destructive_fg: Color::Rgb(239, 83, 80),
            badge_success_fg: Color::Rgb(102, 187, 106),
        }
    }

    /// Terminal colour for a vocation token.
    pub(crate) const fn token_colour(&self, token: VocationToken) -> Color {
        match token {
            VocationToken::Color(ColorToken::Sorcerer) => self.sorcerer_fg,
            VocationToken::Color(ColorToken::Druid) => self.druid_fg,
            VocationToken::Color(ColorToken::Paladin) => self.paladin_fg,
            VocationToken::Color(ColorToken::Knight) => self.knight_fg,
            VocationToken::Color(ColorToken::Default) => self.muted_colour,
            VocationToken::Badge(BadgeVariant::Default) => self.badge_default_fg,
            VocationToken::Badge(BadgeVariant::Secondary) => self.badge_secondary_fg,
            VocationToken::Badge(BadgeVariant::Destructive) => self.badge_destructive_fg,
            VocationToken::Badge(BadgeVariant::Success) => self.badge_success_fg,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Returns `None` for anything other than a [`Color::Rgb`] colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_only_for_rgb() {
        assert_eq!(Theme::to_hex(Color::Rgb(24, 22, 30)).as_deref(), Some("#18161e"));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }

    #[test]
    fn default_tokens_are_distinct_from_families() {
        let theme = Theme::default();
        let default = theme.token_colour(VocationToken::Color(ColorToken::Default));
        for token in [
            ColorToken::Sorcerer,
            ColorToken::Druid,
            ColorToken::Paladin,
            ColorToken::Knight,
        ] {
            assert_ne!(theme.token_colour(VocationToken::Color(token)), default);
        }
    }
}
