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

//! Vocation to colour token and icon mappings.
//!
//! Vocations arrive as free text. Anything that does not parse as one of the
//! eight known vocations maps to the default token and the generic icon.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Vocation, VocationFamily};

// Family icons (Emoji)
pub const ICON_SORCERER: &str = "\u{1F525}";
pub const ICON_DRUID: &str = "\u{1F33F}";
pub const ICON_PALADIN: &str = "\u{1F3F9}";
pub const ICON_KNIGHT: &str = "\u{2694}\u{FE0F}";

// Unknown or missing vocation.
pub const ICON_UNKNOWN: &str = "\u{1F464}";

/// Which closed token set vocations are mapped onto.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenScheme {
    /// One token per vocation family, see [`ColorToken`].
    #[default]
    Family,
    /// UI badge variants, see [`BadgeVariant`].
    Severity,
}

/// Per-family semantic colour token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Sorcerer,
    Druid,
    Paladin,
    Knight,
    Default,
}

impl ColorToken {
    pub const ALL: [ColorToken; 5] = [
        ColorToken::Sorcerer,
        ColorToken::Druid,
        ColorToken::Paladin,
        ColorToken::Knight,
        ColorToken::Default,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorToken::Sorcerer => "sorcerer",
            ColorToken::Druid => "druid",
            ColorToken::Paladin => "paladin",
            ColorToken::Knight => "knight",
            ColorToken::Default => "default",
        }
    }
}

/// Badge variant token, as used by severity-styled UI components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Success,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 4] = [
        BadgeVariant::Default,
        BadgeVariant::Secondary,
        BadgeVariant::Destructive,
        BadgeVariant::Success,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Success => "success",
        }
    }
}

/// A token from whichever scheme is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocationToken {
    Color(ColorToken),
    Badge(BadgeVariant),
}

impl VocationToken {
    pub const fn as_str(self) -> &'static str {
        match self {
            VocationToken::Color(token) => token.as_str(),
            VocationToken::Badge(variant) => variant.as_str(),
        }
    }

    pub const fn is_default(self) -> bool {
        matches!(
            self,
            VocationToken::Color(ColorToken::Default) | VocationToken::Badge(BadgeVariant::Default)
        )
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VocationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn family_of(vocation: &str) -> Option<VocationFamily> {
    let family = Vocation::parse(vocation).map(Vocation::family);
    if family.is_none() {
        tracing::debug!(vocation, "unrecognized vocation");
    }
    family
}

pub fn vocation_to_color_token(vocation: &str) -> ColorToken {
    match family_of(vocation) {
        Some(VocationFamily::Sorcerer) => ColorToken::Sorcerer,
        Some(VocationFamily::Druid) => ColorToken::Druid,
        Some(VocationFamily::Paladin) => ColorToken::Paladin,
        Some(VocationFamily::Knight) => ColorToken::Knight,
        None => ColorToken::Default,
    }
}

pub fn vocation_to_badge_variant(vocation: &str) -> BadgeVariant {
    match family_of(vocation) {
        Some(VocationFamily::Knight) | None => BadgeVariant::Default,
        Some(VocationFamily::Paladin) => BadgeVariant::Secondary,
        Some(VocationFamily::Sorcerer) => BadgeVariant::Destructive,
        Some(VocationFamily::Druid) => BadgeVariant::Success,
    }
}

/// Maps a vocation onto the token set selected by `scheme`.
pub fn vocation_token(vocation: &str, scheme: TokenScheme) -> VocationToken {
    match scheme {
        TokenScheme::Family => VocationToken::Color(vocation_to_color_token(vocation)),
        TokenScheme::Severity => VocationToken::Badge(vocation_to_badge_variant(vocation)),
    }
}

/// Returns the glyph for a vocation; base and promoted ranks share one.
pub fn vocation_to_icon(vocation: &str) -> &'static str {
    match family_of(vocation) {
        Some(VocationFamily::Sorcerer) => ICON_SORCERER,
        Some(VocationFamily::Druid) => ICON_DRUID,
        Some(VocationFamily::Paladin) => ICON_PALADIN,
        Some(VocationFamily::Knight) => ICON_KNIGHT,
        None => ICON_UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_tokens() {
        assert_eq!(vocation_to_color_token("Master Sorcerer"), ColorToken::Sorcerer);
        assert_eq!(vocation_to_color_token("Druid"), ColorToken::Druid);
        assert_eq!(vocation_to_color_token("Royal Paladin"), ColorToken::Paladin);
        assert_eq!(vocation_to_color_token("Elite Knight"), ColorToken::Knight);
        assert_eq!(vocation_to_color_token("None"), ColorToken::Default);
        assert_eq!(vocation_to_color_token(""), ColorToken::Default);
    }

    #[test]
    fn badge_variants() {
        assert_eq!(vocation_to_badge_variant("Elite Knight"), BadgeVariant::Default);
        assert_eq!(vocation_to_badge_variant("Paladin"), BadgeVariant::Secondary);
        assert_eq!(vocation_to_badge_variant("Sorcerer"), BadgeVariant::Destructive);
        assert_eq!(vocation_to_badge_variant("Elder Druid"), BadgeVariant::Success);
        assert_eq!(vocation_to_badge_variant("Monk"), BadgeVariant::Default);
    }

    #[test]
    fn scheme_selects_token_set() {
        assert_eq!(vocation_token("Druid", TokenScheme::Family).as_str(), "druid");
        assert_eq!(vocation_token("Druid", TokenScheme::Severity).as_str(), "success");
        assert!(vocation_token("???", TokenScheme::Family).is_default());
        assert!(vocation_token("???", TokenScheme::Severity).is_default());
    }

    #[test]
    fn promoted_and_base_share_icon() {
        for vocation in Vocation::ALL {
            let base = match vocation.family() {
                VocationFamily::Sorcerer => "Sorcerer",
                VocationFamily::Druid => "Druid",
                VocationFamily::Paladin => "Paladin",
                VocationFamily::Knight => "Knight",
            };
            assert_eq!(vocation_to_icon(vocation.name()), vocation_to_icon(base));
            assert_ne!(vocation_to_icon(vocation.name()), ICON_UNKNOWN);
        }
        assert_eq!(vocation_to_icon("Elite Knight"), "\u{2694}\u{FE0F}");
        assert_eq!(vocation_to_icon(""), ICON_UNKNOWN);
    }
}
