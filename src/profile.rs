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

//! Character profile links.
//!
//! Each server publishes character pages under its own host. A base URL is
//! picked by the character's server and the percent-encoded name is appended
//! to it. Bases may embed a `{world}` placeholder for servers that give every
//! world its own subdomain.

use std::collections::BTreeMap;

use crate::model::Character;

pub const DEFAULT_PROFILE_BASE: &str = "https://www.tibia.com/community/?subtopic=characters&name=";

pub const WORLD_PLACEHOLDER: &str = "{world}";

/// Built-in server table, keyed by lower-case server name.
pub const DEFAULT_SERVERS: [(&str, &str); 3] = [
    ("tibia", DEFAULT_PROFILE_BASE),
    ("rubinot", "https://rubinot.com.br/?subtopic=characters&name="),
    ("taleon", "https://{world}.taleon.online/characterprofile.php?name="),
];

/// Lookup table from server name to profile base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHosts {
    servers: BTreeMap<String, String>,
    default_base: String,
}

impl Default for ProfileHosts {
    fn default() -> Self {
        Self::new(
            DEFAULT_SERVERS
                .iter()
                .map(|(server, base)| (server.to_string(), base.to_string())),
            DEFAULT_PROFILE_BASE,
        )
    }
}

impl ProfileHosts {
    /// Creates a table; server keys are matched case-insensitively.
    pub fn new(
        servers: impl IntoIterator<Item = (String, String)>,
        default_base: impl Into<String>,
    ) -> Self {
        Self {
            servers: servers
                .into_iter()
                .map(|(server, base)| (normalize_key(&server), base))
                .collect(),
            default_base: default_base.into(),
        }
    }

    /// Returns the base URL for `server`, or the default base when the server
    /// is absent or unknown.
    pub fn base_for(&self, server: Option<&str>) -> &str {
        let Some(server) = server.map(normalize_key).filter(|s| !s.is_empty()) else {
            return &self.default_base;
        };

        match self.servers.get(&server) {
            Some(base) => base,
            None => {
                tracing::debug!(server = %server, "unknown server, using default profile host");
                &self.default_base
            }
        }
    }

    /// Builds the profile URL for `character`.
    pub fn profile_url(&self, character: &Character) -> String {
        let base = self.base_for(character.server.as_deref());

        let mut url = if base.contains(WORLD_PLACEHOLDER) {
            let world = encode_uri_component(&character.world.trim().to_lowercase());
            base.replace(WORLD_PLACEHOLDER, &world)
        } else {
            base.to_string()
        };

        url.push_str(&encode_uri_component(&character.name));
        url
    }
}

/// Builds a profile URL using the built-in server table.
///
/// # Examples
///
/// ```
/// use charview::model::Character;
/// use charview::profile::build_profile_url;
///
/// let character = Character::new("John Doe", "Antica").with_server("unknown");
/// assert_eq!(
///     build_profile_url(&character),
///     "https://www.tibia.com/community/?subtopic=characters&name=John%20Doe"
/// );
/// ```
pub fn build_profile_url(character: &Character) -> String {
    ProfileHosts::default().profile_url(character)
}

/// Percent-encodes `input` for use inside a URL query component.
///
/// ASCII letters, digits and `- _ . ! ~ * ' ( )` are kept; every other byte
/// of the UTF-8 encoding becomes `%XX` with upper-case hex digits.
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    out
}

const fn is_unreserved(byte: u8) -> bool {
    matches!(
        byte,
        b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9'
            | b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
    )
}

fn normalize_key(server: &str) -> String {
    server.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("John Doe"), "John%20Doe");
        assert_eq!(encode_uri_component("a&b=c/d?"), "a%26b%3Dc%2Fd%3F");
        assert_eq!(encode_uri_component("Sir O'Neil (II)!"), "Sir%20O'Neil%20(II)!");
        assert_eq!(encode_uri_component("João"), "Jo%C3%A3o");
        assert_eq!(encode_uri_component(""), "");
    }

    #[test]
    fn known_servers_select_their_base() {
        let c = Character::new("Bubble", "Antica").with_server("Rubinot");
        assert_eq!(
            build_profile_url(&c),
            "https://rubinot.com.br/?subtopic=characters&name=Bubble"
        );
    }

    #[test]
    fn missing_and_unknown_servers_use_default() {
        let expected = "https://www.tibia.com/community/?subtopic=characters&name=John%20Doe";
        let c = Character::new("John Doe", "Antica");
        assert_eq!(build_profile_url(&c), expected);
        assert_eq!(build_profile_url(&c.clone().with_server("unknown")), expected);
        assert_eq!(build_profile_url(&c.with_server("  ")), expected);
    }

    #[test]
    fn templated_base_substitutes_world() {
        let c = Character::new("Mage Lord", "San ").with_server("taleon");
        assert_eq!(
            build_profile_url(&c),
            "https://san.taleon.online/characterprofile.php?name=Mage%20Lord"
        );
    }

    #[test]
    fn custom_table() {
        let hosts = ProfileHosts::new(
            [("Local".to_string(), "http://localhost/{world}/?name=".to_string())],
            "http://fallback/?name=",
        );
        let c = Character::new("A B", "New World").with_server("LOCAL");
        assert_eq!(hosts.profile_url(&c), "http://localhost/new%20world/?name=A%20B");
        assert_eq!(hosts.base_for(Some("other")), "http://fallback/?name=");
    }
}
