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

//! Display formatting facade.
//!
//! [`Formatter`] bundles the injected capabilities (a [`LocaleFormatter`] and
//! a [`StyleMerger`]) with the display policies chosen for a deployment, so
//! rendering code calls a single object instead of threading every option
//! through each call.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::{
    classes::{ClassValue, StyleMerger, UtilityMerger, join_classes},
    config::AppConfig,
    date::{DateInput, DatePolicy, format_last_seen_at},
    format::{NumberStyle, format_compact_number},
    locale::LocaleFormatter,
    model::Character,
    profile::ProfileHosts,
    vocation::{TokenScheme, VocationToken, vocation_to_icon, vocation_token},
};

pub struct Formatter {
    locale: Box<dyn LocaleFormatter>,
    merger: Box<dyn StyleMerger>,
    date_policy: DatePolicy,
    number_style: NumberStyle,
    token_scheme: TokenScheme,
    offset: FixedOffset,
    hosts: ProfileHosts,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl Formatter {
    /// Creates a formatter with the policies and capabilities named by
    /// `config`.
    ///
    /// An out-of-range `utc_offset_minutes` falls back to UTC.
    pub fn from_config(config: &AppConfig) -> Self {
        let offset = FixedOffset::east_opt(config.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| {
                tracing::warn!(
                    minutes = config.utc_offset_minutes,
                    "invalid display offset, using UTC"
                );
                Utc.fix()
            });

        Self {
            locale: Box::new(config.locale),
            merger: Box::new(UtilityMerger),
            date_policy: config.date_policy,
            number_style: config.number_style,
            token_scheme: config.token_scheme,
            offset,
            hosts: config.profile_hosts(),
        }
    }

    pub fn with_locale(mut self, locale: impl LocaleFormatter + 'static) -> Self {
        self.locale = Box::new(locale);
        self
    }

    pub fn with_merger(mut self, merger: impl StyleMerger + 'static) -> Self {
        self.merger = Box::new(merger);
        self
    }

    pub fn with_date_policy(mut self, policy: DatePolicy) -> Self {
        self.date_policy = policy;
        self
    }

    pub fn with_number_style(mut self, style: NumberStyle) -> Self {
        self.number_style = style;
        self
    }

    pub fn with_token_scheme(mut self, scheme: TokenScheme) -> Self {
        self.token_scheme = scheme;
        self
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_hosts(mut self, hosts: ProfileHosts) -> Self {
        self.hosts = hosts;
        self
    }

    pub fn date_policy(&self) -> DatePolicy {
        self.date_policy
    }

    pub fn number_style(&self) -> NumberStyle {
        self.number_style
    }

    pub fn token_scheme(&self) -> TokenScheme {
        self.token_scheme
    }

    pub fn merge_classes(&self, values: &[ClassValue<'_>]) -> String {
        self.merger.merge(&join_classes(values))
    }

    pub fn compact_number(&self, value: Option<f64>) -> String {
        format_compact_number(value, self.number_style, self.locale.as_ref())
    }

    pub fn last_seen<'a>(&self, input: Option<impl Into<DateInput<'a>>>) -> String {
        self.last_seen_at(input, Utc::now())
    }

    /// Like [`Formatter::last_seen`], with an explicit reference instant.
    pub fn last_seen_at<'a>(
        &self,
        input: Option<impl Into<DateInput<'a>>>,
        now: DateTime<Utc>,
    ) -> String {
        format_last_seen_at(
            input.map(Into::into),
            self.date_policy,
            now,
            self.offset,
            self.locale.as_ref(),
        )
    }

    pub fn vocation_token(&self, vocation: &str) -> VocationToken {
        vocation_token(vocation, self.token_scheme)
    }

    pub fn vocation_icon(&self, vocation: &str) -> &'static str {
        vocation_to_icon(vocation)
    }

    pub fn profile_url(&self, character: &Character) -> String {
        self.hosts.profile_url(character)
    }
}
