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

//! "Last seen" date formatting.
//!
//! Two display policies exist and a deployment picks exactly one of them:
//!
//! * [`DatePolicy::Relative`]: `"Agora"`, `"5m atrás"`, `"3h atrás"`,
//!   `"12d atrás"`, falling back to a calendar date after thirty days.
//! * [`DatePolicy::Absolute`]: always `"dd/MM/yyyy HH:mm"`.
//!
//! Neither policy ever fails. Missing input and unparseable input are mapped
//! to fixed placeholder strings.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::LocaleFormatter;

pub const NEVER: &str = "Nunca";
pub const NOW: &str = "Agora";
pub const INVALID_DATE: &str = "Data inválida";
pub const NO_DATE: &str = "-";

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    #[default]
    Relative,
    Absolute,
}

impl DatePolicy {
    /// Placeholder shown when there is no date at all.
    pub const fn missing(self) -> &'static str {
        match self {
            DatePolicy::Relative => NEVER,
            DatePolicy::Absolute => NO_DATE,
        }
    }
}

/// A date as handed over by the caller, either raw text or an instant that
/// has already been parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput<'a> {
    Text(&'a str),
    Instant(DateTime<Utc>),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(instant: DateTime<Utc>) -> Self {
        DateInput::Instant(instant)
    }
}

impl From<DateTime<FixedOffset>> for DateInput<'_> {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        DateInput::Instant(instant.with_timezone(&Utc))
    }
}

/// Naive date-times are taken to be UTC.
impl From<NaiveDateTime> for DateInput<'_> {
    fn from(instant: NaiveDateTime) -> Self {
        DateInput::Instant(instant.and_utc())
    }
}

/// Parses the textual timestamp forms accepted for "last seen" values.
///
/// Offset-less forms are interpreted as UTC and a bare date as UTC midnight.
/// Returns `None` when no form matches.
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Formats a "last seen" value relative to `now`.
///
/// # Arguments
///
/// * `input` - The date to format, `None` when the character was never seen.
/// * `policy` - Relative buckets or an absolute timestamp.
/// * `now` - The reference instant for relative buckets.
/// * `offset` - The timezone calendar dates are displayed in.
/// * `locale` - Renders calendar dates.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeDelta, Utc};
/// use charview::date::{DatePolicy, format_last_seen_at};
/// use charview::locale::Locale;
///
/// let now = Utc::now();
/// let utc = FixedOffset::east_opt(0).unwrap();
/// let seen = now - TimeDelta::seconds(90);
///
/// let relative =
///     |input| format_last_seen_at(input, DatePolicy::Relative, now, utc, &Locale::PtBr);
///
/// assert_eq!(relative(Some(seen.into())), "1m atrás");
/// assert_eq!(relative(None), "Nunca");
/// ```
pub fn format_last_seen_at(
    input: Option<DateInput<'_>>,
    policy: DatePolicy,
    now: DateTime<Utc>,
    offset: FixedOffset,
    locale: &dyn LocaleFormatter,
) -> String {
    let instant = match input {
        None => return policy.missing().to_string(),
        Some(DateInput::Text(text)) if text.trim().is_empty() => {
            return policy.missing().to_string();
        }
        Some(DateInput::Text(text)) => match parse_instant(text) {
            Some(instant) => instant,
            None => {
                tracing::debug!(input = text, "unparseable date");
                return INVALID_DATE.to_string();
            }
        },
        Some(DateInput::Instant(instant)) => instant,
    };

    let local = instant.with_timezone(&offset);
    match policy {
        DatePolicy::Absolute => locale.format_date_time(local.naive_local()),
        DatePolicy::Relative => relative(now - instant)
            .unwrap_or_else(|| locale.format_date(local.date_naive())),
    }
}

/// Formats a "last seen" value against the system clock.
pub fn format_last_seen(
    input: Option<DateInput<'_>>,
    policy: DatePolicy,
    offset: FixedOffset,
    locale: &dyn LocaleFormatter,
) -> String {
    format_last_seen_at(input, policy, Utc::now(), offset, locale)
}

/// Buckets an elapsed duration, `None` once it reaches thirty days.
///
/// Negative durations (instants in the future) count as "now".
fn relative(elapsed: TimeDelta) -> Option<String> {
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        Some(NOW.to_string())
    } else if minutes < 60 {
        Some(format!("{minutes}m atrás"))
    } else if hours < 24 {
        Some(format!("{hours}h atrás"))
    } else if days < 30 {
        Some(format!("{days}d atrás"))
    } else {
        None
    }
}
