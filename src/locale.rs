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

//! Locale-aware number and date rendering.
//!
//! Formatting functions never hard-wire a locale; they receive a
//! [`LocaleFormatter`] instead. [`Locale`] provides the two conventions the
//! application ships with.
//!
//! # Conventions
//!
//! | Locale  | Integer   | Decimal  | Date         | Date and time          |
//! |---------|-----------|----------|--------------|------------------------|
//! | `PtBr`  | `1.234`   | `12,5`   | `01/05/2024` | `01/05/2024 14:30`     |
//! | `EnUs`  | `1,234`   | `12.5`   | `05/01/2024` | `05/01/2024 02:30 PM`  |

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Number of fraction digits kept by [`LocaleFormatter::format_decimal`].
const MAX_FRACTION_DIGITS: usize = 3;

/// Capability for rendering numbers and calendar values for display.
pub trait LocaleFormatter: Send + Sync {
    /// Renders an integer with the locale's thousands grouping.
    fn format_integer(&self, value: i64) -> String;

    /// Renders a real number with thousands grouping and up to three
    /// fraction digits, trailing zeros removed.
    fn format_decimal(&self, value: f64) -> String;

    /// Renders a calendar date (day, month and year).
    fn format_date(&self, date: NaiveDate) -> String;

    /// Renders a date with hours and minutes.
    fn format_date_time(&self, date_time: NaiveDateTime) -> String;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-br")]
    PtBr,
    #[serde(rename = "en-us")]
    EnUs,
}

impl Locale {
    const fn separators(self) -> (char, char) {
        match self {
            Locale::PtBr => ('.', ','),
            Locale::EnUs => (',', '.'),
        }
    }
}

impl LocaleFormatter for Locale {
    fn format_integer(&self, value: i64) -> String {
        let (group, _) = self.separators();
        let digits = group_digits(&value.unsigned_abs().to_string(), group);
        if value < 0 {
            format!("-{digits}")
        } else {
            digits
        }
    }

    fn format_decimal(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let (group, decimal) = self.separators();

        let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
        let scaled = value.abs() * scale;
        let rounded = if scaled.is_finite() { scaled.round() / scale } else { value.abs() };
        if rounded == 0.0 {
            return "0".to_string();
        }

        let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, rounded);
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(fixed.len() + 4);
        if value < 0.0 {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, group));
        if !frac_part.is_empty() {
            out.push(decimal);
            out.push_str(frac_part);
        }
        out
    }

    fn format_date(&self, date: NaiveDate) -> String {
        match self {
            Locale::PtBr => date.format("%d/%m/%Y").to_string(),
            Locale::EnUs => date.format("%m/%d/%Y").to_string(),
        }
    }

    fn format_date_time(&self, date_time: NaiveDateTime) -> String {
        match self {
            Locale::PtBr => date_time.format("%d/%m/%Y %H:%M").to_string(),
            Locale::EnUs => date_time.format("%m/%d/%Y %I:%M %p").to_string(),
        }
    }
}

/// Inserts `separator` between every group of three digits, counting from
/// the right. `digits` must be ASCII digits only.
fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
