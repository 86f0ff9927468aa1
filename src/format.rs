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

//! Compact number formatting for experience, gold and other large counts.

use serde::{Deserialize, Serialize};

use crate::locale::LocaleFormatter;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// How values below one thousand are rendered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    /// Locale-aware grouping and decimal separator, `-5.000` in pt-BR.
    #[default]
    Grouped,
    /// The bare numeric string, `-5000`.
    Plain,
}

/// Formats a number into a compact, human-readable string.
///
/// Values of at least a thousand, a million or a billion are scaled and
/// rendered with one decimal place and a `K`, `M` or `B` suffix. Anything
/// smaller (including negative numbers) is rendered according to `style`.
/// Absent, zero and non-finite values all render as `"0"`.
///
/// # Arguments
///
/// * `value` - The number to format, `None` when the caller has no value.
/// * `style` - How values below one thousand are rendered.
/// * `locale` - The formatter used by [`NumberStyle::Grouped`].
///
/// # Examples
///
/// ```
/// use charview::format::{NumberStyle, format_compact_number};
/// use charview::locale::Locale;
///
/// assert_eq!(format_compact_number(Some(1500.0), NumberStyle::Grouped, &Locale::PtBr), "1.5K");
/// assert_eq!(format_compact_number(Some(2_500_000.0), NumberStyle::Plain, &Locale::PtBr), "2.5M");
/// assert_eq!(format_compact_number(None, NumberStyle::Grouped, &Locale::PtBr), "0");
/// ```
pub fn format_compact_number(
    value: Option<f64>,
    style: NumberStyle,
    locale: &dyn LocaleFormatter,
) -> String {
    let value = match value {
        Some(v) if v != 0.0 && v.is_finite() => v,
        _ => return "0".to_string(),
    };

    if value >= BILLION {
        with_suffix(value / BILLION, "B")
    } else if value >= MILLION {
        with_suffix(value / MILLION, "M")
    } else if value >= THOUSAND {
        with_suffix(value / THOUSAND, "K")
    } else {
        match style {
            NumberStyle::Grouped => locale.format_decimal(value),
            NumberStyle::Plain => value.to_string(),
        }
    }
}

/// Renders `scaled` with exactly one decimal, rounding halves up.
fn with_suffix(scaled: f64, suffix: &str) -> String {
    let rounded = (scaled * 10.0).round() / 10.0;
    format!("{:.1}{}", rounded, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn compact(value: f64) -> String {
        format_compact_number(Some(value), NumberStyle::Grouped, &Locale::PtBr)
    }

    #[test]
    fn falsy_values_render_zero() {
        assert_eq!(compact(0.0), "0");
        assert_eq!(compact(f64::NAN), "0");
        assert_eq!(compact(f64::INFINITY), "0");
        assert_eq!(format_compact_number(None, NumberStyle::Plain, &Locale::PtBr), "0");
    }

    #[test]
    fn suffix_thresholds() {
        assert_eq!(compact(1000.0), "1.0K");
        assert_eq!(compact(1500.0), "1.5K");
        assert_eq!(compact(999_999.0), "1000.0K");
        assert_eq!(compact(1_000_000.0), "1.0M");
        assert_eq!(compact(2_500_000.0), "2.5M");
        assert_eq!(compact(3_100_000_000.0), "3.1B");
        assert_eq!(compact(1_250_000_000_000.0), "1250.0B");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(compact(1250.0), "1.3K");
        assert_eq!(compact(1249.0), "1.2K");
        assert_eq!(compact(4_450_000.0), "4.5M");
    }

    #[test]
    fn small_values_follow_style() {
        assert_eq!(compact(999.0), "999");
        assert_eq!(compact(12.5), "12,5");
        assert_eq!(compact(-5000.0), "-5.000");

        let plain = |v| format_compact_number(Some(v), NumberStyle::Plain, &Locale::PtBr);
        assert_eq!(plain(999.0), "999");
        assert_eq!(plain(12.5), "12.5");
        assert_eq!(plain(-5000.0), "-5000");
    }
}
