//! Property-based tests for the formatting functions using proptest.

use charview::{
    Character,
    classes::{StyleMerger, UtilityMerger},
    date::{DatePolicy, format_last_seen_at},
    format::{NumberStyle, format_compact_number},
    locale::Locale,
    profile::{ProfileHosts, encode_uri_component},
    vocation::{ColorToken, ICON_UNKNOWN, vocation_to_color_token, vocation_to_icon},
};
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;

// --- Test Constants ---
const MAX_ELAPSED_SECS: i64 = 60 * 60 * 24 * 365 * 5;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// Strategy for class lists built from a small utility vocabulary, so
/// conflicts are frequent.
fn arb_classes() -> impl Strategy<Value = String> {
    let vocabulary = prop::sample::select(vec![
        "p-2", "p-4", "px-1", "pt-3", "m-2", "-mt-1", "text-lg", "text-sm", "text-red-500",
        "bg-blue-500", "hover:bg-red-500", "border", "border-2", "rounded-md", "rounded-t-lg",
        "flex", "hidden", "font-bold", "card", "!p-1", "md:p-2",
    ]);
    prop::collection::vec(vocabulary, 0..12).prop_map(|v| v.join(" "))
}

// --- Properties ---

proptest! {
    /// Property: values of at least a thousand always carry exactly one
    /// decimal and a suffix.
    #[test]
    fn prop_compact_suffixes(value in 1_000.0f64..1e15) {
        let out = format_compact_number(Some(value), NumberStyle::Plain, &Locale::PtBr);
        let suffix = out.chars().last().unwrap();
        prop_assert!(matches!(suffix, 'K' | 'M' | 'B'), "{}", out);
        let digits = &out[..out.len() - 1];
        let (_, decimals) = digits.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 1);
    }

    /// Property: values below a thousand never carry a suffix.
    #[test]
    fn prop_small_values_unsuffixed(value in -1e12f64..1_000.0) {
        for style in [NumberStyle::Grouped, NumberStyle::Plain] {
            let out = format_compact_number(Some(value), style, &Locale::PtBr);
            prop_assert!(!out.ends_with(['K', 'M', 'B']), "{}", out);
        }
    }

    /// Property: formatting never panics and is deterministic for any f64.
    #[test]
    fn prop_compact_total(bits in any::<u64>()) {
        let value = f64::from_bits(bits);
        let a = format_compact_number(Some(value), NumberStyle::Grouped, &Locale::PtBr);
        let b = format_compact_number(Some(value), NumberStyle::Grouped, &Locale::PtBr);
        prop_assert_eq!(a, b);
    }

    /// Property: relative dates under thirty days are always a bucket string,
    /// older ones always a dd/mm/yyyy date.
    #[test]
    fn prop_relative_buckets(secs in 0i64..MAX_ELAPSED_SECS) {
        let seen = now() - TimeDelta::seconds(secs);
        let utc = FixedOffset::east_opt(0).unwrap();
        let out =
            format_last_seen_at(Some(seen.into()), DatePolicy::Relative, now(), utc, &Locale::PtBr);
        if secs < 60 * 60 * 24 * 30 {
            prop_assert!(out == "Agora" || out.ends_with(" atrás"), "{}", out);
        } else {
            prop_assert_eq!(out.len(), 10);
            prop_assert_eq!(out.matches('/').count(), 2);
        }
    }

    /// Property: arbitrary text never escapes as an error.
    #[test]
    fn prop_date_text_total(text in ".*") {
        let utc = FixedOffset::east_opt(0).unwrap();
        for policy in [DatePolicy::Relative, DatePolicy::Absolute] {
            let out =
                format_last_seen_at(Some(text.as_str().into()), policy, now(), utc, &Locale::PtBr);
            prop_assert!(!out.is_empty());
        }
    }

    /// Property: any string maps to a token and icon, defaulting together.
    #[test]
    fn prop_vocation_total(vocation in ".*") {
        let token = vocation_to_color_token(&vocation);
        let icon = vocation_to_icon(&vocation);
        prop_assert!(ColorToken::ALL.contains(&token));
        prop_assert_eq!(token == ColorToken::Default, icon == ICON_UNKNOWN);
    }

    /// Property: encoded components only contain unreserved characters and
    /// percent escapes.
    #[test]
    fn prop_encoded_is_url_safe(name in ".*") {
        let encoded = encode_uri_component(&name);
        let url_safe = |c: char| c.is_ascii_alphanumeric() || "-_.!~*'()%".contains(c);
        prop_assert!(encoded.chars().all(url_safe));
    }

    /// Property: profile URLs always start with a configured base.
    #[test]
    fn prop_profile_url_uses_known_base(name in ".*", server in prop::option::of("[a-zA-Z]{0,8}")) {
        let hosts = ProfileHosts::default();
        let mut character = Character::new(name, "Antica");
        character.server = server;
        let url = hosts.profile_url(&character);
        prop_assert!(url.starts_with("https://"));
        prop_assert!(!url.contains(' '));
    }

    /// Property: merging is idempotent and only ever removes classes.
    #[test]
    fn prop_merge_idempotent(classes in arb_classes()) {
        let once = UtilityMerger.merge(&classes);
        let twice = UtilityMerger.merge(&once);
        prop_assert_eq!(&once, &twice);
        for class in once.split_whitespace() {
            prop_assert!(classes.split_whitespace().any(|c| c == class));
        }
    }

    /// Property: the last class in the input always survives.
    #[test]
    fn prop_merge_keeps_last(classes in arb_classes()) {
        let merged = UtilityMerger.merge(&classes);
        if let Some(last) = classes.split_whitespace().last() {
            prop_assert_eq!(merged.split_whitespace().last(), Some(last));
        }
    }
}
