//! Integration tests for the public formatting surface.

use charview::{
    Character, Formatter,
    classes::{ClassValue, merge_classes},
    cn,
    date::{DatePolicy, format_last_seen_at},
    format::{NumberStyle, format_compact_number},
    locale::Locale,
    profile::build_profile_url,
    roster::parse_roster,
    vocation::{
        BadgeVariant, ColorToken, ICON_UNKNOWN, VocationToken, vocation_to_badge_variant,
        vocation_to_color_token, vocation_to_icon,
    },
};
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};

const VOCATIONS: [&str; 8] = [
    "Sorcerer",
    "Master Sorcerer",
    "Druid",
    "Elder Druid",
    "Paladin",
    "Royal Paladin",
    "Knight",
    "Elite Knight",
];

// --- Test Helpers ---

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn brasilia() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).unwrap()
}

fn compact(value: f64) -> String {
    format_compact_number(Some(value), NumberStyle::Grouped, &Locale::PtBr)
}

// --- Test Cases ---

#[test]
fn compact_number_falsy_inputs() {
    assert_eq!(compact(0.0), "0");
    assert_eq!(compact(f64::NAN), "0");
    assert_eq!(format_compact_number(None, NumberStyle::Grouped, &Locale::PtBr), "0");
}

#[test]
fn compact_number_suffixes() {
    assert_eq!(compact(1500.0), "1.5K");
    assert_eq!(compact(2_500_000.0), "2.5M");
    assert_eq!(compact(3_100_000_000.0), "3.1B");
}

#[test]
fn compact_number_below_thousand_is_unsuffixed() {
    for style in [NumberStyle::Grouped, NumberStyle::Plain] {
        assert_eq!(format_compact_number(Some(999.0), style, &Locale::PtBr), "999");
    }
}

#[test]
fn recognised_vocations_map_into_closed_sets() {
    for vocation in VOCATIONS {
        assert_ne!(vocation_to_color_token(vocation), ColorToken::Default, "{vocation}");
        assert!(BadgeVariant::ALL.contains(&vocation_to_badge_variant(vocation)));
        assert_ne!(vocation_to_icon(vocation), ICON_UNKNOWN, "{vocation}");
    }
}

#[test]
fn unrecognised_vocations_map_to_defaults() {
    for vocation in ["", "None", "Monk", "sorcerer supreme", "Knight\u{0}"] {
        assert_eq!(vocation_to_color_token(vocation), ColorToken::Default);
        assert_eq!(vocation_to_badge_variant(vocation), BadgeVariant::Default);
        assert_eq!(vocation_to_icon(vocation), ICON_UNKNOWN);
    }
}

#[test]
fn profile_url_unknown_server_uses_default_host() {
    let character = Character::new("John Doe", "Antica").with_server("unknown");
    let url = build_profile_url(&character);
    assert!(url.starts_with("https://www.tibia.com/"));
    assert!(url.ends_with("name=John%20Doe"));
    assert!(!url.contains(' '));
}

#[test]
fn relative_dates() {
    let fmt = |delta: TimeDelta| {
        format_last_seen_at(
            Some((now() - delta).into()),
            DatePolicy::Relative,
            now(),
            brasilia(),
            &Locale::PtBr,
        )
    };
    assert_eq!(fmt(TimeDelta::seconds(90)), "1m atrás");
    assert_eq!(fmt(TimeDelta::hours(5)), "5h atrás");
    assert_eq!(fmt(TimeDelta::days(3)), "3d atrás");
    assert_eq!(fmt(TimeDelta::days(40)), "06/05/2024");
}

#[test]
fn absolute_dates() {
    let fmt = |input: Option<&str>| {
        let input = input.map(Into::into);
        format_last_seen_at(input, DatePolicy::Absolute, now(), brasilia(), &Locale::PtBr)
    };
    assert_eq!(fmt(Some("2024-06-15T11:58:00Z")), "15/06/2024 08:58");
    assert_eq!(fmt(None), "-");
    assert_eq!(fmt(Some("garbage")), "Data inválida");
}

#[test]
fn class_merging() {
    let is_error = true;
    assert_eq!(
        cn!(
            "inline-flex items-center rounded-md px-2.5 py-0.5",
            ("bg-destructive", is_error),
            "bg-primary"
        ),
        "inline-flex items-center rounded-md px-2.5 py-0.5 bg-primary"
    );
    assert_eq!(merge_classes(&[ClassValue::from(None::<&str>), ClassValue::from(false)]), "");
}

#[test]
fn merged_classes_merge_to_themselves() {
    let merged = cn!("p-2 p-4 text-sm text-lg", "hover:bg-red-500 hover:bg-blue-500");
    assert_eq!(merged, "p-4 text-lg hover:bg-blue-500");
    assert_eq!(cn!(&merged), merged);
}

#[test]
fn default_formatter_agrees_with_free_functions() {
    let formatter = Formatter::default();
    let character = Character::new("Sir Ünïcode", "Taleon San").with_server("taleon");

    assert_eq!(formatter.profile_url(&character), build_profile_url(&character));
    assert_eq!(formatter.compact_number(Some(123_456.0)), compact(123_456.0));
    assert_eq!(formatter.vocation_icon("Druid"), vocation_to_icon("Druid"));
    assert_eq!(
        formatter.vocation_token("Druid"),
        VocationToken::Color(vocation_to_color_token("Druid"))
    );
}

#[test]
fn demo_roster_renders() {
    let roster = parse_roster(include_str!("../demos/roster.json")).unwrap();
    let formatter = Formatter::default();

    for character in &roster {
        assert!(!formatter.profile_url(character).is_empty());
        assert!(!formatter.compact_number(character.experience).is_empty());
        assert!(!formatter.last_seen_at(character.last_seen.as_ref(), now()).is_empty());
    }
}
