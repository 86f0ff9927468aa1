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

//! CSS class name composition.
//!
//! Class lists are built in two stages:
//!
//! 1. [`join_classes`] flattens a mix of strings, optional values and
//!    conditional pairs into a single space separated list, dropping
//!    anything falsy.
//! 2. A [`StyleMerger`] resolves conflicts between utility classes. When two
//!    classes set the same CSS property under the same variants the later one
//!    wins, so `"p-2 p-4"` becomes `"p-4"` and `"px-2 p-4"` becomes `"p-4"`.
//!
//! [`merge_classes`] and the [`cn!`](crate::cn) macro run both stages with the
//! default [`UtilityMerger`].

use std::{borrow::Cow, collections::HashSet};

/// A single input to [`join_classes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue<'a> {
    /// One or more whitespace separated class names.
    Text(Cow<'a, str>),
    /// Class names included only when the flag is set.
    Toggle(Cow<'a, str>, bool),
    List(Vec<ClassValue<'a>>),
    /// A falsy input, contributes nothing.
    Empty,
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(value: &'a str) -> Self {
        ClassValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ClassValue<'a> {
    fn from(value: &'a String) -> Self {
        ClassValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for ClassValue<'_> {
    fn from(value: String) -> Self {
        ClassValue::Text(Cow::Owned(value))
    }
}

/// Booleans on their own are never class names.
impl From<bool> for ClassValue<'_> {
    fn from(_: bool) -> Self {
        ClassValue::Empty
    }
}

impl<'a> From<(&'a str, bool)> for ClassValue<'a> {
    fn from((value, enabled): (&'a str, bool)) -> Self {
        ClassValue::Toggle(Cow::Borrowed(value), enabled)
    }
}

impl<'a, T: Into<ClassValue<'a>>> From<Option<T>> for ClassValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Empty, Into::into)
    }
}

impl<'a, T: Into<ClassValue<'a>>> From<Vec<T>> for ClassValue<'a> {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a> ClassValue<'a> {
    fn collect_tokens<'s>(&'s self, tokens: &mut Vec<&'s str>) {
        match self {
            ClassValue::Text(text) | ClassValue::Toggle(text, true) => {
                tokens.extend(text.split_whitespace());
            }
            ClassValue::List(values) => values.iter().for_each(|v| v.collect_tokens(tokens)),
            ClassValue::Toggle(_, false) | ClassValue::Empty => {}
        }
    }
}

/// Joins class values into a single space separated string, in order.
pub fn join_classes(values: &[ClassValue<'_>]) -> String {
    let mut tokens = Vec::new();
    values.iter().for_each(|v| v.collect_tokens(&mut tokens));
    tokens.join(" ")
}

/// Capability for resolving conflicting utility classes.
///
/// Implementations must keep the relative order of the classes they retain
/// and let the later of two conflicting classes win.
pub trait StyleMerger: Send + Sync {
    fn merge(&self, classes: &str) -> String;
}

/// Joins `values` and resolves conflicts with the default [`UtilityMerger`].
pub fn merge_classes(values: &[ClassValue<'_>]) -> String {
    UtilityMerger.merge(&join_classes(values))
}

/// Builds a merged class string from any mix of class-like values.
///
/// ```
/// use charview::cn;
///
/// let active = true;
/// let disabled: Option<&str> = None;
/// assert_eq!(
///     cn!("px-2 py-1 bg-red-500", ("bg-blue-500", active), disabled),
///     "px-2 py-1 bg-blue-500"
/// );
/// ```
#[macro_export]
macro_rules! cn {
    ($($value:expr),* $(,)?) => {
        $crate::classes::merge_classes(&[$($crate::classes::ClassValue::from($value)),*])
    };
}

/// Conflict resolution for utility-first class names.
///
/// Recognised utilities are grouped by the CSS property they set; a class is
/// dropped when a later class with the same variants claims its group.
/// Shorthands such as `p-*` also claim the groups they cover (`px-*`,
/// `pt-*`, ...). Unrecognised classes are only deduplicated.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtilityMerger;

impl StyleMerger for UtilityMerger {
    fn merge(&self, classes: &str) -> String {
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        let mut claimed: HashSet<String> = HashSet::new();
        let mut keep = vec![false; tokens.len()];

        for (i, token) in tokens.iter().enumerate().rev() {
            let class = ParsedClass::parse(token);
            keep[i] = match classify(class.base) {
                Some(group) => {
                    let fresh = claimed.insert(class.key(group));
                    if fresh {
                        for covered in covers(group) {
                            claimed.insert(class.key(covered));
                        }
                    }
                    fresh
                }
                None => claimed.insert(format!("={token}")),
            };
        }

        tokens
            .iter()
            .zip(keep)
            .filter_map(|(token, keep)| keep.then_some(*token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A class split into its variant prefix, importance and utility.
struct ParsedClass<'a> {
    variants: String,
    important: bool,
    base: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let mut variants = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        for (i, ch) in token.char_indices() {
            match ch {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    variants.push(&token[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        variants.sort_unstable();

        let mut base = &token[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!').or_else(|| base.strip_suffix('!')) {
            base = rest;
            important = true;
        }
        if let Some(rest) = base.strip_prefix('-').filter(|r| !r.is_empty()) {
            base = rest;
        }

        Self {
            variants: variants.join(":"),
            important,
            base,
        }
    }

    fn key(&self, group: &str) -> String {
        format!("{}|{}|{}", self.variants, self.important, group)
    }
}

const KEYWORDS: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("table", "display"),
    ("table-row", "display"),
    ("table-cell", "display"),
    ("contents", "display"),
    ("flow-root", "display"),
    ("list-item", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("truncate", "text-overflow"),
    ("sr-only", "sr"),
    ("not-sr-only", "sr"),
    ("grow", "grow"),
    ("shrink", "shrink"),
    ("border", "border-w"),
    ("rounded", "rounded"),
    ("shadow", "shadow"),
    ("ring", "ring-w"),
    ("outline", "outline-style"),
    ("transition", "transition"),
];

// Longer prefixes precede the shorter ones they share a start with.
const PREFIXES: &[(&str, &str)] = &[
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("ps-", "ps"),
    ("pe-", "pe"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("ms-", "ms"),
    ("me-", "me"),
    ("m-", "m"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("min-w-", "min-w"),
    ("min-h-", "min-h"),
    ("max-w-", "max-w"),
    ("max-h-", "max-h"),
    ("size-", "size"),
    ("w-", "w"),
    ("h-", "h"),
    ("inset-x-", "inset-x"),
    ("inset-y-", "inset-y"),
    ("inset-", "inset"),
    ("top-", "top"),
    ("right-", "right"),
    ("bottom-", "bottom"),
    ("left-", "left"),
    ("start-", "start"),
    ("end-", "end"),
    ("z-", "z"),
    ("opacity-", "opacity"),
    ("order-", "order"),
    ("leading-", "leading"),
    ("tracking-", "tracking"),
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("justify-", "justify-content"),
    ("items-", "align-items"),
    ("content-", "align-content"),
    ("self-", "align-self"),
    ("basis-", "basis"),
    ("grow-", "grow"),
    ("shrink-", "shrink"),
    ("grid-cols-", "grid-cols"),
    ("grid-rows-", "grid-rows"),
    ("col-span-", "col-span"),
    ("row-span-", "row-span"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("cursor-", "cursor"),
    ("select-", "select"),
    ("pointer-events-", "pointer-events"),
    ("whitespace-", "whitespace"),
    ("duration-", "duration"),
    ("ease-", "ease"),
    ("delay-", "delay"),
    ("transition-", "transition"),
    ("fill-", "fill"),
];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const BORDER_SIDES: &[(&str, &str, &str)] = &[
    ("x", "border-w-x", "border-color-x"),
    ("y", "border-w-y", "border-color-y"),
    ("t", "border-w-t", "border-color-t"),
    ("r", "border-w-r", "border-color-r"),
    ("b", "border-w-b", "border-color-b"),
    ("l", "border-w-l", "border-color-l"),
    ("s", "border-w-s", "border-color-s"),
    ("e", "border-w-e", "border-color-e"),
];
const ROUNDED_SIDES: &[(&str, &str)] = &[
    ("t", "rounded-t"),
    ("r", "rounded-r"),
    ("b", "rounded-b"),
    ("l", "rounded-l"),
    ("s", "rounded-s"),
    ("e", "rounded-e"),
    ("tl", "rounded-tl"),
    ("tr", "rounded-tr"),
    ("br", "rounded-br"),
    ("bl", "rounded-bl"),
    ("ss", "rounded-ss"),
    ("se", "rounded-se"),
    ("es", "rounded-es"),
    ("ee", "rounded-ee"),
];

/// Returns the property group a utility belongs to, if it is recognised.
fn classify(base: &str) -> Option<&'static str> {
    if let Some((_, group)) = KEYWORDS.iter().find(|(k, _)| *k == base) {
        return Some(*group);
    }

    if let Some(value) = base.strip_prefix("text-") {
        return Some(classify_text(value));
    }
    if let Some(value) = base.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) || arbitrary_number(value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(value) = base.strip_prefix("bg-") {
        return Some(classify_bg(value));
    }
    if let Some(value) = base.strip_prefix("border-") {
        return Some(classify_border(value));
    }
    if let Some(value) = base.strip_prefix("rounded-") {
        return Some(classify_rounded(value));
    }
    if let Some(value) = base.strip_prefix("shadow-") {
        let is_size =
            SHADOW_SIZES.contains(&value) || arbitrary(value).is_some_and(is_arbitrary_shadow);
        return Some(if is_size { "shadow" } else { "shadow-color" });
    }
    if let Some(value) = base.strip_prefix("ring-offset-") {
        return Some(if is_length(value) {
            "ring-offset-w"
        } else {
            "ring-offset-color"
        });
    }
    if let Some(value) = base.strip_prefix("ring-") {
        return Some(match value {
            "inset" => "ring-inset",
            v if is_length(v) => "ring-w",
            _ => "ring-color",
        });
    }
    if let Some(value) = base.strip_prefix("outline-offset-") {
        return (!value.is_empty()).then_some("outline-offset");
    }
    if let Some(value) = base.strip_prefix("outline-") {
        return Some(match value {
            v if LINE_STYLES.contains(&v) => "outline-style",
            v if is_length(v) => "outline-w",
            _ => "outline-color",
        });
    }
    if let Some(value) = base.strip_prefix("flex-") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }

    PREFIXES
        .iter()
        .find(|(prefix, _)| base.len() > prefix.len() && base.starts_with(prefix))
        .map(|(_, group)| *group)
}

fn classify_text(value: &str) -> &'static str {
    let size = value.split('/').next().unwrap_or(value);
    if TEXT_SIZES.contains(&size) || arbitrary(value).is_some_and(is_arbitrary_length) {
        "font-size"
    } else if TEXT_ALIGN.contains(&value) {
        "text-align"
    } else if TEXT_WRAP.contains(&value) {
        "text-wrap"
    } else if value == "ellipsis" || value == "clip" {
        "text-overflow"
    } else {
        "text-color"
    }
}

fn classify_bg(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "auto" | "cover" | "contain" => "bg-size",
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => "bg-position",
        "none" => "bg-image",
        v if v.starts_with("gradient-") || v.starts_with("linear-") => "bg-image",
        v if v.starts_with("clip-") => "bg-clip",
        v if arbitrary(v).is_some_and(|inner| inner.starts_with("url(")) => "bg-image",
        _ => "bg-color",
    }
}

fn classify_border(value: &str) -> &'static str {
    if LINE_STYLES.contains(&value) {
        return "border-style";
    }
    if value == "collapse" || value == "separate" {
        return "border-collapse";
    }

    for &(side, width, color) in BORDER_SIDES {
        if value == side {
            return width;
        }
        if let Some(rest) = value.strip_prefix(side).and_then(|r| r.strip_prefix('-')) {
            return if is_length(rest) { width } else { color };
        }
    }

    if is_length(value) { "border-w" } else { "border-color" }
}

fn classify_rounded(value: &str) -> &'static str {
    let side = value.split_once('-').map_or(value, |(side, _)| side);
    ROUNDED_SIDES
        .iter()
        .find(|(s, _)| *s == side)
        .map_or("rounded", |(_, group)| *group)
}

/// Groups implicitly overridden by a class in `group`.
fn covers(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left", "start", "end"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        "font-size" => &["leading"],
        "rounded" => &[
            "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-s", "rounded-e",
            "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl", "rounded-ss", "rounded-se",
            "rounded-es", "rounded-ee",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l",
            "border-w-s", "border-w-e",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x", "border-color-y", "border-color-t", "border-color-r",
            "border-color-b", "border-color-l", "border-color-s", "border-color-e",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}

fn arbitrary(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn is_arbitrary_length(inner: &str) -> bool {
    inner.starts_with("length:")
        || inner.starts_with("calc(")
        || inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn is_arbitrary_shadow(inner: &str) -> bool {
    inner.starts_with("inset") || inner.starts_with(|c: char| c.is_ascii_digit() || c == '_')
}

fn arbitrary_number(value: &str) -> bool {
    arbitrary(value).is_some_and(|inner| inner.parse::<f64>().is_ok())
}

/// Numbers, `px` and arbitrary lengths, as accepted by width utilities.
fn is_length(value: &str) -> bool {
    value == "px"
        || value.parse::<f64>().is_ok()
        || arbitrary(value).is_some_and(is_arbitrary_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(classes: &str) -> String {
        UtilityMerger.merge(classes)
    }

    #[test]
    fn join_drops_falsy_values() {
        let values = [
            ClassValue::from("a b"),
            ClassValue::from(None::<&str>),
            ClassValue::from(false),
            ClassValue::from(("c", true)),
            ClassValue::from(("d", false)),
            ClassValue::from(vec![("e", true), ("f", false)]),
            ClassValue::from(String::from("  g  ")),
        ];
        assert_eq!(join_classes(&values), "a b c e g");
        assert_eq!(join_classes(&[]), "");
    }

    #[test]
    fn later_utilities_win() {
        assert_eq!(merge("p-2 p-4"), "p-4");
        assert_eq!(merge("px-2 p-4"), "p-4");
        assert_eq!(merge("p-4 px-2"), "p-4 px-2");
        assert_eq!(merge("px-2 py-1 pl-4"), "px-2 py-1 pl-4");
        assert_eq!(merge("pl-4 px-2"), "px-2");
        assert_eq!(merge("block flex hidden"), "hidden");
        assert_eq!(merge("bg-red-500 text-white bg-blue-500"), "text-white bg-blue-500");
    }

    #[test]
    fn text_size_and_color_do_not_conflict() {
        assert_eq!(merge("text-lg text-red-500"), "text-lg text-red-500");
        assert_eq!(merge("text-lg text-sm"), "text-sm");
        assert_eq!(merge("text-muted-foreground text-primary"), "text-primary");
        assert_eq!(merge("text-left text-center text-lg"), "text-center text-lg");
        assert_eq!(merge("text-[14px] text-base"), "text-base");
        assert_eq!(merge("text-[#fff] text-black"), "text-black");
        assert_eq!(merge("leading-tight text-lg"), "text-lg");
    }

    #[test]
    fn border_width_style_and_color() {
        assert_eq!(merge("border border-2"), "border-2");
        assert_eq!(merge("border-t-2 border-4"), "border-4");
        assert_eq!(
            merge("border-red-500 border-dashed border-2"),
            "border-red-500 border-dashed border-2"
        );
        assert_eq!(merge("border-red-500 border-input"), "border-input");
        assert_eq!(
            merge("border-x-red-500 border-l-blue-500"),
            "border-x-red-500 border-l-blue-500"
        );
    }

    #[test]
    fn rounded_shorthand_covers_corners() {
        assert_eq!(merge("rounded-tl-lg rounded-md"), "rounded-md");
        assert_eq!(merge("rounded-md rounded-t-lg"), "rounded-md rounded-t-lg");
        assert_eq!(merge("rounded-tr-sm rounded-t-lg"), "rounded-t-lg");
        assert_eq!(merge("rounded rounded-full"), "rounded-full");
    }

    #[test]
    fn font_weight_and_family() {
        assert_eq!(merge("font-bold font-mono font-semibold"), "font-mono font-semibold");
        assert_eq!(merge("font-[600] font-bold"), "font-bold");
    }

    #[test]
    fn variants_scope_conflicts() {
        assert_eq!(merge("hover:bg-red-500 bg-blue-500"), "hover:bg-red-500 bg-blue-500");
        assert_eq!(merge("hover:bg-red-500 hover:bg-blue-500"), "hover:bg-blue-500");
        assert_eq!(merge("md:hover:p-2 hover:md:p-4"), "hover:md:p-4");
        assert_eq!(merge("!p-2 p-4"), "!p-2 p-4");
        assert_eq!(merge("!p-2 !p-4"), "!p-4");
        assert_eq!(merge("[&>svg]:p-2 [&>svg]:p-4"), "[&>svg]:p-4");
    }

    #[test]
    fn negative_values_share_group() {
        assert_eq!(merge("-mt-2 mt-4"), "mt-4");
        assert_eq!(merge("mt-4 -mt-2"), "-mt-2");
    }

    #[test]
    fn unknown_classes_are_kept_and_deduplicated() {
        assert_eq!(merge("card card-title card"), "card-title card");
        assert_eq!(merge("  "), "");
        assert_eq!(merge("vocation-badge p-2"), "vocation-badge p-2");
    }

    #[test]
    fn macro_combines_both_stages() {
        let selected = false;
        assert_eq!(
            crate::cn!("rounded-md px-3", ("bg-accent", selected), Some("px-4"), None::<&str>),
            "rounded-md px-4"
        );
        assert_eq!(crate::cn!(), "");
    }
}
