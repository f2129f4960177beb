//! Utility-class merging.
//!
//! Later classes override earlier ones that style the same property under the
//! same modifiers, so `hover:bg-transparent` passed by a caller replaces a
//! recipe's `hover:bg-accent` while `text-sm` and `text-secondary` both
//! survive.

use std::collections::HashSet;

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "hidden",
    "contents",
];
const BORDER_SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];
const SPACING_PREFIXES: &[&str] = &[
    "px", "py", "pt", "pr", "pb", "pl", "p", "mx", "my", "mt", "mr", "mb", "ml", "m",
];

/// Merge class lists, keeping the last of any conflicting tokens
pub fn merge_classes(lists: &[&str]) -> String {
    let tokens: Vec<&str> = lists.iter().flat_map(|l| l.split_whitespace()).collect();

    let mut seen = HashSet::new();
    let mut kept: Vec<&str> = tokens
        .iter()
        .rev()
        .filter(|token| seen.insert(conflict_key(token)))
        .copied()
        .collect();
    kept.reverse();
    kept.join(" ")
}

/// Modifier chain plus utility group; tokens with equal keys conflict
fn conflict_key(token: &str) -> (String, String) {
    let (modifiers, utility) = match token.rfind(':') {
        Some(idx) => (&token[..=idx], &token[idx + 1..]),
        None => ("", token),
    };
    (modifiers.to_string(), utility_group(utility))
}

fn utility_group(utility: &str) -> String {
    let group = match utility {
        u if DISPLAY.contains(&u) => "display",
        u if u.starts_with("bg-gradient-") => "bg-image",
        u if u.starts_with("bg-") => "bg-color",
        u if u.starts_with("text-") => text_group(&u[5..]),
        u if u.starts_with("font-") => {
            if FONT_WEIGHTS.contains(&&u[5..]) {
                "font-weight"
            } else {
                "font-family"
            }
        }
        u if u.starts_with("border") => return border_group(u),
        u if u == "rounded" || u.starts_with("rounded-") => "rounded",
        u if u.starts_with("w-") => "w",
        u if u.starts_with("h-") => "h",
        u if u.starts_with("max-w-") => "max-w",
        u if u.starts_with("min-h-") => "min-h",
        u if u.starts_with("gap-") => "gap",
        u if u.starts_with("items-") => "items",
        u if u.starts_with("justify-") => "justify",
        u if u.starts_with("opacity-") => "opacity",
        u => return spacing_group(u).unwrap_or_else(|| u.to_string()),
    };
    group.to_string()
}

fn text_group(value: &str) -> &'static str {
    if FONT_SIZES.contains(&value) {
        "font-size"
    } else if TEXT_ALIGN.contains(&value) {
        "text-align"
    } else {
        "text-color"
    }
}

fn border_group(utility: &str) -> String {
    let rest = utility
        .strip_prefix("border")
        .unwrap_or(utility)
        .trim_start_matches('-');
    if rest.is_empty() || rest.parse::<u32>().is_ok() {
        return "border-w".to_string();
    }
    let (side, value) = rest.split_once('-').unwrap_or((rest, ""));
    if BORDER_SIDES.contains(&side) && (value.is_empty() || value.parse::<u32>().is_ok()) {
        return format!("border-w-{side}");
    }
    "border-color".to_string()
}

fn spacing_group(utility: &str) -> Option<String> {
    let utility = utility.trim_start_matches('-');
    let (prefix, _) = utility.split_once('-')?;
    SPACING_PREFIXES
        .contains(&prefix)
        .then(|| prefix.to_string())
}
