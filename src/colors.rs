// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Color classification for activity paths.
//!
//! Social class outranks activity type: a nobili citizen's path is gold no
//! matter what the activity is. Matching is case-insensitive substring
//! matching against fixed ordered tables, first match wins.

use crate::models::ActivityPath;

/// Neutral fallback when neither table matches.
pub const DEFAULT_PATH_COLOR: &str = "#9CA3AF";

/// Social-class colors, checked first.
const SOCIAL_CLASS_COLORS: &[(&[&str], &str)] = &[
    (&["nobili"], "#D4AF37"),              // gold
    (&["cittadini"], "#2B6CB0"),           // blue
    (&["popolani"], "#8B5A2B"),            // brown
    (&["laborer", "facchini"], "#6B7280"), // gray
    (&["forestieri"], "#800020"),          // burgundy
];

/// Activity-type colors, the fallback when no social class matches.
const ACTIVITY_TYPE_COLORS: &[(&[&str], &str)] = &[
    (&["transport", "move"], "#3182CE"),          // blue
    (&["trade", "buy", "sell"], "#DD6B20"),       // orange
    (&["work", "labor"], "#2F855A"),              // green
    (&["craft", "create", "produce"], "#D53F8C"), // pink
];

/// Color for an activity path, preferring the citizen's social class.
pub fn activity_path_color(activity: &ActivityPath, social_class: Option<&str>) -> &'static str {
    if let Some(class) = social_class {
        let class = class.trim().to_lowercase();
        if !class.is_empty() {
            if let Some(color) = match_table(SOCIAL_CLASS_COLORS, &class) {
                return color;
            }
        }
    }

    let activity_type = activity.activity_type.to_lowercase();
    match_table(ACTIVITY_TYPE_COLORS, &activity_type).unwrap_or(DEFAULT_PATH_COLOR)
}

/// First entry with a keyword contained in `value` wins.
fn match_table(table: &[(&[&str], &'static str)], value: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| value.contains(k)))
        .map(|(_, color)| *color)
}
