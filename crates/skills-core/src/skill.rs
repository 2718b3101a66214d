//! Derivation of skill card fields from a catalog record.
//!
//! `level` and `years` look arbitrary but are pure functions of the name:
//! both are seeded by the sum of the name's Unicode code points, so the same
//! name always gets the same numbers regardless of category, slug or color.

use crate::color::{self, BACKGROUND_FACTOR};
use crate::types::{DerivedSkillEntry, RawSkillRecord};

/// Lowest level a skill can get.
pub const LEVEL_BASE: u8 = 75;

/// Number of distinct levels (`75..=94`).
pub const LEVEL_SPAN: u64 = 20;

/// Number of distinct year counts (`1..=4`).
pub const YEARS_SPAN: u64 = 4;

/// Icon CDN prefix; the slug and the `ffffff` tint are appended.
pub const ICON_CDN: &str = "https://cdn.simpleicons.org";

/// Sums the Unicode scalar values of every character in `name`.
///
/// Code points, not UTF-8 bytes, so non-ASCII names hash the same way in
/// every implementation.
///
/// # Examples
///
/// ```
/// use skills_core::skill::code_point_sum;
///
/// assert_eq!(code_point_sum("C"), 67);
/// assert_eq!(code_point_sum("é"), 233);
/// assert_eq!(code_point_sum(""), 0);
/// ```
#[must_use]
pub fn code_point_sum(name: &str) -> u64 {
    name.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Derives the proficiency level, always in `75..=94`.
///
/// # Examples
///
/// ```
/// use skills_core::skill::derive_level;
///
/// assert_eq!(derive_level("C"), 82);
/// assert_eq!(derive_level(""), 75);
/// ```
#[must_use]
pub fn derive_level(name: &str) -> u8 {
    let offset = code_point_sum(name) % LEVEL_SPAN;
    // offset < 20, the conversion cannot fail
    LEVEL_BASE + u8::try_from(offset).unwrap_or_default()
}

/// Derives the experience label, always `"1 yrs"` through `"4 yrs"`.
///
/// # Examples
///
/// ```
/// use skills_core::skill::derive_years;
///
/// assert_eq!(derive_years("C"), "4 yrs");
/// assert_eq!(derive_years(""), "1 yrs");
/// ```
#[must_use]
pub fn derive_years(name: &str) -> String {
    format!("{} yrs", 1 + code_point_sum(name) % YEARS_SPAN)
}

/// Card blurb for a skill.
#[must_use]
pub fn describe(name: &str) -> String {
    format!("Deep proficiency and experience in building robust solutions using {name}.")
}

/// White-rendered icon URL for a slug.
///
/// # Examples
///
/// ```
/// use skills_core::skill::icon_url;
///
/// assert_eq!(icon_url("csharp"), "https://cdn.simpleicons.org/csharp/ffffff");
/// ```
#[must_use]
pub fn icon_url(slug: &str) -> String {
    format!("{ICON_CDN}/{slug}/ffffff")
}

/// First two characters of the name, or fewer if the name is shorter.
#[must_use]
pub fn fallback_icon(name: &str) -> String {
    name.chars().take(2).collect()
}

/// Computes the full skill card for one record.
///
/// The background is darkened from the display color, i.e. after the pure
/// black remap.
///
/// # Examples
///
/// ```
/// use skills_core::{skill::render, RawSkillRecord};
///
/// let entry = render(&RawSkillRecord::new("Chart.js", "Frontend", "chartdotjs", "#FF6384"));
///
/// assert_eq!(entry.level, 80);
/// assert_eq!(entry.years, "2 yrs");
/// assert_eq!(entry.display_color, "#FF6384");
/// assert_eq!(entry.background_color, "#260e13");
/// assert_eq!(entry.fallback_icon, "Ch");
/// ```
#[must_use]
pub fn render(record: &RawSkillRecord) -> DerivedSkillEntry {
    let display_color = color::remap_pure_black(&record.color);
    let background_color = color::darken(display_color, BACKGROUND_FACTOR);

    DerivedSkillEntry {
        name: record.name.clone(),
        category: record.category.clone(),
        level: derive_level(&record.name),
        years: derive_years(&record.name),
        description: describe(&record.name),
        display_color: display_color.to_string(),
        background_color,
        icon_url: icon_url(&record.slug),
        fallback_icon: fallback_icon(&record.name),
    }
}

/// Renders every record, preserving order and duplicates.
#[must_use]
pub fn render_all(records: &[RawSkillRecord]) -> Vec<DerivedSkillEntry> {
    records.iter().map(render).collect()
}
