//! Input and output records of the generator.
//!
//! # Examples
//!
//! ```
//! use skills_core::{DerivedSkillEntry, RawSkillRecord};
//!
//! let record = RawSkillRecord::new("Unity", "Other Skills", "unity", "#000000");
//! let entry = DerivedSkillEntry::from(&record);
//!
//! assert_eq!(entry.display_color, "#ffffff");
//! assert_eq!(entry.background_color, "#262626");
//! ```

use serde::{Deserialize, Serialize};

/// One static input row: a skill as listed in the catalog.
///
/// Nothing here is validated. Any string is accepted as a category or
/// icon slug, and a malformed color only degrades the derived background.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSkillRecord {
    /// Display name, e.g. `"C#"` or `"Next JS"`
    pub name: String,
    /// Shelf label, e.g. `"Frontend"`
    pub category: String,
    /// Icon identifier on the icon CDN
    pub slug: String,
    /// Brand color as `#rrggbb`
    pub color: String,
}

impl RawSkillRecord {
    /// Creates a record from its four fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use skills_core::RawSkillRecord;
    ///
    /// let record = RawSkillRecord::new("C", "Coding Languages", "c", "#A8B9CC");
    /// assert_eq!(record.slug, "c");
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        slug: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            slug: slug.into(),
            color: color.into(),
        }
    }
}

/// A fully computed skill card, ready for serialization.
///
/// Serialized field names follow the front end's `Skill` interface
/// (`color`, `bgColor`, `imageFile`, `fallbackIcon`), which is an external
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DerivedSkillEntry {
    /// Copied from the record
    pub name: String,
    /// Copied from the record
    pub category: String,
    /// Proficiency in `75..=94`
    pub level: u8,
    /// Experience label, `"<1-4> yrs"`
    pub years: String,
    /// Card blurb embedding the name
    pub description: String,
    /// Badge color after the pure black remap
    #[serde(rename = "color")]
    pub display_color: String,
    /// Darkened badge color
    #[serde(rename = "bgColor")]
    pub background_color: String,
    /// White-rendered icon URL on the icon CDN
    #[serde(rename = "imageFile")]
    pub icon_url: String,
    /// First two characters of the name
    #[serde(rename = "fallbackIcon")]
    pub fallback_icon: String,
}

impl From<&RawSkillRecord> for DerivedSkillEntry {
    fn from(record: &RawSkillRecord) -> Self {
        crate::skill::render(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_from_toml() {
        let record: RawSkillRecord = toml::from_str(
            r##"
            name = "C#"
            category = "Coding Languages"
            slug = "csharp"
            color = "#239120"
            "##,
        )
        .unwrap();
        assert_eq!(
            record,
            RawSkillRecord::new("C#", "Coding Languages", "csharp", "#239120")
        );
    }

    #[test]
    fn test_raw_record_rejects_unknown_fields() {
        let result: Result<RawSkillRecord, _> = toml::from_str(
            r##"
            name = "C"
            category = "Coding Languages"
            slug = "c"
            color = "#A8B9CC"
            level = 99
            "##,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_derived_entry_uses_front_end_field_names() {
        let record = RawSkillRecord::new("C", "Coding Languages", "c", "#A8B9CC");
        let entry = DerivedSkillEntry::from(&record);
        let value = toml::Value::try_from(&entry).unwrap();
        let table = value.as_table().unwrap();

        for key in [
            "name",
            "category",
            "level",
            "years",
            "description",
            "color",
            "bgColor",
            "imageFile",
            "fallbackIcon",
        ] {
            assert!(table.contains_key(key), "missing {key}");
        }
        assert!(!table.contains_key("display_color"));
    }
}
