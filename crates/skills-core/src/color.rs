//! Badge color helpers.
//!
//! Skill badges are drawn on a dark neon background. Pure black brand
//! colors are remapped to white so they stay visible, and every badge gets
//! a background tint derived by darkening its display color.
//!
//! # Examples
//!
//! ```
//! use skills_core::color::{darken, remap_pure_black, BACKGROUND_FACTOR};
//!
//! let display = remap_pure_black("#000000");
//! assert_eq!(display, "#ffffff");
//! assert_eq!(darken(display, BACKGROUND_FACTOR), "#262626");
//! ```

use crate::error::ColorParseError;

/// Brand color that would be invisible on the dark theme.
pub const PURE_BLACK: &str = "#000000";

/// Replacement for [`PURE_BLACK`] display colors.
pub const PURE_WHITE: &str = "#ffffff";

/// Background used when the display color cannot be parsed.
pub const BACKGROUND_FALLBACK: &str = "#111111";

/// Channel scale applied to the display color to get the background.
pub const BACKGROUND_FACTOR: f64 = 0.15;

/// Parses `#rrggbb` (the `#` is optional) into its red, green and blue
/// channels.
///
/// # Errors
///
/// Returns [`ColorParseError::InvalidLength`] unless exactly six bytes
/// follow the optional `#`, and [`ColorParseError::InvalidDigit`] if any of
/// them is not a hex digit.
///
/// # Examples
///
/// ```
/// use skills_core::color::hex_to_channels;
///
/// assert_eq!(hex_to_channels("#FF6384"), Ok((255, 99, 132)));
/// assert_eq!(hex_to_channels("00979d"), Ok((0, 151, 157)));
/// assert!(hex_to_channels("not-a-color").is_err());
/// ```
pub fn hex_to_channels(color: &str) -> Result<(u8, u8, u8), ColorParseError> {
    let hex = color.strip_prefix('#').unwrap_or(color);

    if hex.len() != 6 {
        return Err(ColorParseError::InvalidLength {
            value: color.to_string(),
            len: hex.len(),
        });
    }

    // from_str_radix tolerates a leading sign, so check digits up front
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit {
            value: color.to_string(),
        });
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::InvalidDigit {
            value: color.to_string(),
        })
    };

    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Encodes channels as lowercase `#rrggbb`.
///
/// # Examples
///
/// ```
/// use skills_core::color::channels_to_hex;
///
/// assert_eq!(channels_to_hex((38, 14, 19)), "#260e13");
/// ```
#[must_use]
pub fn channels_to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Scales every channel of `color` by `factor`.
///
/// Each product is truncated toward zero and clamped to `0..=255`. A color
/// that does not parse yields [`BACKGROUND_FALLBACK`] instead of an error.
///
/// # Examples
///
/// ```
/// use skills_core::color::darken;
///
/// assert_eq!(darken("#ffffff", 0.15), "#262626");
/// assert_eq!(darken("#ff6384", 0.15), "#260e13");
/// assert_eq!(darken("not-a-color", 0.15), "#111111");
/// ```
#[must_use]
pub fn darken(color: &str, factor: f64) -> String {
    match hex_to_channels(color) {
        Ok((r, g, b)) => channels_to_hex((
            scale_channel(r, factor),
            scale_channel(g, factor),
            scale_channel(b, factor),
        )),
        Err(e) => {
            tracing::debug!("using fallback background: {e}");
            BACKGROUND_FALLBACK.to_string()
        }
    }
}

/// Returns [`PURE_WHITE`] for exactly `"#000000"`, otherwise `color`
/// untouched.
///
/// The comparison is case-sensitive and does not normalize the input.
///
/// # Examples
///
/// ```
/// use skills_core::color::remap_pure_black;
///
/// assert_eq!(remap_pure_black("#000000"), "#ffffff");
/// assert_eq!(remap_pure_black("#A8B9CC"), "#A8B9CC");
/// ```
#[must_use]
pub fn remap_pure_black(color: &str) -> &str {
    if color == PURE_BLACK {
        PURE_WHITE
    } else {
        color
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(channel: u8, factor: f64) -> u8 {
    // NaN saturates to 0 in the cast
    (f64::from(channel) * factor).trunc().clamp(0.0, 255.0) as u8
}
