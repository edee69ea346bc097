// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named lamp colors and the review color list.
//!
//! The review watcher answers the lamp with one color name per pending
//! review request, comma separated and with a trailing comma, e.g.
//! `"red,blue,white,"`. Requesters the watcher does not know are already
//! reported as `white`.
//!
//! # Examples
//!
//! ```
//! use corona_lamp::palette::{parse_color_list, NamedColor};
//!
//! let colors = parse_color_list("red,blue,white,").unwrap();
//! assert_eq!(colors, vec![NamedColor::Red, NamedColor::Blue, NamedColor::White]);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::types::{HsvColor, RgbColor};

/// A color the review watcher can ask the lamp to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NamedColor {
    /// Hue 0.
    Red,
    /// Hue 30.
    Orange,
    /// Hue 60.
    Yellow,
    /// Hue 120.
    Green,
    /// Hue 240.
    Blue,
    /// Hue 270.
    Purple,
    /// No saturation.
    White,
}

impl NamedColor {
    /// All palette colors.
    pub const ALL: [Self; 7] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::White,
    ];

    /// Returns the lowercase name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::White => "white",
        }
    }

    /// Returns the color at full value.
    #[must_use]
    pub const fn to_hsv(&self) -> HsvColor {
        match self {
            Self::Red => HsvColor::new(0, 100, 100),
            Self::Orange => HsvColor::new(30, 100, 100),
            Self::Yellow => HsvColor::new(60, 100, 100),
            Self::Green => HsvColor::new(120, 100, 100),
            Self::Blue => HsvColor::new(240, 100, 100),
            Self::Purple => HsvColor::new(270, 100, 100),
            Self::White => HsvColor::new(0, 0, 100),
        }
    }

    /// Returns the LED color at the given value (0-100%).
    ///
    /// ```
    /// use corona_lamp::palette::NamedColor;
    /// use corona_lamp::types::RgbColor;
    ///
    /// assert_eq!(NamedColor::White.to_rgb_at(50), RgbColor::new(127, 127, 127));
    /// ```
    #[must_use]
    pub fn to_rgb_at(&self, value: i16) -> RgbColor {
        self.to_hsv().with_value(value).to_rgb()
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamedColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ValueError::UnknownColorName(name.to_string()))
    }
}

impl From<NamedColor> for HsvColor {
    fn from(color: NamedColor) -> Self {
        color.to_hsv()
    }
}

/// Parses a comma separated review color list.
///
/// Empty entries (the trailing comma, blank input) are skipped.
///
/// # Errors
///
/// Returns `ValueError::UnknownColorName` for the first name that is not in
/// the palette.
pub fn parse_color_list(list: &str) -> Result<Vec<NamedColor>, ValueError> {
    let colors = list
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<NamedColor>, _>>()?;

    tracing::debug!(count = colors.len(), "Parsed review color list");
    Ok(colors)
}

/// Parses a comma separated review color list, showing unknown names as
/// white.
#[must_use]
pub fn parse_color_list_lenient(list: &str) -> Vec<NamedColor> {
    let colors: Vec<NamedColor> = list
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            entry.parse::<NamedColor>().unwrap_or_else(|e| {
                tracing::warn!(entry = %entry.trim(), error = %e, "Unknown color, using white");
                NamedColor::White
            })
        })
        .collect();

    tracing::debug!(count = colors.len(), "Parsed review color list");
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for color in NamedColor::ALL {
            assert_eq!(color.as_str().parse::<NamedColor>().unwrap(), color);
            assert_eq!(color.to_string(), color.as_str());
        }
    }

    #[test]
    fn parse_name_is_case_insensitive() {
        assert_eq!(" Purple ".parse::<NamedColor>().unwrap(), NamedColor::Purple);
        assert_eq!("GREEN".parse::<NamedColor>().unwrap(), NamedColor::Green);
    }

    #[test]
    fn parse_unknown_name() {
        assert_eq!(
            "teal".parse::<NamedColor>(),
            Err(ValueError::UnknownColorName("teal".to_string()))
        );
    }

    #[test]
    fn parse_watcher_response() {
        let colors = parse_color_list("red,blue,purple,yellow,orange,green,white,").unwrap();
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[0], NamedColor::Red);
        assert_eq!(colors[6], NamedColor::White);
    }

    #[test]
    fn parse_empty_list() {
        assert!(parse_color_list("").unwrap().is_empty());
        assert!(parse_color_list(" , ,").unwrap().is_empty());
    }

    #[test]
    fn parse_list_fails_on_unknown() {
        let err = parse_color_list("red,magenta,blue").unwrap_err();
        assert_eq!(err, ValueError::UnknownColorName("magenta".to_string()));
    }

    #[test]
    fn lenient_list_maps_unknown_to_white() {
        let colors = parse_color_list_lenient("red,magenta,");
        assert_eq!(colors, vec![NamedColor::Red, NamedColor::White]);
    }

    #[test]
    fn palette_colors_are_led_ready() {
        assert_eq!(NamedColor::Red.to_rgb_at(100), RgbColor::new(255, 0, 0));
        assert_eq!(NamedColor::White.to_rgb_at(100), RgbColor::white());
        for color in NamedColor::ALL {
            assert!(color.to_rgb_at(100).to_bytes().is_ok());
            assert_eq!(color.to_rgb_at(0), RgbColor::black());
        }
    }
}
