// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HSV color and its integer-only conversion to RGB.
//!
//! The conversion runs once per pixel whenever the lamp rescales its
//! brightness, so it sticks to integer arithmetic: every channel is first
//! rescaled into a 0-255 domain, then the hue wheel is cut into six sectors
//! of 43 units and the output is built from 8-bit fixed-point products.
//!
//! The result is not a colorimetrically exact HSV conversion. It truncates
//! at every step and extrapolates out-of-range inputs instead of clamping;
//! existing lamp animations depend on those exact values.

use std::fmt;

use crate::range::map_range;

use super::RgbColor;

/// Width of one hue sector in the 0-255 hue domain.
const SECTOR_WIDTH: i64 = 43;

/// HSV color representation (Hue, Saturation, Value).
///
/// Fields are plain integers and no range is enforced: `hue` is meant to be
/// in `[0, 360)`, `saturation` and `value` in `[0, 100]`. Values outside
/// those ranges still convert deterministically.
///
/// # Examples
///
/// ```
/// use corona_lamp::types::{HsvColor, RgbColor};
///
/// let red = HsvColor::new(0, 100, 100);
/// assert_eq!(red.to_rgb(), RgbColor::new(255, 0, 0));
///
/// // Zero saturation is gray, whatever the hue
/// let gray = HsvColor::new(200, 0, 50);
/// assert_eq!(gray.to_rgb(), RgbColor::new(127, 127, 127));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HsvColor {
    /// Hue in degrees, `[0, 360)`.
    pub hue: i16,
    /// Saturation in percent, `[0, 100]`.
    pub saturation: i16,
    /// Value (brightness) in percent, `[0, 100]`.
    pub value: i16,
}

impl HsvColor {
    /// Highest hue accepted by the hue rescaling.
    pub const MAX_HUE: i16 = 359;

    /// Highest saturation value.
    pub const MAX_SATURATION: i16 = 100;

    /// Highest value (brightness).
    pub const MAX_VALUE: i16 = 100;

    /// Creates a new HSV color.
    ///
    /// # Arguments
    ///
    /// * `hue` - Color hue (0-359 degrees, where 0 is red)
    /// * `saturation` - Color saturation (0-100%)
    /// * `value` - Color value (0-100%)
    #[must_use]
    pub const fn new(hue: i16, saturation: i16, value: i16) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Returns a copy of this color with a different value.
    ///
    /// This is how the lamp dims a color without touching its hue.
    ///
    /// ```
    /// use corona_lamp::types::HsvColor;
    ///
    /// let dimmed = HsvColor::new(120, 100, 100).with_value(50);
    /// assert_eq!(dimmed, HsvColor::new(120, 100, 50));
    /// ```
    #[must_use]
    pub const fn with_value(self, value: i16) -> Self {
        Self { value, ..self }
    }

    /// Converts this color to RGB for the LED driver.
    ///
    /// # Examples
    ///
    /// ```
    /// use corona_lamp::types::{HsvColor, RgbColor};
    ///
    /// assert_eq!(HsvColor::new(120, 100, 100).to_rgb(), RgbColor::new(3, 255, 0));
    /// assert_eq!(HsvColor::new(0, 0, 100).to_rgb(), RgbColor::white());
    /// assert_eq!(HsvColor::new(0, 100, 0).to_rgb(), RgbColor::black());
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_rgb(&self) -> RgbColor {
        // i64 keeps every intermediate in range for any i16 input.
        let hue = map_range(i64::from(self.hue), 0, i64::from(Self::MAX_HUE), 0, 255);
        let sat = map_range(
            i64::from(self.saturation),
            0,
            i64::from(Self::MAX_SATURATION),
            0,
            255,
        );
        let val = map_range(i64::from(self.value), 0, i64::from(Self::MAX_VALUE), 0, 255);

        if sat == 0 {
            return RgbColor::from_wide(val, val, val);
        }

        let region = hue / SECTOR_WIDTH;
        let remainder = (hue - region * SECTOR_WIDTH) * 6;

        let p = (val * (255 - sat)) >> 8;
        let q = (val * (255 - ((sat * remainder) >> 8))) >> 8;
        let t = (val * (255 - ((sat * (255 - remainder)) >> 8))) >> 8;

        match region {
            0 => RgbColor::from_wide(val, t, p),
            1 => RgbColor::from_wide(q, val, p),
            2 => RgbColor::from_wide(p, val, t),
            3 => RgbColor::from_wide(p, q, val),
            4 => RgbColor::from_wide(t, p, val),
            _ => RgbColor::from_wide(val, p, q),
        }
    }
}

impl From<HsvColor> for RgbColor {
    fn from(hsv: HsvColor) -> Self {
        hsv.to_rgb()
    }
}

impl From<(i16, i16, i16)> for HsvColor {
    fn from((hue, saturation, value): (i16, i16, i16)) -> Self {
        Self::new(hue, saturation, value)
    }
}

impl fmt::Display for HsvColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HSV({}, {}%, {}%)",
            self.hue, self.saturation, self.value
        )
    }
}
