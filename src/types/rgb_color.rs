// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type handed to LED drivers.
//!
//! Channels are plain integers so that conversion output, including the
//! extrapolated output of out-of-range HSV input, is represented as is.
//! [`RgbColor::to_bytes`] is the checked boundary to 8-bit hardware.

use std::fmt;

use crate::error::ValueError;

/// RGB color with integer channels, nominally 0-255.
///
/// # Examples
///
/// ```
/// use corona_lamp::types::RgbColor;
///
/// let orange = RgbColor::new(255, 128, 0);
/// assert_eq!(orange.red, 255);
/// assert_eq!(orange.to_bytes().unwrap(), [255, 128, 0]);
/// assert_eq!(orange.to_hex().unwrap(), "#FF8000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    /// Red component.
    pub red: i32,
    /// Green component.
    pub green: i32,
    /// Blue component.
    pub blue: i32,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    // Conversion intermediates are i64 but always fit in i32 for i16 input.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_wide(red: i64, green: i64, blue: i64) -> Self {
        Self::new(red as i32, green as i32, blue as i32)
    }

    /// Creates a black color.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Creates a white color.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Returns the channels as bytes for an LED driver.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ChannelOutOfRange` for the first channel that
    /// lies outside `[0, 255]`.
    pub fn to_bytes(&self) -> Result<[u8; 3], ValueError> {
        Ok([
            channel_byte("red", self.red)?,
            channel_byte("green", self.green)?,
            channel_byte("blue", self.blue)?,
        ])
    }

    /// Returns the color as a `#RRGGBB` hex string.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ChannelOutOfRange` if a channel does not fit in
    /// a byte.
    pub fn to_hex(&self) -> Result<String, ValueError> {
        let [r, g, b] = self.to_bytes()?;
        Ok(format!("#{r:02X}{g:02X}{b:02X}"))
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(i32::from(red), i32::from(green), i32::from(blue))
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from([red, green, blue])
    }
}

impl TryFrom<RgbColor> for [u8; 3] {
    type Error = ValueError;

    fn try_from(color: RgbColor) -> Result<Self, Self::Error> {
        color.to_bytes()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.red, self.green, self.blue)
    }
}

fn channel_byte(channel: &'static str, value: i32) -> Result<u8, ValueError> {
    u8::try_from(value).map_err(|_| ValueError::ChannelOutOfRange {
        channel,
        actual: value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_black() {
        assert_eq!(RgbColor::default(), RgbColor::black());
        assert_eq!(RgbColor::black(), RgbColor::new(0, 0, 0));
    }

    #[test]
    fn to_bytes_in_range() {
        assert_eq!(RgbColor::new(0, 15, 255).to_bytes(), Ok([0, 15, 255]));
    }

    #[test]
    fn to_bytes_rejects_out_of_range() {
        assert_eq!(
            RgbColor::new(10, 256, 0).to_bytes(),
            Err(ValueError::ChannelOutOfRange {
                channel: "green",
                actual: 256
            })
        );
        assert_eq!(
            RgbColor::new(-1, 0, 0).to_bytes(),
            Err(ValueError::ChannelOutOfRange {
                channel: "red",
                actual: -1
            })
        );
    }

    #[test]
    fn to_hex() {
        assert_eq!(RgbColor::new(255, 128, 0).to_hex().unwrap(), "#FF8000");
        assert_eq!(RgbColor::new(0, 15, 255).to_hex().unwrap(), "#000FFF");
        assert!(RgbColor::new(0, 0, 300).to_hex().is_err());
    }

    #[test]
    fn from_bytes() {
        let color: RgbColor = [1u8, 2, 3].into();
        assert_eq!(color, RgbColor::new(1, 2, 3));

        let color: RgbColor = (255u8, 0u8, 0u8).into();
        assert_eq!(color, RgbColor::new(255, 0, 0));
    }

    #[test]
    fn try_into_bytes() {
        let bytes: [u8; 3] = RgbColor::white().try_into().unwrap();
        assert_eq!(bytes, [255, 255, 255]);
    }

    #[test]
    fn display() {
        assert_eq!(RgbColor::new(3, 255, 0).to_string(), "RGB(3, 255, 0)");
    }
}
