// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the lamp controller.
//!
//! All types here are plain `Copy` values with public fields. Ranges are
//! documented, not enforced; checks happen where values leave the crate
//! (see [`RgbColor::to_bytes`]).
//!
//! # Types
//!
//! - [`HsvColor`] - Hue 0-359, Saturation 0-100, Value 0-100
//! - [`RgbColor`] - Red, Green, Blue, nominally 0-255
//! - [`Date`] - Year, month and day as shown on the lamp display

mod color;
mod date;
mod rgb_color;

pub use color::HsvColor;
pub use date::Date;
pub use rgb_color::RgbColor;
