// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Corona Lamp - value types for an embedded lamp controller.
//!
//! The centerpiece is an integer-only HSV to RGB conversion used to drive
//! addressable LEDs. No floating point is involved, so the cost per pixel
//! stays fixed on small microcontrollers.
//!
//! # Features
//!
//! - **Color model**: [`HsvColor`], [`RgbColor`] and [`HsvColor::to_rgb`]
//! - **Range mapping**: [`map_range`], generic over numeric types
//! - **Dates**: [`Date`] in the lamp's `month-day-year` form
//! - **Palette**: [`NamedColor`] and the review color list sent by the
//!   review watcher
//!
//! # Cargo Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for all value types
//!
//! # Quick Start
//!
//! ```
//! use corona_lamp::{HsvColor, RgbColor};
//!
//! let green = HsvColor::new(120, 100, 100);
//! let pixel: RgbColor = green.to_rgb();
//! assert_eq!(pixel.to_bytes().unwrap(), [3, 255, 0]);
//!
//! // Dim the same hue to 40%
//! let dimmed = green.with_value(40).to_rgb();
//! assert_eq!(dimmed, RgbColor::new(1, 102, 0));
//! ```
//!
//! Values that may be absent (e.g. a date not yet received from the time
//! server) are plain [`Option`]s.

pub mod error;
pub mod palette;
mod range;
pub mod types;

pub use error::{DateParseError, Error, Result, ValueError};
pub use palette::{NamedColor, parse_color_list, parse_color_list_lenient};
pub use range::map_range;
pub use types::{Date, HsvColor, RgbColor};
