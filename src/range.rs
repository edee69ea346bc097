// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Linear range mapping.

use std::ops::{Add, Div, Mul, Sub};

/// Linearly rescales `value` from `[from_low, from_high]` into
/// `[to_low, to_high]`.
///
/// Uses the type's own division, so integer inputs truncate toward zero.
/// Values outside the source range are extrapolated, not clamped. A
/// zero-width source range returns `to_low` instead of dividing by zero.
///
/// # Examples
///
/// ```
/// use corona_lamp::map_range;
///
/// assert_eq!(map_range(50, 0, 100, 0, 255), 127);
/// assert_eq!(map_range(120, 0, 359, 0, 255), 85);
///
/// // Extrapolates past the source range
/// assert_eq!(map_range(200, 0, 100, 0, 255), 510);
///
/// // Degenerate source range
/// assert_eq!(map_range(7, 3, 3, 10, 20), 10);
/// ```
#[must_use]
#[inline]
pub fn map_range<T>(value: T, from_low: T, from_high: T, to_low: T, to_high: T) -> T
where
    T: Copy + PartialEq + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    if from_high == from_low {
        return to_low;
    }
    (value - from_low) * (to_high - to_low) / (from_high - from_low) + to_low
}
