// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the lamp helpers.
//!
//! The color conversion and range mapping never fail. Errors only arise at
//! the edges: handing a color to an 8-bit LED driver, parsing a color list
//! received from the review watcher, or parsing a date string.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing a date.
    #[error("date error: {0}")]
    Date(#[from] DateParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An RGB channel does not fit in a byte.
    #[error("{channel} channel value {actual} is out of range [0, 255]")]
    ChannelOutOfRange {
        /// Name of the offending channel.
        channel: &'static str,
        /// The actual value of the channel.
        actual: i32,
    },

    /// A color name is not part of the lamp palette.
    #[error("unknown color name: {0:?}")]
    UnknownColorName(String),
}

/// Error returned when a date string is not in `month-day-year` form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to parse date: '{input}' (expected month-day-year)")]
pub struct DateParseError {
    input: String,
}

impl DateParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// Returns the input string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
