// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    error::{PitchError, Result},
    numeric::scalar::Scalar,
};

/// A closed interval `[min, max]` along one pitch axis, in coordinate units.
///
/// The bounds are private so `min <= max` holds for every value that exists.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawDimension<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct Dimension<T: Scalar = f64> {
    min: T,
    max: T,
}

#[derive(Deserialize)]
struct RawDimension<T> {
    min: T,
    max: T,
}

impl<T: Scalar> Dimension<T> {
    /// Fails with [`PitchError::InvalidRange`] when `min > max` or either bound is NaN.
    pub fn new(min: T, max: T) -> Result<Self> {
        match min.partial_cmp(&max) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Dimension { min, max }),
            _ => {
                log::debug!("rejecting dimension [{}, {}]", min, max);
                Err(PitchError::InvalidRange {
                    min: min.to_f64().unwrap_or(f64::NAN),
                    max: max.to_f64().unwrap_or(f64::NAN),
                })
            }
        }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    /// Width of the interval in coordinate units. Never negative.
    pub fn span(&self) -> T {
        self.max - self.min
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn center(&self) -> T {
        let half = T::from_num_den(1, 2);
        (self.min + self.max) * half
    }

    /// Relative position of `value` in the interval: `0` at `min`, `1` at `max`.
    ///
    /// Values outside the interval map outside `[0, 1]`. Returns `None` for a
    /// zero-span dimension, where every position is the same point.
    pub fn to_base(&self, value: T) -> Option<T> {
        let span = self.span();
        if span.is_zero() {
            return None;
        }
        Some((value - self.min) / span)
    }

    /// Inverse of [`Dimension::to_base`].
    pub fn from_base(&self, value: T) -> T {
        value * self.span() + self.min
    }
}

impl<T: Scalar> TryFrom<RawDimension<T>> for Dimension<T> {
    type Error = PitchError;

    fn try_from(raw: RawDimension<T>) -> Result<Self> {
        Dimension::new(raw.min, raw.max)
    }
}

impl<T: Scalar> fmt::Display for Dimension<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
