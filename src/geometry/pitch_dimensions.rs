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

use serde::{Deserialize, Serialize};

use crate::{geometry::dimension::Dimension, numeric::scalar::Scalar};

/// Extent of a pitch in coordinate units, with optional per-axis scale.
///
/// `x_per_meter` and `y_per_meter` count coordinate units per meter. When a
/// scale factor is absent the matching physical measurement is unknown, so
/// [`PitchDimensions::length`] or [`PitchDimensions::width`] returns `None`.
///
/// Scale factors must be positive. They are not checked: a zero or negative
/// factor is divided through as given and yields an infinite or negative size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct PitchDimensions<T: Scalar = f64> {
    x_dim: Dimension<T>,
    y_dim: Dimension<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x_per_meter: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y_per_meter: Option<T>,
}

impl<T: Scalar> PitchDimensions<T> {
    pub fn new(
        x_dim: Dimension<T>,
        y_dim: Dimension<T>,
        x_per_meter: Option<T>,
        y_per_meter: Option<T>,
    ) -> Self {
        log::trace!(
            "pitch x={} y={} (x scaled: {}, y scaled: {})",
            x_dim,
            y_dim,
            x_per_meter.is_some(),
            y_per_meter.is_some()
        );
        PitchDimensions {
            x_dim,
            y_dim,
            x_per_meter,
            y_per_meter,
        }
    }

    /// A pitch with no known physical scale on either axis.
    pub fn unscaled(x_dim: Dimension<T>, y_dim: Dimension<T>) -> Self {
        Self::new(x_dim, y_dim, None, None)
    }

    pub fn x_dim(&self) -> &Dimension<T> {
        &self.x_dim
    }

    pub fn y_dim(&self) -> &Dimension<T> {
        &self.y_dim
    }

    pub fn x_per_meter(&self) -> Option<T> {
        self.x_per_meter
    }

    pub fn y_per_meter(&self) -> Option<T> {
        self.y_per_meter
    }

    /// Physical size along the x-axis in meters.
    pub fn length(&self) -> Option<T> {
        self.x_per_meter.map(|per_meter| self.x_dim.span() / per_meter)
    }

    /// Physical size along the y-axis in meters.
    pub fn width(&self) -> Option<T> {
        self.y_per_meter.map(|per_meter| self.y_dim.span() / per_meter)
    }

    pub fn contains(&self, x: T, y: T) -> bool {
        self.x_dim.contains(x) && self.y_dim.contains(y)
    }
}
