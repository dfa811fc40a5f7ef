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

use num_traits::Float;

use std::fmt::{Debug, Display};

pub const EPS: f64 = 1e-10;

/// Coordinate type shared by dimensions and pitches.
///
/// Implemented for `f64` (the default everywhere in this crate) and `f32`.
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    fn from_num_den(num: i32, den: i32) -> Self;

    /// Absolute tolerance used by [`Scalar::approx_eq`], scaled by magnitude above 1.
    fn tolerance() -> Self;

    fn approx_eq(&self, other: &Self) -> bool {
        let scale = Self::one().max(self.abs()).max(other.abs());
        (*self - *other).abs() <= Self::tolerance() * scale
    }
}

impl Scalar for f64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }

    fn tolerance() -> Self {
        EPS
    }
}

impl Scalar for f32 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f32 / den as f32
    }

    fn tolerance() -> Self {
        1e-5
    }
}
