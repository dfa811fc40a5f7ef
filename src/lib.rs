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

//! Pitch coordinate systems with optional real-world scale.
//!
//! A [`PitchDimensions`] describes the x/y extent of a playing field in the
//! coordinate units of some data source. When the number of coordinate units
//! per meter is known for an axis, the physical length or width of the pitch
//! can be derived from it.
//!
//! ```rust
//! use pitchgeom::{Dimension, PitchDimensions};
//!
//! let pitch: PitchDimensions = PitchDimensions::new(
//!     Dimension::new(-100.0, 100.0).unwrap(),
//!     Dimension::new(-50.0, 50.0).unwrap(),
//!     Some(20.0 / 12.0),
//!     None,
//! );
//!
//! assert!((pitch.length().unwrap() - 120.0).abs() < 1e-9);
//! assert_eq!(pitch.width(), None);
//! ```

pub mod error;
pub mod geometry;
pub mod numeric;

pub use error::{PitchError, Result};
pub use geometry::{Dimension, PitchDimensions};
pub use numeric::Scalar;
