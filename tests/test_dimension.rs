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

use pitchgeom::numeric::Scalar;
use pitchgeom::{Dimension, PitchError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_dimension_span() {
    let d = Dimension::new(-100.0, 100.0).unwrap();
    assert_eq!(d.min(), -100.0);
    assert_eq!(d.max(), 100.0);
    assert_eq!(d.span(), 200.0);
}

#[test]
fn test_dimension_zero_width() {
    let d = Dimension::new(0.0, 0.0).unwrap();
    assert_eq!(d.span(), 0.0);
    assert!(d.contains(0.0));
    assert_eq!(d.to_base(0.0), None);
}

#[test]
fn test_dimension_inverted_range() {
    let err = Dimension::new(10.0, -10.0).unwrap_err();
    assert_eq!(
        err,
        PitchError::InvalidRange {
            min: 10.0,
            max: -10.0
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid range: [10, -10] is not ordered"
    );
}

#[test]
fn test_dimension_nan_bound() {
    assert!(matches!(
        Dimension::new(f64::NAN, 1.0),
        Err(PitchError::InvalidRange { .. })
    ));
    assert!(matches!(
        Dimension::new(0.0, f64::NAN),
        Err(PitchError::InvalidRange { .. })
    ));
    assert_eq!(
        Dimension::new(f64::NAN, 1.0).unwrap_err().to_string(),
        "invalid range: [NaN, 1] is not ordered"
    );
}

#[test]
fn test_dimension_contains_and_center() {
    let d = Dimension::new(0.0, 105.0).unwrap();
    assert!(d.contains(0.0));
    assert!(d.contains(105.0));
    assert!(d.contains(52.5));
    assert!(!d.contains(-0.1));
    assert!(!d.contains(105.1));
    assert_eq!(d.center(), 52.5);
}

#[test]
fn test_dimension_base() {
    let d = Dimension::new(-50.0, 50.0).unwrap();
    assert_eq!(d.to_base(-50.0), Some(0.0));
    assert_eq!(d.to_base(0.0), Some(0.5));
    assert_eq!(d.to_base(50.0), Some(1.0));
    assert_eq!(d.from_base(0.25), -25.0);
    // outside the interval
    assert_eq!(d.to_base(100.0), Some(1.5));
}

#[test]
fn test_dimension_display() {
    let d = Dimension::new(-100.0, 100.0).unwrap();
    assert_eq!(d.to_string(), "[-100, 100]");
}

#[test]
fn test_dimension_f32() {
    let d: Dimension<f32> = Dimension::new(0.0f32, 68.0f32).unwrap();
    assert_eq!(d.span(), 68.0f32);
    assert!(d.center().approx_eq(&34.0f32));
}

#[test]
fn test_dimension_random_spans() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..1000 {
        let a: f64 = rng.random_range(-1.0e4..1.0e4);
        let b: f64 = rng.random_range(-1.0e4..1.0e4);
        let (min, max) = if a <= b { (a, b) } else { (b, a) };

        let d = Dimension::new(min, max).unwrap();
        assert_eq!(d.span(), max - min);
        assert!(d.span() >= 0.0);
        assert!(d.contains(d.center()));

        if min < max {
            let v: f64 = rng.random_range(min..=max);
            let base = d.to_base(v).unwrap();
            assert!(d.from_base(base).approx_eq(&v));
            assert!(Dimension::new(max, min).is_err());
        }
    }
}
