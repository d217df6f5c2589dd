// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and the fixed window [-1, 1] x [-1, 1] on the complex plane.
//!
//! The window does not cover the whole Mandelbrot set, which reaches
//! out to about -2 on the real axis.  It is deliberately not
//! configurable.

use complex::Complex;
use errors::Error;

/// Left-lower corner of the complex window.
pub const LEFT_LOWER: Complex = Complex { re: -1.0, im: -1.0 };

/// Right-upper corner of the complex window.
pub const RIGHT_UPPER: Complex = Complex { re: 1.0, im: 1.0 };

/// Describes the width and height of an integral plane that is assumed
/// to start at 0,0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the x, y of a pixel on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of the integral plane onto the complex window.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    // Complex-plane distance covered by one pixel, horizontally and
    // vertically.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the width and height of the image; fails if
    /// either is zero, since the mapping would divide by it.
    pub fn new(width: usize, height: usize) -> Result<PlaneMapper, Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }

        let grid_factors = (
            (RIGHT_UPPER.re - LEFT_LOWER.re) / (width as f64),
            (RIGHT_UPPER.im - LEFT_LOWER.im) / (height as f64),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            grid_factors,
        })
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// matching point in the complex window.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex {
        Complex::new(
            self.grid_factors.0 * (pixel.0 as f64) + LEFT_LOWER.re,
            self.grid_factors.1 * (pixel.1 as f64) + LEFT_LOWER.im,
        )
    }
}

/// Maps pixel (x, y) of a width x height image onto the complex window:
/// re = (2/width)·x - 1, im = (2/height)·y - 1.  The dimensions must be
/// non-zero.
pub fn coord_to_complex(x: usize, y: usize, width: usize, height: usize) -> Complex {
    Complex::new(
        (2.0 / width as f64) * (x as f64) - 1.0,
        (2.0 / height as f64) * (y as f64) - 1.0,
    )
}
