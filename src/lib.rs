#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points c on the complex plane for
//! which the orbit of z = z² + c, started at zero, stays bounded.
//! Points outside the set run off to infinity, some faster than
//! others.  This crate counts how many iterations each point takes to
//! leave the circle of radius two, and paints that count into a pixel:
//! either as a gray level, fading from white to black, or as a hue.
//!
//! The pixel grid is mapped onto the fixed window [-1, 1] x [-1, 1].
//! The finished raster can be encoded as a PNG.
//!
//! ```no_run
//! let image = mandelbrot::render(1024, 1024, false, 20).unwrap();
//! let png = image.to_png().unwrap();
//! ```

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod buffer;
pub mod colors;
pub mod complex;
pub mod errors;
pub mod escape;
pub mod params;
pub mod planes;
pub mod renderer;

pub use buffer::PixelBuffer;
pub use colors::{grayscale, hue, Color, ColorMode};
pub use complex::Complex;
pub use errors::Error;
pub use escape::divergence_speed;
pub use params::RenderParams;
pub use planes::{coord_to_complex, PlaneMapper};
pub use renderer::{render, Renderer};
