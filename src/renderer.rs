// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives a render: every pixel is mapped to a point, the point is
//! tested for escape, and the escape count is painted into the buffer.
//!
//! Pixels share nothing but the output buffer, so the threaded version
//! hands each thread its own band of rows and never locks.

use buffer::PixelBuffer;
use colors::{Color, ColorMode};
use errors::Error;
use escape::divergence_speed;
use params::RenderParams;
use planes::{IntegralPlane, Pixel, PlaneMapper};

/// Takes a plane, a color mode and a limit (the number of iterations
/// to conduct per point), and renders an escape-time Mandelbrot out of
/// it.  Once built it is never mutated, so one renderer can be shared
/// by any number of threads.
#[derive(Debug)]
pub struct Renderer {
    plane: PlaneMapper,
    mode: ColorMode,
    max_iterations: usize,
}

impl Renderer {
    /// Fails only when the requested image has no area.
    pub fn new(params: &RenderParams) -> Result<Self, Error> {
        let plane = PlaneMapper::new(params.width, params.height)?;
        Ok(Renderer {
            plane,
            mode: params.mode,
            max_iterations: params.max_iterations,
        })
    }

    /// The whole per-pixel pipeline for a single pixel.
    #[inline]
    pub fn color_at(&self, pixel: &Pixel) -> Color {
        let c = self.plane.pixel_to_point(pixel);
        let n = divergence_speed(c, self.max_iterations);
        self.mode.color(n, self.max_iterations)
    }

    /// Fills `band`, a run of whole rows starting at `first_row`.
    fn render_band(&self, band: &mut [Color], first_row: usize) {
        let width = self.plane.integral_plane.0;
        let rows = band.len() / width;
        let pixels = iproduct!(first_row..first_row + rows, 0..width);
        for (slot, (row, column)) in band.iter_mut().zip(pixels) {
            *slot = self.color_at(&Pixel(column, row));
        }
    }

    /// The main function for single-threaded renders.
    pub fn render_single(&self) -> PixelBuffer {
        let IntegralPlane(width, height) = self.plane.integral_plane;
        debug!("Rendering {}x{} on the calling thread", width, height);
        let mut buffer = PixelBuffer::new(width, height);
        self.render_band(buffer.pixels_mut(), 0);
        buffer
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.  Each thread owns a disjoint band of rows; the
    /// result is identical to `render_single`.
    pub fn render(&self, threads: usize) -> Result<PixelBuffer, Error> {
        if threads == 0 {
            return Err(Error::NoThreads);
        }

        let IntegralPlane(width, height) = self.plane.integral_plane;
        let rows_per_band = (height + threads - 1) / threads;
        debug!(
            "Rendering {}x{} on {} threads, {} rows per band",
            width, height, threads, rows_per_band
        );

        let mut buffer = PixelBuffer::new(width, height);
        crossbeam::scope(|spawner| {
            let bands = buffer.pixels_mut().chunks_mut(rows_per_band * width);
            for (i, band) in bands.enumerate() {
                spawner.spawn(move |_| self.render_band(band, i * rows_per_band));
            }
        })
        .map_err(|_| Error::ThreadPanic)?;
        Ok(buffer)
    }
}

/// Renders a width x height image with the given iteration cap, in
/// color if `color` is set and in grayscale otherwise.  Fails only on
/// an empty image.
pub fn render(
    width: usize,
    height: usize,
    color: bool,
    max_iterations: usize,
) -> Result<PixelBuffer, Error> {
    let params = RenderParams::new(width, height, color, max_iterations);
    Ok(Renderer::new(&params)?.render_single())
}

#[cfg(test)]
mod tests {
    use super::*;
    use colors::OPAQUE;

    #[test]
    fn grayscale_render_is_gray_and_opaque() {
        let buffer = render(4, 4, false, 20).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (4, 4));
        for c in buffer.pixels() {
            assert_eq!(c.red(), c.green());
            assert_eq!(c.green(), c.blue());
            assert_eq!(c.alpha(), OPAQUE);
        }
    }

    #[test]
    fn known_pixels() {
        let buffer = render(4, 4, false, 20).unwrap();
        // (-1, -1) escapes on the third step.
        assert_eq!(buffer.get(0, 0), Some(Color::opaque(217, 217, 217)));
        // The origin never escapes.
        assert_eq!(buffer.get(2, 2), Some(Color::opaque(0, 0, 0)));
    }

    #[test]
    fn color_render_is_opaque() {
        let buffer = render(9, 7, true, 60).unwrap();
        assert!(buffer.pixels().iter().all(|c| c.alpha() == OPAQUE));
    }

    #[test]
    fn zero_iterations_paint_everything_black() {
        let buffer = render(5, 5, false, 0).unwrap();
        assert!(buffer
            .pixels()
            .iter()
            .all(|&c| c == Color::opaque(0, 0, 0)));
    }

    #[test]
    fn renders_are_repeatable() {
        let a = render(16, 12, true, 40).unwrap();
        let b = render(16, 12, true, 40).unwrap();
        assert_eq!(a.to_rgba_bytes(), b.to_rgba_bytes());
    }

    #[test]
    fn threaded_render_matches_single() {
        let params = RenderParams::new(7, 5, false, 25);
        let renderer = Renderer::new(&params).unwrap();
        let single = renderer.render_single();
        for threads in 1..9 {
            assert_eq!(renderer.render(threads).unwrap(), single);
        }
    }

    #[test]
    fn color_at_matches_the_buffer() {
        let params = RenderParams::new(6, 6, true, 30);
        let renderer = Renderer::new(&params).unwrap();
        let buffer = renderer.render_single();
        for &(x, y) in &[(0, 0), (5, 0), (3, 3), (1, 4)] {
            assert_eq!(buffer.get(x, y), Some(renderer.color_at(&Pixel(x, y))));
        }
    }

    #[test]
    fn empty_images_and_zero_threads_are_rejected() {
        assert!(render(0, 4, false, 20).is_err());
        assert!(render(4, 0, true, 20).is_err());
        let renderer = Renderer::new(&RenderParams::new(2, 2, false, 20)).unwrap();
        assert!(renderer.render(0).is_err());
    }
}
