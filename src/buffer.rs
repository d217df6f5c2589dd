// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The rendered raster, stored row-major, and its PNG encoding.

use colors::Color;
use errors::Error;
use image::png::PNGEncoder;
use image::ColorType;
use std::io::Write;

/// A width x height grid of colors, one per pixel, stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocates a buffer of transparent black pixels.
    pub fn new(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            pixels: vec![Color(0); width * height],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The color at column x, row y, if it lies inside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Sets the color at column x, row y.  Panics if the pixel lies
    /// outside the buffer.
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] = color;
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Flattens the buffer into R, G, B, A bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_bytes());
        }
        bytes
    }

    /// Encodes the buffer as an 8-bit RGBA PNG into `writer`, then
    /// flushes it so buffered write failures are reported here.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        let encoder = PNGEncoder::new(&mut *writer);
        encoder.encode(
            &self.to_rgba_bytes(),
            self.width as u32,
            self.height as u32,
            ColorType::RGBA(8),
        )?;
        writer.flush()?;
        Ok(())
    }

    /// Encodes the buffer as an 8-bit RGBA PNG in memory.
    pub fn to_png(&self) -> Result<Vec<u8>, Error> {
        let mut png = Vec::new();
        self.write_png(&mut png)?;
        Ok(png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image;
    use std::io::{self, BufWriter, Write};

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn checkerboard() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                buffer.set(x, y, Color::opaque(v, x as u8, y as u8));
            }
        }
        buffer
    }

    #[test]
    fn new_buffer_is_blank() {
        let buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.len(), 12);
        assert!(buffer.pixels().iter().all(|&c| c == Color(0)));
        assert!(PixelBuffer::new(0, 3).is_empty());
    }

    #[test]
    fn get_and_set_are_row_major() {
        let buffer = checkerboard();
        assert_eq!(buffer.get(2, 1), Some(Color::opaque(0, 2, 1)));
        assert_eq!(buffer.pixels()[3 + 2], Color::opaque(0, 2, 1));
        assert_eq!(buffer.get(3, 0), None);
        assert_eq!(buffer.get(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn set_outside_panics() {
        PixelBuffer::new(2, 2).set(2, 0, Color(0));
    }

    #[test]
    fn rgba_bytes_follow_pixels() {
        let bytes = checkerboard().to_rgba_bytes();
        assert_eq!(bytes.len(), 3 * 2 * 4);
        assert_eq!(&bytes[..8], &[255, 0, 0, 255, 0, 1, 0, 255]);
    }

    #[test]
    fn png_decodes_back_to_the_same_pixels() {
        let buffer = checkerboard();
        let png = buffer.to_png().unwrap();
        assert_eq!(&png[..4], b"\x89PNG");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.into_raw(), buffer.to_rgba_bytes());
    }

    #[test]
    fn buffered_write_failures_are_reported() {
        let mut output = BufWriter::new(FullDisk);
        match checkerboard().write_png(&mut output) {
            Err(Error::Encode(_)) => {}
            other => panic!("expected an encode error, got {:?}", other),
        }
    }
}
