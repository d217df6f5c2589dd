// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns escape counts into pixel colors.
//!
//! There are two mappers.  The grayscale one is a linear ramp from
//! white (escaped immediately) to black (never escaped).  The hue one
//! walks the hue circle of a very dark, fully saturated HSL color;
//! it normalizes against its own fixed limit of `HUE_ITERATIONS`
//! rather than the iteration cap used to compute the count.

use num::clamp;

/// Every color this crate produces is fully opaque.
pub const OPAQUE: u8 = 255;

/// Number of iterations that spans the full hue circle in
/// `ColorMode::Hue`.
pub const HUE_ITERATIONS: usize = 50;

const SATURATION: f64 = 1.0;
const LIGHTNESS: f64 = 0.06;

/// An RGBA color packed into a u32, red in the most significant byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Packs four channels.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
        Color(
            (u32::from(red) << 24)
                | (u32::from(green) << 16)
                | (u32::from(blue) << 8)
                | u32::from(alpha),
        )
    }

    /// Packs three channels with full opacity.
    pub fn opaque(red: u8, green: u8, blue: u8) -> Color {
        Color::rgba(red, green, blue, OPAQUE)
    }

    /// Red channel.
    pub fn red(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    pub fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    pub fn blue(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    pub fn alpha(self) -> u8 {
        self.0 as u8
    }

    /// The channels in R, G, B, A order.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}

/// Which of the two mappers to paint with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// `grayscale`, scaled to the render's iteration cap.
    Grayscale,
    /// `hue`, scaled to `HUE_ITERATIONS`.
    Hue,
}

impl Default for ColorMode {
    fn default() -> ColorMode {
        ColorMode::Grayscale
    }
}

impl From<bool> for ColorMode {
    fn from(color: bool) -> ColorMode {
        if color {
            ColorMode::Hue
        } else {
            ColorMode::Grayscale
        }
    }
}

impl ColorMode {
    /// Colors an escape count produced with the given iteration cap.
    #[inline]
    pub fn color(self, n: usize, max_iterations: usize) -> Color {
        match self {
            ColorMode::Grayscale => grayscale(n, max_iterations),
            ColorMode::Hue => hue(n, HUE_ITERATIONS),
        }
    }
}

/// Linear ramp: 255 at n = 0 down to 0 at n = max_iterations.  With no
/// iteration budget every point counts as bounded, so a zero cap gives
/// black.
pub fn grayscale(n: usize, max_iterations: usize) -> Color {
    if max_iterations == 0 {
        return Color::opaque(0, 0, 0);
    }
    let gray = (-255.0 / max_iterations as f64) * (n as f64) + 255.0;
    let gray = clamp(gray.round(), 0.0, 255.0) as u8;
    Color::opaque(gray, gray, gray)
}

/// Maps n / limit (capped at 1) onto the hue circle at saturation 1 and
/// lightness 0.06.  A zero limit is treated as a full turn.
pub fn hue(n: usize, limit: usize) -> Color {
    let t = if limit == 0 {
        1.0
    } else {
        (n as f64 / limit as f64).min(1.0)
    };

    let (s, l) = (SATURATION, LIGHTNESS);
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Color::opaque(
        to_channel(hue_to_rgb(p, q, t + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, t)),
        to_channel(hue_to_rgb(p, q, t - 1.0 / 3.0)),
    )
}

/// The piecewise HSL helper: given the two lightness bounds and a hue
/// offset, returns one RGB channel in [0, 1].
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + 6.0 * t * (q - p);
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + 6.0 * (2.0 / 3.0 - t) * (q - p);
    }
    p
}

#[inline]
fn to_channel(v: f64) -> u8 {
    clamp((255.0 * v).round(), 0.0, 255.0) as u8
}
