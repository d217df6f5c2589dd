// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The four knobs of a render, and the defaults a caller falls back to
//! when a request leaves one out.

use colors::ColorMode;

/// Image width when none is requested.
pub const DEFAULT_WIDTH: usize = 1024;

/// Image height when none is requested.
pub const DEFAULT_HEIGHT: usize = 1024;

/// Iteration cap when none is requested.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Everything a single render needs.  Read-only for the duration of
/// the render; nothing carries over to the next one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderParams {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Which color mapper paints the escape counts.
    pub mode: ColorMode,
    /// Iteration cap for the escape test.
    pub max_iterations: usize,
}

impl Default for RenderParams {
    fn default() -> RenderParams {
        RenderParams {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: ColorMode::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl RenderParams {
    /// Constructor.
    pub fn new(width: usize, height: usize, color: bool, max_iterations: usize) -> RenderParams {
        RenderParams {
            width,
            height,
            mode: ColorMode::from(color),
            max_iterations,
        }
    }

    /// Builds parameters from loosely-typed request values.  Each value
    /// is read like JavaScript's `parseInt`: leading whitespace is
    /// skipped and the leading run of digits is taken, so "12abc" and
    /// "1.5" read as 12 and 1.  A value that is missing, has no leading
    /// digits, is negative, or is zero falls back to its default;
    /// `color` selects the hue mapper.
    pub fn from_request(
        width: Option<&str>,
        height: Option<&str>,
        color: bool,
        max_iterations: Option<&str>,
    ) -> RenderParams {
        RenderParams {
            width: positive_or(width, DEFAULT_WIDTH),
            height: positive_or(height, DEFAULT_HEIGHT),
            mode: ColorMode::from(color),
            max_iterations: positive_or(max_iterations, DEFAULT_MAX_ITERATIONS),
        }
    }
}

fn positive_or(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(leading_integer)
        .filter(|&v| v > 0)
        .unwrap_or(default)
}

fn leading_integer(s: &str) -> Option<usize> {
    let s = s.trim_start();
    let s = if s.starts_with('+') { &s[1..] } else { s };
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or_else(|| s.len());
    s[..end].parse().ok()
}
