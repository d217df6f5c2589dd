// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised at the edges of a render.  The arithmetic itself is
//! total; only degenerate parameters, worker failures, and the PNG
//! encoder can fail.

use std::io;

/// Everything that can go wrong while rendering or encoding.
#[derive(Debug, Fail)]
pub enum Error {
    /// The integral plane has no area, so there is nothing to map the
    /// complex plane onto.
    #[fail(display = "Image dimensions must be non-zero, got {}x{}", width, height)]
    EmptyImage {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// A threaded render was asked to run on zero threads.
    #[fail(display = "Thread count must be at least 1")]
    NoThreads,

    /// One of the render threads panicked before finishing its band.
    #[fail(display = "A render thread panicked")]
    ThreadPanic,

    /// The PNG encoder or the underlying writer failed.
    #[fail(display = "Could not write PNG: {}", _0)]
    Encode(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Encode(err)
    }
}
