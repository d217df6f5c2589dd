// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A complex number carrying only the arithmetic the Mandelbrot
//! recurrence needs.  Every operation takes its operands by value and
//! returns a fresh `Complex`; nothing is ever mutated in place.

use num::Zero;
use std::ops::Add;

/// A point on the complex plane, treating the real part as the
/// x-component and the imaginary part as the y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Constructor.
    pub fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// z², expanded by hand as (re² - im², 2·re·im).  The escape counts
    /// downstream are computed against exactly this formula.
    #[inline]
    pub fn square(self) -> Complex {
        Complex {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    /// Component-wise addition.
    #[inline]
    pub fn sum(self, other: Complex) -> Complex {
        Complex {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// The squared modulus, re² + im².  Comparing this against the
    /// square of the escape radius saves a square root per iteration.
    #[inline]
    pub fn sqr_mod(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// The modulus, or distance from the origin.
    pub fn modulus(self) -> f64 {
        self.sqr_mod().sqrt()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        self.sum(other)
    }
}

impl Zero for Complex {
    fn zero() -> Complex {
        Complex { re: 0.0, im: 0.0 }
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Zero;

    #[test]
    fn zero_is_the_origin() {
        assert_eq!(Complex::zero(), Complex::new(0.0, 0.0));
        assert!(Complex::zero().is_zero());
        assert!(!Complex::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn square_expands_components() {
        assert_eq!(Complex::new(3.0, 4.0).square(), Complex::new(-7.0, 24.0));
        assert_eq!(Complex::new(0.0, 1.0).square(), Complex::new(-1.0, 0.0));
        assert_eq!(Complex::new(-2.0, 0.0).square(), Complex::new(4.0, 0.0));
    }

    #[test]
    fn sum_adds_componentwise() {
        let z = Complex::new(1.5, -2.0);
        let w = Complex::new(-0.5, 3.0);
        assert_eq!(z.sum(w), Complex::new(1.0, 1.0));
        assert_eq!(z + w, z.sum(w));
    }

    #[test]
    fn operations_leave_operands_untouched() {
        let z = Complex::new(3.0, 4.0);
        let _ = z.square();
        let _ = z.sum(z);
        assert_eq!(z, Complex::new(3.0, 4.0));
    }

    #[test]
    fn modulus_and_squared_modulus() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.sqr_mod(), 25.0);
        assert_eq!(z.modulus(), 5.0);
        assert_eq!(Complex::zero().modulus(), 0.0);
    }
}
