// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test at the heart of the Mandelbrot set.

use complex::Complex;
use num::Zero;

/// The square of the bailout radius.  Once |z| passes 2 the orbit is
/// guaranteed to go to infinity.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates z = z² + c from z = 0, and returns the number of
/// iterations performed when |z| first exceeds 2.  If the orbit is
/// still bounded after `max_iterations` steps, returns `max_iterations`;
/// a point that escapes on the very last step is indistinguishable from
/// one that never escapes.
pub fn divergence_speed(c: Complex, max_iterations: usize) -> usize {
    let mut z = Complex::zero();
    for n in 0..max_iterations {
        z = z.square().sum(c);
        if z.sqr_mod() > ESCAPE_RADIUS_SQUARED {
            return n + 1;
        }
    }
    max_iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for &limit in &[0, 1, 20, 1000] {
            assert_eq!(divergence_speed(Complex::new(0.0, 0.0), limit), limit);
        }
    }

    #[test]
    fn far_points_escape_on_the_first_step() {
        assert_eq!(divergence_speed(Complex::new(3.0, 0.0), 20), 1);
        assert_eq!(divergence_speed(Complex::new(-1.5, 1.5), 20), 1);
    }

    #[test]
    fn escape_counts_follow_the_orbit() {
        // 1, 2, 5: |2| is on the radius, not past it.
        assert_eq!(divergence_speed(Complex::new(1.0, 0.0), 20), 3);
        // 0.5, 0.75, 1.0625, 1.6289.., 3.1533..
        assert_eq!(divergence_speed(Complex::new(0.5, 0.0), 20), 5);
        assert_eq!(divergence_speed(Complex::new(-1.0, -1.0), 20), 3);
    }

    #[test]
    fn capped_at_the_iteration_limit() {
        assert_eq!(divergence_speed(Complex::new(0.5, 0.0), 4), 4);
        assert_eq!(divergence_speed(Complex::new(-2.0, 0.0), 50), 50);
    }

    #[test]
    fn zero_limit_always_returns_zero() {
        assert_eq!(divergence_speed(Complex::new(3.0, 3.0), 0), 0);
        assert_eq!(divergence_speed(Complex::new(0.25, 0.0), 0), 0);
    }

    #[test]
    fn result_stays_in_range() {
        let limit = 30;
        for i in 0..=20 {
            for j in 0..=20 {
                let c = Complex::new(-2.0 + 0.2 * f64::from(i), -2.0 + 0.2 * f64::from(j));
                assert!(divergence_speed(c, limit) <= limit);
            }
        }
    }
}
