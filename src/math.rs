//! Interpolation kernels shared by the palettes.

/// Linear ramp from (`x0`, `y0`) to (`x1`, `y1`), saturating at `y0`
/// below `x0` and at `y1` above `x1`.
///
/// Each ordinate comes *before* its abscissa, so
/// `interpolate(v, 0.5, 0., 1., 1.)` ramps from 0.5 at `v = 0` to 1 at
/// `v = 1`.  Requires `x0 < x1`.
#[inline]
pub(crate) fn interpolate(value: f64, y0: f64, x0: f64, y1: f64, x1: f64)
                          -> f64 {
    if value < x0 { return y0 }
    if value > x1 { return y1 }
    (value - x0) * (y1 - y0) / (x1 - x0) + y0
}

/// Trapezoid kernel of the jet palette: 0 up to -0.75, rising to 1 at
/// -0.25, flat until 0.25, falling back to 0 at 0.75.
#[inline]
pub(crate) fn jet_base(x: f64) -> f64 {
    if x <= -0.75 { 0. }
    else if x <= -0.25 { interpolate(x, 0., -0.75, 1., -0.25) }
    else if x <= 0.25 { 1. }
    else if x <= 0.75 { interpolate(x, 1., 0.25, 0., 0.75) }
    else { 0. }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn interpolate_saturates_outside_anchors() {
        assert_eq!(interpolate(-3., 0.5, 0., 1., 1.), 0.5);
        assert_eq!(interpolate(7., 0.5, 0., 1., 1.), 1.);
        assert_abs_diff_eq!(interpolate(0.5, 0.5, 0., 1., 1.), 0.75);
    }

    #[test]
    fn interpolate_decreasing_ramp() {
        // Ordinates may decrease while abscissae increase.
        assert_abs_diff_eq!(interpolate(0., 1., 0., 0.5, 1.), 1.);
        assert_abs_diff_eq!(interpolate(0.4, 1., 0., 0.5, 1.), 0.8,
                            epsilon = 1e-12);
        assert_abs_diff_eq!(interpolate(1., 1., 0., 0.5, 1.), 0.5);
    }

    #[test]
    fn jet_base_trapezoid() {
        for (x, y) in [(-2., 0.), (-0.75, 0.), (-0.5, 0.5), (-0.25, 1.),
                       (0., 1.), (0.25, 1.), (0.5, 0.5), (0.75, 0.),
                       (3., 0.)] {
            assert_abs_diff_eq!(jet_base(x), y, epsilon = 1e-15);
        }
    }
}
