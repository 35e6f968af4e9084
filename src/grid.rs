use crate::error::*;

/// Uniform grid over `[-half_width, half_width)`.
///
/// `n_points = ceil(2L / dx)`, so a trailing partial step still gets a
/// point; `x(i) = -L + i * dx`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid1D {
    half_width: f64,
    dx: f64,
    n_points: usize,
}

impl Grid1D {
    pub fn new(half_width: f64, dx: f64) -> SimResult<Self> {
        if !(half_width > 0.0) || !half_width.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "half_width",
                value: half_width,
            });
        }
        if !(dx > 0.0) || !dx.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "dx",
                value: dx,
            });
        }
        let n_points = (2.0 * half_width / dx).ceil() as usize;
        Ok(Grid1D {
            half_width,
            dx,
            n_points,
        })
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    #[track_caller]
    pub fn x(&self, i: usize) -> f64 {
        debug_assert!(i < self.n_points, "index {} out of grid", i);
        -self.half_width + i as f64 * self.dx
    }

    pub fn coords(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n_points).map(|i| self.x(i))
    }

    /// Piecewise-linear interpolation of grid samples at an arbitrary `x`.
    /// Queries outside the grid clamp to the edge values.
    pub fn interp(&self, values: &[f64], x: f64) -> f64 {
        debug_assert_eq!(values.len(), self.n_points);
        let last = self.n_points - 1;
        let t = (x + self.half_width) / self.dx;
        if t <= 0.0 {
            return values[0];
        }
        if t >= last as f64 {
            return values[last];
        }
        let i = (t.floor() as usize).min(last - 1);
        let frac = t - i as f64;
        values[i] + frac * (values[i + 1] - values[i])
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn point_count() {
        {
            let grid = Grid1D::new(10.0, 0.1).unwrap();
            assert_eq!(grid.n_points(), 200);
            assert_approx_eq!(f64, grid.x(0), -10.0);
            assert_approx_eq!(f64, grid.x(199), 9.9, epsilon = 1e-12);
        }

        {
            // 2.0 / 0.3 = 6.66.., the partial last step still gets a point
            let grid = Grid1D::new(1.0, 0.3).unwrap();
            assert_eq!(grid.n_points(), 7);
            assert_approx_eq!(f64, grid.x(6), 0.8, epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_bad_extents() {
        assert!(Grid1D::new(0.0, 0.1).is_err());
        assert!(Grid1D::new(10.0, -0.1).is_err());
        assert!(Grid1D::new(f64::NAN, 0.1).is_err());
    }

    #[test]
    fn interp_matches_samples_and_clamps() {
        let grid = Grid1D::new(1.0, 0.5).unwrap();
        assert_eq!(grid.n_points(), 4);
        let values = [0.0, 1.0, 3.0, 2.0];

        for i in 0..4 {
            assert_approx_eq!(f64, grid.interp(&values, grid.x(i)), values[i]);
        }

        assert_approx_eq!(f64, grid.interp(&values, -0.75), 0.5);
        assert_approx_eq!(f64, grid.interp(&values, -0.25), 2.0);

        assert_approx_eq!(f64, grid.interp(&values, -5.0), 0.0);
        assert_approx_eq!(f64, grid.interp(&values, 5.0), 2.0);
    }
}
