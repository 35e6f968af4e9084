use crate::error::*;
use crate::grid::Grid1D;

/// Run configuration for the explicit solver.
///
/// All values must be strictly positive, see `validate`. The stability
/// bounds on `dt` are not enforced here; `crate::diagnostics` reports them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Kinematic viscosity.
    pub nu: f64,
    /// Domain half-width, the grid covers [-half_width, half_width).
    pub half_width: f64,
    /// Spatial step size.
    pub dx: f64,
    /// Time step.
    pub dt: f64,
    /// Total simulated time.
    pub total_time: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            nu: 0.1,
            half_width: 10.0,
            dx: 0.1,
            dt: 0.01,
            total_time: 5.0,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> SimResult<()> {
        let entries = [
            ("nu", self.nu),
            ("half_width", self.half_width),
            ("dx", self.dx),
            ("dt", self.dt),
            ("total_time", self.total_time),
        ];
        for (name, value) in entries {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SimError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    pub fn grid(&self) -> SimResult<Grid1D> {
        self.validate()?;
        Grid1D::new(self.half_width, self.dx)
    }

    /// Number of time steps covering `total_time`: floor(T / dt).
    /// The quotient is padded before truncation so ratios that are integral
    /// in exact arithmetic survive their f64 representation.
    pub fn num_steps(&self) -> usize {
        (self.total_time / self.dt + 1e-9).floor() as usize
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn validate_rejects_nonpositive() {
        let mut p = Parameters::default();
        assert!(p.validate().is_ok());

        p.nu = 0.0;
        assert!(matches!(
            p.validate().unwrap_err(),
            SimError::InvalidParameter { name: "nu", .. }
        ));

        p = Parameters {
            dt: -0.01,
            ..Parameters::default()
        };
        assert!(matches!(
            p.validate().unwrap_err(),
            SimError::InvalidParameter { name: "dt", .. }
        ));

        p = Parameters {
            total_time: f64::NAN,
            ..Parameters::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn step_count() {
        let p = Parameters::default();
        assert_eq!(p.num_steps(), 500);

        let p = Parameters {
            total_time: 0.015,
            ..Parameters::default()
        };
        assert_eq!(p.num_steps(), 1);

        let p = Parameters {
            total_time: 1.0,
            dt: 0.1,
            ..Parameters::default()
        };
        assert_eq!(p.num_steps(), 10);
    }
}
