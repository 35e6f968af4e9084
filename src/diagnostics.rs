//! Stability numbers for the explicit scheme, and an opt-in blow-up check.
//!
//! The stepper itself never enforces the stability bounds. Violating them
//! produces diverging or NaN fields silently; callers that want to fail
//! fast run a `StabilityCheck` against each snapshot.

use crate::config::Parameters;
use crate::error::*;
use crate::field::Field1D;
use crate::solver::Snapshot;

/// 2 nu dt / dx^2. The diffusion term is stable while this is <= 1.
pub fn diffusion_number(params: &Parameters) -> f64 {
    2.0 * params.nu * params.dt / (params.dx * params.dx)
}

/// dt max|u| / dx. The advection term is stable while this is <= 1.
/// Only a snapshot in time; |u| can grow as lobes steepen.
pub fn advective_cfl(params: &Parameters, field: &Field1D) -> f64 {
    params.dt * field.max_abs() / params.dx
}

pub fn warn_if_unstable(params: &Parameters, initial: &Field1D) {
    let d = diffusion_number(params);
    if d > 1.0 {
        log::warn!("diffusion number {d:.3} exceeds 1, expect blow-up");
    }
    let cfl = advective_cfl(params, initial);
    if cfl > 1.0 {
        log::warn!(
            "advective CFL {cfl:.3} exceeds 1 on the initial profile, \
             expect blow-up"
        );
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StabilityCheck {
    /// A value with magnitude beyond this counts as blown up.
    pub max_magnitude: f64,
}

impl Default for StabilityCheck {
    fn default() -> Self {
        StabilityCheck {
            max_magnitude: 1.0e6,
        }
    }
}

impl StabilityCheck {
    pub fn check(&self, snapshot: &Snapshot) -> SimResult<()> {
        for &v in snapshot.field.values() {
            if !v.is_finite() {
                return Err(SimError::Instability {
                    time: snapshot.time,
                    message: "non-finite value in field".to_string(),
                });
            }
            if v.abs() > self.max_magnitude {
                return Err(SimError::Instability {
                    time: snapshot.time,
                    message: format!(
                        "|u| = {:.3e} exceeds {:.3e}",
                        v.abs(),
                        self.max_magnitude
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::grid::Grid1D;
    use float_cmp::assert_approx_eq;

    fn snapshot_of(values: Vec<f64>) -> Snapshot {
        Snapshot {
            step: 3,
            time: 0.03,
            field: Field1D::from_values(
                &Grid1D::new(1.0, 0.5).unwrap(),
                values,
            )
            .unwrap(),
        }
    }

    #[test]
    fn stability_numbers() {
        let params = Parameters::default();
        assert_approx_eq!(
            f64,
            diffusion_number(&params),
            0.2,
            epsilon = 1e-12
        );

        let grid = params.grid().unwrap();
        let field = Field1D::from_fn(&grid, |_| 2.0);
        assert_approx_eq!(
            f64,
            advective_cfl(&params, &field),
            0.2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn check_flags_non_finite() {
        let check = StabilityCheck::default();
        assert!(check.check(&snapshot_of(vec![0.0, 1.0, -1.0, 0.5])).is_ok());

        let err = check
            .check(&snapshot_of(vec![0.0, f64::NAN, 0.0, 0.0]))
            .unwrap_err();
        assert!(matches!(err, SimError::Instability { .. }));

        let err = check
            .check(&snapshot_of(vec![0.0, f64::INFINITY, 0.0, 0.0]))
            .unwrap_err();
        assert!(matches!(err, SimError::Instability { .. }));
    }

    #[test]
    fn check_flags_magnitude() {
        let check = StabilityCheck { max_magnitude: 10.0 };
        assert!(check.check(&snapshot_of(vec![0.0, 9.0, -9.0, 0.0])).is_ok());
        assert!(check
            .check(&snapshot_of(vec![0.0, -11.0, 0.0, 0.0]))
            .is_err());
    }
}
