use crate::stencil::*;

/// Explicit update for the 1D Burgers' equation,
/// du/dt + u du/dx = nu d^2u/dx^2.
///
/// Forward difference in time, backward difference for the advection term
/// (for either sign of u), central second difference for diffusion.
/// Stable only while dt <= dx / max|u| and dt <= dx^2 / (2 nu).
pub fn burgers_1d(
    dt: f64,
    dx: f64,
    nu: f64,
) -> StencilF64<impl StencilOperation<f64, 3>, 3> {
    Stencil::new([-1, 0, 1], move |args: &[f64; 3]| {
        let left = args[0];
        let middle = args[1];
        let right = args[2];
        middle - (dt / dx) * middle * (middle - left)
            + (nu * dt / (dx * dx)) * (left - 2.0 * middle + right)
    })
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn burgers_update_by_hand() {
        let s = burgers_1d(0.01, 0.1, 0.1);

        // u_new = 1 - 0.1 * 1 * (1 - 0.5) + 0.1 * (0.5 - 2 + 0.25)
        let r = s.apply(&[0.5, 1.0, 0.25]);
        assert_approx_eq!(f64, r, 0.825, epsilon = 1e-12);

        // a zero neighborhood stays zero
        let r = s.apply(&[0.0, 0.0, 0.0]);
        assert_eq!(r, 0.0);
    }

    #[test]
    fn constant_state_only_advects_nothing() {
        // u constant in space has no gradients, so it is a fixed point
        let s = burgers_1d(0.01, 0.1, 0.1);
        let r = s.apply(&[0.7, 0.7, 0.7]);
        assert_approx_eq!(f64, r, 0.7, epsilon = 1e-12);
    }
}
