//! Initial velocity profiles evaluated pointwise over the grid.

use crate::field::Field1D;
use crate::grid::Grid1D;
use clap::ValueEnum;
use rand::prelude::*;
use rayon::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ICType {
    /// The shock-forming pair of mirrored Gaussian bumps.
    #[default]
    GaussianPair,
    Zero,
    Rand {
        max_val: f64,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum, Default)]
pub enum ClapICType {
    #[default]
    GaussianPair,
    Zero,
    Rand,
}

impl ClapICType {
    pub fn to_ic_type(&self, dial: f64) -> ICType {
        match self {
            ClapICType::GaussianPair => ICType::GaussianPair,
            ClapICType::Zero => ICType::Zero,
            ClapICType::Rand => ICType::Rand { max_val: dial },
        }
    }
}

/// Difference of two unit Gaussian bumps centered at x = +1 and x = -1:
/// u(x) = exp(-(x-1)^2 / 2) - exp(-(x+1)^2 / 2).
/// Odd-symmetric, so the two lobes steepen toward each other.
pub fn gaussian_pair(grid: &Grid1D, chunk_size: usize) -> Field1D {
    let mut field = Field1D::zeros(grid);
    field.par_set_values(
        grid,
        |x| {
            (-(x - 1.0) * (x - 1.0) / 2.0).exp()
                - (-(x + 1.0) * (x + 1.0) / 2.0).exp()
        },
        chunk_size,
    );
    field
}

/// Uniform noise in [-max_val, max_val).
pub fn rand_ic(grid: &Grid1D, max_val: f64, chunk_size: usize) -> Field1D {
    assert!(max_val > 0.0);
    let mut field = Field1D::zeros(grid);
    field
        .values_mut()
        .par_chunks_mut(chunk_size)
        .for_each(|chunk| {
            let mut rng = rand::thread_rng();
            for value_mut in chunk {
                *value_mut = rng.gen_range(-max_val..max_val);
            }
        });
    field
}

pub fn generate_ic(
    grid: &Grid1D,
    ic_type: ICType,
    chunk_size: usize,
) -> Field1D {
    match ic_type {
        // Special case, fields are created zeroed
        ICType::Zero => Field1D::zeros(grid),
        ICType::GaussianPair => gaussian_pair(grid, chunk_size),
        ICType::Rand { max_val } => rand_ic(grid, max_val, chunk_size),
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn gaussian_pair_lobes() {
        let grid = Grid1D::new(10.0, 0.1).unwrap();
        let u = gaussian_pair(&grid, 100);

        // x = -1 is index 90, x = +1 is index 110
        let peak = 1.0 - (-2.0f64).exp();
        assert_approx_eq!(f64, u.values()[110], peak, epsilon = 1e-12);
        assert_approx_eq!(f64, u.values()[90], -peak, epsilon = 1e-12);

        // far from both bumps the profile decays to nothing
        assert!(u.values()[0].abs() < 1e-10);
        assert!(u.values()[199].abs() < 1e-10);
    }

    #[test]
    fn rand_ic_stays_in_range() {
        let grid = Grid1D::new(2.0, 0.1).unwrap();
        let u = rand_ic(&grid, 0.5, 7);
        assert!(u.values().iter().all(|v| v.abs() <= 0.5));
    }

    #[test]
    fn clap_type_dispatch() {
        assert_eq!(
            ClapICType::GaussianPair.to_ic_type(3.0),
            ICType::GaussianPair
        );
        assert_eq!(
            ClapICType::Rand.to_ic_type(3.0),
            ICType::Rand { max_val: 3.0 }
        );
    }
}
