use crate::error::*;
use crate::grid::Grid1D;
use rayon::prelude::*;

/// Velocity samples aligned index-for-index with a `Grid1D`.
///
/// Fields are per-step snapshots. Solvers never mutate their input field,
/// they write into a separate buffer and swap.
#[derive(Debug, Clone, PartialEq)]
pub struct Field1D {
    values: Vec<f64>,
}

impl Field1D {
    pub fn zeros(grid: &Grid1D) -> Self {
        Field1D {
            values: vec![0.0; grid.n_points()],
        }
    }

    /// Take ownership of raw values, checked against the grid's point count.
    pub fn from_values(grid: &Grid1D, values: Vec<f64>) -> SimResult<Self> {
        if values.len() != grid.n_points() {
            return Err(SimError::SizeMismatch {
                field_len: values.len(),
                grid_len: grid.n_points(),
            });
        }
        Ok(Field1D { values })
    }

    pub fn from_fn<F: Fn(f64) -> f64>(grid: &Grid1D, f: F) -> Self {
        Field1D {
            values: grid.coords().map(f).collect(),
        }
    }

    /// Evaluate `f` pointwise over the grid, in parallel chunks.
    pub fn par_set_values<F>(&mut self, grid: &Grid1D, f: F, chunk_size: usize)
    where
        F: Fn(f64) -> f64 + Sync,
    {
        debug_assert_eq!(self.values.len(), grid.n_points());
        let grid = *grid;
        self.values
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(c, chunk)| {
                let base = c * chunk_size;
                for (i, value_mut) in chunk.iter_mut().enumerate() {
                    *value_mut = f(grid.x(base + i));
                }
            });
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    pub fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}
