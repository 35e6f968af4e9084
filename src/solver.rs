use crate::config::Parameters;
use crate::diagnostics;
use crate::error::*;
use crate::field::Field1D;
use crate::grid::Grid1D;
use crate::initial_conditions::{self, ICType};
use crate::standard_stencils;
use crate::stencil::*;
use rayon::prelude::*;

pub fn gather_args<Operation, const NEIGHBORHOOD_SIZE: usize>(
    stencil: &StencilF64<Operation, NEIGHBORHOOD_SIZE>,
    input: &[f64],
    index: usize,
) -> [f64; NEIGHBORHOOD_SIZE]
where
    Operation: StencilOperation<f64, NEIGHBORHOOD_SIZE>,
{
    stencil.offsets().map(|offset| {
        let n_index = (index as i32 + offset) as usize;
        input[n_index]
    })
}

/// Explicit direct solver for pinned-boundary stencils in one dimension.
///
/// One step reads only the previous snapshot: interior points get the
/// stencil applied, points within the stencil's reach of an edge are copied
/// forward unchanged (Dirichlet values frozen at whatever the edges hold).
pub struct DirectSolver<Operation, const NEIGHBORHOOD_SIZE: usize>
where
    Operation: StencilOperation<f64, NEIGHBORHOOD_SIZE>,
{
    stencil: StencilF64<Operation, NEIGHBORHOOD_SIZE>,
    chunk_size: usize,
}

impl<Operation, const NEIGHBORHOOD_SIZE: usize>
    DirectSolver<Operation, NEIGHBORHOOD_SIZE>
where
    Operation: StencilOperation<f64, NEIGHBORHOOD_SIZE>,
{
    pub fn new(
        stencil: StencilF64<Operation, NEIGHBORHOOD_SIZE>,
        chunk_size: usize,
    ) -> Self {
        assert!(chunk_size >= 1);
        DirectSolver {
            stencil,
            chunk_size,
        }
    }

    /// Advance `input` by one step into `output`. `input` is not modified;
    /// every interior update reads both neighbors from the previous step.
    pub fn apply_step(&self, input: &Field1D, output: &mut Field1D) {
        profiling::scope!("direct_solver: apply_step");
        let n = input.len();
        assert_eq!(n, output.len());
        let (left_reach, right_reach) = self.stencil.reach();
        assert!(n > left_reach + right_reach);

        let input_values = input.values();
        let output_values = output.values_mut();

        output_values[..left_reach]
            .copy_from_slice(&input_values[..left_reach]);
        output_values[n - right_reach..]
            .copy_from_slice(&input_values[n - right_reach..]);

        output_values[left_reach..n - right_reach]
            .par_chunks_mut(self.chunk_size)
            .enumerate()
            .for_each(|(c, chunk)| {
                let base = left_reach + c * self.chunk_size;
                for (i, value_mut) in chunk.iter_mut().enumerate() {
                    let args =
                        gather_args(&self.stencil, input_values, base + i);
                    *value_mut = self.stencil.apply(&args);
                }
            });
    }
}

/// The state of the field after `step` updates, at time `step * dt`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub step: usize,
    pub time: f64,
    pub field: Field1D,
}

impl Snapshot {
    /// `(x, u)` pairs for plotting or interpolation by a consumer.
    pub fn samples<'a>(
        &'a self,
        grid: &'a Grid1D,
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        grid.coords().zip(self.field.values().iter().copied())
    }
}

/// The time loop: a finite sequence of per-step snapshots.
///
/// Yields exactly `num_steps` snapshots in time order, each derived solely
/// from its predecessor via `DirectSolver::apply_step` under the two-buffer
/// swap discipline. There is no convergence check and no early exit.
pub struct Simulation<Operation, const NEIGHBORHOOD_SIZE: usize>
where
    Operation: StencilOperation<f64, NEIGHBORHOOD_SIZE>,
{
    solver: DirectSolver<Operation, NEIGHBORHOOD_SIZE>,
    grid: Grid1D,
    dt: f64,
    current: Field1D,
    scratch: Field1D,
    step: usize,
    num_steps: usize,
}

impl<Operation, const NEIGHBORHOOD_SIZE: usize>
    Simulation<Operation, NEIGHBORHOOD_SIZE>
where
    Operation: StencilOperation<f64, NEIGHBORHOOD_SIZE>,
{
    pub fn new(
        grid: Grid1D,
        initial: Field1D,
        solver: DirectSolver<Operation, NEIGHBORHOOD_SIZE>,
        dt: f64,
        num_steps: usize,
    ) -> SimResult<Self> {
        if initial.len() != grid.n_points() {
            return Err(SimError::SizeMismatch {
                field_len: initial.len(),
                grid_len: grid.n_points(),
            });
        }
        let scratch = initial.clone();
        Ok(Simulation {
            solver,
            grid,
            dt,
            current: initial,
            scratch,
            step: 0,
            num_steps,
        })
    }

    pub fn grid(&self) -> &Grid1D {
        &self.grid
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// The state the next step will be derived from. Before the first pull
    /// this is the initial profile.
    pub fn current_snapshot(&self) -> Snapshot {
        Snapshot {
            step: self.step,
            time: self.step as f64 * self.dt,
            field: self.current.clone(),
        }
    }
}

impl<Operation, const NEIGHBORHOOD_SIZE: usize> Iterator
    for Simulation<Operation, NEIGHBORHOOD_SIZE>
where
    Operation: StencilOperation<f64, NEIGHBORHOOD_SIZE>,
{
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        if self.step == self.num_steps {
            return None;
        }
        self.solver.apply_step(&self.current, &mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.step += 1;
        Some(self.current_snapshot())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_steps - self.step;
        (remaining, Some(remaining))
    }
}

impl<Operation, const NEIGHBORHOOD_SIZE: usize> ExactSizeIterator
    for Simulation<Operation, NEIGHBORHOOD_SIZE>
where
    Operation: StencilOperation<f64, NEIGHBORHOOD_SIZE>,
{
}

/// Build the full Burgers' run from a parameter set: validated grid,
/// generated initial condition, and the explicit update stencil.
pub fn burgers_simulation(
    params: &Parameters,
    ic_type: ICType,
    chunk_size: usize,
) -> SimResult<Simulation<impl StencilOperation<f64, 3>, 3>> {
    let grid = params.grid()?;
    let initial = initial_conditions::generate_ic(&grid, ic_type, chunk_size);
    diagnostics::warn_if_unstable(params, &initial);
    let stencil = standard_stencils::burgers_1d(params.dt, params.dx, params.nu);
    Simulation::new(
        grid,
        initial,
        DirectSolver::new(stencil, chunk_size),
        params.dt,
        params.num_steps(),
    )
}
