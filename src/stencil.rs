use num_traits::Float;

/// All stencil operations must provide an operation that adheres to this type
pub trait StencilOperation<FloatType: Float, const NEIGHBORHOOD_SIZE: usize>:
    Fn(&[FloatType; NEIGHBORHOOD_SIZE]) -> FloatType + Sync
{
}

impl<FloatType, Operation, const NEIGHBORHOOD_SIZE: usize>
    StencilOperation<FloatType, NEIGHBORHOOD_SIZE> for Operation
where
    FloatType: Float,
    Operation: Fn(&[FloatType; NEIGHBORHOOD_SIZE]) -> FloatType + Sync,
{
}

/// Stencils are the combination of an operation and neighbor offsets
pub struct Stencil<FloatType, Operation, const NEIGHBORHOOD_SIZE: usize>
where
    FloatType: Float,
    Operation: StencilOperation<FloatType, NEIGHBORHOOD_SIZE>,
{
    operation: Operation,
    offsets: [i32; NEIGHBORHOOD_SIZE],
    float_type: std::marker::PhantomData<FloatType>,
}

pub type StencilF64<Operation, const NEIGHBORHOOD_SIZE: usize> =
    Stencil<f64, Operation, NEIGHBORHOOD_SIZE>;

impl<FloatType, Operation, const NEIGHBORHOOD_SIZE: usize>
    Stencil<FloatType, Operation, NEIGHBORHOOD_SIZE>
where
    FloatType: Float,
    Operation: StencilOperation<FloatType, NEIGHBORHOOD_SIZE>,
{
    pub fn new(
        offsets: [i32; NEIGHBORHOOD_SIZE],
        operation: Operation,
    ) -> Self {
        Stencil {
            offsets,
            operation,
            float_type: std::marker::PhantomData,
        }
    }

    pub fn offsets(&self) -> &[i32; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    /// How far the neighborhood reaches left and right of the center.
    /// Points closer than this to an edge cannot be updated.
    pub fn reach(&self) -> (usize, usize) {
        let min = self.offsets.iter().copied().min().unwrap_or(0).min(0);
        let max = self.offsets.iter().copied().max().unwrap_or(0).max(0);
        (min.unsigned_abs() as usize, max as usize)
    }

    pub fn apply(&self, args: &[FloatType; NEIGHBORHOOD_SIZE]) -> FloatType {
        (self.operation)(args)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn apply_weighted_sum() {
        let s = Stencil::new([-1, 0, 1], |args: &[f64; 3]| {
            2.0 * args[0] + 3.0 * args[1] + 5.0 * args[2]
        });
        let r = s.apply(&[1.0, 10.0, 100.0]);
        assert_approx_eq!(f64, r, 532.0);
    }

    #[test]
    fn reach_from_offsets() {
        let s = Stencil::new([-1, 0, 1], |args: &[f64; 3]| args[1]);
        assert_eq!(s.reach(), (1, 1));

        let s = Stencil::new([-2, -1, 0], |args: &[f64; 3]| args[2]);
        assert_eq!(s.reach(), (2, 0));

        let s = Stencil::new([0], |args: &[f64; 1]| args[0]);
        assert_eq!(s.reach(), (0, 0));
    }
}
