use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("parameter {name} must be a positive finite value, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("field has {field_len} values, grid has {grid_len} points")]
    SizeMismatch { field_len: usize, grid_len: usize },

    #[error("unstable simulation at t={time:.4}: {message}")]
    Instability { time: f64, message: String },
}
