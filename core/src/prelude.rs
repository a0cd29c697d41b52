/// Common error type for statistics routines.
#[derive(thiserror::Error, Debug)]
pub enum StatError {
    #[error("axis {axis} is out of range for array of rank {ndim}")]
    AxisOutOfRange { axis: usize, ndim: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type StatResult<T> = Result<T, StatError>;
