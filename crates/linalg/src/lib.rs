pub mod dense;
pub mod eigen;
pub mod state;

pub use dense::DenseMatrix;
pub use state::StateVector;

use num_complex::Complex64;
use thiserror::Error;

pub type C64 = Complex64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinalgError {
    #[error("amplitude count {0} is not a power of two")]
    NotPowerOfTwo(usize),
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
