//! Exact vs variational ground-state energies for the two-site JCH model.

pub mod config;
pub mod error;
pub mod exact;
pub mod optimizer;
pub mod output;
pub mod plot;
pub mod report;
pub mod sweep;
pub mod vqe;

pub use config::{Backend, OptimizerKind, VqeConfig};
pub use error::BenchError;
pub use exact::{ExactResult, ExactSolver};
pub use optimizer::{Cobyla, NelderMead, OptimizationResult, Optimizer, Spsa};
pub use report::{run_benchmark, run_benchmark_with, BenchmarkReport};
pub use sweep::{coupling_sweep, linspace, SweepRow};
pub use vqe::{Vqe, VqeResult, VqeStep};
