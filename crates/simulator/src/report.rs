use crate::config::VqeConfig;
use crate::error::BenchError;
use crate::exact::{ExactResult, ExactSolver};
use crate::vqe::{Vqe, VqeResult, VqeStep};
use quantum::{jch_hamiltonian, JchParams};
use std::fmt;
use tracing::info;

/// Exact vs variational ground energy for one set of JCH parameters.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub params: JchParams,
    pub num_qubits: usize,
    pub num_terms: usize,
    pub exact: ExactResult,
    pub vqe: VqeResult,
    /// `|E_exact - E_vqe|`
    pub delta: f64,
    /// `|⟨ψ_exact|ψ_vqe⟩|²`
    pub fidelity: f64,
}

pub fn run_benchmark(params: JchParams, config: &VqeConfig) -> Result<BenchmarkReport, BenchError> {
    run_benchmark_with(params, config, |_| {})
}

/// Same as [`run_benchmark`], forwarding every VQE evaluation to `observer`.
pub fn run_benchmark_with<O>(
    params: JchParams,
    config: &VqeConfig,
    observer: O,
) -> Result<BenchmarkReport, BenchError>
where
    O: FnMut(&VqeStep<'_>),
{
    let h = jch_hamiltonian(params);
    info!(
        wc = params.wc,
        g = params.g,
        j = params.j,
        qubits = h.num_qubits(),
        terms = h.len(),
        "built JCH Hamiltonian"
    );

    let exact = ExactSolver::new().compute_minimum_eigenvalue(&h);
    let vqe = Vqe::new(config.clone()).compute_minimum_eigenvalue_with(&h, observer)?;

    let delta = (exact.eigenvalue - vqe.eigenvalue).abs();
    let fidelity = exact.eigenstate.fidelity(&vqe.eigenstate);

    Ok(BenchmarkReport {
        params,
        num_qubits: h.num_qubits(),
        num_terms: h.len(),
        exact,
        vqe,
        delta,
        fidelity,
    })
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- JCH-VQE Benchmark ---")?;
        writeln!(
            f,
            "Parameters: wc={:?}, g={:?}, J={:?}",
            self.params.wc, self.params.g, self.params.j
        )?;
        writeln!(f, "Total Qubits Required: {}", self.num_qubits)?;
        writeln!(f, "Pauli Terms: {}", self.num_terms)?;
        writeln!(f)?;
        writeln!(f, "Results")?;
        writeln!(f, "Exact Ground State Energy: {:.6}", self.exact.eigenvalue)?;
        writeln!(f, "VQE Ground State Energy:   {:.6}", self.vqe.eigenvalue)?;
        writeln!(f, "Error (Delta):             {:.6}", self.delta)?;
        writeln!(f, "State Fidelity:            {:.6}", self.fidelity)?;
        write!(
            f,
            "Evaluations: {}, iterations: {}, optimizer time: {:.3} s",
            self.vqe.cost_function_evals,
            self.vqe.optimizer_iterations,
            self.vqe.optimizer_time.as_secs_f64()
        )
    }
}
