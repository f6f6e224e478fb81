use crate::config::{Backend, OptimizerKind, VqeConfig};
use crate::error::BenchError;
use crate::optimizer::{Cobyla, NelderMead, OptimizationResult, Optimizer, Spsa};
use linalg::StateVector;
use quantum::{
    energy::{estimate_energy_shots_with_error, ShotEstimate},
    PauliError, PauliSum, TwoLocal,
};
use rng::ShakeRng;
use std::f64::consts::PI;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One objective evaluation, as seen by a VQE observer.
#[derive(Debug, Clone, Copy)]
pub struct VqeStep<'a> {
    /// 1-based evaluation counter.
    pub eval_count: usize,
    pub parameters: &'a [f64],
    pub energy: f64,
    /// Standard error of `energy`; zero for exact statevector energies.
    pub std_error: f64,
}

#[derive(Debug, Clone)]
pub struct VqeResult {
    pub eigenvalue: f64,
    pub optimal_parameters: Vec<f64>,
    pub cost_function_evals: usize,
    pub optimizer_iterations: usize,
    /// Energy of every objective evaluation, in call order.
    pub energy_history: Vec<f64>,
    pub eigenstate: StateVector,
    pub optimizer_time: Duration,
}

pub struct Vqe {
    config: VqeConfig,
    ansatz: Option<TwoLocal>,
}

impl Vqe {
    pub fn new(config: VqeConfig) -> Self {
        Self {
            config,
            ansatz: None,
        }
    }

    /// Pins the circuit instead of sizing one from each Hamiltonian.
    pub fn with_ansatz(mut self, ansatz: TwoLocal) -> Self {
        self.ansatz = Some(ansatz);
        self
    }

    pub fn ansatz(&self, num_qubits: usize) -> Result<TwoLocal, BenchError> {
        match &self.ansatz {
            Some(a) if a.num_qubits() != num_qubits => Err(BenchError::QubitMismatch {
                hamiltonian: num_qubits,
                ansatz: a.num_qubits(),
            }),
            Some(a) => Ok(a.clone()),
            None => Ok(TwoLocal::new(num_qubits, self.config.ansatz)),
        }
    }

    /// Uniform in `[-π, π]` per parameter, reproducible from the seed.
    pub fn initial_point(&self, num_parameters: usize) -> Vec<f64> {
        let mut rng = ShakeRng::new(self.config.seed.as_bytes());
        (0..num_parameters)
            .map(|_| rng.uniform(b"INITIAL_POINT", -PI, PI))
            .collect()
    }

    pub fn compute_minimum_eigenvalue(&self, h: &PauliSum) -> Result<VqeResult, BenchError> {
        self.compute_minimum_eigenvalue_with(h, |_| {})
    }

    /// Runs the optimization, calling `observer` after every energy evaluation.
    pub fn compute_minimum_eigenvalue_with<O>(
        &self,
        h: &PauliSum,
        mut observer: O,
    ) -> Result<VqeResult, BenchError>
    where
        O: FnMut(&VqeStep<'_>),
    {
        let ansatz = self.ansatz(h.num_qubits())?;
        let x0 = self.initial_point(ansatz.num_parameters());

        info!(
            qubits = h.num_qubits(),
            terms = h.len(),
            parameters = ansatz.num_parameters(),
            maxiter = self.config.maxiter,
            optimizer = ?self.config.optimizer,
            backend = ?self.config.backend,
            "starting VQE"
        );

        let seed = self.config.seed.as_bytes();
        let mut shot_rng = ShakeRng::new(seed).fork(b"SHOTS");
        let backend = self.config.backend;

        let mut history = Vec::new();
        let mut failure: Option<BenchError> = None;

        let objective = |params: &[f64]| -> f64 {
            let energy = ansatz
                .prepare(params)
                .map_err(BenchError::from)
                .and_then(|psi| {
                    evaluate(h, &psi, backend, &mut shot_rng).map_err(BenchError::from)
                });

            match energy {
                Ok(ShotEstimate { mean, std_error }) => {
                    history.push(mean);
                    let step = VqeStep {
                        eval_count: history.len(),
                        parameters: params,
                        energy: mean,
                        std_error,
                    };
                    debug!(eval = step.eval_count, energy = mean, std_error, "objective evaluated");
                    observer(&step);
                    mean
                }
                Err(err) => {
                    failure.get_or_insert(err);
                    f64::INFINITY
                }
            }
        };

        let start = Instant::now();
        let result: OptimizationResult = match self.config.optimizer {
            OptimizerKind::NelderMead => NelderMead::new()
                .with_maxiter(self.config.maxiter)
                .minimize(objective, x0),
            OptimizerKind::Cobyla => Cobyla::new()
                .with_maxiter(self.config.maxiter)
                .minimize(objective, x0),
            OptimizerKind::Spsa => Spsa::new(&[seed, b"-spsa".as_slice()].concat())
                .with_maxiter(self.config.maxiter)
                .minimize(objective, x0),
        };
        let optimizer_time = start.elapsed();

        if let Some(err) = failure {
            return Err(err);
        }

        let eigenstate = ansatz.prepare(&result.optimal_params)?;

        info!(
            energy = result.optimal_value,
            evaluations = result.num_evaluations,
            iterations = result.num_iterations,
            elapsed_s = optimizer_time.as_secs_f64(),
            "VQE finished"
        );

        Ok(VqeResult {
            eigenvalue: result.optimal_value,
            optimal_parameters: result.optimal_params,
            cost_function_evals: result.num_evaluations,
            optimizer_iterations: result.num_iterations,
            energy_history: history,
            eigenstate,
            optimizer_time,
        })
    }
}

fn evaluate(
    h: &PauliSum,
    psi: &StateVector,
    backend: Backend,
    rng: &mut ShakeRng,
) -> Result<ShotEstimate, PauliError> {
    match backend {
        Backend::Statevector => h.expectation(psi).map(|mean| ShotEstimate {
            mean,
            std_error: 0.0,
        }),
        Backend::Shots { shots } => estimate_energy_shots_with_error(h, psi, rng, shots),
    }
}
