use quantum::{jch_hamiltonian, AnsatzConfig, JchParams, PauliSum, TwoLocal};
use simulator::{
    run_benchmark, Backend, BenchError, ExactSolver, OptimizerKind, Vqe, VqeConfig,
};

const REFERENCE_GROUND_ENERGY: f64 = -1.002504681603;

fn reference() -> PauliSum {
    jch_hamiltonian(JchParams::new(1.0, 0.05, 0.1))
}

#[test]
fn exact_solver_matches_reference() {
    let r = ExactSolver::new().compute_minimum_eigenvalue(&reference());
    assert!((r.eigenvalue - REFERENCE_GROUND_ENERGY).abs() < 1e-6, "E = {:.12}", r.eigenvalue);
    assert!((r.eigenstate.norm_sqr() - 1.0).abs() < 1e-9);
    let e = reference().expectation(&r.eigenstate).unwrap();
    assert!((e - r.eigenvalue).abs() < 1e-9);
}

#[test]
fn vqe_reaches_reference_energy() {
    let result = Vqe::new(VqeConfig::default())
        .compute_minimum_eigenvalue(&reference())
        .unwrap();
    let err = (result.eigenvalue - REFERENCE_GROUND_ENERGY).abs();
    assert!(err <= 0.01, "VQE = {:.6}, error = {:.6}", result.eigenvalue, err);
    assert!(result.eigenvalue >= REFERENCE_GROUND_ENERGY - 1e-9);
    assert_eq!(result.optimal_parameters.len(), 12);
    assert!(result.optimizer_iterations <= 300);
}

#[test]
fn observer_sees_every_evaluation() {
    let mut seen = Vec::new();
    let result = Vqe::new(VqeConfig::default().with_maxiter(40))
        .compute_minimum_eigenvalue_with(&reference(), |step| {
            seen.push((step.eval_count, step.energy));
            assert_eq!(step.parameters.len(), 12);
            assert_eq!(step.std_error, 0.0);
        })
        .unwrap();

    assert_eq!(seen.len(), result.cost_function_evals);
    assert_eq!(result.energy_history.len(), result.cost_function_evals);
    for (i, (count, energy)) in seen.iter().enumerate() {
        assert_eq!(*count, i + 1);
        assert_eq!(*energy, result.energy_history[i]);
    }
    let best = result.energy_history.iter().cloned().fold(f64::INFINITY, f64::min);
    assert_eq!(best, result.eigenvalue);
}

#[test]
fn same_seed_same_run() {
    let config = VqeConfig::default().with_maxiter(25).with_seed("repeat");
    let a = Vqe::new(config.clone()).compute_minimum_eigenvalue(&reference()).unwrap();
    let b = Vqe::new(config).compute_minimum_eigenvalue(&reference()).unwrap();
    assert_eq!(a.energy_history, b.energy_history);
    assert_eq!(a.optimal_parameters, b.optimal_parameters);

    let vqe = Vqe::new(VqeConfig::default());
    assert_eq!(vqe.initial_point(12), vqe.initial_point(12));
    assert!(vqe
        .initial_point(12)
        .iter()
        .all(|x| (-std::f64::consts::PI..=std::f64::consts::PI).contains(x)));
}

#[test]
fn zero_hamiltonian_has_zero_energy() {
    let h = jch_hamiltonian(JchParams::new(0.0, 0.0, 0.0));
    assert!(h.is_empty());
    let exact = ExactSolver::new().compute_minimum_eigenvalue(&h);
    assert_eq!(exact.eigenvalue, 0.0);
    let vqe = Vqe::new(VqeConfig::default().with_maxiter(10))
        .compute_minimum_eigenvalue(&h)
        .unwrap();
    assert_eq!(vqe.eigenvalue, 0.0);
}

#[test]
fn pinned_ansatz_width_must_match() {
    let vqe = Vqe::new(VqeConfig::default()).with_ansatz(TwoLocal::new(3, AnsatzConfig::default()));
    match vqe.compute_minimum_eigenvalue(&reference()) {
        Err(BenchError::QubitMismatch { hamiltonian, ansatz }) => {
            assert_eq!((hamiltonian, ansatz), (4, 3));
        }
        other => panic!("expected qubit mismatch, got {:?}", other.map(|r| r.eigenvalue)),
    }
}

#[test]
fn spsa_counts_three_evaluations_per_iteration() {
    let config = VqeConfig::default()
        .with_optimizer(OptimizerKind::Spsa)
        .with_maxiter(30);
    let result = Vqe::new(config).compute_minimum_eigenvalue(&reference()).unwrap();
    assert_eq!(result.cost_function_evals, 1 + 3 * 30);
    assert_eq!(result.optimizer_iterations, 30);
    assert!(result.eigenvalue >= REFERENCE_GROUND_ENERGY - 1e-9);
}

#[test]
fn cobyla_reaches_reference_energy() {
    let config = VqeConfig::default().with_optimizer(OptimizerKind::Cobyla);
    let result = Vqe::new(config).compute_minimum_eigenvalue(&reference()).unwrap();
    let err = (result.eigenvalue - REFERENCE_GROUND_ENERGY).abs();
    assert!(err <= 0.01, "COBYLA = {:.6}, error = {:.6}", result.eigenvalue, err);
    assert_eq!(result.energy_history.len(), result.cost_function_evals);
}

#[test]
fn shot_backend_reports_standard_error() {
    let config = VqeConfig::default()
        .with_backend(Backend::Shots { shots: 256 })
        .with_maxiter(3);
    let mut errors = Vec::new();
    Vqe::new(config)
        .compute_minimum_eigenvalue_with(&reference(), |step| errors.push(step.std_error))
        .unwrap();
    assert!(!errors.is_empty());
    assert!(errors.iter().all(|e| e.is_finite() && *e >= 0.0));
    assert!(errors.iter().any(|e| *e > 0.0));
}

#[test]
fn shot_backend_is_seeded() {
    let config = VqeConfig::default()
        .with_backend(Backend::Shots { shots: 64 })
        .with_maxiter(5);
    let a = Vqe::new(config.clone()).compute_minimum_eigenvalue(&reference()).unwrap();
    let b = Vqe::new(config).compute_minimum_eigenvalue(&reference()).unwrap();
    assert_eq!(a.energy_history, b.energy_history);
    assert!(a.eigenvalue.is_finite());
}

#[test]
fn benchmark_report_prints_six_decimals() {
    let report = run_benchmark(JchParams::default(), &VqeConfig::default().with_maxiter(20)).unwrap();
    assert_eq!(report.num_qubits, 4);
    assert!((report.delta - (report.exact.eigenvalue - report.vqe.eigenvalue).abs()).abs() < 1e-15);
    assert!((0.0..=1.0 + 1e-9).contains(&report.fidelity));

    let text = report.to_string();
    assert!(text.contains("Parameters: wc=1.0, g=0.05, J=0.1"), "{}", text);
    assert!(text.contains("Exact Ground State Energy: -1.002505"), "{}", text);
    assert!(text.contains("Error (Delta):"));
}
