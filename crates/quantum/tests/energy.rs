use linalg::StateVector;
use quantum::{
    energy::{estimate_energy_shots, estimate_energy_shots_with_error, exact_energy},
    gates::{cnot, hadamard},
    jch_hamiltonian, JchParams, PauliSum,
};
use rng::ShakeRng;

fn bell() -> StateVector {
    let mut psi = StateVector::zero(2);
    psi.apply_1q(0, hadamard());
    psi.apply_2q(0, 1, cnot());
    psi
}

fn op(label: &str) -> PauliSum {
    PauliSum::from_label(label).unwrap()
}

#[test]
fn bell_pauli_correlations() {
    let psi = bell();
    assert!((exact_energy(&op("XX"), &psi).unwrap() - 1.0).abs() < 1e-12);
    assert!((exact_energy(&op("YY"), &psi).unwrap() + 1.0).abs() < 1e-12);
    assert!((exact_energy(&op("ZZ"), &psi).unwrap() - 1.0).abs() < 1e-12);
    assert!(exact_energy(&op("ZI"), &psi).unwrap().abs() < 1e-12);
}

#[test]
fn bell_heisenberg_energy() {
    let h = 1.0 * op("XX") + 2.0 * op("YY") + 3.0 * op("ZZ");
    let e = exact_energy(&h, &bell()).unwrap();
    assert!((e - 2.0).abs() < 1e-12, "E = {}", e);
}

#[test]
fn shot_energy_converges() {
    let h = 1.0 * op("XX") + 2.0 * op("YY") + 3.0 * op("ZZ") + 0.5 * op("II");
    let psi = bell();
    let exact = exact_energy(&h, &psi).unwrap();

    let mut rng = ShakeRng::new(b"shots");
    let est = estimate_energy_shots(&h, &psi, &mut rng, 2000).unwrap();

    // Bell correlations are deterministic in every basis.
    assert!((est - exact).abs() < 1e-12, "est = {}, exact = {}", est, exact);
}

#[test]
fn shot_energy_on_superposition() {
    let h = jch_hamiltonian(JchParams::default());
    let mut psi = StateVector::zero(4);
    for q in 0..4 {
        psi.apply_1q(q, hadamard());
    }
    let exact = exact_energy(&h, &psi).unwrap();

    let mut rng = ShakeRng::new(b"jch-shots");
    let est = estimate_energy_shots(&h, &psi, &mut rng, 20_000).unwrap();
    assert!((est - exact).abs() < 0.05, "est = {}, exact = {}", est, exact);
}

#[test]
fn standard_error_vanishes_for_deterministic_outcomes() {
    let h = 1.0 * op("XX") + 2.0 * op("YY") + 0.5 * op("II");
    let mut rng = ShakeRng::new(b"bell-error");
    let est = estimate_energy_shots_with_error(&h, &bell(), &mut rng, 500).unwrap();
    assert!((est.mean - (1.0 - 2.0 + 0.5)).abs() < 1e-12);
    assert_eq!(est.std_error, 0.0);
}

#[test]
fn standard_error_brackets_the_exact_energy() {
    let h = jch_hamiltonian(JchParams::default());
    let mut psi = StateVector::zero(4);
    for q in 0..4 {
        psi.apply_1q(q, hadamard());
    }
    let exact = exact_energy(&h, &psi).unwrap();

    let est = estimate_energy_shots_with_error(&h, &psi, &mut ShakeRng::new(b"sigma"), 4000).unwrap();
    assert!(est.std_error > 0.0);
    assert!((est.mean - exact).abs() < 6.0 * est.std_error, "{:?} vs {}", est, exact);

    let mean_only = estimate_energy_shots(&h, &psi, &mut ShakeRng::new(b"sigma"), 4000).unwrap();
    assert_eq!(mean_only, est.mean);
}

#[test]
fn shot_estimator_checks_width() {
    let mut rng = ShakeRng::new(b"w");
    assert!(estimate_energy_shots(&op("ZZZ"), &bell(), &mut rng, 10).is_err());
}
