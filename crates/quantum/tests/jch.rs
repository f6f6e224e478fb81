use linalg::eigen::{hermitian_spectrum, min_eigenvalue};
use proptest::prelude::*;
use quantum::{jch_hamiltonian, JchParams, PauliString, SIMPLIFY_ATOL};

const REFERENCE_GROUND_ENERGY: f64 = -1.002504681603;

fn labels(h: &quantum::PauliSum) -> Vec<String> {
    h.terms().iter().map(|(s, _)| s.to_string()).collect()
}

#[test]
fn reference_hamiltonian_is_hermitian() {
    let h = jch_hamiltonian(JchParams::new(1.0, 0.05, 0.1));
    let m = h.to_matrix();
    assert_eq!(m.dim(), 16);
    assert!(m.max_abs_diff(&m.adjoint()) < 1e-12);
}

#[test]
fn reference_ground_energy() {
    let h = jch_hamiltonian(JchParams::new(1.0, 0.05, 0.1));
    let e = min_eigenvalue(&h.to_matrix());
    assert!((e - REFERENCE_GROUND_ENERGY).abs() < 1e-6, "E = {:.12}", e);
}

#[test]
fn reference_spectrum_is_symmetric_about_one() {
    // Levels pair up as E and 2 - E.
    let h = jch_hamiltonian(JchParams::new(1.0, 0.05, 0.1));
    let ev = hermitian_spectrum(&h.to_matrix());
    assert_eq!(ev.len(), 16);
    for (lo, hi) in ev.iter().zip(ev.iter().rev()) {
        assert!((lo + hi - 2.0).abs() < 1e-9, "{} + {}", lo, hi);
    }
}

#[test]
fn all_zero_parameters_give_zero_operator() {
    let h = jch_hamiltonian(JchParams::new(0.0, 0.0, 0.0));
    assert!(h.is_empty(), "terms left: {:?}", labels(&h));
    assert_eq!(h.num_qubits(), 4);
    assert_eq!(min_eigenvalue(&h.to_matrix()), 0.0);
}

#[test]
fn uncoupled_sites_are_diagonal() {
    let h = jch_hamiltonian(JchParams::new(1.0, 0.0, 0.0));
    assert_eq!(labels(&h), vec!["IIII", "IZII", "ZIII", "IIIZ", "IIZI"]);
    assert!(h.to_matrix().is_diagonal(0.0));
    assert!((min_eigenvalue(&h.to_matrix()) + 1.0).abs() < 1e-12);
}

#[test]
fn cancelling_site_terms_survive_only_as_couplings() {
    // wc = 0 removes every diagonal string, couplings remain.
    let h = jch_hamiltonian(JchParams::new(0.0, 0.2, 0.3));
    assert!(h.terms().iter().all(|(s, _)| !s.is_diagonal()));
    assert_eq!(h.len(), 6);
}

fn param() -> impl Strategy<Value = f64> {
    prop_oneof![-10.0f64..-0.01, 0.01f64..10.0]
}

proptest! {
    #[test]
    fn hermitian_for_all_parameters(wc in -10.0f64..10.0, g in -10.0f64..10.0, j in -10.0f64..10.0) {
        let h = jch_hamiltonian(JchParams::new(wc, g, j));
        prop_assert!(h.is_hermitian(1e-9));
        prop_assert!(h.terms().iter().all(|(_, c)| c.im == 0.0));
    }

    #[test]
    fn simplify_is_idempotent(wc in -10.0f64..10.0, g in -10.0f64..10.0, j in -10.0f64..10.0) {
        let h = jch_hamiltonian(JchParams::new(wc, g, j));
        prop_assert_eq!(h.simplify(), h.clone());
        let strings: std::collections::HashSet<&PauliString> = h.terms().iter().map(|(s, _)| s).collect();
        prop_assert_eq!(strings.len(), h.len());
        prop_assert!(h.terms().iter().all(|(_, c)| c.norm() > SIMPLIFY_ATOL));
    }

    #[test]
    fn no_couplings_means_no_off_diagonal_strings(wc in -10.0f64..10.0) {
        let h = jch_hamiltonian(JchParams::new(wc, 0.0, 0.0));
        prop_assert!(h.terms().iter().all(|(s, _)| s.is_diagonal()));
        prop_assert!(h.to_matrix().is_diagonal(0.0));
    }

    #[test]
    fn coefficients_are_linear_in_couplings(wc in param(), g in param(), j in param(), k in 0.1f64..5.0) {
        let params = JchParams::new(wc, g, j);
        let h = jch_hamiltonian(params);
        let scaled = jch_hamiltonian(params.scaled(k));
        prop_assert_eq!(labels(&h), labels(&scaled));
        for (s, c) in h.terms() {
            let expected = c * k;
            let got = scaled.coefficient(s);
            prop_assert!((got - expected).norm() <= 1e-12 * expected.norm().max(1.0), "{}: {} vs {}", s, got, expected);
        }
    }
}
