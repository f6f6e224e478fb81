use crate::gates::{hadamard, s_dagger};
use crate::operator::PauliSum;
use crate::pauli::{Pauli, PauliError, PauliString};
use linalg::StateVector;
use rng::ShakeRng;

/// Expectation value ⟨ψ|H|ψ⟩ from the statevector.
pub fn exact_energy(h: &PauliSum, psi: &StateVector) -> Result<f64, PauliError> {
    h.expectation(psi)
}

/// Rotates every X/Y factor of `string` onto the Z axis.
fn measurement_basis(psi: &StateVector, string: &PauliString) -> StateVector {
    let mut rotated = psi.clone();
    for (q, p) in string.support() {
        match p {
            Pauli::X => rotated.apply_1q(q, hadamard()),
            Pauli::Y => {
                rotated.apply_1q(q, s_dagger());
                rotated.apply_1q(q, hadamard());
            }
            Pauli::Z | Pauli::I => {}
        }
    }
    rotated
}

fn sample(probs: &[f64], rng: &mut ShakeRng) -> usize {
    let total: f64 = probs.iter().sum();
    let mut x = rng.next_f64(b"MEASURE") * total;
    for (idx, p) in probs.iter().enumerate() {
        if x < *p {
            return idx;
        }
        x -= *p;
    }
    probs.len() - 1
}

/// Estimate ⟨P⟩ for one Pauli string via projective measurements (shots).
pub fn estimate_string_shots(
    psi: &StateVector,
    string: &PauliString,
    rng: &mut ShakeRng,
    shots: usize,
) -> f64 {
    if string.is_identity() {
        return 1.0;
    }
    if shots == 0 {
        return 0.0;
    }

    let probs = measurement_basis(psi, string).probabilities();
    let mask: usize = string.support().map(|(q, _)| 1 << q).sum();

    let mut sum = 0.0;
    for _ in 0..shots {
        let outcome = sample(&probs, rng);
        sum += if (outcome & mask).count_ones() % 2 == 0 { 1.0 } else { -1.0 };
    }

    sum / shots as f64
}

/// Sampled energy and the standard error of that mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotEstimate {
    pub mean: f64,
    pub std_error: f64,
}

/// Estimate ⟨ψ|H|ψ⟩ via shots, one measurement setting per term.
pub fn estimate_energy_shots(
    h: &PauliSum,
    psi: &StateVector,
    rng: &mut ShakeRng,
    shots: usize,
) -> Result<f64, PauliError> {
    estimate_energy_shots_with_error(h, psi, rng, shots).map(|est| est.mean)
}

/// Same draws as [`estimate_energy_shots`]. Terms are sampled independently,
/// so their variances `c² (1 - ⟨P⟩²) / shots` add.
pub fn estimate_energy_shots_with_error(
    h: &PauliSum,
    psi: &StateVector,
    rng: &mut ShakeRng,
    shots: usize,
) -> Result<ShotEstimate, PauliError> {
    if psi.num_qubits() != h.num_qubits() {
        return Err(PauliError::QubitMismatch {
            expected: h.num_qubits(),
            found: psi.num_qubits(),
        });
    }

    let mut mean = 0.0;
    let mut variance = 0.0;
    for (string, c) in h.terms() {
        let m = estimate_string_shots(psi, string, rng, shots);
        mean += c.re * m;
        if shots > 0 && !string.is_identity() {
            variance += c.re * c.re * (1.0 - m * m).max(0.0) / shots as f64;
        }
    }

    Ok(ShotEstimate {
        mean,
        std_error: variance.sqrt(),
    })
}
