pub mod ansatz;
pub mod energy;
pub mod gates;
pub mod jch;
pub mod operator;
pub mod pauli;

pub use ansatz::{AnsatzConfig, AnsatzError, Entanglement, Entangler, Rotation, TwoLocal};
pub use jch::{jch_hamiltonian, JchParams};
pub use operator::{PauliSum, SIMPLIFY_ATOL};
pub use pauli::{Pauli, PauliError, PauliString};
