use quantum::AnsatzConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerKind {
    NelderMead,
    Cobyla,
    Spsa,
}

/// Where energies come from during optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Exact ⟨ψ|H|ψ⟩ from the statevector.
    Statevector,
    /// Sampled estimate with `shots` measurements per Pauli term.
    Shots { shots: usize },
}

/// Everything the VQE needs; no solver object is built from hidden defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct VqeConfig {
    pub ansatz: AnsatzConfig,
    pub optimizer: OptimizerKind,
    /// Cap on optimizer iterations (not objective evaluations).
    pub maxiter: usize,
    pub backend: Backend,
    /// Seeds the initial point and any stochastic component.
    pub seed: String,
}

impl Default for VqeConfig {
    fn default() -> Self {
        Self {
            ansatz: AnsatzConfig::default(),
            optimizer: OptimizerKind::NelderMead,
            maxiter: 300,
            backend: Backend::Statevector,
            seed: "jch-vqe".to_string(),
        }
    }
}

impl VqeConfig {
    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_optimizer(mut self, optimizer: OptimizerKind) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn with_ansatz(mut self, ansatz: AnsatzConfig) -> Self {
        self.ansatz = ansatz;
        self
    }
}
