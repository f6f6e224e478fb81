use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use quantum::{AnsatzConfig, Entanglement, JchParams};
use simulator::{output, plot::plot_convergence, run_benchmark, Backend, OptimizerKind, VqeConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Exact vs VQE ground energy of the two-site JCH model")]
struct Args {
    /// Cavity / atom frequency
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    wc: f64,

    /// Atom-photon coupling
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    g: f64,

    /// Photon hopping between sites
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    j: f64,

    /// Optimizer iteration cap
    #[arg(long, default_value_t = 300)]
    maxiter: usize,

    /// Entangling blocks in the ansatz
    #[arg(long, default_value_t = 2)]
    reps: usize,

    #[arg(long, value_enum, default_value_t = EntanglementArg::Full)]
    entanglement: EntanglementArg,

    #[arg(long, value_enum, default_value_t = OptimizerArg::NelderMead)]
    optimizer: OptimizerArg,

    /// Shots per Pauli term (0 = exact statevector energies)
    #[arg(long, default_value_t = 0)]
    shots: usize,

    /// Seed for the initial point and any sampling
    #[arg(long, default_value = "jch-vqe")]
    seed: String,

    /// Write a convergence plot (SVG)
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Write the energy history as CSV
    #[arg(long)]
    history_csv: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EntanglementArg {
    Full,
    Linear,
    Circular,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OptimizerArg {
    NelderMead,
    Cobyla,
    Spsa,
}

impl Args {
    fn vqe_config(&self) -> VqeConfig {
        let entanglement = match self.entanglement {
            EntanglementArg::Full => Entanglement::Full,
            EntanglementArg::Linear => Entanglement::Linear,
            EntanglementArg::Circular => Entanglement::Circular,
        };
        let optimizer = match self.optimizer {
            OptimizerArg::NelderMead => OptimizerKind::NelderMead,
            OptimizerArg::Cobyla => OptimizerKind::Cobyla,
            OptimizerArg::Spsa => OptimizerKind::Spsa,
        };
        let backend = match self.shots {
            0 => Backend::Statevector,
            shots => Backend::Shots { shots },
        };

        VqeConfig::default()
            .with_ansatz(AnsatzConfig {
                reps: self.reps,
                entanglement,
                ..AnsatzConfig::default()
            })
            .with_optimizer(optimizer)
            .with_maxiter(self.maxiter)
            .with_backend(backend)
            .with_seed(self.seed.clone())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let params = JchParams::new(args.wc, args.g, args.j);
    let config = args.vqe_config();

    let report = run_benchmark(params, &config).context("benchmark failed")?;
    println!("{}", report);

    if let Some(path) = &args.history_csv {
        output::write_history_csv(path, &report.vqe.energy_history)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote energy history");
    }

    if let Some(path) = &args.plot {
        plot_convergence(path, &report.vqe.energy_history, report.exact.eigenvalue)
            .with_context(|| format!("plotting {}", path.display()))?;
        info!(path = %path.display(), "wrote convergence plot");
    }

    Ok(())
}
