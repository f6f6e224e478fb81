use anyhow::{ensure, Context, Result};
use clap::Parser;
use quantum::JchParams;
use simulator::{coupling_sweep, linspace, output, VqeConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Exact vs VQE ground energy over a range of couplings g")]
struct Args {
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    wc: f64,

    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    j: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    g_min: f64,

    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    g_max: f64,

    /// Number of g values, endpoints included
    #[arg(long, default_value_t = 11)]
    points: usize,

    #[arg(long, default_value_t = 300)]
    maxiter: usize,

    /// Base seed; point i runs with "<seed>-g-<i>"
    #[arg(long, default_value = "jch-vqe")]
    seed: String,

    /// Rayon threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    #[arg(long, default_value = "sweep.csv")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    ensure!(args.points > 0, "--points must be > 0");

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build rayon thread pool")?;
    }

    let gs = linspace(args.g_min, args.g_max, args.points);
    let base = JchParams::new(args.wc, 0.0, args.j);
    let config = VqeConfig::default()
        .with_maxiter(args.maxiter)
        .with_seed(args.seed.clone());

    let start = Instant::now();
    let rows = coupling_sweep(base, &gs, &config).context("sweep failed")?;
    info!(points = rows.len(), elapsed_s = start.elapsed().as_secs_f64(), "sweep finished");

    println!("{:>8} {:>12} {:>12} {:>10}", "g", "exact", "vqe", "delta");
    for row in &rows {
        println!(
            "{:>8.4} {:>12.6} {:>12.6} {:>10.6}",
            row.g, row.exact, row.vqe, row.delta
        );
    }

    output::write_sweep_csv(&args.out, &rows)
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!("CSV written to {}", args.out.display());

    Ok(())
}
