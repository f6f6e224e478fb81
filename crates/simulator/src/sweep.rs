use crate::config::VqeConfig;
use crate::error::BenchError;
use crate::report::run_benchmark;
use quantum::JchParams;
use rayon::prelude::*;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub g: f64,
    pub exact: f64,
    pub vqe: f64,
    pub delta: f64,
    pub evals: usize,
}

/// `points` evenly spaced values from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (points - 1) as f64;
            (0..points).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Exact vs VQE for each coupling `g`, holding `wc` and `J` from `base`.
///
/// Points run in parallel; point `i` is seeded with `"{seed}-g-{i}"`, so the
/// rows do not depend on the thread count.
pub fn coupling_sweep(
    base: JchParams,
    gs: &[f64],
    config: &VqeConfig,
) -> Result<Vec<SweepRow>, BenchError> {
    info!(points = gs.len(), threads = rayon::current_num_threads(), "coupling sweep");

    gs.par_iter()
        .enumerate()
        .map(|(i, &g)| -> Result<SweepRow, BenchError> {
            let params = JchParams::new(base.wc, g, base.j);
            let point_config = config.clone().with_seed(format!("{}-g-{}", config.seed, i));
            let report = run_benchmark(params, &point_config)?;
            Ok(SweepRow {
                g,
                exact: report.exact.eigenvalue,
                vqe: report.vqe.eigenvalue,
                delta: report.delta,
                evals: report.vqe.cost_function_evals,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let xs = linspace(0.0, 0.5, 6);
        assert_eq!(xs.len(), 6);
        assert_eq!(xs[0], 0.0);
        assert!((xs[5] - 0.5).abs() < 1e-15);
        assert!((xs[1] - 0.1).abs() < 1e-15);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
