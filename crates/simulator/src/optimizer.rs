//! Derivative-free classical optimizers driving the VQE loop.

use rng::ShakeRng;

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub optimal_params: Vec<f64>,
    pub optimal_value: f64,
    pub num_evaluations: usize,
    pub num_iterations: usize,
    /// Best objective value after each iteration.
    pub history: Vec<f64>,
    pub converged: bool,
}

pub trait Optimizer {
    fn minimize<F>(&mut self, objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64;
}

/// Nelder–Mead simplex search with dimension-adaptive coefficients
/// (Gao & Han, 2012).
#[derive(Debug, Clone)]
pub struct NelderMead {
    pub maxiter: usize,
    /// Offset along each axis for the initial simplex.
    pub initial_step: f64,
    /// Convergence needs the value spread below `fatol` and every vertex
    /// within `xatol` of the best one.
    pub fatol: f64,
    pub xatol: f64,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            maxiter: 300,
            initial_step: 1.0,
            fatol: 1e-10,
            xatol: 1e-8,
        }
    }
}

impl NelderMead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    pub fn with_initial_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }

    pub fn with_tolerances(mut self, fatol: f64, xatol: f64) -> Self {
        self.fatol = fatol;
        self.xatol = xatol;
        self
    }
}

fn lerp(from: &[f64], to: &[f64], t: f64) -> Vec<f64> {
    from.iter().zip(to).map(|(a, b)| a + t * (b - a)).collect()
}

impl Optimizer for NelderMead {
    fn minimize<F>(&mut self, mut objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64,
    {
        let n = initial_params.len();
        let mut num_evaluations = 0;
        let mut eval = |x: &[f64]| {
            num_evaluations += 1;
            objective(x)
        };

        if n == 0 {
            let value = eval(&initial_params);
            return OptimizationResult {
                optimal_params: initial_params,
                optimal_value: value,
                num_evaluations: 1,
                num_iterations: 0,
                history: vec![value],
                converged: true,
            };
        }

        let nf = n as f64;
        let reflect = 1.0;
        let expand = 1.0 + 2.0 / nf;
        let contract = 0.75 - 1.0 / (2.0 * nf);
        let shrink = 1.0 - 1.0 / nf;

        let mut simplex = vec![initial_params.clone()];
        let mut values = vec![eval(&initial_params)];
        for i in 0..n {
            let mut point = initial_params.clone();
            point[i] += self.initial_step;
            values.push(eval(&point));
            simplex.push(point);
        }

        let mut history = Vec::new();
        let mut converged = false;
        let mut iterations = 0;

        while iterations < self.maxiter {
            iterations += 1;

            let mut order: Vec<usize> = (0..=n).collect();
            order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
            simplex = order.iter().map(|&i| simplex[i].clone()).collect();
            values = order.iter().map(|&i| values[i]).collect();
            history.push(values[0]);

            let size = simplex[1..]
                .iter()
                .flat_map(|p| p.iter().zip(&simplex[0]).map(|(a, b)| (a - b).abs()))
                .fold(0.0, f64::max);
            if values[n] - values[0] < self.fatol && size <= self.xatol {
                converged = true;
                break;
            }

            let mut centroid = vec![0.0; n];
            for point in &simplex[..n] {
                for (c, x) in centroid.iter_mut().zip(point) {
                    *c += x / nf;
                }
            }

            // x_r = c + α (c − x_worst)
            let reflected = lerp(&centroid, &simplex[n], -reflect);
            let f_reflected = eval(&reflected);

            if f_reflected < values[0] {
                let expanded = lerp(&centroid, &reflected, expand);
                let f_expanded = eval(&expanded);
                if f_expanded < f_reflected {
                    simplex[n] = expanded;
                    values[n] = f_expanded;
                } else {
                    simplex[n] = reflected;
                    values[n] = f_reflected;
                }
                continue;
            }

            if f_reflected < values[n - 1] {
                simplex[n] = reflected;
                values[n] = f_reflected;
                continue;
            }

            let (contracted, accept) = if f_reflected < values[n] {
                let outside = lerp(&centroid, &reflected, contract);
                let f_outside = eval(&outside);
                ((outside, f_outside), f_outside <= f_reflected)
            } else {
                let inside = lerp(&centroid, &simplex[n], contract);
                let f_inside = eval(&inside);
                ((inside, f_inside), f_inside < values[n])
            };

            if accept {
                simplex[n] = contracted.0;
                values[n] = contracted.1;
            } else {
                for i in 1..=n {
                    simplex[i] = lerp(&simplex[0], &simplex[i], shrink);
                    values[i] = eval(&simplex[i]);
                }
            }
        }

        let best = (0..=n)
            .min_by(|&a, &b| values[a].total_cmp(&values[b]))
            .unwrap_or(0);

        OptimizationResult {
            optimal_params: simplex[best].clone(),
            optimal_value: values[best],
            num_evaluations,
            num_iterations: iterations,
            history,
            converged,
        }
    }
}

/// Linear-approximation trust-region search in the spirit of Powell's
/// COBYLA, without constraints.
///
/// Each iteration fits a linear model through `n + 1` interpolation points
/// and steps `rho` against its gradient from the best point. A failed step
/// first refreshes the interpolation set around the best point at the same
/// radius, and halves `rho` only if a fresh set also fails.
#[derive(Debug, Clone)]
pub struct Cobyla {
    pub maxiter: usize,
    /// Initial trust-region radius.
    pub rhobeg: f64,
    /// Final trust-region radius; reaching it with a failed step converges.
    pub rhoend: f64,
}

impl Default for Cobyla {
    fn default() -> Self {
        Self {
            maxiter: 300,
            rhobeg: 1.0,
            rhoend: 1e-6,
        }
    }
}

impl Cobyla {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    pub fn with_trust_region(mut self, rhobeg: f64, rhoend: f64) -> Self {
        self.rhobeg = rhobeg;
        self.rhoend = rhoend;
        self
    }
}

/// Gaussian elimination with partial pivoting. `None` when `a` is
/// numerically singular.
fn solve_linear(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    let scale = a
        .iter()
        .flat_map(|row| row.iter())
        .fold(0.0_f64, |m, v| m.max(v.abs()));
    if scale == 0.0 {
        return None;
    }

    for col in 0..n {
        let pivot = (col..n).max_by(|&r, &s| a[r][col].abs().total_cmp(&a[s][col].abs()))?;
        if a[pivot][col].abs() <= 1e-12 * scale {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);
        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}

/// `center` plus one offset of `rho` along each axis.
fn interpolation_set<F>(
    eval: &mut F,
    center: Vec<f64>,
    f_center: f64,
    rho: f64,
) -> (Vec<Vec<f64>>, Vec<f64>)
where
    F: FnMut(&[f64]) -> f64,
{
    let mut points = vec![center.clone()];
    let mut values = vec![f_center];
    for i in 0..center.len() {
        let mut p = center.clone();
        p[i] += rho;
        values.push(eval(&p));
        points.push(p);
    }
    (points, values)
}

impl Optimizer for Cobyla {
    fn minimize<F>(&mut self, mut objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64,
    {
        let n = initial_params.len();
        let mut num_evaluations = 0;
        let mut eval = |x: &[f64]| {
            num_evaluations += 1;
            objective(x)
        };

        let f0 = eval(&initial_params);
        if n == 0 {
            return OptimizationResult {
                optimal_params: initial_params,
                optimal_value: f0,
                num_evaluations: 1,
                num_iterations: 0,
                history: vec![f0],
                converged: true,
            };
        }

        let mut rho = self.rhobeg;
        let (mut points, mut values) = interpolation_set(&mut eval, initial_params, f0, rho);
        let mut fresh = true;

        let mut history = Vec::new();
        let mut converged = false;
        let mut iterations = 0;

        while iterations < self.maxiter {
            iterations += 1;

            let mut order: Vec<usize> = (0..=n).collect();
            order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
            points = order.iter().map(|&i| points[i].clone()).collect();
            values = order.iter().map(|&i| values[i]).collect();
            history.push(values[0]);

            let offsets: Vec<Vec<f64>> = points[1..]
                .iter()
                .map(|p| p.iter().zip(&points[0]).map(|(a, b)| a - b).collect())
                .collect();
            let rises: Vec<f64> = values[1..].iter().map(|v| v - values[0]).collect();

            if let Some(gradient) = solve_linear(offsets, rises) {
                let norm = gradient.iter().map(|g| g * g).sum::<f64>().sqrt();
                if norm > 0.0 {
                    let trial: Vec<f64> = points[0]
                        .iter()
                        .zip(&gradient)
                        .map(|(x, g)| x - rho * g / norm)
                        .collect();
                    let f_trial = eval(&trial);
                    if f_trial < values[0] {
                        points[n] = trial;
                        values[n] = f_trial;
                        fresh = false;
                        continue;
                    }
                }
            }

            if fresh {
                if rho <= self.rhoend {
                    converged = true;
                    break;
                }
                rho = (rho * 0.5).max(self.rhoend);
            }
            (points, values) = interpolation_set(&mut eval, points[0].clone(), values[0], rho);
            fresh = true;
        }

        let best = (0..=n)
            .min_by(|&a, &b| values[a].total_cmp(&values[b]))
            .unwrap_or(0);

        OptimizationResult {
            optimal_params: points[best].clone(),
            optimal_value: values[best],
            num_evaluations,
            num_iterations: iterations,
            history,
            converged,
        }
    }
}

/// Simultaneous Perturbation Stochastic Approximation.
///
/// Two evaluations per iteration regardless of dimension, with ±1
/// perturbation directions drawn from a seeded [`ShakeRng`].
#[derive(Clone)]
pub struct Spsa {
    pub maxiter: usize,
    /// Step size numerator.
    pub a: f64,
    /// Perturbation size.
    pub c: f64,
    /// Step decay exponent.
    pub alpha: f64,
    /// Perturbation decay exponent.
    pub gamma: f64,
    rng: ShakeRng,
}

impl Spsa {
    pub fn new(seed: &[u8]) -> Self {
        Self {
            maxiter: 300,
            a: 0.2,
            c: 0.1,
            alpha: 0.602,
            gamma: 0.101,
            rng: ShakeRng::new(seed),
        }
    }

    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    pub fn with_gains(mut self, a: f64, c: f64) -> Self {
        self.a = a;
        self.c = c;
        self
    }
}

impl Optimizer for Spsa {
    fn minimize<F>(&mut self, mut objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64,
    {
        let mut x = initial_params;
        let mut best_x = x.clone();
        let mut best_f = objective(&x);
        let mut num_evaluations = 1;
        let mut history = Vec::with_capacity(self.maxiter);

        for k in 0..self.maxiter {
            let step = (k + 1) as f64;
            let a_k = self.a / step.powf(self.alpha);
            let c_k = self.c / step.powf(self.gamma);

            let delta: Vec<f64> = x.iter().map(|_| self.rng.sign(b"SPSA_DELTA")).collect();
            let x_plus: Vec<f64> = x.iter().zip(&delta).map(|(xi, di)| xi + c_k * di).collect();
            let x_minus: Vec<f64> = x.iter().zip(&delta).map(|(xi, di)| xi - c_k * di).collect();

            let diff = objective(&x_plus) - objective(&x_minus);
            num_evaluations += 2;

            for (xi, di) in x.iter_mut().zip(&delta) {
                // 1/Δᵢ = Δᵢ for Rademacher directions
                *xi -= a_k * diff / (2.0 * c_k) * di;
            }

            let f = objective(&x);
            num_evaluations += 1;
            if f < best_f {
                best_f = f;
                best_x = x.clone();
            }
            history.push(best_f);
        }

        OptimizationResult {
            optimal_params: best_x,
            optimal_value: best_f,
            num_evaluations,
            num_iterations: self.maxiter,
            history,
            converged: false,
        }
    }
}
